use std::time::Duration;

use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{assert_is_redirect_to, spawn_app, spawn_app_with};

const FAILURE_NOTICE: &str = "<p class=\"notice\" role=\"alert\"><i>Failed to send message. Please try again.</i></p>";

#[actix_web::test]
async fn successful_submission_confirms_then_clears_the_form() {
    let app = spawn_app().await;

    Mock::given(path("/api/contact"))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "message": "Hi",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.contact_server)
        .await;

    let res = app.post_ana().await;
    assert_is_redirect_to(&res, "/#contact");

    // 发送成功：按钮显示Sent!，页面会自动刷新
    let html = app.get_home_html().await;
    assert!(html.contains(" disabled>Sent!</button>"));
    assert!(html.contains("http-equiv=\"refresh\""));
    assert!(!html.contains("Message Sent!"));

    // 第一段等待之后：表单被确认信息替换
    tokio::time::sleep(app.schedule.success_hold + Duration::from_millis(150)).await;
    let html = app.get_home_html().await;
    assert!(html.contains("Message Sent!"));
    assert!(!html.contains("action=\"/contact\""));

    // 第二段等待之后：表单清空
    tokio::time::sleep(app.schedule.confirmation_hold).await;
    let html = app.get_home_html().await;
    assert!(html.contains(">Send Message</button>"));
    assert!(html.contains("id=\"name\" name=\"name\" type=\"text\" placeholder=\"Your name\" value=\"\""));
    assert!(!html.contains("value=\"Ana\""));
    assert!(!html.contains("http-equiv=\"refresh\""));
}

#[actix_web::test]
async fn rejected_submission_shows_notice_once_and_keeps_values() {
    let app = spawn_app().await;

    Mock::given(path("/api/contact"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.contact_server)
        .await;

    let res = app.post_ana().await;
    assert_is_redirect_to(&res, "/#contact");

    let html = app.get_home_html().await;
    assert_eq!(1, html.matches(FAILURE_NOTICE).count());
    assert!(html.contains("value=\"Ana\""));
    assert!(html.contains("value=\"ana@example.com\""));
    assert!(html.contains(">Hi</textarea>"));
    assert!(html.contains(">Send Message</button>"));

    // 再次加载页面，不再显示失败信息，内容仍保留
    let html = app.get_home_html().await;
    assert!(!html.contains(FAILURE_NOTICE));
    assert!(html.contains("value=\"Ana\""));
}

#[actix_web::test]
async fn transport_fault_is_reported_like_a_rejection() {
    let app = spawn_app_with(|config| config.contact_client.timeout_milliseconds = 100).await;

    Mock::given(path("/api/contact"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&app.contact_server)
        .await;

    let res = app.post_ana().await;
    assert_is_redirect_to(&res, "/#contact");

    let html = app.get_home_html().await;
    assert_eq!(1, html.matches(FAILURE_NOTICE).count());
    assert!(html.contains("value=\"Ana\""));
}

#[actix_web::test]
async fn failed_submission_can_be_retried() {
    let app = spawn_app().await;

    let _failure = Mock::given(path("/api/contact"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount_as_scoped(&app.contact_server)
        .await;
    app.post_ana().await;
    drop(_failure);

    Mock::given(path("/api/contact"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.contact_server)
        .await;
    let res = app.post_ana().await;
    assert_is_redirect_to(&res, "/#contact");

    let html = app.get_home_html().await;
    assert!(html.contains(" disabled>Sent!</button>"));
}

#[actix_web::test]
async fn blank_fields_are_rejected_without_contacting_the_backend() {
    let app = spawn_app().await;

    Mock::given(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.contact_server)
        .await;

    let cases = [
        (serde_json::json!({ "name": "", "email": "ana@example.com", "message": "Hi" }), "name is empty."),
        (serde_json::json!({ "name": "Ana", "email": " ", "message": "Hi" }), "email is blank."),
        (serde_json::json!({ "name": "Ana", "email": "ana@example.com", "message": "" }), "message is empty."),
    ];
    for (body, payload) in cases {
        let res = app.post_contact(&body).await;
        assert_is_redirect_to(&res, "/#contact");

        let html = app.get_home_html().await;
        assert!(html.contains("Please fill in all fields."), "{payload}");
    }
}

#[actix_web::test]
async fn resubmitting_while_confirming_is_ignored() {
    let app = spawn_app().await;

    Mock::given(path("/api/contact"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.contact_server)
        .await;

    app.post_ana().await;
    let res = app.post_ana().await;
    assert_is_redirect_to(&res, "/#contact");
}

#[actix_web::test]
async fn draft_fields_are_kept_between_visits() {
    let app = spawn_app().await;

    let res = app.post_contact_field("name", "Bea").await;
    assert_is_redirect_to(&res, "/#contact");
    app.post_contact_field("message", "<b>Hello</b>").await;

    let html = app.get_home_html().await;
    assert!(html.contains("value=\"Bea\""));
    assert!(html.contains("&lt;b&gt;Hello"));
    assert!(!html.contains("<b>Hello</b>"));
    assert!(app.contact_server.received_requests().await.unwrap().is_empty());
}

#[actix_web::test]
async fn unknown_draft_field_is_rejected() {
    let app = spawn_app().await;

    let res = app.post_contact_field("phone", "123").await;
    assert_eq!(400, res.status().as_u16());
}

#[actix_web::test]
async fn discarding_drops_the_visitor_form() {
    let app = spawn_app().await;

    app.post_contact_field("name", "Bea").await;
    assert!(app.get_home_html().await.contains("value=\"Bea\""));

    let res = app.post("/contact/discard").await;
    assert_is_redirect_to(&res, "/#contact");
    assert!(!app.get_home_html().await.contains("value=\"Bea\""));
}

#[actix_web::test]
async fn submissions_are_rate_limited() {
    let app = spawn_app_with(|config| config.rate_limit.max_requests = 1).await;

    Mock::given(path("/api/contact"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.contact_server)
        .await;

    let res = app.post_ana().await;
    assert_is_redirect_to(&res, "/#contact");

    let res = app.post_ana().await;
    assert_eq!(429, res.status().as_u16());
}

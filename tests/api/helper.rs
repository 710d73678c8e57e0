use std::net::TcpListener;

use actix_web::web;
use cardionerve::{
    config::Config,
    contact_client::ContactClient,
    contact_form::{ContactForms, Schedule},
    telemetry,
};
use once_cell::sync::Lazy;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "info";
    let name = "test";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = telemetry::get_subscriber(name, default_filter, std::io::stdout);
        telemetry::init_subscriber(subscriber).unwrap();
    } else {
        let subscriber = telemetry::get_subscriber(name, default_filter, std::io::sink);
        telemetry::init_subscriber(subscriber).unwrap();
    }
});

pub struct TestApp {
    pub address: String,
    pub contact_server: MockServer,
    pub api_client: reqwest::Client,
    pub schedule: Schedule,
}

impl TestApp {
    pub async fn get_home_html(&self) -> String {
        self.api_client
            .get(&self.address)
            .send()
            .await
            .expect("failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    pub async fn post_contact<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/contact", &self.address))
            .form(body)
            .send()
            .await
            .expect("failed to execute request.")
    }

    pub async fn post_ana(&self) -> reqwest::Response {
        self.post_contact(&serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "message": "Hi",
        }))
        .await
    }

    pub async fn post_contact_field(&self, field: &str, value: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/contact/field", &self.address))
            .form(&serde_json::json!({ "field": field, "value": value }))
            .send()
            .await
            .expect("failed to execute request.")
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    Lazy::force(&TRACING);

    let mut config = cardionerve::config::config().expect("failed to read configuration.");
    // 模拟联系信息接收服务
    let contact_server = MockServer::start().await;
    config.contact_client.base_url = contact_server.uri();
    config.contact_client.timeout_milliseconds = 500;
    config.contact_form.success_hold_milliseconds = 200;
    config.contact_form.confirmation_hold_milliseconds = 500;
    config.rate_limit.max_requests = 100;
    configure(&mut config);

    let address = format!("{}:{}", &config.web.host, 0);
    let listener = TcpListener::bind(&address).expect("failed to bind web port.");
    // 获取绑定的随机端口
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://{}:{}", &config.web.host, &port);

    let schedule = Schedule::from_config(&config.contact_form);
    let contact_client = ContactClient::from_config(&config.contact_client).unwrap();
    let contact_forms = web::Data::new(ContactForms::new(contact_client, schedule));

    let server = cardionerve::run(listener, &config, contact_forms).expect("failed to build app.");
    tokio::spawn(server);

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address,
        contact_server,
        api_client,
        schedule,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(303, response.status().as_u16());
    assert_eq!(location, response.headers().get("Location").unwrap());
}

use std::net::TcpListener;

use actix_extensible_rate_limit::{
    backend::{memory::InMemoryBackend, SimpleInputFunctionBuilder},
    RateLimiter,
};
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, dev::Server, web, App, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use secrecy::ExposeSecret;
use tracing_actix_web::TracingLogger;

use crate::{config::Config, contact_form::ContactForms, routes};

pub fn run(
    listener: TcpListener,
    config: &Config,
    contact_forms: web::Data<ContactForms>,
) -> anyhow::Result<Server> {
    let secret_key = Key::try_from(config.session.hmac_secret.expose_secret().as_bytes())
        .map_err(|e| anyhow::anyhow!("session hmac secret must be at least 64 bytes: {e:?}"))?;
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();
    let cookie_secure = config.session.cookie_secure;

    // 限制同一IP提交联系表单的频率
    let rate_limit_backend = InMemoryBackend::builder().build();
    let rate_limit = config.rate_limit.clone();

    let server = HttpServer::new(move || {
        let input = SimpleInputFunctionBuilder::new(rate_limit.window(), rate_limit.max_requests)
            .real_ip_key()
            .build();
        let rate_limiter = RateLimiter::builder(rate_limit_backend.clone(), input)
            .add_headers()
            .build();

        App::new()
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(cookie_secure)
                    .build(),
            )
            .wrap(TracingLogger::default())
            .app_data(contact_forms.clone())
            .route("/", web::get().to(routes::home))
            .route("/health_check", web::get().to(routes::health_check))
            .route("/static/site.css", web::get().to(routes::stylesheet))
            .service(
                web::resource("/contact")
                    .wrap(rate_limiter)
                    .route(web::post().to(routes::submit_contact)),
            )
            .route("/contact/field", web::post().to(routes::update_contact_field))
            .route("/contact/discard", web::post().to(routes::discard_contact))
            .route("/theme", web::post().to(routes::toggle_theme))
            .route("/theme/reset", web::post().to(routes::reset_theme))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

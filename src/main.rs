use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use cardionerve::{
    contact_client::ContactClient,
    contact_form::{ContactForms, Schedule},
    form_sweeper, telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 遥测初始化
    let subscriber = telemetry::get_subscriber("cardionerve", "info", std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = cardionerve::config::config().context("failed to read configuration.")?;
    let listener = TcpListener::bind(config.web.server_address())
        .with_context(|| format!("failed to bind {}.", config.web.server_address()))?;

    let contact_client = ContactClient::from_config(&config.contact_client)?;
    let schedule = Schedule::from_config(&config.contact_form);
    let contact_forms = web::Data::new(ContactForms::new(contact_client, schedule));

    tokio::spawn(form_sweeper::run(
        contact_forms.clone(),
        config.contact_form.sweep_interval(),
        config.contact_form.idle_ttl(),
    ));

    tracing::info!(address = %config.web.server_address(), "cardionerve site listening.");
    cardionerve::run(listener, &config, contact_forms)?.await?;

    Ok(())
}

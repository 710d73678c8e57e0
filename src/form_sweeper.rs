use std::time::Duration;

use actix_web::web;

use crate::contact_form::ContactForms;

/// 周期性清理长时间无人操作的表单
pub async fn run(forms: web::Data<ContactForms>, interval: Duration, idle_ttl: Duration) {
    loop {
        tokio::time::sleep(interval).await;
        sweep_once(&forms, idle_ttl);
    }
}

#[tracing::instrument(skip(forms), fields(evicted = tracing::field::Empty))]
pub fn sweep_once(forms: &ContactForms, idle_ttl: Duration) -> usize {
    let evicted = forms.evict_idle(idle_ttl);
    tracing::Span::current().record("evicted", evicted);
    if evicted > 0 {
        tracing::info!(remaining = forms.len(), "evicted idle contact forms.");
    }
    evicted
}

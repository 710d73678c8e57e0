use std::time::Duration;

use anyhow::Context;
use reqwest::StatusCode;

use crate::{config::ContactClientConfig, domain::SubmissionRequest, util::error_chain_fmt};

/// 外部联系信息接收服务的客户端
#[derive(Debug)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ContactClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build contact client.")?;
        let endpoint = reqwest::Url::parse(base_url)
            .and_then(|base| base.join("/api/contact"))
            .with_context(|| format!("`{base_url}` is not a valid contact base url."))?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ContactClientConfig) -> anyhow::Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    #[tracing::instrument(name = "relaying contact message", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn send(&self, request: &SubmissionRequest) -> Result<(), ContactClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(ContactClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactClientError::Rejected(status));
        }

        Ok(())
    }
}

#[derive(thiserror::Error)]
pub enum ContactClientError {
    #[error("failed to reach the contact endpoint.")]
    Transport(#[source] reqwest::Error),
    #[error("the contact endpoint answered with status {0}.")]
    Rejected(StatusCode),
}

impl std::fmt::Debug for ContactClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

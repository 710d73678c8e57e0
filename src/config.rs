use std::time::Duration;

use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    pub contact_client: ContactClientConfig,
    pub contact_form: ContactFormConfig,
    pub rate_limit: RateLimitConfig,
    pub session: SessionConfig,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl WebConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 联系表单转发的外部接收服务
#[derive(serde::Deserialize, Clone)]
pub struct ContactClientConfig {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl ContactClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct ContactFormConfig {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub success_hold_milliseconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub confirmation_hold_milliseconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub idle_ttl_seconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub sweep_interval_seconds: u64,
}

impl ContactFormConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_seconds)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct RateLimitConfig {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_seconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_requests: u64,
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct SessionConfig {
    /// 至少64字节，用于签名session与flash message cookie
    pub hmac_secret: SecretString,
    pub cookie_secure: bool,
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment, use either `local` or `production`."
            )),
        }
    }
}

/// 读取`configuration/base.yaml`与`configuration/{APP_ENVIRONMENT}.yaml`,
/// 再以`APP_`前缀的环境变量覆盖，例如`APP_WEB__PORT=8080`
pub fn config() -> Result<Config, config::ConfigError> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_file = format!("configuration/{}.yaml", environment.as_str());

    config::Config::builder()
        .add_source(config::File::new(
            "configuration/base.yaml",
            config::FileFormat::Yaml,
        ))
        .add_source(config::File::new(&environment_file, config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Config>()
}

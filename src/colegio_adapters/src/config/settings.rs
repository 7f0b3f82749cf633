use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{env::ENV_PREFIX, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct ColegioSettings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    /// Public URL the activation links in emails point at.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub timeout_in_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

impl ColegioSettings {
    /// Load settings from defaults, an optional `config/base.json` and
    /// `COLEGIO_`-prefixed environment variables (`__` separates sections),
    /// after reading `.env` if one exists.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.base_url", prod::BASE_URL)?
            .set_default("postgres.max_connections", prod::MAX_DB_CONNECTIONS)?
            .set_default("email_client.base_url", prod::email_client::BASE_URL)?
            .set_default("email_client.sender", prod::email_client::SENDER)?
            .set_default(
                "email_client.timeout_in_millis",
                prod::email_client::TIMEOUT_IN_MILLIS,
            )?
            .add_source(File::with_name("config/base").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ))
    }
}

use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const ENV_PREFIX: &str = "MODEM";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    ip: Option<String>,
    #[serde(default)]
    accept_invalid_certs: bool,
    #[serde(default = "default_timeout", with = "humantime_serde")]
    timeout: Duration,
    #[serde(default)]
    require_success_status: bool,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl AppConfig {
    /// Loads the optional `config` and `config_local` files, then overlays the given environment.
    pub fn load(environment: Environment) -> Result<ModemConfig, AppConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize::<AppConfig>()?;

        config.validate()
    }

    fn validate(self) -> Result<ModemConfig, AppConfigError> {
        let address = self.ip.filter(|ip| !ip.is_empty()).ok_or(AppConfigError::MissingAddress)?;

        Ok(ModemConfig {
            address,
            accept_invalid_certs: self.accept_invalid_certs,
            timeout: self.timeout,
            require_success_status: self.require_success_status,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModemConfig {
    address: String,
    accept_invalid_certs: bool,
    timeout: Duration,
    require_success_status: bool,
}

impl ModemConfig {
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The HNAP endpoint lives at the root path of the modem's admin interface.
    pub fn endpoint(&self) -> String {
        format!("https://{}/", self.address)
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn require_success_status(&self) -> bool {
        self.require_success_status
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Missing MODEM_IP environment variable!")]
    MissingAddress,
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
pub struct ModemConfigBuilder {
    config: ModemConfig,
}

#[cfg(test)]
impl ModemConfigBuilder {
    pub fn new() -> Self {
        ModemConfigBuilder {
            config: ModemConfig {
                address: "192.168.100.1".to_string(),
                accept_invalid_certs: false,
                timeout: Duration::from_secs(5),
                require_success_status: false,
            },
        }
    }

    pub fn accept_invalid_certs(mut self, accept_invalid_certs: bool) -> Self {
        self.config.accept_invalid_certs = accept_invalid_certs;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn require_success_status(mut self, require_success_status: bool) -> Self {
        self.config.require_success_status = require_success_status;
        self
    }

    pub fn build(self) -> ModemConfig {
        self.config
    }
}

#[cfg(test)]
pub fn environment(vars: &[(&str, &str)]) -> Environment {
    let source = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(source))
}

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Top-level config (furbit.toml + FURBIT_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurbitConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub mailer: MailerConfig,
}

impl Default for FurbitConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            database: DatabaseConfig::default(),
            mailer: MailerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Outbound email settings for the notification channel.
///
/// `api_token` has no default on purpose: without it every send fails with
/// a configuration error while the rest of the service keeps working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    #[serde(default = "default_mailer_api_url")]
    pub api_url: String,
    pub api_token: Option<String>,
    #[serde(default = "default_from_email")]
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            api_url: default_mailer_api_url(),
            api_token: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_db_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.furbit/furbit.db", home)
}
fn default_mailer_api_url() -> String {
    "https://send.api.mailtrap.io/api/send".to_string()
}
fn default_from_email() -> String {
    "hello@furbit.co".to_string()
}
fn default_from_name() -> String {
    "Furbit Pet Passport".to_string()
}

impl FurbitConfig {
    /// Load config from a TOML file with FURBIT_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.furbit/furbit.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);
        tracing::debug!(path = %path, "loading config");

        let config: FurbitConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("FURBIT_").split("_"))
            .extract()
            .map_err(|e| crate::error::FurbitError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.furbit/furbit.toml", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let config = FurbitConfig::default();
        assert_eq!(config.gateway.port, 5000);
        assert_eq!(config.gateway.bind, "127.0.0.1");
        assert_eq!(config.mailer.from_email, "hello@furbit.co");
        assert!(config.mailer.api_token.is_none());
        assert!(config.database.path.ends_with("furbit.db"));
    }
}

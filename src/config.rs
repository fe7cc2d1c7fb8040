use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub database: Database,
    #[serde(default)]
    pub limits: Limits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub url: String,
    /// Whether to require TLS on the connection to the store.
    #[serde(default)]
    pub tls: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Limits {
    pub max_body_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            // plenty for a text paste
            max_body_size: 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from an optional `config.toml` plus `SNIPBIN_`-prefixed
    /// environment variables. A missing `port` is a fatal startup error.
    pub fn load() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config.toml").required(false))
            .add_source(
                config::Environment::with_prefix("SNIPBIN")
                    .separator("__"),
            )
            .build()
            .context("failed to read config")?
            .try_deserialize()
            .context("failed to deserialize config")
    }
}

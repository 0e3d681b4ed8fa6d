//! Server configuration: defaults, then a YAML file, then environment
//! overrides. `DATABASE_URL` wins over everything, falling back to a
//! file-based SQLite database when nothing else is configured.

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Records module configuration (page-size bounds)
    #[serde(default)]
    pub records: records_service::Config,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection string; any backend SeaORM's sqlx drivers support
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_database_url() -> String {
    "sqlite://backoffice.db?mode=rwc".to_string()
}

/// Load configuration: defaults <- optional YAML file <- `BACKOFFICE_*`
/// environment variables <- `DATABASE_URL`.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    let mut config: AppConfig = figment
        .merge(Env::prefixed("BACKOFFICE_").split("__"))
        .extract()?;

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database.url = url;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert!(config.database.url.starts_with("sqlite://"));
        assert_eq!(config.records.default_page_size, 50);
        assert_eq!(config.records.max_page_size, 100);
    }

    #[test]
    fn test_layered_resolution() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "backoffice.yaml",
                r#"
server:
  port: 9001
records:
  default_page_size: 25
"#,
            )?;

            // YAML overrides defaults; untouched sections keep theirs
            let config = load(Some(Path::new("backoffice.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9001);
            assert_eq!(config.records.default_page_size, 25);
            assert_eq!(config.server.bind, "127.0.0.1");

            // DATABASE_URL wins over everything
            jail.set_env("DATABASE_URL", "sqlite://elsewhere.db?mode=rwc");
            let config = load(Some(Path::new("backoffice.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.database.url, "sqlite://elsewhere.db?mode=rwc");
            Ok(())
        });
    }
}

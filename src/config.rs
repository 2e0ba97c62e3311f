//! Application configuration
//!
//! Read from a TOML file (`~/.config/pets-service/config.toml` by default).
//! Every section and every key is optional; anything left out takes its
//! default value.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::DatabaseConfig;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "PETS_CONFIG";
/// Environment variable overriding `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub static_files: StaticFilesConfig,
    pub breeds: BreedsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds allowed for cleanup after a shutdown signal.
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_connections: db.max_connections,
        }
    }
}

impl From<&DatabaseSection> for DatabaseConfig {
    fn from(section: &DatabaseSection) -> Self {
        DatabaseConfig {
            url: section.url.clone(),
            max_connections: section.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub dir: String,
    pub mount_path: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: "static".to_string(),
            mount_path: "/static".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedsConfig {
    /// Where the catalogue is served from. When unset, the server's own
    /// listener address is used.
    pub base_url: Option<String>,
    pub path: String,
    pub timeout_secs: u64,
}

impl Default for BreedsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            path: "static/breeds.json".to_string(),
            timeout_secs: 5,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    /// Environment overrides are not applied here; see [`apply_env_overrides`].
    ///
    /// [`apply_env_overrides`]: AppConfig::apply_env_overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Self::default()
        };

        Ok(config)
    }

    /// `DATABASE_URL` replaces `database.url`. Applied to loaded and fallback
    /// configurations alike.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            if !url.is_empty() {
                self.database.url = url;
            }
        }
    }

    /// Load `path`, falling back to the defaults when it cannot be read or
    /// parsed. Environment overrides apply to either outcome; the load error,
    /// if any, is handed back for the caller to report.
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        let (mut config, error) = match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        };
        config.apply_env_overrides();
        (config, error)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// `$PETS_CONFIG`, or `config.toml` under the user config directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pets-service")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config.server.address(), "0.0.0.0:8000");
        assert_eq!(config.server.shutdown_timeout, 30);
        assert_eq!(config.database.url, "sqlite://./pets.db?mode=rwc");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.static_files.mount_path, "/static");
        assert_eq!(config.breeds.path, "static/breeds.json");
        assert!(config.breeds.base_url.is_none());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 9100

            [breeds]
            base_url = "http://catalogue.local/"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.breeds.base_url.as_deref(), Some("http://catalogue.local/"));
        assert_eq!(config.breeds.timeout_secs, 5);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let dir = std::env::temp_dir().join(format!("pets-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn database_url_env_overrides_loaded_and_fallback_config() {
        let dir = std::env::temp_dir().join(format!("pets-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.toml");
        let bad = dir.join("bad.toml");
        std::fs::write(&good, "[database]\nurl = \"sqlite://./from-file.db\"\n").unwrap();
        std::fs::write(&bad, "[server\nport = ").unwrap();

        let env_url = "sqlite:///tmp/from-env.db?mode=rwc";
        std::env::set_var(DATABASE_URL_ENV, env_url);

        let (loaded, error) = AppConfig::load_or_default(&good);
        assert!(error.is_none());
        assert_eq!(loaded.database.url, env_url);

        let (fallback, error) = AppConfig::load_or_default(&bad);
        assert!(matches!(error, Some(ConfigError::Parse { .. })));
        assert_eq!(fallback.database.url, env_url);
        assert_eq!(fallback.server.port, 8000);

        std::env::remove_var(DATABASE_URL_ENV);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn database_section_converts_to_connection_config() {
        let section = DatabaseSection {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let db: DatabaseConfig = (&section).into();
        assert_eq!(db.url, "sqlite::memory:");
        assert_eq!(db.max_connections, 1);
    }
}

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON output instead of human readable lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Insert the bundled recipes on `serve` when the catalog is empty.
    #[serde(default = "default_seed_on_start")]
    pub seed_on_start: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_on_start: default_seed_on_start(),
        }
    }
}

fn default_seed_on_start() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `DATABASE_URL`
    /// 2. Environment variables (SMARTRECIPE__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:smartrecipe.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SMARTRECIPE")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_owned());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_owned());
        }
        if self.database.url.trim().is_empty() {
            return Err("Database url is required".to_owned());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_owned(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_owned(),
                max_connections: 5,
            },
            observability: ObservabilityConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(create_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = create_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = create_config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_database_url() {
        let mut config = create_config();
        config.database.url = " ".to_owned();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults() {
        let observability = ObservabilityConfig::default();
        assert_eq!(observability.log_level, "info");
        assert!(!observability.json);
        assert!(CatalogConfig::default().seed_on_start);
    }
}

//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use nimbus_core::NimbusError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `NIMBUS_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, NimbusError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, NimbusError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), NimbusError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, NimbusError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("NIMBUS_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (NIMBUS_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("NIMBUS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_nimbus_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_nimbus_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), NimbusError> {
        if config.database.url.is_empty() {
            return Err(NimbusError::Configuration(
                "Database URL is required".to_string(),
            ));
        }

        if config.provider.base_url.is_empty() {
            return Err(NimbusError::Configuration(
                "Weather provider base URL is required".to_string(),
            ));
        }

        // An empty key still boots (useful for cache/store-only testing) but
        // every provider call will be rejected upstream.
        if config.provider.api_key.is_empty() {
            warn!("Weather provider API key is empty; provider lookups will fail");
        }

        if config.cache_ttl.current_weather_secs == 0 || config.cache_ttl.forecast_secs == 0 {
            return Err(NimbusError::Configuration(
                "Cache TTLs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn config_error_to_nimbus_error(err: ConfigError) -> NimbusError {
    NimbusError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_loads_defaults_from_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8080);
    }

    #[tokio::test]
    async fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9999\n\n[cache_ttl]\ncurrent_weather_secs = 60\nforecast_secs = 120"
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.cache_ttl.current_weather_secs, 60);
        assert_eq!(config.cache_ttl.forecast_secs, 120);
    }

    #[tokio::test]
    async fn test_zero_ttl_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[cache_ttl]\ncurrent_weather_secs = 0\nforecast_secs = 120").unwrap();

        let result = ConfigLoader::new(dir.path().to_str().unwrap());
        assert!(result.is_err());
    }
}

//! Configuration loader with layered sources.

use crate::AppConfig;
use asmo_core::AsmoError;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::{debug, info, warn};

/// Prefix for structured environment overrides, e.g. `ASMO_DATABASE__URL`.
pub const ENV_PREFIX: &str = "ASMO";

/// Flat variables understood by older deployments, paired with the
/// structured variable that takes precedence over each.
const FLAT_ENV_FALLBACKS: [(&str, &str); 5] = [
    ("PORT", "ASMO_SERVER__PORT"),
    ("DATABASE_URL", "ASMO_DATABASE__URL"),
    ("REDIS_URL", "ASMO_REDIS__URL"),
    ("FRONTEND_URL", "ASMO_SERVER__CORS_ORIGINS"),
    ("LOG_LEVEL", "ASMO_OBSERVABILITY__LOG_LEVEL"),
];

/// Loads the layered configuration once at startup.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Flat variables (`PORT`, `DATABASE_URL`, `REDIS_URL`, `FRONTEND_URL`, `LOG_LEVEL`)
    /// 5. Environment variables with `ASMO_` prefix
    pub fn new(config_dir: impl AsRef<str>) -> Result<Self, AsmoError> {
        let config = Self::load_config(config_dir.as_ref())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, AsmoError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub const fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, AsmoError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("ASMO_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_asmo_error)?;
        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_asmo_error)?;

        apply_flat_env_fallbacks(&mut app_config, |key| std::env::var(key).ok())?;
        app_config.validate()?;

        if app_config.app.environment == "production" && !app_config.redis.enabled {
            warn!("Redis is disabled in production; every read will hit the database");
        }

        Ok(app_config)
    }
}

/// Applies the flat variables unless the matching `ASMO_` variable is set.
pub fn apply_flat_env_fallbacks<F>(config: &mut AppConfig, lookup: F) -> Result<(), AsmoError>
where
    F: Fn(&str) -> Option<String>,
{
    for (flat, structured) in FLAT_ENV_FALLBACKS {
        if lookup(structured).is_some() {
            continue;
        }
        let Some(value) = lookup(flat).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        debug!("Applying {} from the environment", flat);

        match flat {
            "PORT" => {
                config.server.port = value
                    .trim()
                    .parse()
                    .map_err(|_| AsmoError::Configuration(format!("Invalid PORT: {value}")))?;
            }
            "DATABASE_URL" => config.database.url = value,
            "REDIS_URL" => config.redis.url = value,
            "FRONTEND_URL" => {
                config.server.cors_origins = value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect();
            }
            "LOG_LEVEL" => config.observability.log_level = value.to_lowercase(),
            _ => {}
        }
    }
    Ok(())
}

fn config_error_to_asmo_error(err: ConfigError) -> AsmoError {
    AsmoError::Configuration(err.to_string())
}

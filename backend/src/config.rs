//! Process configuration, read once at startup from the environment.
//!
//! The resulting [`Config`] is immutable and handed to the components that
//! need it; nothing reads the environment after `main` has started the server.

use crate::error::ConfigError;
use log::{info, warn};
use std::{env, fmt::Display, fs::read_to_string, path::Path, str::FromStr, time::Duration};

const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.spoonacular.com";
const API_KEY_VAR: &str = "SPOONACULAR_API_KEY";
const API_KEY_SECRET: &str = "spoonacular_api_key";
const SECRETS_DIR: &str = "/run/secrets";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// The single client origin allowed through CORS.
    pub allowed_origin: String,
    pub database_path: String,
    pub provider_base_url: String,
    pub api_key: String,
    /// Upper bound for every outbound provider request.
    pub provider_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), Path::new(SECRETS_DIR))
    }

    /// Builds the configuration from an arbitrary variable lookup. Secrets not
    /// given as variables are read from files in `secrets_dir`.
    pub(crate) fn from_lookup<F>(lookup: F, secrets_dir: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .map(|key| key.trim().to_string())
            .or_else(|| read_secret(secrets_dir, API_KEY_SECRET))
            .ok_or(ConfigError::MissingApiKey)?;

        let provider_base_url: String =
            try_load(&lookup, "PROVIDER_BASE_URL", DEFAULT_PROVIDER_BASE_URL)?;

        Ok(Self {
            host: try_load(&lookup, "RECIPES_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "RECIPES_PORT", "8080")?,
            allowed_origin: try_load(&lookup, "ALLOWED_ORIGIN", "http://localhost:4200")?,
            database_path: try_load(&lookup, "RECIPES_DB_PATH", "recipes.sqlite")?,
            provider_base_url: provider_base_url.trim_end_matches('/').to_string(),
            api_key,
            provider_timeout: Duration::from_secs(try_load(
                &lookup,
                "PROVIDER_TIMEOUT_SECS",
                "30",
            )?),
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}

fn read_secret(secrets_dir: &Path, secret_name: &str) -> Option<String> {
    let path = secrets_dir.join(secret_name);

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from {}: {e}", path.display());
        })
        .ok()
        .filter(|s| !s.is_empty())
}

use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use tracing::info;

use crate::error::AppError;
use crate::onboarding::DEFAULT_MAX_UNITS;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub default_max_units: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: "sqlite://peter.db?mode=rwc".to_string(),
            default_max_units: DEFAULT_MAX_UNITS,
        }
    }
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_var(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr);
        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
        let default_max_units =
            parse_var(&lookup, "DEFAULT_MAX_UNITS")?.unwrap_or(defaults.default_max_units);

        Ok(Self {
            bind_addr,
            database_url,
            default_max_units,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("invalid {}: {}", key, e))),
        None => {
            info!("{} not set, using default", key);
            Ok(None)
        }
    }
}

/// Runtime configuration
///
/// Values come from the process environment (optionally seeded from a `.env`
/// file through `dotenvy`). Anything unset falls back to the defaults below.
use chrono::NaiveDate;
use std::env;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

pub const STORAGE_ENV: &str = "FILMORATE_STORAGE";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const RELEASE_DATE_FLOOR_ENV: &str = "FILMORATE_RELEASE_DATE_FLOOR";
pub const POPULAR_DEFAULT_ENV: &str = "FILMORATE_POPULAR_DEFAULT";
pub const POOL_SIZE_ENV: &str = "FILMORATE_DB_POOL_SIZE";

/// Number of films returned by `popular_films` when the caller gives no count.
pub const DEFAULT_POPULAR_COUNT: usize = 10;

/// The first public film screening; no film may be released before it.
pub fn default_release_date_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in_memory" | "in-memory" => Ok(StorageBackend::Memory),
            "postgres" | "postgresql" | "db" | "database" => Ok(StorageBackend::Postgres),
            other => Err(AppError::ConfigError(format!(
                "Unknown storage backend '{}' (expected 'memory' or 'postgres')",
                other
            ))),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Postgres => write!(f, "postgres"),
        }
    }
}

/// Film rules owned by the core rather than the validation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilmPolicy {
    pub release_date_floor: NaiveDate,
    pub popular_default_count: usize,
}

impl Default for FilmPolicy {
    fn default() -> Self {
        Self {
            release_date_floor: default_release_date_floor(),
            popular_default_count: DEFAULT_POPULAR_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub pool_size: Option<u32>,
    pub film_policy: FilmPolicy,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup(STORAGE_ENV) {
            Some(raw) => raw.parse()?,
            None => StorageBackend::default(),
        };

        let database_url = lookup(DATABASE_URL_ENV).filter(|url| !url.trim().is_empty());
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(AppError::ConfigError(format!(
                "{} must be set when {} is 'postgres'",
                DATABASE_URL_ENV, STORAGE_ENV
            )));
        }

        let release_date_floor = match lookup(RELEASE_DATE_FLOOR_ENV) {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?,
            None => default_release_date_floor(),
        };

        let popular_default_count = match lookup(POPULAR_DEFAULT_ENV) {
            Some(raw) => raw.trim().parse::<usize>()?,
            None => DEFAULT_POPULAR_COUNT,
        };
        if popular_default_count == 0 {
            return Err(AppError::ConfigError(format!(
                "{} must be positive",
                POPULAR_DEFAULT_ENV
            )));
        }

        let pool_size = lookup(POOL_SIZE_ENV)
            .map(|raw| raw.trim().parse::<u32>())
            .transpose()?;

        Ok(Self {
            storage,
            database_url,
            pool_size,
            film_policy: FilmPolicy {
                release_date_floor,
                popular_default_count,
            },
        })
    }
}

use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Where résumé collections are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Redis,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "redis" => Ok(StorageBackend::Redis),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => bail!("Unknown STORAGE_BACKEND '{other}' (expected memory, redis, or postgres)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if the selected backend's URL is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub redis_url: Option<String>,
    pub database_url: Option<String>,
    pub max_resumes_per_user: usize,
    pub analysis_delay: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::Memory,
            redis_url: None,
            database_url: None,
            max_resumes_per_user: 5,
            analysis_delay: Duration::ZERO,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let storage_backend = match std::env::var("STORAGE_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.storage_backend,
        };

        let redis_url = std::env::var("REDIS_URL").ok();
        let database_url = std::env::var("DATABASE_URL").ok();
        match storage_backend {
            StorageBackend::Redis if redis_url.is_none() => {
                bail!("REDIS_URL is required when STORAGE_BACKEND=redis")
            }
            StorageBackend::Postgres if database_url.is_none() => {
                bail!("DATABASE_URL is required when STORAGE_BACKEND=postgres")
            }
            _ => {}
        }

        Ok(Config {
            storage_backend,
            redis_url,
            database_url,
            max_resumes_per_user: parse_env("MAX_RESUMES_PER_USER", defaults.max_resumes_per_user)?,
            analysis_delay: Duration::from_millis(parse_env("ANALYSIS_DELAY_MS", 0u64)?),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

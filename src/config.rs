//! Process configuration.
//!
//! Defaults reproduce the fixed constants both processes have always used.
//! `COTACAO_*` variables (optionally from a `.env` file) override them.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};

pub const RATE_PATH: &str = "/cotacao";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
pub const DEFAULT_DATABASE_PATH: &str = "cotacao.db";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
pub const DEFAULT_OUTPUT_PATH: &str = "cotacao.txt";

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(200);
pub const DEFAULT_INSERT_TIMEOUT: Duration = Duration::from_millis(10);
pub const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub upstream_url: String,
    pub database_path: PathBuf,
    pub fetch_timeout: Duration,
    pub insert_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            insert_timeout: DEFAULT_INSERT_TIMEOUT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            listen_addr: lookup("COTACAO_LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            upstream_url: lookup("COTACAO_UPSTREAM_URL").unwrap_or(defaults.upstream_url),
            database_path: lookup("COTACAO_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            fetch_timeout: millis(&lookup, "COTACAO_FETCH_TIMEOUT_MS")?
                .unwrap_or(defaults.fetch_timeout),
            insert_timeout: millis(&lookup, "COTACAO_INSERT_TIMEOUT_MS")?
                .unwrap_or(defaults.insert_timeout),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout: Duration,
    pub output_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: DEFAULT_CLIENT_TIMEOUT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            server_url: lookup("COTACAO_SERVER_URL").unwrap_or(defaults.server_url),
            timeout: millis(&lookup, "COTACAO_CLIENT_TIMEOUT_MS")?.unwrap_or(defaults.timeout),
            output_path: lookup("COTACAO_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
        })
    }

    pub fn rate_url(&self) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), RATE_PATH)
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| format!("{key} must be a number of milliseconds, got {value:?}"))
        })
        .transpose()
}

use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use ecotracker_air_quality::provider::rapidapi::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub rapidapi_key: Option<String>,
    pub air_quality_base_url: String,
    pub air_quality_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            static_dir: "dist".to_string(),
            rapidapi_key: None,
            air_quality_base_url: DEFAULT_BASE_URL.to_string(),
            air_quality_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr: SocketAddr = match lookup("ECO_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid ECO_LISTEN_ADDR '{}'", addr))?,
            None => {
                let port: u16 = match lookup("PORT") {
                    Some(port) => port
                        .parse()
                        .with_context(|| format!("Invalid PORT '{}'", port))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };
        let cors_allow = lookup("ECO_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("ECO_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let static_dir = lookup("ECO_STATIC_DIR").unwrap_or(defaults.static_dir);
        let rapidapi_key = lookup("RAPIDAPI_KEY").filter(|k| !k.trim().is_empty());
        let air_quality_base_url =
            lookup("ECO_AIR_QUALITY_BASE_URL").unwrap_or(defaults.air_quality_base_url);
        let air_quality_timeout = lookup("ECO_AIR_QUALITY_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.air_quality_timeout);

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            rapidapi_key,
            air_quality_base_url,
            air_quality_timeout,
        })
    }
}

//! Service configuration from the environment (and `.env`, loaded by the binary).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config_error, Error};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,
    pub nominatim_base_url: String,
    pub osrm_base_url: String,
    pub user_agent: String,
    pub toll_dataset_path: PathBuf,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: "sqlite:vibetraffic.db".into(),
            database_max_connections: 5,
            nominatim_base_url: "https://nominatim.openstreetmap.org".into(),
            osrm_base_url: "https://router.project-osrm.org".into(),
            user_agent: "vibe-traffic-ai/1.0 (demo)".into(),
            toll_dataset_path: PathBuf::from("data/toll-segments.json"),
            http_timeout: Duration::from_secs(10),
        }
    }
}

fn parsed<T: FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>) -> Result<Option<T>, Error> {
    match lookup(key) {
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| config_error(key)),
        None => Ok(None),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset keys keep their defaults; set but unparsable keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parsed("VT_BIND_ADDR", &lookup)?.unwrap_or(defaults.bind_addr),
            database_url: lookup("VT_DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parsed("VT_DATABASE_MAX_CONNECTIONS", &lookup)?
                .unwrap_or(defaults.database_max_connections),
            nominatim_base_url: lookup("NOMINATIM_BASE_URL").unwrap_or(defaults.nominatim_base_url),
            osrm_base_url: lookup("OSRM_BASE_URL").unwrap_or(defaults.osrm_base_url),
            user_agent: lookup("VT_USER_AGENT").unwrap_or(defaults.user_agent),
            toll_dataset_path: lookup("VT_TOLL_DATASET")
                .map(PathBuf::from)
                .unwrap_or(defaults.toll_dataset_path),
            http_timeout: parsed("VT_HTTP_TIMEOUT_SECS", &lookup)?
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        })
    }
}

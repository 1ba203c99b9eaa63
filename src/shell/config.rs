// Runtime configuration, read from the environment (and a `.env` file when present).

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_LOG_FILTER: &str = "event_registry=info,tower_http=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    File { data_dir: PathBuf },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub store: StoreBackend,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host_raw = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            name: "HOST",
            value: host_raw.clone(),
            reason: e.to_string(),
        })?;

        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    name: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
        };

        let store = match lookup("STORE_BACKEND").as_deref() {
            None | Some("file") => StoreBackend::File {
                data_dir: lookup("DATA_DIR")
                    .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
                    .into(),
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    value: other.to_string(),
                    reason: "expected `file` or `memory`".into(),
                });
            }
        };

        Ok(Self {
            host,
            port,
            store,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

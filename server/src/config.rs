//! Host configuration from the process environment.
//!
//! `.env` is loaded by `main` before this runs. Parsing goes through a
//! lookup function so tests never touch the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("PORT must be non-zero")]
    ZeroPort,
    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Static files served when no route matches.
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `ASSETS_DIR`, falling back to defaults for
    /// unset or blank values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(value) = get("HOST") {
            config.host = value.parse().map_err(|source| ConfigError::InvalidHost { value, source })?;
        }
        if let Some(value) = get("PORT") {
            let port: u16 = value.parse().map_err(|source| ConfigError::InvalidPort { value, source })?;
            if port == 0 {
                return Err(ConfigError::ZeroPort);
            }
            config.port = port;
        }
        if let Some(value) = get("ASSETS_DIR") {
            config.assets_dir = PathBuf::from(value);
        }

        Ok(config)
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

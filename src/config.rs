//! Process configuration read from the environment.
//!
//! - `HOST`: address to bind (default `0.0.0.0`)
//! - `PORT`: port to listen on (default `5000`)
//! - `RUST_LOG`: log filter, read by the tracing subscriber

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got '{0}'")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`; unset or blank values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match value("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => defaults.host,
        };
        let port = match value("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[rstest]
    #[case("8080", 8080)]
    #[case(" 3000 ", 3000)]
    #[case("", DEFAULT_PORT)]
    fn reads_port(#[case] raw: &str, #[case] expected: u16) {
        let config = AppConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap();
        assert_eq!(config.port, expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("70000")]
    #[case("-1")]
    fn rejects_invalid_port(#[case] raw: &str) {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("PORT", raw)])),
            Err(ConfigError::InvalidPort(raw.to_string()))
        );
    }

    #[test]
    fn reads_host() {
        let config = AppConfig::from_lookup(lookup(&[("HOST", "127.0.0.1")])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");

        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("HOST", "localhost")])),
            Err(ConfigError::InvalidHost(_))
        ));
    }
}

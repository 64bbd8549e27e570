use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "waitlist.db";
const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3001";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SERVER_ADDR '{value}' is not a valid socket address: {source}")]
    InvalidServerAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
    pub frontend_dist: Option<String>, // built frontend to serve, if any
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = non_empty("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let addr = non_empty("SERVER_ADDR")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidServerAddr { value: addr.clone(), source })?;

        Ok(Self {
            database_url,
            server_addr,
            frontend_dist: non_empty("FRONTEND_DIST"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.database_url, "waitlist.db");
        assert_eq!(config.server_addr, "127.0.0.1:3001".parse().unwrap());
        assert_eq!(config.frontend_dist, None);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "/tmp/peerai.db"),
            ("SERVER_ADDR", "0.0.0.0:8080"),
            ("FRONTEND_DIST", "frontend/dist"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "/tmp/peerai.db");
        assert_eq!(config.server_addr.port(), 8080);
        assert_eq!(config.frontend_dist.as_deref(), Some("frontend/dist"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("FRONTEND_DIST", "  ")])).unwrap();
        assert_eq!(config.frontend_dist, None);
    }

    #[test]
    fn rejects_bad_server_addr() {
        let err = Config::from_lookup(lookup(&[("SERVER_ADDR", "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains("not-an-addr"));
    }
}

//! Process configuration, read from the environment (and a `.env` file when present).

use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://places.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3333";
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads `DATABASE_URL` and `BIND_ADDR`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| dotenv::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR {bind_addr:?} is not a socket address"))?;

        Ok(Self { database_url, bind_addr })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    /// Reads `API_URL`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| dotenv::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: var("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::from_vars(vars(&[])).expect("defaults");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr, "0.0.0.0:3333".parse().expect("addr"));
    }

    #[test]
    fn test_server_overrides() {
        let config = ServerConfig::from_vars(vars(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .expect("overrides");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn test_bad_bind_addr() {
        let err = ServerConfig::from_vars(vars(&[("BIND_ADDR", "localhost")]))
            .expect_err("not a socket address");
        assert!(err.to_string().contains("BIND_ADDR"));
    }

    #[test]
    fn test_client_config() {
        assert_eq!(ClientConfig::from_vars(vars(&[])).api_url, DEFAULT_API_URL);
        assert_eq!(
            ClientConfig::from_vars(vars(&[("API_URL", "http://10.0.0.2:3333")])).api_url,
            "http://10.0.0.2:3333"
        );
    }
}

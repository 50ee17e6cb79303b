use std::{collections::HashMap, env, net::SocketAddr};

use thiserror::Error;

const DEFAULT_MAPS_HOST: &str = "https://maps.googleapis.com";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub maps_api_key: String,
    pub maps_host: String,
    pub auth_key: Option<String>,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars().collect())
    }

    fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| vars.get(name).filter(|v| !v.is_empty()).cloned();

        let maps_api_key = non_empty("MAPS_API_KEY").ok_or(ConfigError::Missing("MAPS_API_KEY"))?;
        let maps_host = non_empty("MAPS_HOST")
            .unwrap_or_else(|| DEFAULT_MAPS_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        Ok(Config {
            maps_api_key,
            maps_host,
            auth_key: non_empty("AUTH_KEY"),
            bind_addr,
        })
    }
}

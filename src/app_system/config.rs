use std::net::SocketAddr;
use std::time::Duration;
use reqwest::Url;
use thiserror::Error;
use crate::domain::SupplierId;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FRUIT_URL: &str = "https://my-json-server.typicode.com/2020-abhilash/mock-api/fruits";
const DEFAULT_VEGETABLE_URL: &str = "https://my-json-server.typicode.com/2020-abhilash/mock-api/vegetables";
const DEFAULT_GRAIN_URL: &str = "https://my-json-server.typicode.com/2020-abhilash/mock-api/grains";
const DEFAULT_TIMEOUT_SECS: usize = 10;

/// Startup configuration problems. Any of these aborts the process.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid http(s) URL: {value:?}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} is not a valid listen address: {value:?}")]
    InvalidAddr { key: &'static str, value: String },
    #[error("{key} must be a positive integer: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Process configuration, read from the environment.
///
/// | Variable | Default |
/// |---|---|
/// | `FOOD_AGGREGATOR_ADDR` | `0.0.0.0:8080` |
/// | `FRUIT_SUPPLIER_URL`, `VEGETABLE_SUPPLIER_URL`, `GRAIN_SUPPLIER_URL` | public mock endpoints |
/// | `SUPPLIER_TIMEOUT_SECS` | `10` |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Supplier endpoints in sequential priority order.
    pub suppliers: Vec<(SupplierId, String)>,
    pub supplier_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let addr = get("FOOD_AGGREGATOR_ADDR", DEFAULT_ADDR);
        let listen_addr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
            key: "FOOD_AGGREGATOR_ADDR",
            value: addr.clone(),
        })?;

        let suppliers = SupplierId::ALL
            .into_iter()
            .map(|id| {
                let (key, default) = url_setting(id);
                supplier_url(key, get(key, default)).map(|url| (id, url))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let timeout_secs = positive_number("SUPPLIER_TIMEOUT_SECS", lookup("SUPPLIER_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            listen_addr,
            suppliers,
            supplier_timeout: Duration::from_secs(timeout_secs as u64),
        })
    }
}

fn url_setting(id: SupplierId) -> (&'static str, &'static str) {
    match id {
        SupplierId::Fruit => ("FRUIT_SUPPLIER_URL", DEFAULT_FRUIT_URL),
        SupplierId::Vegetable => ("VEGETABLE_SUPPLIER_URL", DEFAULT_VEGETABLE_URL),
        SupplierId::Grain => ("GRAIN_SUPPLIER_URL", DEFAULT_GRAIN_URL),
    }
}

fn supplier_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => Ok(value),
        _ => Err(ConfigError::InvalidUrl { key, value }),
    }
}

fn positive_number(key: &'static str, value: Option<String>, default: usize) -> Result<usize, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.supplier_timeout, Duration::from_secs(10));
        let order: Vec<_> = config.suppliers.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, SupplierId::ALL.to_vec());
        assert!(config.suppliers[0].1.ends_with("/fruits"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FOOD_AGGREGATOR_ADDR", "127.0.0.1:9000"),
            ("GRAIN_SUPPLIER_URL", "http://localhost:4000/grains"),
            ("SUPPLIER_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.suppliers[2], (SupplierId::Grain, "http://localhost:4000/grains".to_string()));
        assert_eq!(config.supplier_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values_are_fatal() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("FRUIT_SUPPLIER_URL", "")])),
            Err(ConfigError::InvalidUrl { key: "FRUIT_SUPPLIER_URL", .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("VEGETABLE_SUPPLIER_URL", "ftp://example.com/veg")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("SUPPLIER_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("FOOD_AGGREGATOR_ADDR", "port 80")])),
            Err(ConfigError::InvalidAddr { .. })
        ));
    }
}

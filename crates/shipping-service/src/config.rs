//! Application configuration, read from the environment (and a `.env` file if present).

use dotenvy::dotenv;
use std::env;
use thiserror::Error;

pub const DEFAULT_ORDER_SERVICE_API_URL: &str = "http://127.0.0.1:8300/order-service/api/orders";
pub const DEFAULT_PRODUCT_SERVICE_API_URL: &str =
    "http://127.0.0.1:8500/product-service/api/products";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub order_service_api_url: String,
    pub product_service_api_url: String,
    /// Capacity of the order-item store's request channel.
    pub store_buffer_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the configuration from any variable source. Unset variables take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_env = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let server_host = get_env("SERVER_HOST", "127.0.0.1");
        let server_port = get_env("SERVER_PORT", "8600")
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                var: "SERVER_PORT",
                reason: e.to_string(),
            })?;
        let order_service_api_url = get_env("ORDER_SERVICE_API_URL", DEFAULT_ORDER_SERVICE_API_URL);
        let product_service_api_url =
            get_env("PRODUCT_SERVICE_API_URL", DEFAULT_PRODUCT_SERVICE_API_URL);
        let store_buffer_size = get_env("STORE_BUFFER_SIZE", "32")
            .parse::<usize>()
            .map_err(|e| ConfigError::Invalid {
                var: "STORE_BUFFER_SIZE",
                reason: e.to_string(),
            })?;
        // tokio::sync::mpsc::channel panics on a zero capacity
        if store_buffer_size == 0 {
            return Err(ConfigError::Invalid {
                var: "STORE_BUFFER_SIZE",
                reason: "must be greater than zero".to_string(),
            });
        }

        tracing::info!("Application configuration loaded successfully.");

        Ok(Self {
            server_host,
            server_port,
            order_service_api_url,
            product_service_api_url,
            store_buffer_size,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
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
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8600");
        assert_eq!(config.order_service_api_url, DEFAULT_ORDER_SERVICE_API_URL);
        assert_eq!(config.product_service_api_url, DEFAULT_PRODUCT_SERVICE_API_URL);
        assert_eq!(config.store_buffer_size, 32);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("ORDER_SERVICE_API_URL", "http://orders/api/orders"),
            ("STORE_BUFFER_SIZE", "4"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.order_service_api_url, "http://orders/api/orders");
        assert_eq!(config.store_buffer_size, 4);
    }

    #[test]
    fn test_invalid_values() {
        let port = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")]));
        assert!(matches!(
            port,
            Err(ConfigError::Invalid {
                var: "SERVER_PORT",
                ..
            })
        ));

        let buffer = AppConfig::from_lookup(lookup(&[("STORE_BUFFER_SIZE", "0")]));
        assert!(matches!(
            buffer,
            Err(ConfigError::Invalid {
                var: "STORE_BUFFER_SIZE",
                ..
            })
        ));
    }
}

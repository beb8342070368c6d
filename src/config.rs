use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local path or `http(s)://` URL of the price sheet.
    pub csv_path: String,
    /// Printed before rendered prices. Prices are shown exactly as loaded.
    pub currency_symbol: String,
    pub fetch_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: "ECommerce_data.csv".to_string(),
            currency_symbol: String::new(),
            fetch_timeout_seconds: 10,
            user_agent: "PriceCompare/0.1".to_string(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.csv_path, "ECommerce_data.csv");
        assert_eq!(config.currency_symbol, "");
        assert_eq!(config.fetch_timeout_seconds, 10);
    }

    #[test]
    fn overrides_fields() {
        let config = parse_config(
            r#"{ "csv_path": "https://example.com/prices.csv", "currency_symbol": "₹" }"#,
        )
        .unwrap();
        assert_eq!(config.csv_path, "https://example.com/prices.csv");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.user_agent, "PriceCompare/0.1");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(parse_config("{ csv_path"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config("no/such/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }
}

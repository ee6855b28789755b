//! Build-time Configuration
//!
//! Values come from environment variables visible to the compiler:
//! - `INVENTORY_API_URL`: backend base URL
//! - `INVENTORY_REDIRECT_MS`: delay before leaving a form after success
//! - `INVENTORY_LOG_LEVEL`: `off`, `error`, `warn`, `info`, `debug`, `trace`

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_REDIRECT_MS: u32 = 1500;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub redirect_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("INVENTORY_API_URL"),
            option_env!("INVENTORY_REDIRECT_MS"),
            option_env!("INVENTORY_LOG_LEVEL"),
        )
    }

    /// Invalid or missing values fall back to the defaults.
    pub fn from_values(api_url: Option<&str>, redirect_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let redirect_delay_ms = redirect_ms
            .and_then(|ms| ms.trim().parse().ok())
            .unwrap_or(DEFAULT_REDIRECT_MS);

        let log_level = log_level
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_base_url, redirect_delay_ms, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(AppConfig::from_values(None, None, None), AppConfig::default());
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_values(Some("https://stock.example.com/"), Some("200"), Some("debug"));
        assert_eq!(config.api_base_url, "https://stock.example.com");
        assert_eq!(config.redirect_delay_ms, 200);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("soon"), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}

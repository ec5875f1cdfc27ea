//! Configuration Module
//!
//! Handles loading the explorer's configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default PokeAPI endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog API, without a trailing slash
    pub api_base_url: String,
    /// Cache time-to-live in seconds; also the reaper period
    pub cache_ttl: u64,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
    /// Number of location areas per `map` page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_URL` - API base URL (default: https://pokeapi.co/api/v2)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 10)
    /// - `HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("POKEAPI_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            cache_ttl: parse_var::<u64>("CACHE_TTL")
                .filter(|&ttl| ttl > 0)
                .unwrap_or(defaults.cache_ttl),
            http_timeout: parse_var::<u64>("HTTP_TIMEOUT")
                .filter(|&secs| secs > 0)
                .unwrap_or(defaults.http_timeout),
            page_size: parse_var::<u32>("PAGE_SIZE")
                .filter(|&size| size > 0)
                .unwrap_or(defaults.page_size),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// HTTP timeout as a Duration.
    pub fn http_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_ttl: 10,
            http_timeout: 10,
            page_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_ttl, 10);
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.cache_ttl_duration(), Duration::from_secs(10));
    }

    // Env vars are process-global; keep every env mutation in this one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("POKEAPI_URL");
        env::remove_var("CACHE_TTL");
        env::remove_var("HTTP_TIMEOUT");
        env::remove_var("PAGE_SIZE");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.cache_ttl, 10);
        assert_eq!(config.page_size, 20);

        env::set_var("POKEAPI_URL", "http://localhost:8080/api/v2/");
        env::set_var("CACHE_TTL", "30");
        env::set_var("HTTP_TIMEOUT", "not-a-number");
        env::set_var("PAGE_SIZE", "0");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.cache_ttl, 30);
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.page_size, 20);

        env::remove_var("POKEAPI_URL");
        env::remove_var("CACHE_TTL");
        env::remove_var("HTTP_TIMEOUT");
        env::remove_var("PAGE_SIZE");
    }
}

// src/config/mod.rs
// Service configuration loaded from .env and the process environment

use std::str::FromStr;

use tracing::debug;

use crate::llm::ClientConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TITLE: &str = "My Item Catalog API";
pub const DEFAULT_DESCRIPTION: &str = "A simple example API demonstrating an item catalog.";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct PapiConfig {
    // ── Server
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Service metadata
    pub title: String,
    pub description: String,
    pub version: String,

    // ── LLM helper
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    pub llm_timeout: u64,

    // ── Logging
    pub log_level: String,
}

/// Parse a raw variable value, dropping trailing `# comments` and whitespace.
/// Returns `None` when the variable is missing or does not parse.
fn parse_value<T: FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    let clean = raw.split('#').next().unwrap_or("").trim();
    match clean.parse::<T>() {
        Ok(parsed) => {
            debug!("Config: {} = {} (from environment)", key, clean);
            Some(parsed)
        }
        Err(_) => {
            debug!("Config: {} = '{}' (parse failed, using default)", key, raw);
            None
        }
    }
}

impl PapiConfig {
    /// Load `.env` (if any) and read configuration from the environment.
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            debug!(".env file not found, using environment variables and defaults");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| -> String {
            parse_value::<String>(key, lookup(key)).unwrap_or_else(|| default.to_string())
        };

        Self {
            host: var_or("PAPI_HOST", DEFAULT_HOST),
            port: parse_value("PAPI_PORT", lookup("PAPI_PORT")).unwrap_or(DEFAULT_PORT),
            cors_origin: var_or("PAPI_CORS_ORIGIN", "*"),
            title: var_or("PAPI_TITLE", DEFAULT_TITLE),
            description: var_or("PAPI_DESCRIPTION", DEFAULT_DESCRIPTION),
            version: var_or("PAPI_VERSION", DEFAULT_VERSION),
            openai_api_key: var_or("OPENAI_API_KEY", ""),
            openai_base_url: var_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            llm_model: var_or("PAPI_LLM_MODEL", DEFAULT_LLM_MODEL),
            llm_timeout: parse_value("PAPI_LLM_TIMEOUT", lookup("PAPI_LLM_TIMEOUT"))
                .unwrap_or(DEFAULT_LLM_TIMEOUT_SECS),
            log_level: var_or("PAPI_LOG_LEVEL", "info"),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Client settings for the chat completions helper
    pub fn llm_client_config(&self) -> ClientConfig {
        ClientConfig::new(
            self.openai_api_key.clone(),
            self.openai_base_url.clone(),
            self.llm_model.clone(),
            self.llm_timeout,
        )
    }
}

impl Default for PapiConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = PapiConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.llm_model, "gpt-4o-mini");
        assert!(config.openai_api_key.is_empty());
    }

    #[test]
    fn test_values_override_defaults() {
        let config = PapiConfig::from_lookup(lookup_from(&[
            ("PAPI_PORT", "9090"),
            ("PAPI_LLM_MODEL", "gpt-4o"),
            ("OPENAI_API_KEY", "sk-test"),
        ]));

        assert_eq!(config.port, 9090);
        assert_eq!(config.llm_model, "gpt-4o");
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn test_comments_and_whitespace_stripped() {
        let config = PapiConfig::from_lookup(lookup_from(&[
            ("PAPI_PORT", " 3001   # dev port"),
            ("PAPI_HOST", "127.0.0.1 # loopback"),
        ]));

        assert_eq!(config.port, 3001);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_unparseable_value_falls_back() {
        let config = PapiConfig::from_lookup(lookup_from(&[
            ("PAPI_PORT", "not-a-port"),
            ("PAPI_LLM_TIMEOUT", "-5"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.llm_timeout, DEFAULT_LLM_TIMEOUT_SECS);
    }

    #[test]
    fn test_llm_client_config() {
        let config = PapiConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:4000/v1"),
        ]));

        let client_config = config.llm_client_config();
        assert_eq!(client_config.api_key(), "sk-test");
        assert_eq!(client_config.base_url(), "http://localhost:4000/v1");
        assert_eq!(client_config.model(), "gpt-4o-mini");
    }
}

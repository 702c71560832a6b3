// Process configuration: marketplace credential and endpoint

use clap::Parser;
use soulmarket_sdk::{ApiKey, ClientConfig, DEFAULT_BASE_URL};
use url::Url;

pub const API_KEY_ENV: &str = "SENTIENT_API_KEY";
pub const API_URL_ENV: &str = "SENTIENT_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SENTIENT_API_KEY environment variable is required.")]
    MissingApiKey,

    #[error("Invalid marketplace URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Parser, Debug)]
#[command(name = "soulmarket-mcp")]
#[command(about = "MCP bridge to the Rent-a-Soul human marketplace", long_about = None)]
pub struct BridgeArgs {
    /// API key forwarded to the marketplace on every request
    #[arg(long, env = "SENTIENT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the marketplace API
    #[arg(long, env = "SENTIENT_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,
}

impl BridgeArgs {
    /// Resolve into an immutable client configuration.
    pub fn into_config(self) -> Result<ClientConfig, ConfigError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = Url::parse(&self.api_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            source,
        })?;

        Ok(ClientConfig {
            api_key: Some(ApiKey::new(api_key)),
            ..ClientConfig::new(base_url)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api_key: Option<&str>, api_url: &str) -> BridgeArgs {
        BridgeArgs {
            api_key: api_key.map(str::to_string),
            api_url: api_url.to_string(),
        }
    }

    #[test]
    fn test_missing_api_key() {
        let err = args(None, DEFAULT_BASE_URL).into_config().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert_eq!(
            err.to_string(),
            "SENTIENT_API_KEY environment variable is required."
        );
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let err = args(Some("   "), DEFAULT_BASE_URL).into_config().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_invalid_url() {
        let err = args(Some("sk"), "not a url").into_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_resolved_config() {
        let config = args(Some("sk-live"), "https://market.example.com/api-v1")
            .into_config()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "https://market.example.com/api-v1");
        assert_eq!(config.api_key.as_ref().map(ApiKey::expose), Some("sk-live"));
    }

    #[test]
    fn test_cli_flags_override() {
        let parsed = BridgeArgs::try_parse_from([
            "soulmarket-mcp",
            "--api-key",
            "sk-flag",
            "--api-url",
            "http://localhost:9999",
        ])
        .unwrap();

        assert_eq!(parsed.api_key.as_deref(), Some("sk-flag"));
        assert_eq!(parsed.api_url, "http://localhost:9999");
    }
}

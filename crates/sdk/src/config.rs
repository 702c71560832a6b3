//! Configuration types for the marketplace SDK.

use std::fmt;
use url::Url;

/// Default marketplace API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rentasoul.sentientspace.io/.netlify/functions/api-v1";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Configuration for the marketplace client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the marketplace API, including its path prefix.
    pub base_url: Url,
    /// API key for authentication.
    pub api_key: Option<ApiKey>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
        }
    }
}

/// Opaque API credential. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

//! Main client for the marketplace SDK.

use crate::api::*;
use crate::config::{ApiKey, ClientConfig};
use crate::error::{MarketError, MarketResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use url::Url;

/// Client for the Rent-a-Soul marketplace API.
#[derive(Debug, Clone)]
pub struct MarketClient {
    pub(crate) http: HttpTransport,
}

impl MarketClient {
    /// Create a new client builder.
    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> MarketResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;

        Ok(Self { http })
    }

    /// Get the status API.
    pub fn status(&self) -> StatusApi<'_> {
        StatusApi::new(self)
    }

    /// Get the market API.
    pub fn market(&self) -> MarketApi<'_> {
        MarketApi::new(self)
    }

    /// Get the tasks API.
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// Get the hire API.
    pub fn hire(&self) -> HireApi<'_> {
        HireApi::new(self)
    }
}

/// Builder for creating a MarketClient.
#[derive(Debug, Default)]
pub struct MarketClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl MarketClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the marketplace API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> MarketResult<MarketClient> {
        let base_url_str = self
            .base_url
            .ok_or_else(|| MarketError::Config("base_url is required".to_string()))?;

        let base_url = Url::parse(&base_url_str)?;

        let config = ClientConfig {
            base_url,
            api_key: self.api_key.map(ApiKey::new),
        };

        MarketClient::from_config(config)
    }
}

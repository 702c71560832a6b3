//! Status API endpoint.

use crate::client::MarketClient;
use crate::error::MarketResult;
use serde::{Deserialize, Serialize};

/// Status API for checking connectivity to the marketplace.
pub struct StatusApi<'a> {
    client: &'a MarketClient,
}

impl<'a> StatusApi<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Check marketplace status.
    pub async fn check(&self) -> MarketResult<StatusResponse> {
        self.client.http.get("/status").await
    }
}

/// Status check response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(
        default,
        deserialize_with = "super::string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
}

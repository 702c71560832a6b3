//! Hire API endpoint.

use crate::client::MarketClient;
use crate::error::MarketResult;
use serde::{Deserialize, Serialize};

/// Hire API for opening handshakes with souls.
pub struct HireApi<'a> {
    client: &'a MarketClient,
}

impl<'a> HireApi<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Start a hire handshake with a soul.
    pub async fn create(&self, request: &HireRequest) -> MarketResult<HireResponse> {
        self.client.http.post("/hire", request).await
    }
}

/// Request to hire a soul.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireRequest {
    pub target_soul_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response from starting a handshake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireResponse {
    #[serde(
        default,
        alias = "id",
        deserialize_with = "super::string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub handshake_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

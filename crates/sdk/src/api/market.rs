//! Market API endpoint.

use crate::client::MarketClient;
use crate::error::MarketResult;
use serde::{Deserialize, Serialize};

/// Market API for browsing souls available for hire.
pub struct MarketApi<'a> {
    client: &'a MarketClient,
}

impl<'a> MarketApi<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// List souls currently on the market.
    pub async fn list(&self) -> MarketResult<MarketListing> {
        self.client.http.get("/market").await
    }
}

/// Market listing as returned by the API.
///
/// The service wraps the collection in `{"souls": [...]}`; a bare array is
/// accepted too. Anything else is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarketListing {
    Wrapped {
        #[serde(alias = "market")]
        souls: Vec<SoulProfile>,
    },
    Bare(Vec<SoulProfile>),
    Other(serde_json::Value),
}

impl MarketListing {
    /// Soul records, empty when the body had an unrecognized shape.
    pub fn souls(&self) -> &[SoulProfile] {
        match self {
            Self::Wrapped { souls } | Self::Bare(souls) => souls,
            Self::Other(_) => &[],
        }
    }
}

/// A worker profile on the market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoulProfile {
    #[serde(alias = "soul_id", deserialize_with = "super::string_or_number", default)]
    pub id: Option<String>,
    #[serde(default, alias = "display_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default, alias = "hourly_rate")]
    pub rate: Option<serde_json::Value>,
}

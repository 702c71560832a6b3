//! # Soulmarket SDK
//!
//! Rust client for the Rent-a-Soul marketplace, where agents post bounties
//! and hire human workers ("souls").
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use soulmarket_sdk::{MarketClient, MarketResult};
//!
//! #[tokio::main]
//! async fn main() -> MarketResult<()> {
//!     let client = MarketClient::builder()
//!         .base_url("https://rentasoul.sentientspace.io/.netlify/functions/api-v1")
//!         .api_key("sk-your-api-key")
//!         .build()?;
//!
//!     let status = client.status().check().await?;
//!     println!("Marketplace status: {:?}", status.status);
//!
//!     let market = client.market().list().await?;
//!     println!("Found {} souls", market.souls().len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{
    CreateTaskRequest, CreateTaskResponse, HireRequest, HireResponse, MarketListing, SoulProfile,
    StatusResponse,
};
pub use client::{MarketClient, MarketClientBuilder};
pub use config::{ApiKey, ClientConfig, DEFAULT_BASE_URL};
pub use error::{MarketError, MarketResult};

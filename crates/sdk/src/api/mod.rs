//! Marketplace API endpoint groups.

mod hire;
mod market;
mod status;
mod tasks;

pub use hire::{HireApi, HireRequest, HireResponse};
pub use market::{MarketApi, MarketListing, SoulProfile};
pub use status::{StatusApi, StatusResponse};
pub use tasks::{CreateTaskRequest, CreateTaskResponse, TasksApi};

use serde::{Deserialize, Deserializer};

/// Accept scalar fields (ids, versions) sent either as strings or as bare numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

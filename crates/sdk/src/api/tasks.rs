//! Tasks API endpoint.

use crate::client::MarketClient;
use crate::error::MarketResult;
use serde::{Deserialize, Serialize};

/// Tasks API for posting jobs and bounties.
pub struct TasksApi<'a> {
    client: &'a MarketClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Post a new task to the marketplace.
    pub async fn create(&self, request: &CreateTaskRequest) -> MarketResult<CreateTaskResponse> {
        self.client.http.post("/list-task", request).await
    }
}

/// Request to post a new task.
///
/// Fields the marketplace accepts but this type does not name are carried in
/// `extra` and sent back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    /// Payment amount in USD, kept in the caller's numeric representation.
    pub reward: serde_json::Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response from posting a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    #[serde(
        default,
        alias = "id",
        deserialize_with = "super::string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub task_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_keeps_unknown_fields() {
        let input = serde_json::json!({
            "title": "Read a bedtime story",
            "description": "Record 5 minutes of audio",
            "reward": 25,
            "deadline": "2026-11-01",
        });

        let request: CreateTaskRequest = serde_json::from_value(input.clone()).unwrap();
        assert!(request.tags.is_none());
        assert_eq!(serde_json::to_value(&request).unwrap(), input);
    }

    #[test]
    fn test_request_rejects_string_reward() {
        let input = serde_json::json!({
            "title": "t",
            "description": "d",
            "reward": "ten dollars",
        });

        assert!(serde_json::from_value::<CreateTaskRequest>(input).is_err());
    }

    #[test]
    fn test_response_accepts_id_alias() {
        let response: CreateTaskResponse =
            serde_json::from_value(serde_json::json!({"id": 17, "status": "open"})).unwrap();

        assert_eq!(response.task_id.as_deref(), Some("17"));
        assert_eq!(response.extra["status"], "open");
    }
}

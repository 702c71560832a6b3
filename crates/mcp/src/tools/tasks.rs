// Task posting tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    api_error, json_schema_array, json_schema_number, json_schema_object, json_schema_string,
    parse_args, render_raw, Tool,
};
use anyhow::Result;
use soulmarket_sdk::{CreateTaskRequest, CreateTaskResponse, MarketClient};

/// Tool to post a job or bounty to the marketplace
pub struct ListTaskTool {
    client: MarketClient,
}

impl ListTaskTool {
    pub fn new(client: MarketClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListTaskTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_task".to_string(),
            description: "Post a new job/bounty to the human marketplace.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "title": json_schema_string("Short title of the task"),
                    "description": json_schema_string("Detailed instructions for the human"),
                    "reward": json_schema_number("Payment amount in USD"),
                    "tags": json_schema_array(
                        serde_json::json!({"type": "string"}),
                        "Tags like 'Visual', 'Voice', 'Urgent'"
                    )
                }),
                vec!["title", "description", "reward"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let request: CreateTaskRequest = parse_args("list_task", arguments)?;

        match self.client.tasks().create(&request).await {
            Ok(response) => Ok(CallToolResult::text(render_created(&response)?)),
            Err(e) => Ok(api_error(&e)),
        }
    }
}

fn render_created(response: &CreateTaskResponse) -> Result<String> {
    match &response.task_id {
        Some(id) => Ok(format!("Task posted successfully. Task ID: {}", id)),
        None => render_raw(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{client_for, TEST_API_KEY};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn task_args() -> serde_json::Value {
        serde_json::json!({
            "title": "Describe this painting",
            "description": "Look at the attached image and describe the mood",
            "reward": 12.5,
            "tags": ["Visual"],
            "priority": "high"
        })
    }

    #[tokio::test]
    async fn test_list_task_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/list-task"))
            .and(header("x-api-key", TEST_API_KEY))
            .and(body_json(task_args()))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"task_id": "T-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tool = ListTaskTool::new(client_for(&server));
        let result = tool.execute(task_args()).await.unwrap();

        assert!(!result.is_error());
        let text = result.text_content();
        assert!(text.contains("T-1"));
        assert!(text.contains("successfully"));
    }

    #[tokio::test]
    async fn test_list_task_insufficient_funds() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/list-task"))
            .respond_with(
                ResponseTemplate::new(402)
                    .set_body_json(serde_json::json!({"error": "insufficient funds"})),
            )
            .mount(&server)
            .await;

        let tool = ListTaskTool::new(client_for(&server));
        let result = tool.execute(task_args()).await.unwrap();

        assert!(result.is_error());
        assert_eq!(result.content.len(), 1);
        assert!(result.text_content().contains("insufficient funds"));
    }

    #[tokio::test]
    async fn test_list_task_without_id_renders_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/list-task"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"queued": true})),
            )
            .mount(&server)
            .await;

        let tool = ListTaskTool::new(client_for(&server));
        let result = tool.execute(task_args()).await.unwrap();

        assert!(!result.is_error());
        assert!(result.text_content().contains("\"queued\": true"));
    }

    #[tokio::test]
    async fn test_list_task_rejects_bad_shape_without_calling_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = ListTaskTool::new(client_for(&server));
        let err = tool
            .execute(serde_json::json!({"title": "no reward", "description": "d"}))
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).starts_with("Invalid arguments for list_task"));
    }
}

//! HTTP transport layer for the marketplace SDK.

use crate::config::{ClientConfig, API_KEY_HEADER};
use crate::error::{MarketError, MarketResult};
use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for making API requests.
///
/// Every request is attempted exactly once.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> MarketResult<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(ref api_key) = config.api_key {
            let mut value = header::HeaderValue::from_str(api_key.expose())
                .map_err(|_| MarketError::Config("Invalid API key format".to_string()))?;
            value.set_sensitive(true);
            headers.insert(header::HeaderName::from_static(API_KEY_HEADER), value);
        }

        let client = Client::builder()
            .user_agent(concat!("soulmarket-sdk/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            config,
        })
    }

    /// Build a URL for the given path, appended to the base URL's own path.
    fn build_url(&self, path: &str) -> MarketResult<url::Url> {
        let mut url = self.config.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| MarketError::Config("base_url cannot carry a path".to_string()))?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Send a request once and decode a successful JSON body.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> MarketResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Marketplace request failed");
            return Err(MarketError::from_response(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> MarketResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        self.execute(self.client.get(url)).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> MarketResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        self.execute(self.client.post(url).json(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use serde::{Deserialize, Serialize};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
        value: i32,
    }

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig::new(url::Url::parse(base_url).unwrap()))
    }

    fn create_config_with_auth(base_url: &str, api_key: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig {
            api_key: Some(ApiKey::new(api_key)),
            ..ClientConfig::new(url::Url::parse(base_url).unwrap())
        })
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/market"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "success".to_string(),
                value: 42,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: TestResponse = transport.get("/market").await.unwrap();
        assert_eq!(result.message, "success");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_base_path_prefix_is_kept() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/.netlify/functions/api-v1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "prefixed".to_string(),
                value: 1,
            }))
            .expect(1)
            .mount(&server)
            .await;

        let base = format!("{}/.netlify/functions/api-v1", server.uri());
        let transport = HttpTransport::new(create_config(&base)).unwrap();

        let result: TestResponse = transport.get("/status").await.unwrap();
        assert_eq!(result.message, "prefixed");
    }

    #[tokio::test]
    async fn test_post_request_sends_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/list-task"))
            .and(body_json(serde_json::json!({"name": "test"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "created".to_string(),
                value: 1,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let body = serde_json::json!({"name": "test"});
        let result: TestResponse = transport.post("/list-task", &body).await.unwrap();
        assert_eq!(result.message, "created");
    }

    #[tokio::test]
    async fn test_api_key_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .and(header("x-api-key", "sk-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "authorized".to_string(),
                value: 100,
            }))
            .mount(&server)
            .await;

        let config = create_config_with_auth(&server.uri(), "sk-test-key");
        let transport = HttpTransport::new(config).unwrap();

        let result: TestResponse = transport.get("/status").await.unwrap();
        assert_eq!(result.message, "authorized");
    }

    #[tokio::test]
    async fn test_error_body_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/list-task"))
            .respond_with(
                ResponseTemplate::new(402)
                    .set_body_json(serde_json::json!({"error": "insufficient funds"})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: MarketResult<TestResponse> =
            transport.post("/list-task", &serde_json::json!({})).await;
        match result {
            Err(MarketError::Api { status, message }) => {
                assert_eq!(status, 402);
                assert_eq!(message, "insufficient funds");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_errors_are_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/market"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: MarketResult<TestResponse> = transport.get("/market").await;
        let err = result.unwrap_err();
        assert_eq!(err.describe(), "Request failed with status code 503");
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: MarketResult<TestResponse> = transport.get("/status").await;
        assert!(matches!(result, Err(MarketError::Json(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind and drop a listener to find a port nobody is serving.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(create_config(&format!("http://{}", addr))).unwrap();

        let result: MarketResult<TestResponse> = transport.get("/status").await;
        let err = result.unwrap_err();
        assert!(matches!(err, MarketError::Http(_)));
        assert!(!err.describe().is_empty());
    }
}

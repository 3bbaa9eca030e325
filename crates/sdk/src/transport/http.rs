//! HTTP transport layer for the PCP SDK.
//!
//! The pmwebapi is consumed exclusively through GET requests, so this
//! transport exposes exactly one verb. There is no retry loop: transport
//! failures surface verbatim to the caller.

use crate::config::ClientConfig;
use crate::error::{PcpError, PcpResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for issuing pmwebapi requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> PcpResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> PcpResult<url::Url> {
        self.config
            .base_url
            .join(path)
            .map_err(PcpError::InvalidUrl)
    }

    /// Execute a GET request and decode the JSON response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> PcpResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PcpError::from_response(status, &body));
        }

        let body = response.text().await?;
        let decoded = serde_json::from_str(&body)?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
        value: i32,
    }

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig {
            base_url: url::Url::parse(base_url).unwrap(),
            timeout: Duration::from_secs(30),
        })
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pmapi/context"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "success".to_string(),
                value: 42,
            }))
            .mount(&server)
            .await;

        let config = create_config(&server.uri());
        let transport = HttpTransport::new(config).unwrap();

        let result: TestResponse = transport.get("/pmapi/context").await.unwrap();
        assert_eq!(result.message, "success");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_get_request_with_query_string() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pmapi/1/_metric"))
            .and(query_param("prefix", "kernel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "filtered".to_string(),
                value: 1,
            }))
            .mount(&server)
            .await;

        let config = create_config(&server.uri());
        let transport = HttpTransport::new(config).unwrap();

        let result: TestResponse = transport
            .get("/pmapi/1/_metric?prefix=kernel")
            .await
            .unwrap();
        assert_eq!(result.message, "filtered");
    }

    #[tokio::test]
    async fn test_error_on_400() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pmapi/bad"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "Bad Request"})),
            )
            .mount(&server)
            .await;

        let config = create_config(&server.uri());
        let transport = HttpTransport::new(config).unwrap();

        let result: PcpResult<TestResponse> = transport.get("/pmapi/bad").await;
        match result {
            Err(PcpError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Bad Request");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[tokio::test]
    async fn test_error_on_404() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pmapi/notfound"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
            .mount(&server)
            .await;

        let config = create_config(&server.uri());
        let transport = HttpTransport::new(config).unwrap();

        let result: PcpResult<TestResponse> = transport.get("/pmapi/notfound").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_decode_failure_is_json_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pmapi/garbage"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let config = create_config(&server.uri());
        let transport = HttpTransport::new(config).unwrap();

        let result: PcpResult<TestResponse> = transport.get("/pmapi/garbage").await;
        assert!(matches!(result, Err(PcpError::Json(_))));
    }

    #[tokio::test]
    async fn test_build_url() {
        let config = create_config("http://localhost:44323");
        let transport = HttpTransport::new(config).unwrap();

        let url = transport.build_url("/pmapi/context").unwrap();
        assert_eq!(url.as_str(), "http://localhost:44323/pmapi/context");
    }

    #[tokio::test]
    async fn test_build_url_keeps_query() {
        let config = create_config("http://localhost:44323");
        let transport = HttpTransport::new(config).unwrap();

        let url = transport
            .build_url("/pmapi/1/_fetch?names=kernel.all.load")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:44323/pmapi/1/_fetch?names=kernel.all.load"
        );
    }
}

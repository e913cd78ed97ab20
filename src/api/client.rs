use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

use crate::config::DashboardConfig;

/// API error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses, like `Response.ok`
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests.
///
/// `Err(ApiError::Network)` means the request never completed; any response
/// the server sent, whatever its status, is `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

/// Transport over the browser `fetch` API
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = Request::get(url).send().await?;
        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// API client for the live-data and fallback endpoints
#[derive(Clone)]
pub struct ApiClient {
    latest_url: String,
    fallback_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            latest_url: config.latest_url(),
            fallback_url: config.fallback_url.clone(),
            transport,
        }
    }

    /// Request the live reading set
    pub async fn get_latest(&self) -> Result<HttpResponse, ApiError> {
        self.transport.get(&self.latest_url).await
    }

    /// Request the static snapshot, bypassing any HTTP cache
    pub async fn get_fallback(&self) -> Result<HttpResponse, ApiError> {
        let url = cache_busted(&self.fallback_url, chrono::Utc::now().timestamp_millis());
        self.transport.get(&url).await
    }

    /// Turn a response into its body, failing on non-success statuses
    pub fn handle_response(response: HttpResponse) -> Result<String, ApiError> {
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status,
                message: response.body,
            });
        }

        Ok(response.body)
    }
}

/// Append a timestamp query so every request reaches the server
fn cache_busted(url: &str, millis: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_ok_range() {
        assert!(HttpResponse::new(200, "").ok());
        assert!(HttpResponse::new(204, "").ok());
        assert!(!HttpResponse::new(304, "").ok());
        assert!(!HttpResponse::new(404, "").ok());
        assert!(!HttpResponse::new(500, "").ok());
    }

    #[test]
    fn test_handle_response_maps_status() {
        let err = ApiClient::handle_response(HttpResponse::new(503, "maintenance")).unwrap_err();

        assert_eq!(
            err,
            ApiError::Http {
                status: 503,
                message: "maintenance".to_string()
            }
        );
        assert_eq!(err.to_string(), "HTTP error 503: maintenance");
    }

    #[test]
    fn test_cache_busted() {
        assert_eq!(cache_busted("final.json", 1700000000000), "final.json?1700000000000");
        assert_eq!(cache_busted("final.json?v=2", 5), "final.json?v=2&5");
    }

    #[test]
    fn test_client_uses_configured_urls() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|url| url == "http://gateway/api/latest")
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, "[]")));
        transport
            .expect_get()
            .withf(|url| url.starts_with("snapshot.json?"))
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, "[]")));

        let config = DashboardConfig {
            api_url: "http://gateway".to_string(),
            fallback_url: "snapshot.json".to_string(),
            ..DashboardConfig::default()
        };
        let client = ApiClient::new(&config, Rc::new(transport));

        futures::executor::block_on(async {
            assert!(client.get_latest().await.is_ok());
            assert!(client.get_fallback().await.is_ok());
        });
    }
}

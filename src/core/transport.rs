//! HTTP transport seam
//!
//! The client core only describes requests; the actual exchange is performed
//! behind the [`Transport`] trait so tests can substitute an in-memory fake.
//! Retries, TLS and connection management all live on the transport side.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::core::errors::{OneSkyError, Result};

/// HTTP method for a request description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request, no body
    Get,
    /// POST request with an optional body
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A fully-described request ready for the transport
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Fully-qualified request URL including the signed query string
    pub url: Url,
    /// Extra request headers as name/value pairs
    pub headers: Vec<(String, String)>,
    /// Request body, present for uploads only
    pub body: Option<Vec<u8>>,
}

/// Raw exchange result handed back to the decoder
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return status plus body bytes.
    ///
    /// Only connection-level failures are errors here; a non-success status
    /// is a valid response and classified by the caller.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Production transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given request timeout
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(request.url),
            HttpMethod::Post => self.client.post(request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| OneSkyError::NetworkError {
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| OneSkyError::NetworkError {
                message: e.to_string(),
            })?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_covers_2xx_only() {
        let ok = HttpResponse { status: 201, body: vec![] };
        let redirect = HttpResponse { status: 302, body: vec![] };
        let error = HttpResponse { status: 500, body: vec![] };

        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!error.is_success());
    }

    #[test]
    fn test_method_renders_as_wire_name() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}

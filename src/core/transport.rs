// The request-execution seam and the values that cross it.

use super::error::TransportError;
use async_trait::async_trait;
use reqwest::{header::HeaderMap, Method, StatusCode};

/// One outgoing request, built by an API action and handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the cluster base URL, segments already escaped.
    pub path: String,
    /// Query pairs in the order they are sent.
    pub params: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Response as returned by a transport. Statuses >= 300 arrive as
/// [`TransportError`] instead.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }
}

/// Executes requests against the cluster.
///
/// Implementations own connection handling, timeouts and error
/// classification: a 404 from the cluster should surface as
/// [`TransportError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform_request(
        &self,
        request: RequestDescriptor,
    ) -> Result<Response, TransportError>;
}

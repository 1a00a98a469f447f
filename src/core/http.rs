// reqwest-backed transport.

use super::config::{ClientConfig, APP_USER_AGENT, DEFAULT_TIMEOUT_SEC};
use super::error::{ApiError, TransportError};
use super::transport::{RequestDescriptor, Response, Transport};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{header, Client, StatusCode, Url};
use std::time::Duration;

// Shared default client. `reqwest::Client` is an Arc internally, so clones
// reuse the same connection pool.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    build_client(
        APP_USER_AGENT,
        Duration::from_secs(DEFAULT_TIMEOUT_SEC),
        Duration::from_secs(DEFAULT_TIMEOUT_SEC),
    )
    .expect("Failed to build core HTTP_CLIENT")
});

fn build_client(
    user_agent: &str,
    timeout: Duration,
    connect_timeout: Duration,
) -> Result<Client, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_str(user_agent)
            .map_err(|e| ApiError::Config(format!("invalid user agent: {}", e)))?,
    );

    Client::builder()
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .build()
        .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {}", e)))
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Uses the shared client unless the config overrides timeouts or the
    /// user agent.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = if config.needs_dedicated_client() {
            build_client(&config.user_agent, config.timeout, config.connect_timeout)?
        } else {
            HTTP_CLIENT.clone()
        };

        Ok(Self {
            client,
            base_url: config.url.clone(),
        })
    }

    /// Wraps an existing client. `base_url` should end with `/`.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform_request(
        &self,
        request: RequestDescriptor,
    ) -> Result<Response, TransportError> {
        let url = self.base_url.join(&request.path)?;
        log::debug!("{} {} {:?}", request.method, url, request.params);

        let mut builder = self.client.request(request.method, url);
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if let Some(body) = request.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("Request failed: {}", e);
            TransportError::Network(e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if status.as_u16() >= 300 {
            log::warn!("Cluster returned {}", status);
            return Err(status_error(status, body));
        }

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

fn status_error(status: StatusCode, body: String) -> TransportError {
    if status == StatusCode::NOT_FOUND {
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Not Found")
                .to_string()
        } else {
            body
        };
        TransportError::NotFound { message }
    } else {
        TransportError::Status { status, body }
    }
}

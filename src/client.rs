use crate::core::{
    ApiError, ClientConfig, HttpTransport, RequestDescriptor, Response, Transport, TransportError,
};

/// Entry point for API actions. Generic over the transport so callers (and
/// tests) can swap in their own.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::with_transport(HttpTransport::from_config(config)?))
    }

    /// Client for `ELASTICSEARCH_URL`, or `http://localhost:9200` when unset.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ClientConfig::from_env()?)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Sends a request as-is.
    pub async fn perform_request(
        &self,
        request: RequestDescriptor,
    ) -> Result<Response, TransportError> {
        self.transport.perform_request(request).await
    }
}

// Shared plumbing: errors, configuration, the transport seam, the reqwest
// transport and path helpers.

pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod utils;

pub use config::ClientConfig;
pub use error::{ApiError, TransportError};
pub use http::HttpTransport;
pub use transport::{RequestDescriptor, Response, Transport};

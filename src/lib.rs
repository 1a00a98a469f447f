//! Document existence check for an Elasticsearch-compatible REST API.
//!
//! [`Client::exists`] issues `HEAD {index}/{type}/{id}` and reports whether
//! the document is there. Requests go through a [`Transport`];
//! [`HttpTransport`] is the reqwest implementation.

pub mod actions;
pub mod client;
pub mod core;

pub use actions::document::{ExistsParams, ALL_TYPES};
pub use client::Client;
pub use crate::core::{
    ApiError, ClientConfig, HttpTransport, RequestDescriptor, Response, Transport, TransportError,
};

/// Initialises `env_logger` from `RUST_LOG`. Safe to call more than once.
pub fn init_logger() {
    let _ = env_logger::try_init();
}

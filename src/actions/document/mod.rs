// Single-document actions.

pub mod models;
pub mod requests;

pub use models::{ExistsParams, ALL_TYPES};

//! Error types for the HTTP surface

pub mod types;

pub use types::ApiError;

//! Middleware module

pub mod logging;

pub use logging::{log_request, RequestId, REQUEST_ID_HEADER};

//! Smart Quiz web front end
//!
//! Server-rendered pages plus a thin client for the quiz-generation service.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod pages;
pub mod schemas;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use error::ApiError;
pub use server::App;

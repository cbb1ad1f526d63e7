//! Configuration management module
//!
//! Loads and validates application configuration from environment
//! variables and .env files.

pub mod settings;

pub use settings::{Environment, QuizApiConfig, QuizPageDefaults, Settings};

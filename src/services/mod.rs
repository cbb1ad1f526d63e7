//! Services module
//!
//! External service integrations.

pub mod quiz_client;
#[cfg(test)]
pub(crate) mod testing;

pub use quiz_client::{QuizApi, QuizClient, QuizClientError};

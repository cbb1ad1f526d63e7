//! Application state container
//!
//! Shared state passed to every handler via Axum's state extraction.

use crate::config::Settings;
use crate::services::{QuizApi, QuizClient};
use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Immutable after startup and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Client for the upstream quiz-generation service
    pub quiz_api: Arc<dyn QuizApi>,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create the application state with a real HTTP client
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        tracing::debug!(
            base_url = %settings.quiz_api.base_url,
            "Creating quiz service client"
        );
        let client = QuizClient::new(&settings.quiz_api)
            .context("Failed to create quiz service client")?;

        Ok(Self::with_quiz_api(settings, Arc::new(client)))
    }

    /// Create the application state around an existing quiz client
    pub fn with_quiz_api(settings: Settings, quiz_api: Arc<dyn QuizApi>) -> Self {
        Self {
            settings: Arc::new(settings),
            quiz_api,
            start_time: Instant::now(),
        }
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

//! Client for the upstream quiz-generation service
//!
//! Issues `GET {base_url}/generate?topic=..&difficulty=..&q_type=..` and
//! returns the `quiz` field of the JSON body. Every call is exactly one
//! outbound request: no retries, no caching, no deduplication.

use crate::config::QuizApiConfig;
use crate::schemas::quiz::{QuizRequestParams, QuizResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when calling the quiz service
#[derive(Error, Debug)]
pub enum QuizClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Quiz service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse quiz response: {0}")]
    Parse(String),

    #[error("Invalid quiz service URL: {0}")]
    InvalidBaseUrl(String),
}

impl QuizClientError {
    /// Short description that is safe to show to a visitor
    pub fn user_message(&self) -> &'static str {
        match self {
            QuizClientError::Http(e) if e.is_timeout() => "The quiz service took too long to respond.",
            QuizClientError::Http(_) => "The quiz service could not be reached.",
            QuizClientError::Status { .. } => "The quiz service rejected the request.",
            QuizClientError::Parse(_) => "The quiz service sent an unreadable response.",
            QuizClientError::InvalidBaseUrl(_) => "The quiz service is misconfigured.",
        }
    }
}

// ============================================================================
// Trait
// ============================================================================

/// Anything that can turn request params into quiz text
///
/// Page handlers depend on this trait so they can run against a mocked
/// transport.
#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn fetch_quiz(&self, params: &QuizRequestParams) -> Result<QuizResponse, QuizClientError>;

    /// Address requests are sent to, for logging and health output
    fn endpoint(&self) -> &str;
}

// ============================================================================
// HTTP client
// ============================================================================

/// reqwest-backed quiz service client
#[derive(Clone)]
pub struct QuizClient {
    client: Client,
    endpoint: Url,
}

impl QuizClient {
    /// Create a client from configuration
    pub fn new(config: &QuizApiConfig) -> Result<Self, QuizClientError> {
        let endpoint = generate_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        tracing::info!(
            endpoint = %endpoint,
            timeout_seconds = config.timeout_seconds,
            "Initialized quiz service client"
        );

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl QuizApi for QuizClient {
    async fn fetch_quiz(&self, params: &QuizRequestParams) -> Result<QuizResponse, QuizClientError> {
        tracing::debug!(
            url = %self.endpoint,
            topic = %params.topic,
            difficulty = %params.difficulty,
            q_type = %params.question_type,
            "Requesting quiz"
        );

        let resp = self
            .client
            .get(self.endpoint.clone())
            .query(&params.query_pairs())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(QuizClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str::<QuizResponse>(&body).map_err(|e| {
            tracing::error!(error = %e, body = %body, "Failed to parse quiz response");
            QuizClientError::Parse(e.to_string())
        })
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

/// Append `/generate` to the configured base address
fn generate_url(base_url: &str) -> Result<Url, QuizClientError> {
    let joined = format!("{}/generate", base_url.trim().trim_end_matches('/'));
    Url::parse(&joined).map_err(|e| QuizClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))
}

// ============================================================================
// Tests
// ============================================================================

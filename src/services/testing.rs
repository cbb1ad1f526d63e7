//! In-memory quiz service for handler tests

use crate::schemas::quiz::{QuizRequestParams, QuizResponse};
use crate::services::quiz_client::{QuizApi, QuizClientError};
use async_trait::async_trait;
use std::sync::Mutex;

enum Reply {
    Quiz(String),
    Unavailable,
}

/// Records every request and answers with a fixed reply
pub struct MockQuizApi {
    reply: Reply,
    calls: Mutex<Vec<QuizRequestParams>>,
}

impl MockQuizApi {
    pub fn succeeding(quiz: &str) -> Self {
        Self {
            reply: Reply::Quiz(quiz.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the service answered 503
    pub fn failing() -> Self {
        Self {
            reply: Reply::Unavailable,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<QuizRequestParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizApi for MockQuizApi {
    async fn fetch_quiz(&self, params: &QuizRequestParams) -> Result<QuizResponse, QuizClientError> {
        self.calls.lock().unwrap().push(params.clone());
        match &self.reply {
            Reply::Quiz(quiz) => Ok(QuizResponse { quiz: quiz.clone() }),
            Reply::Unavailable => Err(QuizClientError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            }),
        }
    }

    fn endpoint(&self) -> &str {
        "mock://quiz/generate"
    }
}

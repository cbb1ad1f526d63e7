//! JSON quiz endpoint
//!
//! GET /api/quiz?topic=..&difficulty=..&q_type=..
//!
//! Same upstream call as the quiz page, for scripts and other clients that
//! want the text without HTML. Unlike the page, failures surface as error
//! responses.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ApiError;
use crate::schemas::{QuizQuery, QuizRequestParams, QuizResponse};
use crate::server::state::AppState;

pub async fn generate_quiz(
    State(state): State<AppState>,
    Query(query): Query<QuizQuery>,
) -> Result<Json<QuizResponse>, ApiError> {
    let topic = query
        .topic()
        .ok_or_else(|| ApiError::InvalidRequest("topic is required".to_string()))?;

    let params = QuizRequestParams::from_parts(
        topic,
        query.difficulty().map(str::to_string),
        query.question_type().map(str::to_string),
    );

    let response = state.quiz_api.fetch_quiz(&params).await.map_err(|e| {
        tracing::warn!(topic = %params.topic, error = %e, "Quiz request failed");
        e
    })?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::testing::MockQuizApi;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_topic_is_rejected_without_upstream_call() {
        let api = Arc::new(MockQuizApi::succeeding("unused"));
        let state = AppState::with_quiz_api(Settings::default(), api.clone());

        let result = generate_quiz(State(state), Query(QuizQuery::default())).await;
        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_client_defaults_apply() {
        let api = Arc::new(MockQuizApi::succeeding("Q1"));
        let state = AppState::with_quiz_api(Settings::default(), api.clone());
        let query = QuizQuery {
            topic: Some("Rust".into()),
            ..QuizQuery::default()
        };

        let Json(body) = generate_quiz(State(state), Query(query)).await.unwrap();
        assert_eq!(body.quiz, "Q1");
        assert_eq!(api.calls(), vec![QuizRequestParams::new("Rust")]);
    }
}

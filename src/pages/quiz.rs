//! Quiz page
//!
//! GET /quiz?topic=..&difficulty=..&q_type=..
//!
//! Each visit issues exactly one request to the quiz service and renders the
//! outcome. A failed request never fails the page: the quiz area stays empty
//! and a notice explains what went wrong.

use axum::extract::{rejection::QueryRejection, Query, State};
use yew::{function_component, html, Html, Properties};

use crate::config::QuizPageDefaults;
use crate::pages::layout::{self, PageContent};
use crate::schemas::{QuizQuery, QuizRequestParams};
use crate::server::state::AppState;
use crate::services::QuizApi;

/// Outcome of the page's single quiz request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizView {
    /// Quiz text exactly as the service returned it
    Loaded(String),
    /// Visitor-facing reason the quiz could not be loaded
    Failed(String),
}

impl QuizView {
    /// Issue the request and fold the result into a view state
    pub async fn load(api: &dyn QuizApi, params: &QuizRequestParams) -> Self {
        match api.fetch_quiz(params).await {
            Ok(response) => {
                tracing::info!(
                    topic = %params.topic,
                    quiz_len = response.quiz.len(),
                    "Quiz loaded"
                );
                QuizView::Loaded(response.quiz)
            }
            Err(e) => {
                tracing::warn!(
                    topic = %params.topic,
                    endpoint = %api.endpoint(),
                    error = %e,
                    "Quiz request failed"
                );
                QuizView::Failed(e.user_message().to_string())
            }
        }
    }

    /// Text shown in the quiz area; empty when the request failed
    pub fn quiz_text(&self) -> &str {
        match self {
            QuizView::Loaded(text) => text,
            QuizView::Failed(_) => "",
        }
    }
}

/// Resolve the page's request params, filling gaps from configuration
pub fn params_for(query: &QuizQuery, defaults: &QuizPageDefaults) -> QuizRequestParams {
    QuizRequestParams::new(query.topic().unwrap_or(defaults.topic.as_str()))
        .with_difficulty(query.difficulty().unwrap_or(defaults.difficulty.as_str()))
        .with_question_type(query.question_type().unwrap_or(defaults.question_type.as_str()))
}

/// Take the parsed query, or an empty one when the query string does not fit
///
/// A malformed query (for example a repeated `topic`) still renders the page
/// with the configured defaults.
pub fn query_or_default(query: Result<Query<QuizQuery>, QueryRejection>) -> QuizQuery {
    match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unparseable quiz query");
            QuizQuery::default()
        }
    }
}

pub async fn quiz_page(
    State(state): State<AppState>,
    query: Result<Query<QuizQuery>, QueryRejection>,
) -> axum::response::Html<String> {
    axum::response::Html(render(&state, &query_or_default(query)).await)
}

pub async fn render(state: &AppState, query: &QuizQuery) -> String {
    let params = params_for(query, &state.settings.quiz_defaults);
    let view = QuizView::load(state.quiz_api.as_ref(), &params).await;
    layout::render(&state.settings.app_name, PageContent::Quiz { params, view }).await
}

#[derive(Properties, PartialEq)]
pub struct QuizBodyProps {
    pub params: QuizRequestParams,
    pub view: QuizView,
}

#[function_component(QuizBody)]
pub fn quiz_body(props: &QuizBodyProps) -> Html {
    let params = &props.params;
    let meta = format!(
        "Topic: {} \u{b7} Difficulty: {} \u{b7} Type: {}",
        params.topic, params.difficulty, params.question_type
    );

    html! {
        <>
            <h2>{ "Quiz" }</h2>
            <p class="quiz-meta">{ meta }</p>
            <pre class="quiz">{ props.view.quiz_text() }</pre>
            if let QuizView::Failed(reason) = &props.view {
                <p class="error" role="alert">{ format!("Could not load a quiz. {}", reason) }</p>
            }
        </>
    }
}

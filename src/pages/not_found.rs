//! Fallback for every path the router does not know
//!
//! Paths that only differ from a routed page by a trailing slash are served
//! as that page; everything else gets a 404.

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use yew::{function_component, html, Html, Properties};

use crate::pages::layout::{self, PageContent};
use crate::pages::{home, login, profile, quiz, Page};
use crate::schemas::QuizQuery;
use crate::server::state::AppState;

pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let html = match Page::from_path(uri.path()) {
        Page::Home => home::render(&state).await,
        Page::Login => login::render(&state).await,
        Page::Profile => profile::render(&state).await,
        Page::Quiz => {
            let query = quiz::query_or_default(Query::<QuizQuery>::try_from_uri(&uri));
            quiz::render(&state, &query).await
        }
        Page::NotFound => {
            tracing::debug!(path = %uri.path(), "No page for path");
            let html = render(&state, uri.path()).await;
            return (StatusCode::NOT_FOUND, axum::response::Html(html)).into_response();
        }
    };
    axum::response::Html(html).into_response()
}

pub async fn render(state: &AppState, path: &str) -> String {
    let content = PageContent::NotFound {
        path: path.to_string(),
    };
    layout::render(&state.settings.app_name, content).await
}

#[derive(Properties, PartialEq)]
pub struct NotFoundBodyProps {
    pub path: String,
}

#[function_component(NotFoundBody)]
pub fn not_found_body(props: &NotFoundBodyProps) -> Html {
    html! {
        <>
            <h2>{ "Page not found" }</h2>
            <p>{ "Nothing lives at " }<code>{ props.path.clone() }</code>{ "." }</p>
            <p><a href={Page::Home.path()}>{ "Back to home" }</a></p>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_path_is_escaped() {
        let content = PageContent::NotFound {
            path: "/<img>".into(),
        };
        let html = layout::render("Smart Quiz", content).await;
        assert!(html.contains("<code>/&lt;img&gt;</code>"));
        assert!(html.contains("<h2>Page not found</h2>"));
    }
}

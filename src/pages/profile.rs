//! Profile page
//!
//! GET /profile

use axum::extract::State;
use yew::{function_component, html, Html};

use crate::pages::layout::{self, PageContent};
use crate::server::state::AppState;

pub async fn profile_page(State(state): State<AppState>) -> axum::response::Html<String> {
    axum::response::Html(render(&state).await)
}

pub async fn render(state: &AppState) -> String {
    layout::render(&state.settings.app_name, PageContent::Profile).await
}

#[function_component(ProfileBody)]
pub fn profile_body() -> Html {
    html! {
        <>
            <h2>{ "Profile" }</h2>
            <p>{ "Your quiz history and badges will appear here." }</p>
        </>
    }
}

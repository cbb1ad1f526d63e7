//! Login page
//!
//! GET /login. Sign-in is not wired to any backend; the page is a
//! placeholder that only renders the form.

use axum::extract::State;
use yew::{function_component, html, Html};

use crate::pages::layout::{self, PageContent};
use crate::server::state::AppState;

pub async fn login_page(State(state): State<AppState>) -> axum::response::Html<String> {
    axum::response::Html(render(&state).await)
}

pub async fn render(state: &AppState) -> String {
    layout::render(&state.settings.app_name, PageContent::Login).await
}

#[function_component(LoginBody)]
pub fn login_body() -> Html {
    html! {
        <>
            <h2>{ "Login" }</h2>
            <form>
                <label>
                    { "Email " }
                    <input type="email" name="email" disabled={true} />
                </label>
                <label>
                    { "Password " }
                    <input type="password" name="password" disabled={true} />
                </label>
                <button type="button" disabled={true}>{ "Sign in" }</button>
            </form>
            <p>{ "Sign-in is not available yet." }</p>
        </>
    }
}

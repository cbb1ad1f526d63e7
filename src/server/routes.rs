//! Application routing

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{health, quiz as quiz_api};
use crate::middleware::{log_request, REQUEST_ID_HEADER};
use crate::pages::{home, login, not_found, profile, quiz, Page};
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(Page::Home.path(), get(home::home_page))
        .route(Page::Quiz.path(), get(quiz::quiz_page))
        .route(Page::Login.path(), get(login::login_page))
        .route(Page::Profile.path(), get(profile::profile_page));

    let api_routes = Router::new().route("/quiz", get(quiz_api::generate_quiz));

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/liveness", get(health::liveness));

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(not_found::fallback)
        .layer(create_cors_layer())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Permissive CORS so the JSON endpoint can be called from other origins
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([axum::http::HeaderName::from_static(REQUEST_ID_HEADER)])
}

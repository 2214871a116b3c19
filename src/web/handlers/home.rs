//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Shorten form, optionally with an inline error and the values the user
/// submitted.
///
/// Renders `templates/index.html`.
#[derive(Template, WebTemplate, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub error: Option<String>,
    pub url: String,
    pub alias: String,
    pub expiration: String,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        title: state.site.title.clone(),
        expiration: "7".to_string(),
        ..Default::default()
    }
}

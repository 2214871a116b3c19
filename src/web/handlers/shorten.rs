//! Shorten form submission handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::home::IndexTemplate;
use crate::application::services::LinkService;
use crate::domain::entities::LinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Display format for the expiration date.
const EXPIRATION_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Raw form fields. Parsing and validation happen in the service.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShortenForm {
    pub url: String,
    pub alias: String,
    pub expiration: String,
}

/// Result page for a freshly created link.
///
/// Renders `templates/shorten.html`.
#[derive(Template, WebTemplate)]
#[template(path = "shorten.html")]
pub struct ShortenTemplate {
    pub title: String,
    pub short_url: String,
    pub metrics_url: String,
    pub expiration_date: String,
}

/// Creates a short link from the home page form.
///
/// # Endpoint
///
/// `POST /shorten` (`application/x-www-form-urlencoded`)
///
/// # Response
///
/// - **200 OK**: result page with short URL, metrics URL and expiration date
/// - **400 / 409 / 500**: the form again, with an inline error and the
///   submitted values filled back in
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Response {
    let request = LinkRequest::from_form(&form.url, &form.alias, &form.expiration);

    match state.link_service.shorten(request).await {
        Ok(link) => ShortenTemplate {
            title: state.site.title.clone(),
            short_url: LinkService::short_url(&state.site.base_url, &link.code),
            metrics_url: LinkService::metrics_url(&state.site.base_url, &link.code),
            expiration_date: link.expires_at.format(EXPIRATION_FORMAT).to_string(),
        }
        .into_response(),
        Err(e) => {
            let status = e.status_code();
            let template = IndexTemplate {
                title: state.site.title.clone(),
                error: Some(form_error_message(&e)),
                url: form.url,
                alias: form.alias,
                expiration: form.expiration,
            };
            (status, template).into_response()
        }
    }
}

fn form_error_message(error: &AppError) -> String {
    match error {
        AppError::StoreUnavailable { .. } => {
            "Something went wrong, please try again later.".to_string()
        }
        other => other.to_string(),
    }
}

mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use tinylink::state::AppState;
use tinylink::web::handlers::shorten_form_handler;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/shorten", post(shorten_form_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn form(url: &str, alias: &str, expiration: &str) -> ShortenFormBody {
    ShortenFormBody {
        url: url.to_string(),
        alias: alias.to_string(),
        expiration: expiration.to_string(),
    }
}

#[derive(serde::Serialize)]
struct ShortenFormBody {
    url: String,
    alias: String,
    expiration: String,
}

#[tokio::test]
async fn test_shorten_form_success() {
    let ctx = common::create_test_state();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .form(&form("https://example.com", "", "7"))
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("http://sho.rt/r/"));
    assert!(body.contains("http://sho.rt/metrics/"));
    // 2024-01-01 12:00 + 7 days
    assert!(body.contains("2024-01-08 12:00"));
}

#[tokio::test]
async fn test_shorten_form_with_alias() {
    let ctx = common::create_test_state();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .form(&form("https://example.com/promo", "promo", "30"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("http://sho.rt/r/promo"));

    let stored = ctx.repositories.links.get("promo").await.unwrap();
    assert_eq!(stored, "https://example.com/promo");
}

#[tokio::test]
async fn test_shorten_form_empty_url() {
    let ctx = common::create_test_state();
    let server = server(ctx.state.clone());

    let response = server.post("/shorten").form(&form("", "keep", "7")).await;

    assert_eq!(response.status_code(), 400);
    let body = response.text();
    assert!(body.contains("The URL field cannot be empty."));
    // Submitted values are filled back in
    assert!(body.contains("value=\"keep\""));
    assert!(!ctx.repositories.links.exists("keep").await.unwrap());
}

#[tokio::test]
async fn test_shorten_form_invalid_expiration() {
    let ctx = common::create_test_state();
    let server = server(ctx.state.clone());

    for expiration in ["0", "abc", "-3", ""] {
        let response = server
            .post("/shorten")
            .form(&form("https://example.com", "exp", expiration))
            .await;

        assert_eq!(response.status_code(), 400, "expiration {expiration:?}");
        assert!(response.text().contains("Invalid expiration value."));
    }

    assert!(!ctx.repositories.links.exists("exp").await.unwrap());
}

#[tokio::test]
async fn test_shorten_form_alias_taken() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.repositories, "abc", "https://original.example", 7).await;
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .form(&form("https://other.example", "abc", "7"))
        .await;

    assert_eq!(response.status_code(), 409);
    assert!(response.text().contains("Alias already taken."));

    let stored = ctx.repositories.links.get("abc").await.unwrap();
    assert_eq!(stored, "https://original.example");
}

#[tokio::test]
async fn test_shorten_form_rejects_non_http_url() {
    let ctx = common::create_test_state();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .form(&form("javascript:alert(1)", "", "7"))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_shorten_form_missing_fields_default_to_empty() {
    let ctx = common::create_test_state();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .form(&[("url", "https://example.com")])
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(response.text().contains("Invalid expiration value."));
}

mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tinylink::api::handlers::redirect_handler;
use tinylink::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/r/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let mut ctx = common::create_test_state();
    common::create_test_link(&ctx.repositories, "redirect1", "https://example.com/target", 7).await;
    let server = server(ctx.state.clone());

    let response = server.get("/r/redirect1").await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");

    let event = ctx.rx.try_recv().unwrap();
    assert_eq!(event.code, "redirect1");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let mut ctx = common::create_test_state();
    let server = server(ctx.state.clone());

    let response = server.get("/r/nonexistent").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.text(), "Shortened URL not found");
    assert!(ctx.rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_expired_link() {
    let mut ctx = common::create_test_state();
    common::create_test_link(&ctx.repositories, "shortlived", "https://example.com", 1).await;
    let server = server(ctx.state.clone());

    ctx.clock.advance(chrono::Duration::hours(23));
    server.get("/r/shortlived").await.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);

    ctx.clock.advance(chrono::Duration::hours(1));
    let response = server.get("/r/shortlived").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(common::drain_visits(&mut ctx).await, 1);
}

#[tokio::test]
async fn test_redirect_survives_full_visit_queue() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.repositories, "busy", "https://example.com/busy", 7).await;
    let server = server(ctx.state.clone());

    // Queue capacity is 100 and nothing drains it
    for _ in 0..150 {
        let response = server.get("/r/busy").await;
        assert_eq!(response.status_code(), 307);
    }
}

#[tokio::test]
async fn test_redirect_with_closed_visit_queue() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.repositories, "closed", "https://example.com", 7).await;
    let state = ctx.state.clone();
    drop(ctx.rx);

    let response = server(state).get("/r/closed").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}

mod common;

use std::sync::Arc;
use tinylink::AppError;
use tinylink::domain::entities::LinkRequest;
use tinylink::server::Repositories;

fn request(url: &str, alias: &str) -> LinkRequest {
    LinkRequest {
        long_url: url.to_string(),
        alias: Some(alias.to_string()),
        expiration_days: Some(7),
    }
}

#[tokio::test]
async fn test_losing_alias_race_keeps_winner_counter() {
    let clock = common::start_clock();
    let backing = Repositories::memory(clock.clone());
    common::create_test_link(&backing, "abc", "https://winner.example", 7).await;
    for _ in 0..5 {
        backing.metrics.increment("abc").await.unwrap();
    }

    let racing = Repositories {
        links: Arc::new(common::StaleExistsLinks {
            inner: backing.links.clone(),
        }),
        metrics: backing.metrics.clone(),
    };
    let ctx = common::create_state_with(racing, clock);

    let err = ctx
        .state
        .link_service
        .shorten(request("https://loser.example", "abc"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::AliasTaken { ref alias } if alias == "abc"));
    assert_eq!(
        backing.links.get("abc").await.unwrap(),
        "https://winner.example"
    );
    assert_eq!(backing.metrics.get_count("abc").await.unwrap(), 5);
}

#[tokio::test]
async fn test_reissued_alias_starts_from_zero() {
    let ctx = common::create_test_state();
    ctx.repositories.metrics.increment("again").await.unwrap();

    ctx.state
        .link_service
        .shorten(request("https://example.com", "again"))
        .await
        .unwrap();

    assert_eq!(ctx.repositories.metrics.get_count("again").await.unwrap(), 0);
}

//! Startup configuration tests.

mod common;

use common::test_config;
use ethan_bot::{launch, AppError, Config};
use std::collections::HashMap;
use std::time::Duration;

#[test]
fn test_missing_token_is_a_configuration_error() {
    let err = Config::from_vars(HashMap::new()).unwrap_err();
    assert!(format!("{:#}", err).contains("TELEGRAM_BOT_TOKEN"));
}

#[tokio::test]
async fn test_missing_token_stops_before_event_loop() {
    let result = tokio::time::timeout(
        Duration::from_secs(1),
        launch(Config::from_vars(HashMap::new())),
    )
    .await
    .expect("launch should return without connecting");

    match result {
        Err(AppError::Config(e)) => assert!(e.to_string().contains("TELEGRAM_BOT_TOKEN")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_optional_services_default_off() {
    let config = test_config(&[]);
    assert!(config.openai.api_key().is_none());
    assert!(config.giphy.api_key().is_none());
    assert!(config.giphy.static_url_list().is_empty());
    assert!(config.bot.gif_enabled_default);
}

#[test]
fn test_keyword_and_url_lists() {
    let config = test_config(&[
        ("GIPHY_KEYWORDS", "bitcoin, to the moon ,,hodl"),
        ("GIF_URLS", "https://a.example/1.gif,https://b.example/2.gif"),
    ]);
    assert_eq!(
        config.giphy.keyword_list(),
        vec!["bitcoin", "to the moon", "hodl"]
    );
    assert_eq!(config.giphy.static_url_list().len(), 2);
}

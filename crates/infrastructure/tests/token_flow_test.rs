//! Integration tests for token acquisition and request authorization.
//!
//! These tests wire configuration loading, the fixed-token provider, the
//! request authorizer and the reqwest adapter together, without network I/O.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, Request, Url};
use tempfile::tempdir;

use passage_application::{AcquireToken, AcquireTokenInput, RequestAuthorizer};
use passage_domain::{
    AccessToken, AccessTokenRequestOptions, AcquisitionStatus, AuthorizationOptions,
    RedirectPolicy,
};
use passage_infrastructure::{
    AuthorizedHttpClient, ChannelNavigator, FixedTokenProvider, SystemClock, load_options_with,
};

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn options_from_file() -> AuthorizationOptions {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("auth.json");
    tokio::fs::write(
        &path,
        r#"{
  "authorized_urls": ["https://api.example/v1/"],
  "scopes": ["api.read"],
  "return_url": "https://app.example/orders",
  "login_path": "https://app.example/authentication/login"
}
"#,
    )
    .await
    .expect("Failed to write config");

    load_options_with(&path, |_| None)
        .await
        .expect("Failed to load options")
}

fn client_for(
    token: Option<AccessToken>,
    options: &AuthorizationOptions,
) -> AuthorizedHttpClient<FixedTokenProvider<SystemClock>, SystemClock> {
    let provider = FixedTokenProvider::from_options(token, options, SystemClock::new());
    let authorizer = RequestAuthorizer::new(provider, SystemClock::new(), options)
        .expect("Failed to create authorizer");
    AuthorizedHttpClient::with_client(Client::new(), Arc::new(authorizer))
}

#[tokio::test]
async fn test_configured_client_attaches_token() {
    init_test_tracing();
    let options = options_from_file().await;
    let token = AccessToken::new("abc123", None, vec!["api.read".to_string()]).unwrap();
    let client = client_for(Some(token), &options);

    let mut request = Request::new(
        Method::GET,
        Url::parse("https://api.example/v1/orders").unwrap(),
    );
    let attached = client.prepare(&mut request).await.unwrap();

    assert!(attached);
    assert_eq!(
        request.headers().get(AUTHORIZATION).unwrap(),
        "Bearer abc123"
    );
}

#[tokio::test]
async fn test_missing_token_redirects_through_channel() {
    init_test_tracing();
    let options = options_from_file().await;
    let client = client_for(None, &options);
    let (navigator, mut navigations) = ChannelNavigator::new();

    let mut request = Request::new(
        Method::GET,
        Url::parse("https://api.example/v1/orders").unwrap(),
    );
    let error = client.prepare(&mut request).await.unwrap_err();
    let not_available = error
        .token_not_available()
        .expect("Expected an unavailable token");

    assert_eq!(not_available.status(), AcquisitionStatus::RequiresLogin);
    assert!(not_available.redirect(&navigator));
    assert_eq!(
        navigations.recv().await.as_deref(),
        Some(
            "https://app.example/authentication/login?returnUrl=https%3A%2F%2Fapp.example%2Forders"
        )
    );
    assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn test_acquire_token_use_case_with_channel_navigator() {
    init_test_tracing();
    let provider = FixedTokenProvider::new(None, "authentication/login", SystemClock::new());
    let use_case = AcquireToken::new(provider);
    let (navigator, mut navigations) = ChannelNavigator::new();

    let declined = use_case
        .execute(
            AcquireTokenInput {
                options: AccessTokenRequestOptions::new(),
                redirect: RedirectPolicy::Never,
            },
            &navigator,
        )
        .await;
    assert!(!declined.redirected);
    assert!(navigations.try_recv().is_err());

    let output = use_case
        .execute(
            AcquireTokenInput {
                options: AccessTokenRequestOptions::new(),
                redirect: RedirectPolicy::Automatic,
            },
            &navigator,
        )
        .await;

    assert_eq!(output.status, AcquisitionStatus::RequiresLogin);
    assert!(output.token.is_none());
    assert!(output.redirected);
    assert_eq!(
        navigations.try_recv().ok().as_deref(),
        Some("authentication/login")
    );
}

#[tokio::test]
async fn test_yaml_config_is_validated() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("auth.yaml");
    tokio::fs::write(&path, "authorized_urls: []\n")
        .await
        .expect("Failed to write config");

    let result = load_options_with(&path, |_| None).await;

    assert!(result.is_err());
}

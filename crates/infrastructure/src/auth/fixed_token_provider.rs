//! Provider for hosts that already hold a plain access token.
//!
//! Nothing is exchanged with the identity provider. The held token is handed
//! out while it is valid and grants the requested scopes; without a usable
//! token the browser is sent to the login page.

use async_trait::async_trait;
use passage_application::ports::{AccessTokenProvider, Clock};
use passage_domain::auth::login_redirect_url;
use passage_domain::{
    AccessToken, AccessTokenRequestOptions, AcquisitionOutcome, AuthorizationOptions,
};

/// Hands out a single pre-acquired token.
pub struct FixedTokenProvider<C> {
    token: Option<AccessToken>,
    login_path: String,
    clock: C,
}

impl<C: Clock> FixedTokenProvider<C> {
    /// Create a provider holding `token`, sending users to `login_path` when
    /// it is missing or expired.
    #[must_use]
    pub fn new(token: Option<AccessToken>, login_path: impl Into<String>, clock: C) -> Self {
        Self {
            token,
            login_path: login_path.into(),
            clock,
        }
    }

    /// Create a provider using the login path from `options`.
    #[must_use]
    pub fn from_options(token: Option<AccessToken>, options: &AuthorizationOptions, clock: C) -> Self {
        Self::new(token, options.login_path.clone(), clock)
    }

    fn login(&self, options: &AccessTokenRequestOptions) -> AcquisitionOutcome {
        AcquisitionOutcome::requires_login(login_redirect_url(
            &self.login_path,
            options.return_url.as_deref(),
        ))
    }
}

#[async_trait]
impl<C: Clock> AccessTokenProvider for FixedTokenProvider<C> {
    async fn request_access_token(
        &self,
        options: &AccessTokenRequestOptions,
    ) -> AcquisitionOutcome {
        if let Err(e) = options.validate() {
            return AcquisitionOutcome::failed_with(e.to_string());
        }
        let Some(token) = &self.token else {
            tracing::debug!("no access token held, login required");
            return self.login(options);
        };
        if token.is_expired_or_expiring(self.clock.now(), 0) {
            tracing::debug!(token = %token.preview(), "held access token expired, login required");
            return self.login(options);
        }
        // Granted scopes are only checked when the token reports any.
        if !token.granted_scopes().is_empty()
            && let Some(missing) = options.scopes.iter().find(|s| !token.has_scope(s))
        {
            return AcquisitionOutcome::failed_with(format!(
                "access token does not grant scope {missing}"
            ));
        }
        AcquisitionOutcome::success(token.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::SystemClock;
    use chrono::{Duration, Utc};
    use passage_domain::AcquisitionStatus;
    use pretty_assertions::assert_eq;

    fn provider(token: Option<AccessToken>) -> FixedTokenProvider<SystemClock> {
        FixedTokenProvider::new(token, "authentication/login", SystemClock::new())
    }

    fn scoped_token(expires_in: i64) -> AccessToken {
        AccessToken::new(
            "abc123",
            Some(Utc::now() + Duration::seconds(expires_in)),
            vec!["api.read".to_string()],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_succeeds() {
        let outcome = provider(Some(scoped_token(3600)))
            .request_access_token(&AccessTokenRequestOptions::new().with_scope("api.read"))
            .await;

        assert_eq!(outcome.try_get_token().map(AccessToken::value), Some("abc123"));
    }

    #[tokio::test]
    async fn test_missing_token_requires_login_with_return_url() {
        let options = AccessTokenRequestOptions::new().with_return_url("https://app.example/a?b=c");

        let outcome = provider(None).request_access_token(&options).await;

        assert_eq!(outcome.status(), AcquisitionStatus::RequiresLogin);
        assert_eq!(
            outcome.redirect_url(),
            Some("authentication/login?returnUrl=https%3A%2F%2Fapp.example%2Fa%3Fb%3Dc")
        );
    }

    #[tokio::test]
    async fn test_expired_token_requires_login() {
        let outcome = provider(Some(scoped_token(-10)))
            .request_default_access_token()
            .await;

        assert_eq!(outcome.status(), AcquisitionStatus::RequiresLogin);
    }

    #[tokio::test]
    async fn test_missing_scope_fails() {
        let outcome = provider(Some(scoped_token(3600)))
            .request_access_token(&AccessTokenRequestOptions::new().with_scope("api.write"))
            .await;

        assert_eq!(outcome.status(), AcquisitionStatus::Failed);
        assert_eq!(
            outcome.failure_reason(),
            Some("access token does not grant scope api.write")
        );
    }

    #[tokio::test]
    async fn test_unscoped_token_satisfies_any_scope() {
        let outcome = provider(Some(AccessToken::bearer("plain").unwrap()))
            .request_access_token(&AccessTokenRequestOptions::new().with_scope("api.write"))
            .await;

        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_invalid_request_fails() {
        let outcome = provider(Some(scoped_token(3600)))
            .request_access_token(&AccessTokenRequestOptions::new().with_scope("two words"))
            .await;

        assert_eq!(outcome.status(), AcquisitionStatus::Failed);
    }
}

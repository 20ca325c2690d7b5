//! Attaches access tokens to outgoing API requests.
//!
//! Only requests under one of the configured base URLs receive a token. The
//! last acquired token is reused until it comes within the reuse window of
//! its expiry; after that a new acquisition attempt is made.

use tokio::sync::RwLock;
use url::Url;

use passage_domain::{AccessToken, AccessTokenRequestOptions, AuthorizationOptions};

use crate::error::{ApplicationResult, AuthorizationError};
use crate::ports::{AccessTokenProvider, Clock};

/// Decides whether a request needs a token and supplies it.
pub struct RequestAuthorizer<P, C> {
    provider: P,
    clock: C,
    authorized_urls: Vec<Url>,
    request_options: AccessTokenRequestOptions,
    reuse_window_seconds: i64,
    last_token: RwLock<Option<AccessToken>>,
}

impl<P, C> RequestAuthorizer<P, C>
where
    P: AccessTokenProvider,
    C: Clock,
{
    /// Create an authorizer from validated options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApplicationError::Domain`] if `options` fail validation.
    pub fn new(provider: P, clock: C, options: &AuthorizationOptions) -> ApplicationResult<Self> {
        let authorized_urls = options.validate()?;
        Ok(Self {
            provider,
            clock,
            authorized_urls,
            request_options: options.request_options(),
            reuse_window_seconds: options.reuse_window_seconds,
            last_token: RwLock::new(None),
        })
    }

    /// Returns true if requests to `url` should carry a token.
    #[must_use]
    pub fn is_authorized_url(&self, url: &Url) -> bool {
        self.authorized_urls.iter().any(|base| is_base_of(base, url))
    }

    /// Returns the `Authorization` header value for a request to `request_url`,
    /// or `None` if the URL is not authorized.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::TokenNotAvailable`] when the provider
    /// could not produce a token. The error carries the redirect target, if any.
    pub async fn authorize(
        &self,
        request_url: &Url,
    ) -> Result<Option<String>, AuthorizationError> {
        if !self.is_authorized_url(request_url) {
            tracing::trace!(url = %request_url, "request is not authorized for a token");
            return Ok(None);
        }
        let token = self.current_token().await?;
        Ok(Some(token.authorization_header()))
    }

    /// Returns the cached token if it is still fresh, otherwise acquires a new one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::TokenNotAvailable`] when acquisition fails.
    pub async fn current_token(&self) -> Result<AccessToken, AuthorizationError> {
        let now = self.clock.now();
        {
            let cached = self.last_token.read().await;
            if let Some(token) = cached
                .as_ref()
                .filter(|t| !t.is_expired_or_expiring(now, self.reuse_window_seconds))
            {
                tracing::debug!(token = %token.preview(), "reusing cached access token");
                return Ok(token.clone());
            }
        }

        let outcome = self
            .provider
            .request_access_token(&self.request_options)
            .await;
        tracing::debug!(status = %outcome.status(), "access token requested");

        // A failed attempt leaves the cache alone; a concurrent caller may
        // have stored a fresh token meanwhile.
        let token = outcome.into_token()?;
        *self.last_token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Drops the cached token.
    pub async fn clear(&self) {
        *self.last_token.write().await = None;
    }
}

/// Same origin, and the request path equals or lies below the base path.
fn is_base_of(base: &Url, url: &Url) -> bool {
    if base.origin() != url.origin() {
        return false;
    }
    let base_path = base.path();
    let path = url.path();
    if base_path.ends_with('/') {
        path.starts_with(base_path)
    } else {
        path == base_path
            || path
                .strip_prefix(base_path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

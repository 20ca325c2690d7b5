//! Settings for attaching access tokens to outgoing API requests

use serde::{Deserialize, Serialize};
use url::Url;

use super::request::AccessTokenRequestOptions;
use crate::error::{DomainError, DomainResult};

/// Default path of the interactive login page.
pub const DEFAULT_LOGIN_PATH: &str = "authentication/login";

/// Default number of seconds before expiry at which a cached token is no
/// longer attached to requests.
pub const DEFAULT_REUSE_WINDOW_SECONDS: i64 = 300;

/// Largest accepted reuse window: one day.
pub const MAX_REUSE_WINDOW_SECONDS: i64 = 86_400;

/// Which requests receive a token and how that token is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationOptions {
    /// Base URLs whose requests receive a bearer token.
    #[serde(default)]
    pub authorized_urls: Vec<String>,
    /// Scopes to request.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Where the browser returns after an interactive redirect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Path of the interactive login page.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Seconds before expiry at which a cached token stops being reused.
    #[serde(default = "default_reuse_window")]
    pub reuse_window_seconds: i64,
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

const fn default_reuse_window() -> i64 {
    DEFAULT_REUSE_WINDOW_SECONDS
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self {
            authorized_urls: Vec::new(),
            scopes: Vec::new(),
            return_url: None,
            login_path: default_login_path(),
            reuse_window_seconds: DEFAULT_REUSE_WINDOW_SECONDS,
        }
    }
}

impl AuthorizationOptions {
    /// Options authorizing requests under `base_url`.
    #[must_use]
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            authorized_urls: vec![base_url.into()],
            ..Self::default()
        }
    }

    /// Adds a scope to request.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Sets the return URL.
    #[must_use]
    pub fn with_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    /// Checks the options and parses the authorized URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if no authorized URL is configured, a URL cannot be
    /// parsed, a scope is malformed or the reuse window is out of range.
    pub fn validate(&self) -> DomainResult<Vec<Url>> {
        if self.authorized_urls.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "at least one authorized URL is required".to_string(),
            ));
        }
        if !(0..=MAX_REUSE_WINDOW_SECONDS).contains(&self.reuse_window_seconds) {
            return Err(DomainError::InvalidConfiguration(format!(
                "reuse window must be between 0 and {MAX_REUSE_WINDOW_SECONDS} seconds, got {}",
                self.reuse_window_seconds
            )));
        }
        self.request_options().validate()?;
        self.authorized_urls
            .iter()
            .map(|raw| Url::parse(raw).map_err(|e| DomainError::InvalidUrl(format!("{raw}: {e}"))))
            .collect()
    }

    /// The token request these options describe.
    #[must_use]
    pub fn request_options(&self) -> AccessTokenRequestOptions {
        let options = AccessTokenRequestOptions::new().with_scopes(self.scopes.iter().cloned());
        match &self.return_url {
            Some(return_url) => options.with_return_url(return_url.clone()),
            None => options,
        }
    }
}

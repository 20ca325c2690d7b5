//! Options for a single token acquisition attempt

use serde::{Deserialize, Serialize};

use super::token::validate_scope;
use crate::error::DomainResult;

/// What the caller asks the token provider for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenRequestOptions {
    /// Scopes the token must grant. Empty means the provider's defaults.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Where the identity provider should send the browser back after an
    /// interactive redirect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

impl AccessTokenRequestOptions {
    /// Request the provider's default scopes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Adds several required scopes.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Sets the return URL.
    #[must_use]
    pub fn with_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    /// Returns true when neither scopes nor a return URL were requested.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.scopes.is_empty() && self.return_url.is_none()
    }

    /// Checks every requested scope.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DomainError::InvalidScope`] for the first malformed scope.
    pub fn validate(&self) -> DomainResult<()> {
        self.scopes.iter().try_for_each(|s| validate_scope(s))
    }
}

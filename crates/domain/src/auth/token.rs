//! Access token value object

use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// A bearer credential granted by the identity provider.
///
/// The raw value is only reachable through [`AccessToken::value`] and
/// [`AccessToken::authorization_header`]. `Debug` prints a preview.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: Option<DateTime<Utc>>,
    granted_scopes: Vec<String>,
}

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyToken`] if `value` is empty, or
    /// [`DomainError::InvalidScope`] if a granted scope is malformed.
    pub fn new(
        value: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
        granted_scopes: Vec<String>,
    ) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::EmptyToken);
        }
        for scope in &granted_scopes {
            validate_scope(scope)?;
        }
        Ok(Self {
            value,
            expires_at,
            granted_scopes,
        })
    }

    /// Creates a token with no expiry and no granted scopes.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyToken`] if `value` is empty.
    pub fn bearer(value: impl Into<String>) -> DomainResult<Self> {
        Self::new(value, None, Vec::new())
    }

    /// The raw credential.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// When the token expires, if the provider reported it.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Scopes granted with this token.
    #[must_use]
    pub fn granted_scopes(&self) -> &[String] {
        &self.granted_scopes
    }

    /// Returns true if `scope` was granted.
    #[must_use]
    pub fn has_scope(&self, scope: &str) -> bool {
        self.granted_scopes.iter().any(|s| s == scope)
    }

    /// Check if the token is expired or will expire within `buffer_seconds` of `now`.
    ///
    /// A buffer too large to represent counts as expiring.
    #[must_use]
    pub fn is_expired_or_expiring(&self, now: DateTime<Utc>, buffer_seconds: i64) -> bool {
        self.expires_at.is_some_and(|exp| {
            TimeDelta::try_seconds(buffer_seconds)
                .and_then(|buffer| now.checked_add_signed(buffer))
                .is_none_or(|deadline| deadline >= exp)
        })
    }

    /// Time until expiry in seconds, or None if no expiry.
    #[must_use]
    pub fn seconds_until_expiry(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at.map(|exp| (exp - now).num_seconds())
    }

    /// Returns the Authorization header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.value)
    }

    /// First few characters of the credential, safe for logs.
    #[must_use]
    pub fn preview(&self) -> String {
        let head: String = self.value.chars().take(4).collect();
        format!("{head}...")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &self.preview())
            .field("expires_at", &self.expires_at)
            .field("granted_scopes", &self.granted_scopes)
            .finish()
    }
}

/// Rejects empty scopes and scopes containing whitespace.
pub(crate) fn validate_scope(scope: &str) -> DomainResult<()> {
    if scope.is_empty() || scope.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidScope(scope.to_string()));
    }
    Ok(())
}

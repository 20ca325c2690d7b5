//! Access token provider port
//!
//! The provider talks to the identity provider (or a cache in front of it)
//! and reports how one acquisition attempt resolved. How it does that is not
//! this crate's concern.

use std::sync::Arc;

use async_trait::async_trait;

use passage_domain::{AccessTokenRequestOptions, AcquisitionOutcome};

/// Produces one [`AcquisitionOutcome`] per acquisition attempt.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Attempts to acquire a token satisfying `options`.
    ///
    /// Every attempt yields a fresh outcome; retries produce new outcomes.
    async fn request_access_token(&self, options: &AccessTokenRequestOptions)
    -> AcquisitionOutcome;

    /// Attempts to acquire a token with the provider's default scopes.
    async fn request_default_access_token(&self) -> AcquisitionOutcome {
        self.request_access_token(&AccessTokenRequestOptions::default())
            .await
    }
}

#[async_trait]
impl<T> AccessTokenProvider for Arc<T>
where
    T: AccessTokenProvider + ?Sized,
{
    async fn request_access_token(
        &self,
        options: &AccessTokenRequestOptions,
    ) -> AcquisitionOutcome {
        (**self).request_access_token(options).await
    }
}

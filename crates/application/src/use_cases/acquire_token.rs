//! Acquire token use case.

use passage_domain::{
    AccessToken, AccessTokenRequestOptions, AcquisitionStatus, Navigator, RedirectPolicy,
};

use crate::ports::AccessTokenProvider;

/// Input for acquiring a token.
#[derive(Debug, Clone, Default)]
pub struct AcquireTokenInput {
    /// What to ask the provider for.
    pub options: AccessTokenRequestOptions,
    /// Whether a redirect-capable failure may navigate the browser.
    pub redirect: RedirectPolicy,
}

/// Output from acquiring a token.
#[derive(Debug, Clone)]
pub struct AcquireTokenOutput {
    /// How the attempt resolved.
    pub status: AcquisitionStatus,
    /// The token, present only on success.
    pub token: Option<AccessToken>,
    /// Whether the browser was sent to the identity provider.
    pub redirected: bool,
}

/// Use case for one acquisition attempt followed by extraction.
pub struct AcquireToken<P: AccessTokenProvider> {
    provider: P,
}

impl<P: AccessTokenProvider> AcquireToken<P> {
    /// Creates a new `AcquireToken` use case.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Requests a token and extracts it, navigating with `navigator` only when
    /// `input.redirect` allows it.
    ///
    /// Once `redirected` is true the browsing context is being replaced and
    /// the caller should stop.
    pub async fn execute<N>(&self, input: AcquireTokenInput, navigator: &N) -> AcquireTokenOutput
    where
        N: Navigator + Sync + ?Sized,
    {
        let outcome = self.provider.request_access_token(&input.options).await;
        let token = outcome.try_get_token().cloned();
        let redirected = token.is_none()
            && input.redirect == RedirectPolicy::Automatic
            && outcome.redirect(navigator);

        if token.is_none() && !redirected {
            tracing::debug!(status = %outcome.status(), "access token not acquired");
        }

        AcquireTokenOutput {
            status: outcome.status(),
            token,
            redirected,
        }
    }
}

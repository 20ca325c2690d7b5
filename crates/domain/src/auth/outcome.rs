//! Result of a single access-token acquisition attempt.
//!
//! An [`AcquisitionOutcome`] is produced once by a token provider and then
//! inspected by the caller. It never changes after construction and holds no
//! reference to the navigation capability: redirects happen only when the
//! caller passes a [`Navigator`] to [`AcquisitionOutcome::try_get_token_with`]
//! and asks for them.

use std::fmt;

use thiserror::Error;

use super::navigation::Navigator;
use super::token::AccessToken;

/// How an acquisition attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcquisitionStatus {
    /// A token was acquired.
    Success,
    /// The browser must visit the identity provider to obtain a token.
    RequiresRedirect,
    /// The user must sign in interactively first.
    RequiresLogin,
    /// The token could not be produced and no redirect can fix it.
    Failed,
}

impl AcquisitionStatus {
    /// Returns true if the remediation for this status is a browser navigation.
    #[must_use]
    pub const fn is_redirect_capable(self) -> bool {
        matches!(self, Self::RequiresRedirect | Self::RequiresLogin)
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::RequiresRedirect => "requires_redirect",
            Self::RequiresLogin => "requires_login",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for AcquisitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a failed extraction may navigate the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectPolicy {
    /// Never navigate.
    #[default]
    Never,
    /// Navigate to the redirect target when the outcome has one.
    Automatic,
}

impl From<bool> for RedirectPolicy {
    fn from(redirect: bool) -> Self {
        if redirect { Self::Automatic } else { Self::Never }
    }
}

/// Immutable result of one acquisition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    /// A usable token.
    Success(AccessToken),
    /// A browser redirect to the identity provider is required.
    RequiresRedirect {
        /// Where to send the browser. `None` if the provider gave no target.
        redirect_url: Option<String>,
    },
    /// An interactive login is required.
    RequiresLogin {
        /// The login page to send the browser to.
        redirect_url: Option<String>,
    },
    /// Acquisition failed for a reason a redirect cannot fix.
    Failed {
        /// Human-readable explanation, if the provider supplied one.
        reason: Option<String>,
    },
}

impl AcquisitionOutcome {
    /// Outcome carrying an acquired token.
    #[must_use]
    pub const fn success(token: AccessToken) -> Self {
        Self::Success(token)
    }

    /// Outcome requiring a redirect to `redirect_url`.
    #[must_use]
    pub fn requires_redirect(redirect_url: impl Into<String>) -> Self {
        Self::RequiresRedirect {
            redirect_url: non_blank(redirect_url.into()),
        }
    }

    /// Outcome requiring an interactive login at `redirect_url`.
    #[must_use]
    pub fn requires_login(redirect_url: impl Into<String>) -> Self {
        Self::RequiresLogin {
            redirect_url: non_blank(redirect_url.into()),
        }
    }

    /// Failed outcome without a reason.
    #[must_use]
    pub const fn failed() -> Self {
        Self::Failed { reason: None }
    }

    /// Failed outcome with a reason.
    #[must_use]
    pub fn failed_with(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: Some(reason.into()),
        }
    }

    /// The status tag of this outcome.
    #[must_use]
    pub const fn status(&self) -> AcquisitionStatus {
        match self {
            Self::Success(_) => AcquisitionStatus::Success,
            Self::RequiresRedirect { .. } => AcquisitionStatus::RequiresRedirect,
            Self::RequiresLogin { .. } => AcquisitionStatus::RequiresLogin,
            Self::Failed { .. } => AcquisitionStatus::Failed,
        }
    }

    /// Returns true if a token was acquired.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if the remediation is a browser navigation.
    #[must_use]
    pub const fn is_redirect_capable(&self) -> bool {
        self.status().is_redirect_capable()
    }

    /// The redirect target, only for redirect-capable outcomes that carry one.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Self::RequiresRedirect { redirect_url } | Self::RequiresLogin { redirect_url } => {
                redirect_url.as_deref().filter(|u| !u.trim().is_empty())
            }
            Self::Success(_) | Self::Failed { .. } => None,
        }
    }

    /// The provider's explanation for a failed outcome.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => reason.as_deref(),
            _ => None,
        }
    }

    /// Returns the token if the attempt succeeded.
    ///
    /// Has no side effects and may be called any number of times.
    #[must_use]
    pub const fn try_get_token(&self) -> Option<&AccessToken> {
        match self {
            Self::Success(token) => Some(token),
            _ => None,
        }
    }

    /// Returns the token if the attempt succeeded; otherwise, when `redirect`
    /// is [`RedirectPolicy::Automatic`] and the outcome is redirect-capable,
    /// sends the browser to the redirect target before returning `None`.
    ///
    /// Navigation happens at most once per call. A [`AcquisitionStatus::Failed`]
    /// outcome never navigates; the caller has to handle it.
    pub fn try_get_token_with<N>(
        &self,
        navigator: &N,
        redirect: impl Into<RedirectPolicy>,
    ) -> Option<&AccessToken>
    where
        N: Navigator + ?Sized,
    {
        if let Some(token) = self.try_get_token() {
            return Some(token);
        }
        if redirect.into() == RedirectPolicy::Automatic {
            self.redirect(navigator);
        }
        None
    }

    /// Sends the browser to the redirect target if the outcome is
    /// redirect-capable.
    ///
    /// Returns whether navigation was triggered. `Success` and `Failed`
    /// outcomes never navigate.
    pub fn redirect<N>(&self, navigator: &N) -> bool
    where
        N: Navigator + ?Sized,
    {
        navigate(self.status(), self.redirect_url(), navigator)
    }

    /// Converts the outcome into the token, or an error describing why it is
    /// not available.
    ///
    /// # Errors
    ///
    /// Returns [`AccessTokenNotAvailable`] for every non-success outcome.
    pub fn into_token(self) -> Result<AccessToken, AccessTokenNotAvailable> {
        let status = self.status();
        let redirect_url = self.redirect_url().map(String::from);
        match self {
            Self::Success(token) => Ok(token),
            Self::Failed { reason } => Err(AccessTokenNotAvailable {
                status,
                redirect_url: None,
                reason,
            }),
            Self::RequiresRedirect { .. } | Self::RequiresLogin { .. } => {
                Err(AccessTokenNotAvailable {
                    status,
                    redirect_url,
                    reason: None,
                })
            }
        }
    }
}

/// Error form of a non-success [`AcquisitionOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "access token not available ({status}){}",
    .reason.as_deref().map(|r| format!(": {r}")).unwrap_or_default()
)]
pub struct AccessTokenNotAvailable {
    status: AcquisitionStatus,
    redirect_url: Option<String>,
    reason: Option<String>,
}

impl AccessTokenNotAvailable {
    /// Status of the outcome this error came from.
    #[must_use]
    pub const fn status(&self) -> AcquisitionStatus {
        self.status
    }

    /// Redirect target, if the outcome had one.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    /// Provider explanation, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Sends the browser to the redirect target.
    ///
    /// Returns whether navigation was triggered.
    pub fn redirect<N>(&self, navigator: &N) -> bool
    where
        N: Navigator + ?Sized,
    {
        navigate(self.status, self.redirect_url(), navigator)
    }
}

fn navigate<N>(status: AcquisitionStatus, redirect_url: Option<&str>, navigator: &N) -> bool
where
    N: Navigator + ?Sized,
{
    if !status.is_redirect_capable() {
        return false;
    }
    match redirect_url {
        Some(url) => {
            tracing::debug!(%status, url, "redirecting to acquire access token");
            navigator.navigate_to(url);
            true
        }
        None => {
            tracing::warn!(%status, "outcome requires a redirect but has no redirect url");
            false
        }
    }
}

fn non_blank(url: String) -> Option<String> {
    if url.trim().is_empty() { None } else { Some(url) }
}

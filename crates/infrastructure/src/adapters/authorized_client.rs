//! HTTP client that attaches access tokens using reqwest.
//!
//! Requests to authorized base URLs get an `Authorization: Bearer` header
//! before they are sent. When no token can be acquired the request is not
//! sent and the error carries the redirect target.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, Request, RequestBuilder, Response};

use passage_application::ports::{AccessTokenProvider, Clock};
use passage_application::{AuthorizationError, RequestAuthorizer};
use passage_domain::AccessTokenNotAvailable;

/// Errors from [`AuthorizedHttpClient`].
#[derive(Debug, thiserror::Error)]
pub enum AuthorizedClientError {
    /// No token could be attached.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// The token could not be encoded as a header value.
    #[error("invalid authorization header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    /// The request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AuthorizedClientError {
    /// The unavailable-token details, if that is why the request failed.
    #[must_use]
    pub const fn token_not_available(&self) -> Option<&AccessTokenNotAvailable> {
        match self {
            Self::Authorization(AuthorizationError::TokenNotAvailable(e)) => Some(e),
            _ => None,
        }
    }
}

/// reqwest client paired with a [`RequestAuthorizer`].
pub struct AuthorizedHttpClient<P, C> {
    client: Client,
    authorizer: Arc<RequestAuthorizer<P, C>>,
}

impl<P, C> AuthorizedHttpClient<P, C>
where
    P: AccessTokenProvider,
    C: Clock,
{
    /// Creates a client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new(authorizer: Arc<RequestAuthorizer<P, C>>) -> Result<Self, AuthorizedClientError> {
        let client = Client::builder()
            .user_agent(concat!("Passage/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, authorizer })
    }

    /// Creates a client around an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, authorizer: Arc<RequestAuthorizer<P, C>>) -> Self {
        Self { client, authorizer }
    }

    /// Starts a GET request.
    pub fn get(&self, url: reqwest::Url) -> RequestBuilder {
        self.client.get(url)
    }

    /// Starts a POST request.
    pub fn post(&self, url: reqwest::Url) -> RequestBuilder {
        self.client.post(url)
    }

    /// Attaches the `Authorization` header if the request URL is authorized.
    ///
    /// Returns whether a header was attached.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizedClientError::Authorization`] if no token could be
    /// acquired.
    pub async fn prepare(&self, request: &mut Request) -> Result<bool, AuthorizedClientError> {
        let Some(header) = self.authorizer.authorize(request.url()).await? else {
            return Ok(false);
        };
        let mut value = HeaderValue::from_str(&header)?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(true)
    }

    /// Prepares and sends a request.
    ///
    /// # Errors
    ///
    /// Returns an error if no token could be attached or the request fails.
    pub async fn send(&self, mut request: Request) -> Result<Response, AuthorizedClientError> {
        let attached = self.prepare(&mut request).await?;
        tracing::debug!(url = %request.url(), attached, "sending request");
        Ok(self.client.execute(request).await?)
    }

    /// Builds, prepares and sends a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, no token could be
    /// attached, or the request fails.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, AuthorizedClientError> {
        self.send(builder.build()?).await
    }
}

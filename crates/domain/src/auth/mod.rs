//! Access-token acquisition domain types

mod navigation;
mod options;
mod outcome;
mod request;
mod token;

pub use navigation::{Navigator, login_redirect_url};
pub use options::{
    AuthorizationOptions, DEFAULT_LOGIN_PATH, DEFAULT_REUSE_WINDOW_SECONDS,
    MAX_REUSE_WINDOW_SECONDS,
};
pub use outcome::{AccessTokenNotAvailable, AcquisitionOutcome, AcquisitionStatus, RedirectPolicy};
pub use request::AccessTokenRequestOptions;
pub use token::AccessToken;

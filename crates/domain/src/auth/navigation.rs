//! Browser navigation capability

use url::form_urlencoded;

/// The ability to send the hosting browser context to another URL.
///
/// Navigation is fire-and-forget: the browsing context is about to be
/// replaced, so callers should stop further work once it is invoked.
pub trait Navigator {
    /// Navigate the hosting browser context to `url`.
    fn navigate_to(&self, url: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, url: &str) {
        self(url);
    }
}

/// Builds the URL of an interactive login page that returns to `return_url`.
///
/// ```
/// use passage_domain::auth::login_redirect_url;
///
/// let url = login_redirect_url("authentication/login", Some("https://app.example/orders?id=7"));
/// assert_eq!(
///     url,
///     "authentication/login?returnUrl=https%3A%2F%2Fapp.example%2Forders%3Fid%3D7"
/// );
/// assert_eq!(login_redirect_url("authentication/login", None), "authentication/login");
/// ```
#[must_use]
pub fn login_redirect_url(login_path: &str, return_url: Option<&str>) -> String {
    match return_url.filter(|u| !u.trim().is_empty()) {
        Some(return_url) => {
            let encoded: String = form_urlencoded::byte_serialize(return_url.as_bytes()).collect();
            format!("{login_path}?returnUrl={encoded}")
        }
        None => login_path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_is_a_navigator() {
        let visited = RefCell::new(Vec::new());
        let navigator = |url: &str| visited.borrow_mut().push(url.to_string());

        navigator.navigate_to("https://idp.example/login");

        assert_eq!(visited.into_inner(), vec!["https://idp.example/login"]);
    }

    #[test]
    fn test_login_redirect_ignores_blank_return_url() {
        assert_eq!(login_redirect_url("login", Some("  ")), "login");
    }
}

//! Loading of [`AuthorizationOptions`] from files and the environment.
//!
//! Files are JSON (`.json`) or YAML (`.yaml`, `.yml`). After parsing, these
//! environment variables override the file:
//! - `PASSAGE_AUTHORIZED_URLS`: comma-separated base URLs
//! - `PASSAGE_SCOPES`: space-separated scopes
//! - `PASSAGE_RETURN_URL`: return URL after an interactive redirect

use std::io;
use std::path::{Path, PathBuf};

use passage_domain::{AuthorizationOptions, DomainError};

/// Overrides the authorized base URLs.
pub const ENV_AUTHORIZED_URLS: &str = "PASSAGE_AUTHORIZED_URLS";
/// Overrides the requested scopes.
pub const ENV_SCOPES: &str = "PASSAGE_SCOPES";
/// Overrides the return URL.
pub const ENV_RETURN_URL: &str = "PASSAGE_RETURN_URL";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not a known format.
    #[error("unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The loaded options are invalid.
    #[error("invalid options: {0}")]
    Invalid(#[from] DomainError),
}

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl ConfigFormat {
    /// Detects the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parses options from a string.
///
/// # Errors
///
/// Returns an error if the document does not match the expected shape.
pub fn parse_options(
    contents: &str,
    format: ConfigFormat,
) -> Result<AuthorizationOptions, ConfigError> {
    Ok(match format {
        ConfigFormat::Json => serde_json::from_str(contents)?,
        ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
    })
}

/// Applies overrides looked up by variable name.
#[must_use]
pub fn apply_overrides<F>(mut options: AuthorizationOptions, lookup: F) -> AuthorizationOptions
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(urls) = lookup(ENV_AUTHORIZED_URLS) {
        options.authorized_urls = urls
            .split(',')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(scopes) = lookup(ENV_SCOPES) {
        options.scopes = scopes.split_whitespace().map(String::from).collect();
    }
    if let Some(return_url) = lookup(ENV_RETURN_URL) {
        options.return_url = Some(return_url).filter(|u| !u.trim().is_empty());
    }
    options
}

/// Applies overrides from the process environment.
#[must_use]
pub fn apply_env_overrides(options: AuthorizationOptions) -> AuthorizationOptions {
    apply_overrides(options, |name| std::env::var(name).ok())
}

/// Loads options from `path`, applies process environment overrides and
/// validates the result.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the resulting
/// options are invalid.
pub async fn load_options(path: &Path) -> Result<AuthorizationOptions, ConfigError> {
    load_options_with(path, |name| std::env::var(name).ok()).await
}

/// Like [`load_options`], with overrides looked up through `lookup`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the resulting
/// options are invalid.
pub async fn load_options_with<F>(
    path: &Path,
    lookup: F,
) -> Result<AuthorizationOptions, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let format =
        ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat(path.into()))?;
    let contents = tokio::fs::read_to_string(path).await?;
    let options = apply_overrides(parse_options(&contents, format)?, lookup);
    options.validate()?;
    tracing::info!(
        path = %path.display(),
        authorized_urls = options.authorized_urls.len(),
        scopes = options.scopes.len(),
        "loaded authorization options"
    );
    Ok(options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("auth.JSON")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("auth.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("auth.toml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("auth")), None);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "authorized_urls:\n  - https://api.example/\nscopes: [api.read]\nreuse_window_seconds: 60\n";

        let options = parse_options(yaml, ConfigFormat::Yaml).unwrap();

        assert_eq!(options.authorized_urls, vec!["https://api.example/"]);
        assert_eq!(options.scopes, vec!["api.read"]);
        assert_eq!(options.reuse_window_seconds, 60);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_options("{not json", ConfigFormat::Json);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_AUTHORIZED_URLS, "https://a.example/, https://b.example/ ,"),
            (ENV_SCOPES, "api.read  api.write"),
            (ENV_RETURN_URL, ""),
        ]);
        let base = AuthorizationOptions::for_base_url("https://old.example/")
            .with_return_url("https://app.example/");

        let options = apply_overrides(base, |name| env.get(name).map(|v| (*v).to_string()));

        assert_eq!(
            options.authorized_urls,
            vec!["https://a.example/", "https://b.example/"]
        );
        assert_eq!(options.scopes, vec!["api.read", "api.write"]);
        assert_eq!(options.return_url, None);
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let base = AuthorizationOptions::for_base_url("https://api.example/").with_scope("x");
        let options = apply_overrides(base.clone(), |_| None);
        assert_eq!(options, base);
    }

    #[tokio::test]
    async fn test_load_with_lookup_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        std::fs::write(
            &path,
            r#"{"authorized_urls": ["https://file.example/"], "scopes": ["file.scope"]}"#,
        )
        .unwrap();

        let options = load_options_with(&path, |name| {
            (name == ENV_SCOPES).then(|| "api.read".to_string())
        })
        .await
        .unwrap();

        assert_eq!(options.authorized_urls, vec!["https://file.example/"]);
        assert_eq!(options.scopes, vec!["api.read"]);
    }

    #[tokio::test]
    async fn test_load_rejects_oversized_reuse_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.yaml");
        std::fs::write(
            &path,
            "authorized_urls: [https://api.example/]\nreuse_window_seconds: 10000000000000\n",
        )
        .unwrap();

        let result = load_options_with(&path, |_| None).await;

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(DomainError::InvalidConfiguration(_)))
        ));
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_extension() {
        let result = load_options_with(Path::new("/nonexistent/auth.toml"), |_| None).await;
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}

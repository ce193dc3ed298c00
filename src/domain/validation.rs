//! Validation rules for link creation requests.
//!
//! Rules are plain predicate functions applied in a fixed order, so the first
//! violated rule always determines the reported error:
//!
//! 1. short code present
//! 2. long URL present
//! 3. long URL is an absolute `http`/`https` URL
//! 4. short code uses only `[A-Za-z0-9_-]`

use crate::domain::entities::LinkCreateRequest;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

/// Compiled regex for short code validation.
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Field of a [`LinkCreateRequest`] that must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    ShortCode,
    LongUrl,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::ShortCode => f.write_str("Short code"),
            RequiredField::LongUrl => f.write_str("Long URL"),
        }
    }
}

/// Reasons a link creation request is rejected.
///
/// The `Display` output is the message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(RequiredField),

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Short code must be alphanumeric (with _ or -)")]
    InvalidShortCode,
}

/// Validates a link creation request.
///
/// # Errors
///
/// Returns the first violated rule, checked in this order:
/// [`ValidationError::MissingField`] for the short code, then for the long URL,
/// then [`ValidationError::InvalidUrl`], then [`ValidationError::InvalidShortCode`].
///
/// # Examples
///
/// ```
/// use link_gateway::domain::entities::LinkCreateRequest;
/// use link_gateway::domain::validation::{validate, ValidationError};
///
/// let request = LinkCreateRequest::new("ab", "not-a-url");
/// assert_eq!(validate(&request), Err(ValidationError::InvalidUrl));
/// ```
pub fn validate(request: &LinkCreateRequest) -> Result<(), ValidationError> {
    if is_blank(&request.short_code) {
        return Err(ValidationError::MissingField(RequiredField::ShortCode));
    }

    if is_blank(&request.long_url) {
        return Err(ValidationError::MissingField(RequiredField::LongUrl));
    }

    if !is_http_url(&request.long_url) {
        return Err(ValidationError::InvalidUrl);
    }

    if !is_valid_short_code(&request.short_code) {
        return Err(ValidationError::InvalidShortCode);
    }

    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true if `value` parses as an absolute `http` or `https` URL with a host.
pub fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// Returns true if `value` is a non-empty run of ASCII letters, digits, `_` or `-`.
pub fn is_valid_short_code(value: &str) -> bool {
    SHORT_CODE_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(short_code: &str, long_url: &str) -> LinkCreateRequest {
        LinkCreateRequest::new(short_code, long_url)
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(validate(&request("demo", "https://example.com")), Ok(()));
        assert_eq!(
            validate(&request("My_Link-2024", "http://example.com/path?q=1#top")),
            Ok(())
        );
    }

    #[test]
    fn test_missing_short_code() {
        let err = validate(&request("", "https://example.com")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(RequiredField::ShortCode));
        assert_eq!(err.to_string(), "Short code is required");
    }

    #[test]
    fn test_whitespace_short_code_is_missing() {
        let err = validate(&request("   ", "https://example.com")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(RequiredField::ShortCode));
    }

    #[test]
    fn test_missing_long_url() {
        let err = validate(&request("demo", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(RequiredField::LongUrl));
        assert_eq!(err.to_string(), "Long URL is required");
    }

    #[test]
    fn test_short_code_checked_before_long_url() {
        let err = validate(&request("", "")).unwrap_err();
        assert_eq!(err.to_string(), "Short code is required");
    }

    #[test]
    fn test_invalid_url() {
        let err = validate(&request("ab", "not-a-url")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidUrl);
        assert_eq!(err.to_string(), "Invalid URL format");
    }

    #[test]
    fn test_non_http_schemes_rejected() {
        for url in [
            "ftp://example.com/file",
            "javascript:alert(1)",
            "mailto:someone@example.com",
            "file:///etc/passwd",
            "example.com",
            "//example.com",
        ] {
            assert_eq!(
                validate(&request("valid", url)),
                Err(ValidationError::InvalidUrl),
                "'{}' should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_url_checked_before_short_code() {
        let err = validate(&request("a!b", "not-a-url")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidUrl);
    }

    #[test]
    fn test_invalid_short_code() {
        let err = validate(&request("a!b", "https://x.com")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidShortCode);
        assert_eq!(
            err.to_string(),
            "Short code must be alphanumeric (with _ or -)"
        );
    }

    #[test]
    fn test_short_code_special_characters_rejected() {
        for code in ["my code", "a/b", "a.b", "über", "code?", " lead"] {
            assert!(!is_valid_short_code(code), "'{}' should be rejected", code);
        }
    }

    #[test]
    fn test_short_code_allowed_characters() {
        for code in ["a", "Z", "9", "_", "-", "Ab_9-z"] {
            assert!(is_valid_short_code(code), "'{}' should be accepted", code);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let req = request("a!b", "https://x.com");
        assert_eq!(validate(&req), validate(&req));
    }
}

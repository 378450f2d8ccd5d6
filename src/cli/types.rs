//! Argument types for the Cricket Insight CLI.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::PLACEHOLDER_KEY_MARKER;

/// Type-safe wrapper for the Gemini API key.
///
/// The secret never appears in `Debug` or `Display` output, so a `Config`
/// can be logged without leaking it.
///
/// # Examples
///
/// ```rust
/// use cricket_insight::ApiKey;
///
/// let key = ApiKey::new("abc123");
/// assert_eq!(key.as_str(), "abc123");
/// assert_eq!(key.to_string(), "****");
/// assert!(ApiKey::new("PASTE_YOUR_KEY_HERE").is_placeholder());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the raw secret for building requests.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for blank keys and for the template value shipped in sample configs.
    pub fn is_placeholder(&self) -> bool {
        self.0.trim().is_empty() || self.0.contains(PLACEHOLDER_KEY_MARKER)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl FromStr for ApiKey {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(****)");
        assert_eq!(key.to_string(), "****");
        assert_eq!(key.as_str(), "super-secret");
    }

    #[test]
    fn test_api_key_placeholder_detection() {
        assert!(ApiKey::new("").is_placeholder());
        assert!(ApiKey::new("   ").is_placeholder());
        assert!(ApiKey::new("PASTE_YOUR_KEY").is_placeholder());
        assert!(ApiKey::new("xxPASTE_YOUR_KEY_HERExx").is_placeholder());
        assert!(!ApiKey::new("AIzaSyExample").is_placeholder());
    }

    #[test]
    fn test_api_key_from_str() {
        let key: ApiKey = "AIzaSyExample".parse().unwrap();
        assert_eq!(key, ApiKey::new("AIzaSyExample"));
    }
}

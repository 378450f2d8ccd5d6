//! Startup configuration injected into the fetcher and presenter.

use crate::{
    cli::{types::ApiKey, ServiceArgs},
    error::{CricketError, Result},
    images::ImageEndpoints,
    API_KEY_ENV_VAR, DEFAULT_API_BASE, DEFAULT_MODEL,
};

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<ApiKey>,
    pub model: String,
    pub api_base: String,
    pub images: ImageEndpoints,
}

impl Config {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            images: ImageEndpoints::default(),
        }
    }

    /// The usable API key, or the reason there is none.
    pub fn api_key(&self) -> Result<&ApiKey> {
        match &self.api_key {
            None => Err(CricketError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            }),
            Some(key) if key.is_placeholder() => Err(CricketError::PlaceholderApiKey),
            Some(key) => Ok(key),
        }
    }
}

impl From<ServiceArgs> for Config {
    fn from(args: ServiceArgs) -> Self {
        Self {
            api_key: args.api_key,
            model: args.model,
            api_base: args.api_base,
            images: ImageEndpoints {
                primary_base: args.image_base,
                fallback_base: args.fallback_image_base,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_missing() {
        let config = Config::new(None);
        match config.api_key().unwrap_err() {
            CricketError::MissingApiKey { env_var } => assert_eq!(env_var, API_KEY_ENV_VAR),
            _ => panic!("Expected MissingApiKey error"),
        }
    }

    #[test]
    fn test_api_key_placeholder() {
        let config = Config::new(Some(ApiKey::new("PASTE_YOUR_KEY_HERE")));
        assert!(matches!(
            config.api_key(),
            Err(CricketError::PlaceholderApiKey)
        ));
    }

    #[test]
    fn test_api_key_present() {
        let config = Config::new(Some(ApiKey::new("AIzaSyExample")));
        assert_eq!(config.api_key().unwrap().as_str(), "AIzaSyExample");
    }

    #[test]
    fn test_from_service_args() {
        let args = ServiceArgs {
            api_key: Some(ApiKey::new("k")),
            model: "gemini-1.5-pro".to_string(),
            api_base: "http://localhost:1".to_string(),
            image_base: "http://localhost:2".to_string(),
            fallback_image_base: "http://localhost:3".to_string(),
        };

        let config = Config::from(args);
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.api_base, "http://localhost:1");
        assert_eq!(config.images.primary_base, "http://localhost:2");
        assert_eq!(config.images.fallback_base, "http://localhost:3");
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let config = Config::new(Some(ApiKey::new("super-secret")));
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}

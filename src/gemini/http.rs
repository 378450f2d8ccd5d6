use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{
    types::{GenerateContentRequest, GenerateContentResponse},
    TextGenerator,
};
use crate::{cli::types::ApiKey, config::Config, Result, DEFAULT_API_BASE};


/// Client for the Gemini `generateContent` endpoint.
///
/// Built once at startup with the resolved key. Requests use the transport's
/// default timeout and are never retried. Errors are stripped of their URL
/// since it carries the key.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: ApiKey, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a client from startup configuration, failing if the key is unusable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let key = config.api_key()?.clone();
        Ok(Self::new(key, config.model.clone()).with_base_url(config.api_base.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint URL without the key, safe to log.
    fn endpoint(&self) -> Result<Url> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        Ok(Url::parse(&url)?)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint()?;
        log::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(reqwest::Error::without_url)?
            .json::<GenerateContentResponse>()
            .await
            .map_err(reqwest::Error::without_url)?;

        response.into_text()
    }
}

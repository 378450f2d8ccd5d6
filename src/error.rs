//! Error types for the Cricket Insight service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CricketError>;

#[derive(Error, Debug)]
pub enum CricketError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Gemini API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Gemini API key is still the placeholder value, paste your real key")]
    PlaceholderApiKey,

    #[error("Gemini API returned no candidates")]
    NoCandidates,

    #[error("Server error: {message}")]
    Server { message: String },
}

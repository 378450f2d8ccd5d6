//! Cricket Insight
//!
//! A single-page cricket player analyzer backed by Google Gemini. A user
//! types a player's name, the service asks the model for a JSON profile and
//! renders it next to a best-effort profile image.
//!
//! ## Pipeline
//!
//! - **Prompt**: [`prompt::build_prompt`] builds the fixed instruction.
//! - **Fetch**: [`fetcher::fetch_player_profile`] makes one Gemini call,
//!   strips code fences and parses the six-field [`PlayerProfile`]. Failures
//!   are logged and become `None`.
//! - **Present**: [`presenter::Analyzer`] checks the input and key, runs the
//!   fetch, resolves the image (primary, then placeholder) and yields an
//!   [`AnalyzeOutcome`] that [`server`] renders as HTML or JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricket_insight::{presenter::Analyzer, ApiKey, Config};
//!
//! # async fn example() {
//! let config = Config::new(Some(ApiKey::new("your-api-key")));
//! let outcome = Analyzer::from_config(&config).analyze("Rohit Sharma").await;
//! println!("{:?}", outcome.banner());
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export GOOGLE_API_KEY=your-api-key
//! cricket-insight serve --bind 127.0.0.1:8501
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod gemini;
pub mod images;
pub mod models;
pub mod presenter;
pub mod prompt;
pub mod server;

// Re-export commonly used types
pub use cli::types::ApiKey;
pub use config::Config;
pub use error::{CricketError, Result};
pub use models::{AnalyzeOutcome, PlayerProfile};

pub const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";
/// Keys containing this marker were never filled in.
pub const PLACEHOLDER_KEY_MARKER: &str = "PASTE_YOUR_KEY";
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

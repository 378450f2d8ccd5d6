//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::ApiKey;

use crate::{
    images::{DEFAULT_FALLBACK_IMAGE_BASE, DEFAULT_PRIMARY_IMAGE_BASE},
    API_KEY_ENV_VAR, DEFAULT_API_BASE, DEFAULT_MODEL,
};

/// Gemini and image lookup settings shared by every command
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Gemini API key (or set `GOOGLE_API_KEY` env var).
    #[clap(long, env = API_KEY_ENV_VAR, hide_env_values = true)]
    pub api_key: Option<ApiKey>,

    /// Gemini model identifier.
    #[clap(long, env = "CRICKET_INSIGHT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Gemini API.
    #[clap(long, env = "CRICKET_INSIGHT_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Base URL of the primary image search endpoint.
    #[clap(long, env = "CRICKET_INSIGHT_IMAGE_BASE", default_value = DEFAULT_PRIMARY_IMAGE_BASE)]
    pub image_base: String,

    /// Base URL of the placeholder image generator used when the primary lookup fails.
    #[clap(
        long,
        env = "CRICKET_INSIGHT_FALLBACK_IMAGE_BASE",
        default_value = DEFAULT_FALLBACK_IMAGE_BASE
    )]
    pub fallback_image_base: String,
}

#[derive(Debug, Parser)]
#[clap(
    name = "cricket-insight",
    about = "AI cricket player analyzer backed by Google Gemini"
)]
pub struct CricketInsight {
    #[clap(flatten)]
    pub service: ServiceArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the single-page analyzer over HTTP.
    Serve {
        /// Address to bind the HTTP server to (host:port).
        #[clap(long, env = "CRICKET_INSIGHT_BIND", default_value = "127.0.0.1:8501")]
        bind: String,
    },

    /// Analyze one player from the terminal and print the profile.
    Analyze {
        /// Player name, forwarded to the model verbatim.
        name: String,

        /// Output the outcome as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

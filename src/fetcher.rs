//! Stats fetcher: one remote call, fence stripping, strict profile parsing.

use crate::{gemini::TextGenerator, models::PlayerProfile, Result};


const FENCE: &str = "```";

/// Remove one leading code fence (optionally labelled `json`) and one
/// trailing fence, trimming surrounding whitespace.
///
/// Text without fences is returned trimmed, so the strip is idempotent.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix(FENCE) {
        let rest = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
        body = rest.trim_start();
    }
    if let Some(rest) = body.strip_suffix(FENCE) {
        body = rest.trim_end();
    }

    body
}

/// Parse a model reply into a profile. All six keys must be present.
pub fn parse_profile(text: &str) -> Result<PlayerProfile> {
    Ok(serde_json::from_str(strip_code_fences(text))?)
}

/// Ask the model once and parse its reply.
pub async fn request_profile(generator: &dyn TextGenerator, prompt: &str) -> Result<PlayerProfile> {
    let reply = generator.generate(prompt).await?;
    log::debug!("model replied with {} bytes", reply.len());
    parse_profile(&reply)
}

/// The fetcher boundary: every failure is logged and reported as `None`.
pub async fn fetch_player_profile(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Option<PlayerProfile> {
    match request_profile(generator, prompt).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::error!("AI error: {e}");
            None
        }
    }
}

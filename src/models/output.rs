//! Output models used for rendering and JSON serialization.

use serde::Serialize;

use super::PlayerProfile;

/// Which image lookup produced the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Primary,
    Fallback,
}

/// Image shown in the left column of a found profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePanel {
    pub url: String,
    pub caption: String,
    pub source: ImageSource,
}

/// Everything displayed for a successfully fetched player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    /// Success banner, "Data Found: {full_name}".
    pub banner: String,
    pub image: ImagePanel,
    pub profile: PlayerProfile,
}

impl ProfileView {
    pub fn new(profile: PlayerProfile, image: ImagePanel) -> Self {
        Self {
            banner: format!("Data Found: {}", profile.full_name),
            image,
            profile,
        }
    }
}

/// Terminal state of one analyze action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalyzeOutcome {
    /// Nothing submitted yet.
    Idle,
    /// The name input was empty; no remote call was made.
    MissingName,
    /// The API key is absent or a placeholder; no remote call was made.
    MissingCredential { message: String },
    Found(ProfileView),
    /// The fetch or parse failed.
    NotFound,
}

impl AnalyzeOutcome {
    pub const MISSING_NAME_MESSAGE: &'static str = "Please enter a name first!";
    pub const NOT_FOUND_MESSAGE: &'static str = "Could not find data. Try a different spelling.";

    /// Banner text for this outcome, if any.
    pub fn banner(&self) -> Option<&str> {
        match self {
            AnalyzeOutcome::Idle => None,
            AnalyzeOutcome::MissingName => Some(Self::MISSING_NAME_MESSAGE),
            AnalyzeOutcome::MissingCredential { message } => Some(message.as_str()),
            AnalyzeOutcome::Found(view) => Some(view.banner.as_str()),
            AnalyzeOutcome::NotFound => Some(Self::NOT_FOUND_MESSAGE),
        }
    }
}

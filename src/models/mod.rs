//! Data models for player profiles and rendered outcomes.

pub mod output;
pub mod profile;

pub use output::{AnalyzeOutcome, ImagePanel, ImageSource, ProfileView};
pub use profile::PlayerProfile;

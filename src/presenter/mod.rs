//! Presenter: orchestrates one analyze action end to end.
//!
//! Each call to [`Analyzer::analyze`] is an independent transaction that ends
//! in exactly one [`AnalyzeOutcome`]. The analyzer holds no mutable state and
//! is shared between requests behind an `Arc`.

pub mod render;

use std::sync::Arc;

use crate::{
    config::Config,
    fetcher::fetch_player_profile,
    gemini::{GeminiClient, TextGenerator},
    images::ImageResolver,
    models::{AnalyzeOutcome, ProfileView},
    prompt::build_prompt,
};

pub use render::render_page;


pub struct Analyzer {
    /// The configured generator, or why there is none.
    generator: std::result::Result<Arc<dyn TextGenerator>, String>,
    images: ImageResolver,
}

impl Analyzer {
    pub fn new(generator: Arc<dyn TextGenerator>, images: ImageResolver) -> Self {
        Self {
            generator: Ok(generator),
            images,
        }
    }

    /// An analyzer that refuses every action with `reason`.
    pub fn unconfigured(reason: impl Into<String>, images: ImageResolver) -> Self {
        Self {
            generator: Err(reason.into()),
            images,
        }
    }

    /// Wire the Gemini client and image resolver from startup configuration.
    ///
    /// An unusable key does not fail startup; actions report it instead.
    pub fn from_config(config: &Config) -> Self {
        let images = ImageResolver::new(config.images.clone());
        match GeminiClient::from_config(config) {
            Ok(client) => {
                log::info!("using Gemini model {}", client.model());
                Self::new(Arc::new(client), images)
            }
            Err(e) => {
                log::warn!("{e}; analyze actions will be refused");
                Self::unconfigured(e.to_string(), images)
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_ok()
    }

    /// Run one action for the user-entered `name`.
    pub async fn analyze(&self, name: &str) -> AnalyzeOutcome {
        if name.trim().is_empty() {
            return AnalyzeOutcome::MissingName;
        }

        let generator = match &self.generator {
            Ok(generator) => generator,
            Err(reason) => {
                return AnalyzeOutcome::MissingCredential {
                    message: reason.clone(),
                }
            }
        };

        log::info!("Scouting data for {name}...");
        let prompt = build_prompt(name);
        let Some(profile) = fetch_player_profile(generator.as_ref(), &prompt).await else {
            return AnalyzeOutcome::NotFound;
        };

        let image = self.images.resolve(name, &profile.full_name).await;
        AnalyzeOutcome::Found(ProfileView::new(profile, image))
    }
}

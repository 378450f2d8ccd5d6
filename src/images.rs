//! Best-effort profile image lookup with a placeholder fallback.

use reqwest::Client;

use crate::{
    models::{ImagePanel, ImageSource},
    Result,
};

#[cfg(test)]
mod tests;

pub const DEFAULT_PRIMARY_IMAGE_BASE: &str = "https://tse4.mm.bing.net";
pub const DEFAULT_FALLBACK_IMAGE_BASE: &str = "https://placehold.co";
pub const FALLBACK_CAPTION: &str = "Image Unavailable";

/// Form-urlencode a user-entered name: spaces become `+`, reserved
/// characters are percent-escaped.
///
/// ```rust
/// use cricket_insight::images::safe_name;
///
/// assert_eq!(safe_name("Rohit Sharma"), "Rohit+Sharma");
/// ```
pub fn safe_name(name: &str) -> String {
    url::form_urlencoded::byte_serialize(name.as_bytes()).collect()
}

/// Hosts for the primary image search and the placeholder generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEndpoints {
    pub primary_base: String,
    pub fallback_base: String,
}

impl Default for ImageEndpoints {
    fn default() -> Self {
        Self {
            primary_base: DEFAULT_PRIMARY_IMAGE_BASE.to_string(),
            fallback_base: DEFAULT_FALLBACK_IMAGE_BASE.to_string(),
        }
    }
}

impl ImageEndpoints {
    pub fn primary_url(&self, name: &str) -> String {
        format!(
            "{}/th?q={}+cricket+profile&w=300&h=300&c=7",
            self.primary_base.trim_end_matches('/'),
            safe_name(name)
        )
    }

    pub fn fallback_url(&self, name: &str) -> String {
        format!(
            "{}/300x300?text={}",
            self.fallback_base.trim_end_matches('/'),
            safe_name(name)
        )
    }
}

/// Picks the image panel for a found player.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    client: Client,
    endpoints: ImageEndpoints,
}

impl ImageResolver {
    pub fn new(endpoints: ImageEndpoints) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }

    /// Try the primary lookup first; on any failure use the placeholder.
    ///
    /// `name` is the user-entered name, `caption` the profile's full name.
    /// The placeholder itself is not probed.
    pub async fn resolve(&self, name: &str, caption: &str) -> ImagePanel {
        let primary = self.endpoints.primary_url(name);

        match self.probe(&primary).await {
            Ok(()) => ImagePanel {
                url: primary,
                caption: caption.to_string(),
                source: ImageSource::Primary,
            },
            Err(e) => {
                log::warn!("primary image lookup failed for {name:?}, using placeholder: {e}");
                ImagePanel {
                    url: self.endpoints.fallback_url(name),
                    caption: FALLBACK_CAPTION.to_string(),
                    source: ImageSource::Fallback,
                }
            }
        }
    }

    async fn probe(&self, url: &str) -> Result<()> {
        self.client.get(url).send().await?.error_for_status()?;
        Ok(())
    }
}

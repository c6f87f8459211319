//! Viewer URLs for encoded path data
//!
//! The viewer is a small web service that draws the path passed in its
//! `d` query parameter. Which endpoint to talk to is plain configuration.

use serde::Deserialize;
use tracing::info;

use crate::renderer::SvgPath;

/// Publicly hosted viewer
pub const REMOTE_VIEWER_URL: &str = "https://shielded-hamlet-1585.herokuapp.com";

/// Viewer running on the local machine
pub const LOCAL_VIEWER_URL: &str = "http://127.0.0.1:5000";

/// Where encoded paths are sent for display
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub base_url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: REMOTE_VIEWER_URL.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointing at a viewer on localhost
    pub fn local() -> Self {
        Self::default().with_base_url(LOCAL_VIEWER_URL)
    }

    /// Set the viewer base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Viewer URL displaying `path`
    pub fn url_for(&self, path: &SvgPath) -> String {
        viewer_url(&self.base_url, path)
    }
}

/// Append `path` to `base_url` as the `d` query parameter
///
/// Path data only contains letters, digits, `-` and spaces, so replacing
/// spaces with `+` is the only escaping needed.
pub fn viewer_url(base_url: &str, path: &SvgPath) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}d={}", path.to_query_value())
}

/// Hand a viewer URL to the platform's default opener
pub fn launch(url: &str) -> std::io::Result<()> {
    info!(%url, "opening viewer");
    open::that(url)
}

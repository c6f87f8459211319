//! Export configuration
//!
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! room = "Kitchen"
//! loop_index = 0
//!
//! [svg]
//! canvas_size = 100
//!
//! [viewer]
//! base_url = "http://127.0.0.1:5000"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::SvgConfig;
use crate::viewer::ViewerConfig;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration for the complete export pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Room to export, by name or number; `None` picks the only room
    pub room: Option<String>,
    /// Which boundary loop of the room to encode (0 is the outer boundary)
    pub loop_index: usize,
    /// Path data output configuration
    pub svg: SvgConfig,
    /// Viewer endpoint
    pub viewer: ViewerConfig,
}

impl ExportConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Select a room by name or number
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Set the boundary loop index
    pub fn with_loop_index(mut self, index: usize) -> Self {
        self.loop_index = index;
        self
    }

    /// Set the path data configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the viewer configuration
    pub fn with_viewer(mut self, config: ViewerConfig) -> Self {
        self.viewer = config;
        self
    }
}

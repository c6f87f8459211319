//! Configuration for SVG path encoding

use serde::Deserialize;

/// Canvas edge length used when nothing else is configured
pub const DEFAULT_CANVAS_SIZE: u32 = 100;

/// Configuration options for path data output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Edge length of the square target canvas, in output units
    pub canvas_size: u32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self
    }
}

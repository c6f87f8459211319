//! SVG path data renderer for boundary loops
//!
//! This module projects a closed loop onto a fixed-size square canvas and
//! encodes it as SVG path data.

pub mod config;
pub mod error;
pub mod path;
pub mod projector;

pub use config::SvgConfig;
pub use error::EncodeError;
pub use path::{encode, encode_with_transform, SvgPath};
pub use projector::{project, ScaleTransform};

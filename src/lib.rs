//! Room SVG - room boundary loops as normalized SVG path data
//!
//! This library projects a closed room boundary loop onto a fixed-size
//! square canvas and encodes it as compact SVG path data, ready to be
//! handed to a viewer.
//!
//! # Example
//!
//! ```rust
//! use room_svg::{encode, BoundingBox, Loop, Point};
//!
//! let square = Loop::polygon(&[
//!     Point::xy(0.0, 0.0),
//!     Point::xy(10.0, 0.0),
//!     Point::xy(10.0, 10.0),
//!     Point::xy(0.0, 10.0),
//! ]);
//! let bounds = BoundingBox::new(Point::xy(0.0, 0.0), Point::xy(10.0, 10.0));
//!
//! let path = encode(&bounds, &square.segments, 100).unwrap();
//! assert_eq!(path.as_str(), "M0 100L100 100L100 0L0 0Z");
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod room;
pub mod viewer;

pub use config::{ConfigError, ExportConfig};
pub use error::RoomError;
pub use geometry::{BoundingBox, CurveType, Loop, Point, Segment};
pub use renderer::{encode, EncodeError, SvgConfig, SvgPath};
pub use room::{Room, RoomModel};
pub use viewer::{viewer_url, ViewerConfig};

use thiserror::Error;
use tracing::info;

/// Errors that can occur during the export pipeline
#[derive(Debug, Error)]
pub enum ExportError {
    /// Error reading the room file or picking a room
    #[error(transparent)]
    Room(#[from] RoomError),

    /// Error encoding the boundary loop
    #[error("cannot export room '{room}': {source}")]
    Encode {
        room: String,
        #[source]
        source: EncodeError,
    },
}

/// Result of exporting one room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Name of the exported room
    pub room: String,
    /// Encoded boundary loop
    pub path: SvgPath,
    /// Viewer URL displaying the path
    pub url: String,
}

/// Export a room from room file source with default configuration
///
/// # Example
///
/// ```rust
/// let export = room_svg::export(r#"
///     [[rooms]]
///     name = "Box"
///     [[rooms.loops]]
///     segments = [
///         { start = [0, 0], end = [4, 0] },
///         { start = [4, 0], end = [4, 4] },
///         { start = [4, 4], end = [0, 4] },
///         { start = [0, 4], end = [0, 0] },
///     ]
/// "#).unwrap();
///
/// assert_eq!(export.room, "Box");
/// assert_eq!(export.path.as_str(), "M0 100L100 100L100 0L0 0Z");
/// ```
pub fn export(source: &str) -> Result<Export, ExportError> {
    export_with_config(source, &ExportConfig::default())
}

/// Export a room from room file source with custom configuration
pub fn export_with_config(source: &str, config: &ExportConfig) -> Result<Export, ExportError> {
    let model = RoomModel::from_str(source)?;
    export_model(&model, config)
}

/// Export the configured room of an already loaded model
pub fn export_model(model: &RoomModel, config: &ExportConfig) -> Result<Export, ExportError> {
    let room = model.select(config.room.as_deref())?;
    let boundary = room.boundary_loop(config.loop_index)?;

    let encode_error = |source| ExportError::Encode {
        room: room.name.clone(),
        source,
    };

    let bounds = room
        .bounding_box_or_enclosing(boundary)
        .ok_or_else(|| encode_error(EncodeError::EmptyLoop))?;
    let path = encode(&bounds, &boundary.segments, config.svg.canvas_size).map_err(encode_error)?;

    info!(room = %room.name, segments = boundary.len(), "exported room boundary");

    Ok(Export {
        room: room.name.clone(),
        url: config.viewer.url_for(&path),
        path,
    })
}

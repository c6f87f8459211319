//! Error types for path encoding

use thiserror::Error;

use crate::geometry::{CurveType, Point};

/// Malformed input detected while encoding a boundary loop
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// Canvas of zero size
    #[error("canvas size must be greater than zero")]
    InvalidCanvasSize,

    /// Bounding box with non-finite or inverted coordinates
    #[error("invalid bounding box {min} - {max}")]
    InvalidBoundingBox { min: Point, max: Point },

    /// Bounding box without extent, so no scale can be derived
    #[error("degenerate bounding box {min} - {max}: zero extent in both axes")]
    DegenerateGeometry { min: Point, max: Point },

    /// Loop without any segments
    #[error("boundary loop has no segments")]
    EmptyLoop,

    /// Segment that is not a straight line
    #[error(
        "segment {index} has unsupported curve type '{curve}'; \
         only straight segments can be encoded"
    )]
    UnsupportedCurveType { index: usize, curve: CurveType },

    /// Segment start does not meet the previous segment end
    #[error("segment {index} starts at {found}, expected previous end point {expected}")]
    DiscontinuousLoop {
        index: usize,
        expected: Point,
        found: Point,
    },

    /// Last segment end does not return to the loop start
    #[error("boundary loop is not closed: ends at {end}, started at {start}")]
    UnclosedLoop { start: Point, end: Point },
}

impl EncodeError {
    /// Index of the offending segment if the error points at one
    pub fn segment_index(&self) -> Option<usize> {
        match self {
            Self::UnsupportedCurveType { index, .. } => Some(*index),
            Self::DiscontinuousLoop { index, .. } => Some(*index),
            _ => None,
        }
    }
}

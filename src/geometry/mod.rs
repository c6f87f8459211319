//! Geometry primitives shared by the room source and the path encoder

pub mod types;

pub use types::{BoundingBox, CurveType, Loop, Point, Segment, TOLERANCE};

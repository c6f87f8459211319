//! Core geometry types for room boundaries

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Absolute per-axis tolerance used when comparing model coordinates
pub const TOLERANCE: f64 = 1e-9;

/// A point in model space
///
/// Room boundaries are planar, so `z` is carried along but never used
/// for projection. 2D points have `z == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point in the z = 0 plane
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Compare two points within [`TOLERANCE`] on every axis
    pub fn almost_eq(&self, other: &Point) -> bool {
        (self.x - other.x).abs() <= TOLERANCE
            && (self.y - other.y).abs() <= TOLERANCE
            && (self.z - other.z).abs() <= TOLERANCE
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Axis-aligned extent of a boundary loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every given point, or `None` for no points
    pub fn enclosing<I>(points: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let bounds = points.fold(BoundingBox::new(first, first), |bb, p| {
            bb.expand_to_include(p)
        });
        Some(bounds)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        BoundingBox::new(
            Point::new(
                self.min.x.min(point.x),
                self.min.y.min(point.y),
                self.min.z.min(point.z),
            ),
            Point::new(
                self.max.x.max(point.x),
                self.max.y.max(point.y),
                self.max.z.max(point.z),
            ),
        )
    }

    /// Size vector `max - min`
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// Center of the box
    pub fn midpoint(&self) -> Point {
        self.min + self.size() * 0.5
    }

    /// The larger of the horizontal extents, used for uniform scaling
    pub fn reference_dimension(&self) -> f64 {
        let size = self.size();
        size.x.max(size.y)
    }

    /// True when all coordinates are finite and `min <= max` in the plane
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
    }
}

/// Geometric kind of a boundary segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveType {
    #[default]
    Line,
    Arc,
    Ellipse,
    Spline,
}

impl CurveType {
    pub fn is_linear(&self) -> bool {
        matches!(self, CurveType::Line)
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveType::Line => "line",
            CurveType::Arc => "arc",
            CurveType::Ellipse => "ellipse",
            CurveType::Spline => "spline",
        };
        f.write_str(name)
    }
}

/// One directed edge of a boundary loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub curve: CurveType,
}

impl Segment {
    pub fn new(start: Point, end: Point, curve: CurveType) -> Self {
        Self { start, end, curve }
    }

    /// Straight segment between two points
    pub fn line(start: Point, end: Point) -> Self {
        Self::new(start, end, CurveType::Line)
    }
}

/// Ordered, closed sequence of segments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Loop {
    pub segments: Vec<Segment>,
}

impl Loop {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Build a closed loop of straight segments through the given corners
    pub fn polygon(corners: &[Point]) -> Self {
        let segments = corners
            .iter()
            .zip(corners.iter().cycle().skip(1))
            .map(|(&start, &end)| Segment::line(start, end))
            .collect();
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Every segment endpoint, in loop order
    pub fn endpoints(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().flat_map(|s| [s.start, s.end])
    }

    /// Box enclosing all endpoints, or `None` for an empty loop
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.endpoints())
    }
}

//! Model-space to canvas-space point projection
//!
//! A boundary loop is mapped onto a square canvas by:
//!
//! ```text
//! p' = (p - midpoint) * scale
//! x  =  floor(p'.x + 0.5) + canvas_size / 2
//! y  = -floor(p'.y + 0.5) + canvas_size / 2
//! ```
//!
//! Model space has +Y pointing up, SVG has +Y pointing down, hence the
//! sign flip on the rounded Y value. The flip happens after rounding, so
//! a value sitting exactly on a half step rounds up in model space.

use crate::geometry::{BoundingBox, Point};

use super::error::EncodeError;

/// Offset and uniform scale shared by every vertex of one loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    /// Model-space point mapped to the canvas center
    pub midpoint: Point,
    /// Canvas units per model unit
    pub scale: f64,
    /// Edge length of the square canvas
    pub canvas_size: u32,
}

impl ScaleTransform {
    /// Derive the transform fitting `bounds` into a `canvas_size` square
    pub fn fit(bounds: &BoundingBox, canvas_size: u32) -> Result<Self, EncodeError> {
        if canvas_size == 0 {
            return Err(EncodeError::InvalidCanvasSize);
        }
        if !bounds.is_valid() {
            return Err(EncodeError::InvalidBoundingBox {
                min: bounds.min,
                max: bounds.max,
            });
        }

        let reference = bounds.reference_dimension();
        if reference <= 0.0 {
            return Err(EncodeError::DegenerateGeometry {
                min: bounds.min,
                max: bounds.max,
            });
        }

        Ok(Self {
            midpoint: bounds.midpoint(),
            scale: f64::from(canvas_size) / reference,
            canvas_size,
        })
    }

    /// Project a point with this transform
    pub fn apply(&self, p: Point) -> (i64, i64) {
        project(p, self.midpoint, self.scale, self.canvas_size)
    }
}

/// Map a model-space point to integer canvas coordinates
///
/// `z` is ignored. Output may fall outside `0..=canvas_size` for points
/// outside the bounding box the transform was derived from. Coordinates
/// beyond the `i64` range saturate at its ends.
pub fn project(p: Point, midpoint: Point, scale: f64, canvas_size: u32) -> (i64, i64) {
    let centered = (p - midpoint) * scale;
    let x = round_half_up(centered.x);
    let y = round_half_up(centered.y).saturating_neg();

    let half = i64::from(canvas_size / 2);
    (x.saturating_add(half), y.saturating_add(half))
}

// `as` saturates out-of-range floats
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_bounds() -> BoundingBox {
        BoundingBox::new(Point::xy(0.0, 0.0), Point::xy(10.0, 10.0))
    }

    #[test]
    fn test_fit_square() {
        let t = ScaleTransform::fit(&square_bounds(), 100).unwrap();
        assert_eq!(t.midpoint, Point::xy(5.0, 5.0));
        assert_eq!(t.scale, 10.0);
    }

    #[test]
    fn test_fit_uses_larger_dimension() {
        let bounds = BoundingBox::new(Point::xy(0.0, 0.0), Point::xy(20.0, 5.0));
        let t = ScaleTransform::fit(&bounds, 100).unwrap();
        assert_eq!(t.scale, 5.0);
    }

    #[test]
    fn test_fit_rejects_degenerate_box() {
        let p = Point::xy(3.0, 3.0);
        let err = ScaleTransform::fit(&BoundingBox::new(p, p), 100).unwrap_err();
        assert!(matches!(err, EncodeError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_fit_accepts_flat_box() {
        let bounds = BoundingBox::new(Point::xy(0.0, 2.0), Point::xy(4.0, 2.0));
        assert!(ScaleTransform::fit(&bounds, 100).is_ok());
    }

    #[test]
    fn test_fit_rejects_zero_canvas() {
        let err = ScaleTransform::fit(&square_bounds(), 0).unwrap_err();
        assert_eq!(err, EncodeError::InvalidCanvasSize);
    }

    #[test]
    fn test_fit_rejects_inverted_box() {
        let bounds = BoundingBox::new(Point::xy(10.0, 10.0), Point::xy(0.0, 0.0));
        let err = ScaleTransform::fit(&bounds, 100).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidBoundingBox { .. }));
    }

    #[test]
    fn test_project_corners() {
        let mid = Point::xy(5.0, 5.0);
        assert_eq!(project(Point::xy(0.0, 0.0), mid, 10.0, 100), (0, 100));
        assert_eq!(project(Point::xy(10.0, 0.0), mid, 10.0, 100), (100, 100));
        assert_eq!(project(Point::xy(10.0, 10.0), mid, 10.0, 100), (100, 0));
        assert_eq!(project(Point::xy(0.0, 10.0), mid, 10.0, 100), (0, 0));
    }

    #[test]
    fn test_project_midpoint_is_canvas_center() {
        let mid = Point::new(7.5, -3.25, 12.0);
        assert_eq!(project(mid, mid, 3.0, 100), (50, 50));
    }

    #[test]
    fn test_project_ignores_z() {
        let mid = Point::xy(0.0, 0.0);
        assert_eq!(
            project(Point::new(1.0, 2.0, 0.0), mid, 10.0, 100),
            project(Point::new(1.0, 2.0, 99.0), mid, 10.0, 100)
        );
    }

    #[test]
    fn test_project_flips_y() {
        let mid = Point::xy(0.0, 0.0);
        let (_, y) = project(Point::xy(0.0, 1.0), mid, 10.0, 100);
        assert!(y < 50);
    }

    #[test]
    fn test_rounding_half_steps() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.49), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-49.5), -49);
        assert_eq!(round_half_up(-50.0), -50);
    }

    #[test]
    fn test_rounding_negative_values() {
        // floor, not truncation: -0.7 + 0.5 = -0.2 rounds to -1
        assert_eq!(round_half_up(-0.7), -1);
        assert_eq!(round_half_up(-0.2), 0);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(-1.51), -2);
    }

    #[test]
    fn test_project_far_point_saturates() {
        let origin = Point::xy(0.0, 0.0);
        assert_eq!(
            project(Point::xy(1e300, -1e300), origin, 1.0, 100),
            (i64::MAX, i64::MAX)
        );
        assert_eq!(
            project(Point::xy(-1e300, 1e300), origin, 1.0, 100),
            (i64::MIN + 50, -i64::MAX + 50)
        );
    }

    #[test]
    fn test_odd_canvas_center_floors() {
        let mid = Point::xy(0.0, 0.0);
        assert_eq!(project(mid, mid, 1.0, 101), (50, 50));
    }
}

//! Boundary loop to SVG path data encoding
//!
//! Produces the compact form `M{x} {y}L{x} {y}...Z`: one `L` per vertex
//! after the first except the loop start, which `Z` returns to. Integer
//! coordinates, a single space between x and y, no separators between
//! commands. The string only ever contains `M`, `L`, `Z`, digits, `-` and
//! spaces, so it can be dropped into a query string once spaces become `+`.

use std::fmt;

use tracing::{debug, trace};

use crate::geometry::{BoundingBox, Point, Segment};

use super::error::EncodeError;
use super::projector::ScaleTransform;

/// Encoded path data for one boundary loop
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SvgPath(String);

impl SvgPath {
    /// Path data as it goes into a `d` attribute
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Path data with spaces replaced by `+`, ready for a query string
    pub fn to_query_value(&self) -> String {
        self.0.replace(' ', "+")
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SvgPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SvgPath> for String {
    fn from(path: SvgPath) -> Self {
        path.0
    }
}

/// Encode a closed loop of straight segments as path data on a
/// `canvas_size` square canvas. Every segment but the last is written as
/// an `L`; the last one, which returns to the loop start, is written as
/// the closing `Z` only.
///
/// The loop is scaled uniformly so the larger side of `bounds` spans the
/// canvas, centered on the midpoint of `bounds`, with the Y axis flipped.
/// Every segment must be a line, start where the previous one ended, and
/// the last one must end where the first one started.
pub fn encode(
    bounds: &BoundingBox,
    segments: &[Segment],
    canvas_size: u32,
) -> Result<SvgPath, EncodeError> {
    let transform = ScaleTransform::fit(bounds, canvas_size)?;
    encode_with_transform(&transform, segments)
}

/// Encode a loop with an already derived transform
pub fn encode_with_transform(
    transform: &ScaleTransform,
    segments: &[Segment],
) -> Result<SvgPath, EncodeError> {
    let first = segments.first().ok_or(EncodeError::EmptyLoop)?;

    debug!(
        segments = segments.len(),
        scale = transform.scale,
        canvas_size = transform.canvas_size,
        "encoding boundary loop"
    );

    let loop_start = first.start;
    let last = segments.len() - 1;

    let mut d = String::with_capacity(8 * segments.len() + 1);
    push_command(&mut d, 'M', transform.apply(loop_start));

    let mut previous_end = loop_start;
    for (index, seg) in segments.iter().enumerate() {
        check_linear(index, seg)?;

        if !seg.start.almost_eq(&previous_end) {
            return Err(EncodeError::DiscontinuousLoop {
                index,
                expected: previous_end,
                found: seg.start,
            });
        }

        // The closing edge back to the loop start is drawn by `Z`
        if index < last {
            trace!(index, end = %seg.end, "line");
            push_command(&mut d, 'L', transform.apply(seg.end));
        }
        previous_end = seg.end;
    }
    d.push('Z');

    check_closed(loop_start, previous_end)?;

    debug!(path = %d, "encoded boundary loop");
    Ok(SvgPath(d))
}

fn check_linear(index: usize, seg: &Segment) -> Result<(), EncodeError> {
    if seg.curve.is_linear() {
        Ok(())
    } else {
        Err(EncodeError::UnsupportedCurveType {
            index,
            curve: seg.curve,
        })
    }
}

fn check_closed(start: Point, end: Point) -> Result<(), EncodeError> {
    if end.almost_eq(&start) {
        Ok(())
    } else {
        Err(EncodeError::UnclosedLoop { start, end })
    }
}

fn push_command(d: &mut String, command: char, (x, y): (i64, i64)) {
    d.push(command);
    d.push_str(&format!("{x} {y}"));
}

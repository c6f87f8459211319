//! Room files: named rooms and their boundary loops
//!
//! A room file is a TOML document listing rooms. Each room carries one or
//! more boundary loops (the first one being the outer boundary) and an
//! optional bounding box:
//!
//! ```toml
//! [[rooms]]
//! name = "Kitchen"
//! number = "101"
//! bounding_box = { min = [0, 0, 0], max = [10, 10, 3] }
//!
//! [[rooms.loops]]
//! segments = [
//!     { start = [0, 0], end = [10, 0] },
//!     { start = [10, 0], end = [10, 10] },
//!     { start = [10, 10], end = [0, 10] },
//!     { start = [0, 10], end = [0, 0], curve = "line" },
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::RoomError;
use crate::geometry::{BoundingBox, CurveType, Loop, Point, Segment};

/// A room with its boundary loops
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    pub number: Option<String>,
    /// Extent of the room as stored in the model, if any
    pub bounding_box: Option<BoundingBox>,
    pub loops: Vec<Loop>,
}

impl Room {
    /// Boundary loop by index; index 0 is the outer boundary
    pub fn boundary_loop(&self, index: usize) -> Result<&Loop, RoomError> {
        self.loops.get(index).ok_or_else(|| RoomError::MissingLoop {
            room: self.name.clone(),
            index,
            available: self.loops.len(),
        })
    }

    /// Stored bounding box, or the box enclosing `boundary`
    pub fn bounding_box_or_enclosing(&self, boundary: &Loop) -> Option<BoundingBox> {
        self.bounding_box.or_else(|| boundary.bounding_box())
    }

    fn matches(&self, key: &str) -> bool {
        self.name == key || self.number.as_deref() == Some(key)
    }
}

/// All rooms of a room file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomModel {
    pub rooms: Vec<Room>,
}

/// TOML structure for deserializing room files
#[derive(Deserialize)]
struct TomlRoomFile {
    #[serde(default)]
    rooms: Vec<TomlRoom>,
}

#[derive(Deserialize)]
struct TomlRoom {
    name: String,
    number: Option<String>,
    bounding_box: Option<TomlBoundingBox>,
    #[serde(default)]
    loops: Vec<TomlLoop>,
}

#[derive(Deserialize)]
struct TomlBoundingBox {
    min: TomlPoint,
    max: TomlPoint,
}

#[derive(Deserialize)]
struct TomlLoop {
    segments: Vec<TomlSegment>,
}

#[derive(Deserialize)]
struct TomlSegment {
    start: TomlPoint,
    end: TomlPoint,
    #[serde(default)]
    curve: TomlCurve,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "snake_case")]
enum TomlCurve {
    #[default]
    Line,
    Arc,
    Ellipse,
    Spline,
}

/// `[x, y]` or `[x, y, z]`
#[derive(Deserialize)]
#[serde(try_from = "Vec<f64>")]
struct TomlPoint(Point);

impl TryFrom<Vec<f64>> for TomlPoint {
    type Error = String;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        match coords[..] {
            [x, y] => Ok(TomlPoint(Point::xy(x, y))),
            [x, y, z] => Ok(TomlPoint(Point::new(x, y, z))),
            _ => Err(format!(
                "a point needs 2 or 3 coordinates, found {}",
                coords.len()
            )),
        }
    }
}

impl From<TomlCurve> for CurveType {
    fn from(curve: TomlCurve) -> Self {
        match curve {
            TomlCurve::Line => CurveType::Line,
            TomlCurve::Arc => CurveType::Arc,
            TomlCurve::Ellipse => CurveType::Ellipse,
            TomlCurve::Spline => CurveType::Spline,
        }
    }
}

impl From<TomlRoom> for Room {
    fn from(room: TomlRoom) -> Self {
        Room {
            name: room.name,
            number: room.number,
            bounding_box: room
                .bounding_box
                .map(|bb| BoundingBox::new(bb.min.0, bb.max.0)),
            loops: room
                .loops
                .into_iter()
                .map(|l| {
                    Loop::new(
                        l.segments
                            .into_iter()
                            .map(|s| Segment::new(s.start.0, s.end.0, s.curve.into()))
                            .collect(),
                    )
                })
                .collect(),
        }
    }
}

impl RoomModel {
    /// Load a room file from disk
    pub fn from_file(path: &Path) -> Result<Self, RoomError> {
        let content = std::fs::read_to_string(path).map_err(|source| RoomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load a room file from a TOML string
    pub fn from_str(content: &str) -> Result<Self, RoomError> {
        let parsed: TomlRoomFile = toml::from_str(content)?;
        let rooms: Vec<Room> = parsed.rooms.into_iter().map(Room::from).collect();
        debug!(rooms = rooms.len(), "loaded room file");
        Ok(RoomModel { rooms })
    }

    /// Pick the room to export
    ///
    /// With a name, the room whose name or number matches is returned.
    /// Without one, a model holding a single room yields that room and
    /// anything else is ambiguous.
    pub fn select(&self, name: Option<&str>) -> Result<&Room, RoomError> {
        if self.rooms.is_empty() {
            return Err(RoomError::NoRooms);
        }

        match name {
            Some(key) => self.rooms.iter().find(|r| r.matches(key)).ok_or_else(|| {
                RoomError::RoomNotFound {
                    name: key.to_string(),
                    suggestions: find_similar(self.rooms.iter().map(|r| r.name.as_str()), key, 2),
                }
            }),
            None => match self.rooms.as_slice() {
                [only] => {
                    debug!(room = %only.name, "single room in model, selecting it");
                    Ok(only)
                }
                rooms => Err(RoomError::AmbiguousRoom {
                    candidates: rooms.iter().map(|r| r.name.clone()).collect(),
                }),
            },
        }
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut row = vec![i + 1; b_chars.len() + 1];
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            row[j + 1] = (prev[j + 1] + 1).min(row[j] + 1).min(prev[j] + cost);
        }
        prev = row;
    }

    prev[b_chars.len()]
}

/// Find similar room names within a maximum edit distance
fn find_similar<'a>(
    names: impl Iterator<Item = &'a str>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = names
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            (dist <= max_distance && dist > 0).then_some((name, dist))
        })
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}

//! Problem-instance map descriptions.
//!
//! A map file is line oriented:
//!
//! ```text
//! width;height
//! x,y                      initial position
//! N                        delivery point count
//! x,y[,requiredIndex]      N lines, ids are 1..=N in file order
//! W                        wall segment count (level >= 2)
//! x1,y1:x2,y2              W lines
//! T                        tunnel count (level >= 2)
//! x1,y1:x2,y2              T lines
//! D                        other drone count (level >= 3)
//! x,y;moves | exprX,exprY  D lines
//! ```
//!
//! Segment endpoints may also be separated by `;`. Sections beyond the
//! requested level are not read, so one file can serve every level.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use judge_types::{Coord, Dimensions, Level};
use tracing::info;

use crate::error::{FormatError, LoadError};
use crate::trajectory::Trajectory;

/// A target cell the contestant drone has to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryPoint {
    /// 1-based position in the map file.
    pub id: u32,
    /// Where the point is.
    pub coords: Coord,
    /// When set, the point must be the `n`-th route of the submission.
    pub required_position: Option<u32>,
}

/// Immutable model of one problem instance at one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDescription {
    level: Level,
    dimensions: Dimensions,
    initial_position: Coord,
    delivery_points: Vec<DeliveryPoint>,
    walls: BTreeSet<Coord>,
    tunnels: BTreeMap<Coord, Coord>,
    drones: Vec<Trajectory>,
}

impl MapDescription {
    /// Parse a map description, reading only the sections active at `level`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] carrying the 1-based line number when a
    /// section is shorter than its declared count, a field is not numeric, a
    /// line has the wrong number of fields, or a value is out of range.
    pub fn parse(source: &str, level: Level) -> Result<Self, FormatError> {
        let mut reader = LineReader::new(source);

        let (line, text) = reader.next_line()?;
        let dimensions = parse_dimensions(text, line)?;

        let (line, text) = reader.next_line()?;
        let initial_position = parse_coord(text, line)?;

        let count = reader.next_count()?;
        let mut delivery_points = Vec::with_capacity(count.min(4096));
        for index in 0..count {
            let (line, text) = reader.next_line()?;
            let id = u32::try_from(index.saturating_add(1)).map_err(|source| {
                FormatError::InvalidValue {
                    line,
                    reason: format!("too many delivery points ({source})"),
                }
            })?;
            delivery_points.push(parse_delivery_point(id, text, line)?);
        }

        let mut walls = BTreeSet::new();
        let mut tunnels = BTreeMap::new();
        if level.has_obstacles() {
            let count = reader.next_count()?;
            for _ in 0..count {
                let (line, text) = reader.next_line()?;
                let (from, to) = parse_segment(text, line)?;
                expand_wall(from, to, dimensions, line, &mut walls)?;
            }

            let count = reader.next_count()?;
            for _ in 0..count {
                let (line, text) = reader.next_line()?;
                let (a, b) = parse_segment(text, line)?;
                tunnels.insert(a, b);
                tunnels.insert(b, a);
            }
        }

        let mut drones = Vec::new();
        if level.has_traffic() {
            let count = reader.next_count()?;
            for _ in 0..count {
                let (line, text) = reader.next_line()?;
                drones.push(Trajectory::parse(text, line)?);
            }
        }

        Ok(Self {
            level,
            dimensions,
            initial_position,
            delivery_points,
            walls,
            tunnels,
            drones,
        })
    }

    /// Read and parse a map file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Format`] if its content is malformed.
    pub fn load(path: &Path, level: Level) -> Result<Self, LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&source, level).map_err(|source| LoadError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            level = level.get(),
            width = map.dimensions.width,
            height = map.dimensions.height,
            points = map.delivery_points.len(),
            walls = map.walls.len(),
            tunnel_ends = map.tunnels.len(),
            drones = map.drones.len(),
            "Map loaded"
        );
        Ok(map)
    }

    /// Level this description was loaded for.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Map extent.
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Starting cell. Recorded for completeness; routes declare their own
    /// origin.
    pub const fn initial_position(&self) -> Coord {
        self.initial_position
    }

    /// Every delivery point, ordered by id.
    pub fn delivery_points(&self) -> &[DeliveryPoint] {
        &self.delivery_points
    }

    /// Look up a delivery point by its 1-based id.
    pub fn delivery_point(&self, id: u32) -> Option<&DeliveryPoint> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.delivery_points.get(index)
    }

    /// Every wall cell.
    pub const fn walls(&self) -> &BTreeSet<Coord> {
        &self.walls
    }

    /// Whether `cell` is blocked.
    pub fn is_wall(&self, cell: Coord) -> bool {
        self.walls.contains(&cell)
    }

    /// The other end of the tunnel entered at `cell`, if any.
    pub fn tunnel_exit(&self, cell: Coord) -> Option<Coord> {
        self.tunnels.get(&cell).copied()
    }

    /// Trajectories of the other drones.
    pub fn drones(&self) -> &[Trajectory] {
        &self.drones
    }
}

// ---------------------------------------------------------------------------
// Line reading
// ---------------------------------------------------------------------------

/// Sequential reader that tracks 1-based line numbers.
struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<(usize, &'a str), FormatError> {
        self.line = self.line.saturating_add(1);
        self.lines
            .next()
            .map(|text| (self.line, text.trim()))
            .ok_or(FormatError::UnexpectedEof { line: self.line })
    }

    fn next_count(&mut self) -> Result<usize, FormatError> {
        let (line, text) = self.next_line()?;
        let Ok(count) = text.parse() else {
            return Err(FormatError::InvalidNumber {
                line,
                value: text.to_owned(),
            });
        };
        Ok(count)
    }
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Parse one integer field.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] if `text` is not a decimal integer.
pub fn parse_int(text: &str, line: usize) -> Result<i64, FormatError> {
    let text = text.trim();
    let Ok(value) = text.parse() else {
        return Err(FormatError::InvalidNumber {
            line,
            value: text.to_owned(),
        });
    };
    Ok(value)
}

/// Parse an `x,y` coordinate.
///
/// # Errors
///
/// Returns [`FormatError::WrongArity`] unless there are exactly two fields,
/// and [`FormatError::InvalidNumber`] if either is not an integer.
pub fn parse_coord(text: &str, line: usize) -> Result<Coord, FormatError> {
    let fields: Vec<&str> = text.split(',').collect();
    let [x, y] = fields.as_slice() else {
        return Err(FormatError::WrongArity {
            line,
            expected: "2",
            found: fields.len(),
        });
    };
    Ok(Coord::new(parse_int(x, line)?, parse_int(y, line)?))
}

fn parse_dimensions(text: &str, line: usize) -> Result<Dimensions, FormatError> {
    let fields: Vec<&str> = text.split(';').collect();
    let [width, height] = fields.as_slice() else {
        return Err(FormatError::WrongArity {
            line,
            expected: "2",
            found: fields.len(),
        });
    };
    let width = parse_int(width, line)?;
    let height = parse_int(height, line)?;
    if width <= 0 || height <= 0 {
        return Err(FormatError::InvalidValue {
            line,
            reason: format!("map dimensions must be positive, found {width}x{height}"),
        });
    }
    Ok(Dimensions::new(width, height))
}

fn parse_delivery_point(id: u32, text: &str, line: usize) -> Result<DeliveryPoint, FormatError> {
    let fields: Vec<&str> = text.split(',').collect();
    let (x, y, required) = match fields.as_slice() {
        [x, y] => (x, y, None),
        [x, y, required] => (x, y, Some(required)),
        _ => {
            return Err(FormatError::WrongArity {
                line,
                expected: "2 or 3",
                found: fields.len(),
            });
        }
    };

    let required_position = match required {
        None => None,
        Some(text) => {
            let value = parse_int(text, line)?;
            let position = u32::try_from(value).ok().filter(|p| *p > 0);
            let Some(position) = position else {
                return Err(FormatError::InvalidValue {
                    line,
                    reason: format!("required position must be positive, found {value}"),
                });
            };
            Some(position)
        }
    };

    Ok(DeliveryPoint {
        id,
        coords: Coord::new(parse_int(x, line)?, parse_int(y, line)?),
        required_position,
    })
}

/// Parse `x1,y1:x2,y2` (or `x1,y1;x2,y2`) into its two endpoints.
fn parse_segment(text: &str, line: usize) -> Result<(Coord, Coord), FormatError> {
    let separator = if text.contains(':') { ':' } else { ';' };
    let fields: Vec<&str> = text.split(separator).collect();
    let [from, to] = fields.as_slice() else {
        return Err(FormatError::WrongArity {
            line,
            expected: "2",
            found: fields.len(),
        });
    };
    Ok((parse_coord(from, line)?, parse_coord(to, line)?))
}

/// Add every cell of an axis-aligned segment to `walls`.
///
/// Cells outside the map can never be entered, so the enumeration is clipped
/// to the map.
fn expand_wall(
    from: Coord,
    to: Coord,
    dimensions: Dimensions,
    line: usize,
    walls: &mut BTreeSet<Coord>,
) -> Result<(), FormatError> {
    if from.x == to.x {
        let low = from.y.min(to.y).max(0);
        let high = from.y.max(to.y).min(dimensions.height.saturating_sub(1));
        walls.extend((low..=high).map(|y| Coord::new(from.x, y)));
    } else if from.y == to.y {
        let low = from.x.min(to.x).max(0);
        let high = from.x.max(to.x).min(dimensions.width.saturating_sub(1));
        walls.extend((low..=high).map(|x| Coord::new(x, from.y)));
    } else {
        return Err(FormatError::InvalidValue {
            line,
            reason: format!("wall from {from} to {to} is diagonal"),
        });
    }
    Ok(())
}

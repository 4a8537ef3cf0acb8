//! Grid geometry: coordinates, map dimensions and elementary move directions.
//!
//! The judge uses a column/row frame: `x` grows to the right, `y` grows
//! downwards. Moving "up" therefore decreases `y`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the grid, addressed as `(column, row)`.
///
/// Coordinates are signed so that a step past the left or top edge can be
/// represented before it is rejected by the boundary check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl Coord {
    /// Create a coordinate from a column and a row.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Return the cell one elementary move away in `direction`.
    ///
    /// Returns `None` only if the coordinate arithmetic would overflow.
    pub fn offset(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Map dimensions. Valid cells satisfy `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of columns.
    pub width: i64,
    /// Number of rows.
    pub height: i64,
}

impl Dimensions {
    /// Create dimensions from a width and a height.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Whether `cell` lies inside the map.
    pub const fn contains(&self, cell: Coord) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// The extent of the map along `axis`.
    pub const fn extent(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Fold an arbitrary coordinate back onto the map, treating both axes as
    /// cyclic.
    pub const fn wrap(&self, cell: Coord) -> Coord {
        Coord {
            x: cell.x.rem_euclid(self.width),
            y: cell.y.rem_euclid(self.height),
        }
    }
}

/// One of the two grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal (columns).
    X,
    /// Vertical (rows).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::Y => f.write_str("Y"),
        }
    }
}

/// An elementary move direction.
///
/// Submissions encode directions with single characters: `>` right,
/// `<` left, `+` up, `-` down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `>`: one column to the right.
    Right,
    /// `<`: one column to the left.
    Left,
    /// `+`: one row up.
    Up,
    /// `-`: one row down.
    Down,
}

impl Direction {
    /// Decode a direction character.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '>' => Some(Self::Right),
            '<' => Some(Self::Left),
            '+' => Some(Self::Up),
            '-' => Some(Self::Down),
            _ => None,
        }
    }

    /// The character used for this direction in move strings.
    pub const fn symbol(self) -> char {
        match self {
            Self::Right => '>',
            Self::Left => '<',
            Self::Up => '+',
            Self::Down => '-',
        }
    }

    /// Column and row delta of one elementary move.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

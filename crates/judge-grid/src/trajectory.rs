//! Trajectories of the other drones flying over level-3 maps.
//!
//! Every other drone's position is a pure function of the global tick, so a
//! position can be recomputed any number of times, in any order, without
//! shared state. Two shapes are supported:
//!
//! - **Cyclic**: a start cell plus a run-length move string replayed forever.
//!   After `t` ticks the drone has made the first `t` moves of the infinite
//!   repetition. Leaving the map wraps around to the opposite edge.
//! - **Affine**: one expression `a*t+b` per axis, reduced modulo the map
//!   extent on that axis.
//!
//! Expressions are parsed by [`AffineExpr::parse`], which only accepts
//! integer literals, the variable `t`, `*`, `+` and `-`.

use judge_types::{Axis, Coord, Dimensions, Direction};

use crate::error::FormatError;
use crate::moves::{MoveToken, expand, parse_moves};

/// Where another drone is at any tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trajectory {
    /// A move string replayed in a loop.
    Cyclic(CyclicPath),
    /// A closed-form position per axis.
    Affine {
        /// Column expression.
        x: AffineExpr,
        /// Row expression.
        y: AffineExpr,
    },
}

impl Trajectory {
    /// Parse a drone descriptor: `x,y;moves` (cyclic) or `exprX,exprY`
    /// (affine).
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] tagged with `line` if the descriptor is
    /// malformed.
    pub fn parse(text: &str, line: usize) -> Result<Self, FormatError> {
        if let Some((start, moves)) = text.split_once(';') {
            let start = crate::map::parse_coord(start, line)?;
            return CyclicPath::parse(start, moves, line).map(Self::Cyclic);
        }

        let fields: Vec<&str> = text.split(',').collect();
        let [x, y] = fields.as_slice() else {
            return Err(FormatError::WrongArity {
                line,
                expected: "2",
                found: fields.len(),
            });
        };
        Ok(Self::Affine {
            x: AffineExpr::parse(x, line)?,
            y: AffineExpr::parse(y, line)?,
        })
    }

    /// Position of the drone at `tick` on a map of `dimensions`.
    pub fn position_at(&self, tick: u64, dimensions: Dimensions) -> Coord {
        match self {
            Self::Cyclic(path) => path.position_at(tick, dimensions),
            Self::Affine { x, y } => Coord::new(
                x.evaluate(tick, dimensions.extent(Axis::X)),
                y.evaluate(tick, dimensions.extent(Axis::Y)),
            ),
        }
    }
}

/// A start cell and a looping sequence of elementary moves.
///
/// Displacements are precomputed per prefix so that any tick is resolved in
/// constant time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicPath {
    start: Coord,
    /// `prefix[i]` is the displacement after the first `i` moves of one cycle;
    /// the last entry is the displacement of a whole cycle.
    prefix: Vec<(i64, i64)>,
}

impl CyclicPath {
    /// Build a path from a start cell and already decoded moves.
    pub fn new(start: Coord, moves: &[Direction]) -> Self {
        let mut prefix = Vec::with_capacity(moves.len().saturating_add(1));
        let mut dx = 0_i64;
        let mut dy = 0_i64;
        prefix.push((dx, dy));
        for direction in moves {
            let (mx, my) = direction.delta();
            dx = dx.saturating_add(mx);
            dy = dy.saturating_add(my);
            prefix.push((dx, dy));
        }
        Self { start, prefix }
    }

    fn parse(start: Coord, moves: &str, line: usize) -> Result<Self, FormatError> {
        let tokens: Vec<MoveToken> = parse_moves(moves, line)?;
        let mut directions = Vec::new();
        for symbol in expand(&tokens) {
            let Some(direction) = Direction::from_symbol(symbol) else {
                return Err(FormatError::InvalidValue {
                    line,
                    reason: format!("unknown drone move '{symbol}'"),
                });
            };
            directions.push(direction);
        }
        Ok(Self::new(start, &directions))
    }

    /// Number of moves in one cycle.
    pub fn cycle_len(&self) -> usize {
        self.prefix.len().saturating_sub(1)
    }

    /// Position after `tick` moves, wrapped onto the map.
    pub fn position_at(&self, tick: u64, dimensions: Dimensions) -> Coord {
        let cycle_len = u64::try_from(self.cycle_len()).unwrap_or(u64::MAX);
        let (Some(cycles), Some(remainder)) =
            (tick.checked_div(cycle_len), tick.checked_rem(cycle_len))
        else {
            return dimensions.wrap(self.start);
        };
        let remainder = usize::try_from(remainder).unwrap_or(0);
        let (cycle_dx, cycle_dy) = self.prefix.last().copied().unwrap_or((0, 0));
        let (rem_dx, rem_dy) = self.prefix.get(remainder).copied().unwrap_or((0, 0));

        Coord::new(
            drift(self.start.x, cycles, cycle_dx, rem_dx, dimensions.extent(Axis::X)),
            drift(self.start.y, cycles, cycle_dy, rem_dy, dimensions.extent(Axis::Y)),
        )
    }
}

/// `coefficient * t + offset`, evaluated modulo a map extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineExpr {
    /// Factor applied to the tick.
    pub coefficient: i64,
    /// Constant term.
    pub offset: i64,
}

impl AffineExpr {
    /// Create an expression.
    pub const fn new(coefficient: i64, offset: i64) -> Self {
        Self {
            coefficient,
            offset,
        }
    }

    /// Parse an expression such as `2*t+5`, `t - 3`, `-3t`, `t*4` or `17`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidValue`] for anything outside the
    /// supported grammar, including an empty expression.
    pub fn parse(text: &str, line: usize) -> Result<Self, FormatError> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = |reason: String| FormatError::InvalidValue { line, reason };

        if compact.is_empty() {
            return Err(invalid("empty drone expression".to_owned()));
        }
        if let Some(bad) = compact
            .chars()
            .find(|c| !(c.is_ascii_digit() || matches!(c, 't' | '*' | '+' | '-')))
        {
            return Err(invalid(format!("unsupported character '{bad}' in drone expression")));
        }

        let mut expr = Self::new(0, 0);
        for (negative, term) in split_terms(&compact) {
            if term.is_empty() {
                return Err(invalid(format!("dangling sign in drone expression '{text}'")));
            }
            let (is_tick, magnitude) = parse_term(term)
                .ok_or_else(|| invalid(format!("malformed term '{term}' in drone expression")))?;
            let value = if negative { magnitude.checked_neg() } else { Some(magnitude) };
            let value = value.ok_or_else(|| invalid("drone expression overflows".to_owned()))?;
            let slot = if is_tick { &mut expr.coefficient } else { &mut expr.offset };
            *slot = slot
                .checked_add(value)
                .ok_or_else(|| invalid("drone expression overflows".to_owned()))?;
        }
        Ok(expr)
    }

    /// Value at `tick`, reduced into `0..extent`.
    pub fn evaluate(&self, tick: u64, extent: i64) -> i64 {
        let extent_wide = i128::from(extent.max(1));
        let tick = i128::from(tick).rem_euclid(extent_wide);
        let raw = i128::from(self.coefficient)
            .saturating_mul(tick)
            .saturating_add(i128::from(self.offset));
        reduce(raw, extent)
    }
}

/// Split a whitespace-free expression into signed terms.
fn split_terms(expr: &str) -> Vec<(bool, &str)> {
    let mut terms = Vec::new();
    let mut negative = false;
    let mut start = 0;
    for (i, c) in expr.char_indices() {
        if c == '+' || c == '-' {
            let previous = expr.get(start..i).unwrap_or_default();
            // A leading sign belongs to the first term.
            if i == 0 {
                negative = c == '-';
                start = i.saturating_add(1);
                continue;
            }
            terms.push((negative, previous));
            negative = c == '-';
            start = i.saturating_add(1);
        }
    }
    terms.push((negative, expr.get(start..).unwrap_or_default()));
    terms
}

/// Parse one unsigned term. Returns whether it multiplies `t`, and its
/// magnitude.
fn parse_term(term: &str) -> Option<(bool, i64)> {
    let Some((before, after)) = term.split_once('t') else {
        return term.parse().ok().map(|value| (false, value));
    };
    if after.contains('t') {
        return None;
    }
    let factor = match (before, after) {
        ("", "") => return Some((true, 1)),
        (before, "") => before.strip_suffix('*').unwrap_or(before),
        ("", after) => after.strip_prefix('*')?,
        _ => return None,
    };
    factor.parse().ok().map(|factor| (true, factor))
}

/// `start + cycles * cycle_delta + partial_delta`, reduced into `0..extent`
/// without overflowing for any tick.
fn drift(start: i64, cycles: u64, cycle_delta: i64, partial_delta: i64, extent: i64) -> i64 {
    let extent_wide = i128::from(extent.max(1));
    let cycles = i128::from(cycles).rem_euclid(extent_wide);
    let cycle_delta = i128::from(cycle_delta).rem_euclid(extent_wide);
    let raw = i128::from(start)
        .saturating_add(cycles.saturating_mul(cycle_delta))
        .saturating_add(i128::from(partial_delta));
    reduce(raw, extent)
}

/// Reduce `value` into `0..extent`. `extent` is positive for loaded maps.
fn reduce(value: i128, extent: i64) -> i64 {
    let extent = i128::from(extent.max(1));
    i64::try_from(value.rem_euclid(extent)).unwrap_or(0)
}

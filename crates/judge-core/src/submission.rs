//! Parsing of contestant output files.
//!
//! Line 1 holds the reported total number of elementary moves, any integer
//! (a negative total is read and simply never matches). Every other
//! non-blank line is a route `pointId;x,y;moves`. Routes are parsed lazily so
//! that a malformed line is only reported once every earlier route has been
//! checked.

use judge_grid::{FormatError, MoveToken, parse_coord, parse_moves};
use judge_types::Coord;

/// One route of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// 1-based line the route was read from.
    pub line: usize,
    /// Delivery point this route serves.
    pub point_id: u32,
    /// Declared starting cell.
    pub origin: Coord,
    /// Run-length move tokens.
    pub moves: Vec<MoveToken>,
}

impl Route {
    /// Parse a `pointId;x,y;moves` line.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] tagged with `line` if the line does not have
    /// three fields or a field is malformed.
    pub fn parse(text: &str, line: usize) -> Result<Self, FormatError> {
        let fields: Vec<&str> = text.split(';').collect();
        let [point_id, origin, moves] = fields.as_slice() else {
            return Err(FormatError::WrongArity {
                line,
                expected: "3",
                found: fields.len(),
            });
        };

        let point_id = point_id.trim();
        let Ok(point_id) = point_id.parse() else {
            return Err(FormatError::InvalidNumber {
                line,
                value: point_id.to_owned(),
            });
        };

        Ok(Self {
            line,
            point_id,
            origin: parse_coord(origin, line)?,
            moves: parse_moves(moves, line)?,
        })
    }
}

/// A submission whose header has been read.
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    reported_total: i64,
    text: &'a str,
}

impl<'a> Submission<'a> {
    /// Read the header line.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnexpectedEof`] for empty text and
    /// [`FormatError::InvalidNumber`] if line 1 is not an integer.
    pub fn parse(text: &'a str) -> Result<Self, FormatError> {
        let Some(header) = text.lines().next() else {
            return Err(FormatError::UnexpectedEof { line: 1 });
        };
        let header = header.trim();
        let Ok(reported_total) = header.parse() else {
            return Err(FormatError::InvalidNumber {
                line: 1,
                value: header.to_owned(),
            });
        };
        Ok(Self {
            reported_total,
            text,
        })
    }

    /// Total the contestant claims the routes add up to.
    pub const fn reported_total(&self) -> i64 {
        self.reported_total
    }

    /// Routes in file order, skipping blank lines.
    pub fn routes(&self) -> impl Iterator<Item = Result<Route, FormatError>> + 'a {
        self.text
            .lines()
            .enumerate()
            .skip(1)
            .map(|(index, text)| (index.saturating_add(1), text.trim()))
            .filter(|(_, text)| !text.is_empty())
            .map(|(line, text)| Route::parse(text, line))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn route_fields() {
        let route = Route::parse("3;32,32;8>1-", 2).unwrap();
        assert_eq!(route.point_id, 3);
        assert_eq!(route.origin, Coord::new(32, 32));
        assert_eq!(route.moves, vec![MoveToken::new(8, '>'), MoveToken::new(1, '-')]);
        assert_eq!(route.line, 2);
    }

    #[test]
    fn route_arity() {
        assert!(matches!(
            Route::parse("3;32,32", 5),
            Err(FormatError::WrongArity { line: 5, found: 2, .. })
        ));
    }

    #[test]
    fn route_bad_id() {
        assert!(matches!(
            Route::parse("x;1,1;1>", 4),
            Err(FormatError::InvalidNumber { line: 4, .. })
        ));
        assert!(matches!(
            Route::parse("-1;1,1;1>", 4),
            Err(FormatError::InvalidNumber { line: 4, .. })
        ));
    }

    #[test]
    fn header_and_blank_lines() {
        let text = "12\r\n\r\n1;0,0;2>\n\n2;2,0;10-\n";
        let submission = Submission::parse(text).unwrap();
        assert_eq!(submission.reported_total(), 12);
        let lines: Vec<usize> = submission.routes().map(|r| r.unwrap().line).collect();
        assert_eq!(lines, vec![3, 5]);
    }

    #[test]
    fn bad_header() {
        assert_eq!(
            Submission::parse("").map(|s| s.reported_total()),
            Err(FormatError::UnexpectedEof { line: 1 })
        );
        assert!(matches!(
            Submission::parse("4.5\n"),
            Err(FormatError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn negative_header_is_read() {
        let submission = Submission::parse(" -4 \n1;0,0;2>\n").unwrap();
        assert_eq!(submission.reported_total(), -4);
        assert_eq!(submission.routes().count(), 1);
    }
}

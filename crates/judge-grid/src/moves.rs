//! Run-length encoded move strings.
//!
//! A move string is a concatenation of tokens, each a decimal repeat count
//! followed by one direction character: `3>2+` means three moves right, then
//! two moves up. Tokenizing is purely syntactic. Whether the character is a
//! known direction is decided when the token is replayed, so an unknown
//! character is reported at the point of the route where it occurs.

use judge_types::Direction;

use crate::error::{FormatError, MoveError};

/// One run-length token: `count` repetitions of `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToken {
    /// Number of elementary moves.
    pub count: u64,
    /// The raw direction character.
    pub symbol: char,
}

impl MoveToken {
    /// Create a token.
    pub const fn new(count: u64, symbol: char) -> Self {
        Self { count, symbol }
    }

    /// Decode the direction character.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownMovement`] if the character is not one of
    /// `> < + -`.
    pub const fn direction(&self) -> Result<Direction, MoveError> {
        match Direction::from_symbol(self.symbol) {
            Some(direction) => Ok(direction),
            None => Err(MoveError::UnknownMovement { token: self.symbol }),
        }
    }
}

/// Split a move string into run-length tokens.
///
/// Leading and trailing whitespace is ignored. `line` is only used for error
/// reporting.
///
/// # Errors
///
/// Returns [`FormatError::InvalidValue`] when a direction character has no
/// repeat count or the string ends with a dangling count, and
/// [`FormatError::InvalidNumber`] when a count does not fit in 64 bits.
pub fn parse_moves(text: &str, line: usize) -> Result<Vec<MoveToken>, FormatError> {
    let mut tokens = Vec::new();
    let mut digits = String::new();

    for c in text.trim().chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if digits.is_empty() {
            return Err(FormatError::InvalidValue {
                line,
                reason: format!("move '{c}' has no repeat count"),
            });
        }
        let Ok(count) = digits.parse::<u64>() else {
            return Err(FormatError::InvalidNumber {
                line,
                value: digits,
            });
        };
        tokens.push(MoveToken::new(count, c));
        digits.clear();
    }

    if !digits.is_empty() {
        return Err(FormatError::InvalidValue {
            line,
            reason: format!("repeat count {digits} has no direction"),
        });
    }

    Ok(tokens)
}

/// Expand tokens into their elementary move characters, in order.
pub fn expand(tokens: &[MoveToken]) -> impl Iterator<Item = char> + '_ {
    tokens.iter().flat_map(|token| {
        std::iter::repeat_n(token.symbol, usize::try_from(token.count).unwrap_or(usize::MAX))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_preserves_order_and_counts() {
        let tokens = parse_moves("3>2+", 1).unwrap_or_default();
        let expanded: String = expand(&tokens).collect();
        assert_eq!(expanded, ">>>++");
    }

    #[test]
    fn multi_digit_counts() {
        let tokens = parse_moves("12-1<", 1).unwrap_or_default();
        assert_eq!(tokens, vec![MoveToken::new(12, '-'), MoveToken::new(1, '<')]);
    }

    #[test]
    fn empty_string_has_no_moves() {
        let tokens = parse_moves("   ", 1).unwrap_or_default();
        assert!(tokens.is_empty());
    }

    #[test]
    fn missing_count_is_format_error() {
        let err = parse_moves("3>>", 7);
        assert!(matches!(err, Err(FormatError::InvalidValue { line: 7, .. })));
    }

    #[test]
    fn dangling_count_is_format_error() {
        let err = parse_moves("3>4", 2);
        assert!(matches!(err, Err(FormatError::InvalidValue { line: 2, .. })));
    }

    #[test]
    fn oversized_count_is_format_error() {
        let err = parse_moves("99999999999999999999>", 4);
        assert!(matches!(err, Err(FormatError::InvalidNumber { line: 4, .. })));
    }

    #[test]
    fn unknown_symbol_is_tokenized_but_not_decoded() {
        let tokens = parse_moves("2x", 1).unwrap_or_default();
        assert_eq!(tokens, vec![MoveToken::new(2, 'x')]);
        assert_eq!(
            tokens.first().map(MoveToken::direction),
            Some(Err(MoveError::UnknownMovement { token: 'x' }))
        );
    }

    #[test]
    fn known_symbols_decode() {
        assert_eq!(MoveToken::new(1, '>').direction(), Ok(Direction::Right));
        assert_eq!(MoveToken::new(1, '-').direction(), Ok(Direction::Down));
    }
}

//! Error types for parsing robot and threat inputs.

use std::num::ParseIntError;

/// Errors raised while parsing an initial position or a threat line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input did not split into the expected number of tokens.
    #[error("expected {expected} whitespace-separated tokens, found {found} in {input:?}")]
    TokenCount {
        /// Number of tokens the format requires.
        expected: usize,
        /// Number of tokens actually present.
        found: usize,
        /// The offending input.
        input: String,
    },

    /// A coordinate token is not an integer.
    #[error("invalid {axis} coordinate {token:?}")]
    InvalidCoordinate {
        /// Which axis failed (`"x"` or `"y"`).
        axis: &'static str,
        /// The token that failed to parse.
        token: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A threat kind token must be exactly one character.
    #[error("invalid threat kind {token:?}")]
    InvalidThreatKind {
        /// The token that failed to parse.
        token: String,
    },
}

/// Splits `input` on whitespace and requires exactly three tokens.
pub(crate) fn three_tokens(input: &str) -> Result<[&str; 3], ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(ParseError::TokenCount {
            expected: 3,
            found: tokens.len(),
            input: input.to_owned(),
        }),
    }
}

pub(crate) fn parse_coordinate(axis: &'static str, token: &str) -> Result<i32, ParseError> {
    token
        .parse()
        .map_err(|source| ParseError::InvalidCoordinate {
            axis,
            token: token.to_owned(),
            source,
        })
}

//! The exploration field: its extent and the threats placed on it.

use crate::error::{ParseError, parse_coordinate, three_tokens};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper limits of the field. Both axes run from `0` to `max` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBounds {
    /// Largest valid `x` and `y`.
    pub max: IVec2,
}

impl FieldBounds {
    /// Bounds spanning `[0, max_x]` by `[0, max_y]`.
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self {
            max: IVec2::new(max_x, max_y),
        }
    }

    /// Returns `true` if `cell` lies inside `[0, max]` on both axes.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(IVec2::ZERO).all() && cell.cmple(self.max).all()
    }
}

/// What occupies a threat cell. Only [`ThreatKind::Bomb`] triggers a detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatKind {
    /// The only kind that triggers a detection.
    Bomb,
    /// Any other marker. Recorded but never reported.
    Other(char),
}

impl ThreatKind {
    /// Maps a kind symbol to a kind, given the symbol that denotes a bomb.
    pub fn from_symbol(symbol: char, bomb_symbol: char) -> Self {
        if symbol == bomb_symbol {
            Self::Bomb
        } else {
            Self::Other(symbol)
        }
    }

    /// Returns `true` for [`ThreatKind::Bomb`].
    pub fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }
}

/// A labelled cell on the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Threat {
    /// Column of the threat cell.
    pub x: i32,
    /// Row of the threat cell.
    pub y: i32,
    /// What sits on the cell.
    pub kind: ThreatKind,
}

impl Threat {
    /// Creates a threat of any kind at `(x, y)`.
    pub fn new(x: i32, y: i32, kind: ThreatKind) -> Self {
        Self { x, y, kind }
    }

    /// Shorthand for a [`ThreatKind::Bomb`] at `(x, y)`.
    pub fn bomb(x: i32, y: i32) -> Self {
        Self::new(x, y, ThreatKind::Bomb)
    }

    /// Parses `"x y K"` where `K` is a single kind character and
    /// `bomb_symbol` decides which character means a bomb.
    pub fn parse_with(line: &str, bomb_symbol: char) -> Result<Self, ParseError> {
        let [x, y, kind] = three_tokens(line)?;
        let x = parse_coordinate("x", x)?;
        let y = parse_coordinate("y", y)?;
        let mut chars = kind.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ParseError::InvalidThreatKind {
                    token: kind.to_owned(),
                });
            }
        };
        Ok(Self::new(x, y, ThreatKind::from_symbol(symbol, bomb_symbol)))
    }

    /// Returns `true` if the threat sits exactly on `(x, y)`.
    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    /// Writes the threat as `"x y K"` with `bomb_symbol` for bombs, the
    /// inverse of [`Threat::parse_with`] under the same symbol.
    pub fn to_line(&self, bomb_symbol: char) -> String {
        let kind = match self.kind {
            ThreatKind::Bomb => bomb_symbol,
            ThreatKind::Other(c) => c,
        };
        format!("{} {} {}", self.x, self.y, kind)
    }
}

/// Renders as `"x y K"` using the default bomb symbol (`B`). Use
/// [`Threat::to_line`] when threats were parsed with a custom bomb symbol.
impl fmt::Display for Threat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line(crate::interpreter::DEFAULT_BOMB_SYMBOL))
    }
}

/// Parses a threat line using the default bomb symbol (`B`).
impl FromStr for Threat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, crate::interpreter::DEFAULT_BOMB_SYMBOL)
    }
}

/// Returns the first threat in list order that sits exactly on `(x, y)`.
///
/// Later entries for the same cell are shadowed, even if the first one is not
/// a bomb.
pub fn find_threat(threats: &[Threat], x: i32, y: i32) -> Option<&Threat> {
    threats.iter().find(|threat| threat.is_at(x, y))
}

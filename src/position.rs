//! Robot pose on the grid: a cell plus the cardinal direction it faces.

use crate::error::{ParseError, parse_coordinate, three_tokens};
use crate::field::FieldBounds;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cardinal direction the robot points toward.
///
/// Any character other than `N`, `S`, `E` or `W` is kept verbatim as
/// [`Heading::Unknown`] so it still shows up in logs exactly as supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Facing `+Y`.
    North,
    /// Facing `-Y`.
    South,
    /// Facing `+X`.
    East,
    /// Facing `-X`.
    West,
    /// Unrecognized facing. Rotations and moves leave it untouched.
    Unknown(char),
}

impl Heading {
    /// Blank heading used by [`RobotPosition::reset`].
    pub const BLANK: Heading = Heading::Unknown(' ');

    /// Reads a facing character. Anything but `N`, `S`, `E` or `W` becomes
    /// [`Heading::Unknown`].
    pub fn from_char(c: char) -> Self {
        match c {
            'N' => Self::North,
            'S' => Self::South,
            'E' => Self::East,
            'W' => Self::West,
            other => Self::Unknown(other),
        }
    }

    /// The character this heading is written as in logs and results.
    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
            Self::Unknown(c) => c,
        }
    }

    /// Quarter turn counter-clockwise: N -> W -> S -> E -> N.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
            unknown => unknown,
        }
    }

    /// Quarter turn clockwise: N -> E -> S -> W -> N.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            unknown => unknown,
        }
    }

    /// Unit grid step for this heading. North is `+Y`, East is `+X`.
    pub fn delta(self) -> Option<IVec2> {
        match self {
            Self::North => Some(IVec2::Y),
            Self::South => Some(IVec2::NEG_Y),
            Self::East => Some(IVec2::X),
            Self::West => Some(IVec2::NEG_X),
            Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single pose of the robot.
///
/// Positions are values: every rotation or move returns a new one, so poses
/// already stored in a log are never affected by later steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotPosition {
    /// Column, growing eastward.
    pub x: i32,
    /// Row, growing northward.
    pub y: i32,
    /// Direction the robot faces.
    pub heading: Heading,
}

impl Default for RobotPosition {
    fn default() -> Self {
        Self::reset()
    }
}

impl RobotPosition {
    /// Builds a pose as given. Nothing is validated or clamped here.
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// The cleared pose: origin with a blank heading.
    pub fn reset() -> Self {
        Self::new(0, 0, Heading::BLANK)
    }

    /// The grid cell occupied, without the heading.
    pub fn cell(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Same cell, heading turned a quarter counter-clockwise.
    pub fn rotated_left(&self) -> Self {
        Self::new(self.x, self.y, self.heading.left())
    }

    /// Same cell, heading turned a quarter clockwise.
    pub fn rotated_right(&self) -> Self {
        Self::new(self.x, self.y, self.heading.right())
    }

    /// Advances one cell along the heading, clamped to `bounds`.
    ///
    /// Only the axis being moved is clamped, and only on the side the robot
    /// moves toward: stepping toward `+axis` caps at the field maximum,
    /// stepping toward `-axis` floors at zero. An unknown heading has no
    /// delta, so the pose is returned unchanged. The step saturates at the
    /// `i32` limits before clamping.
    pub fn moved_forward(&self, bounds: &FieldBounds) -> Self {
        let Some(delta) = self.heading.delta() else {
            return *self;
        };
        let target = self.cell().saturating_add(delta);
        let clamp = |value: i32, step: i32, max: i32, current: i32| match step.signum() {
            1 => value.min(max),
            -1 => value.max(0),
            _ => current,
        };
        Self::new(
            clamp(target.x, delta.x, bounds.max.x, self.x),
            clamp(target.y, delta.y, bounds.max.y, self.y),
            self.heading,
        )
    }

    /// Formats the pose as `(x,y,F)`, the notation used in trace entries.
    pub fn to_trace_string(&self) -> String {
        format!("({},{},{})", self.x, self.y, self.heading)
    }
}

/// Renders as `x y F`, the same shape the pose is parsed from.
impl fmt::Display for RobotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

/// Parses `"x y F"`: two integers and a facing token whose first character
/// is the heading.
impl FromStr for RobotPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, facing] = three_tokens(s)?;
        let x = parse_coordinate("x", x)?;
        let y = parse_coordinate("y", y)?;
        // split_whitespace never yields empty tokens
        let heading = facing.chars().next().map_or(Heading::BLANK, Heading::from_char);
        Ok(Self::new(x, y, heading))
    }
}

//! Maps command characters to robot operations.
//!
//! Configure a [`CommandInterpreter`] with a [`RobotConfig`], register
//! character-to-operation mappings via [`CommandInterpreter::set_op`] or
//! [`CommandInterpreter::populate_standard_symbols`], then resolve each
//! command with [`CommandInterpreter::op_for`].

use crate::error::ParseError;
use crate::field::{FieldBounds, Threat};
use crate::position::RobotPosition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Symbol that marks a bomb in threat input when no other is configured.
pub const DEFAULT_BOMB_SYMBOL: char = 'B';

/// Command and threat symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Rotate 90 degrees counter-clockwise.
    pub rotate_left: char,
    /// Rotate 90 degrees clockwise.
    pub rotate_right: char,
    /// Advance one cell along the current heading.
    pub forward: char,
    /// Threat kind character that counts as a bomb.
    pub bomb: char,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            rotate_left: 'L',
            rotate_right: 'R',
            forward: 'F',
            bomb: DEFAULT_BOMB_SYMBOL,
        }
    }
}

impl RobotConfig {
    /// Parses a threat line `"x y K"`, treating [`RobotConfig::bomb`] as the
    /// bomb marker.
    pub fn parse_threat(&self, line: &str) -> Result<Threat, ParseError> {
        Threat::parse_with(line, self.bomb)
    }

    /// Writes `threat` as `"x y K"` using [`RobotConfig::bomb`].
    pub fn format_threat(&self, threat: &Threat) -> String {
        threat.to_line(self.bomb)
    }
}

/// Operations a single command character can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotOp {
    /// Quarter turn counter-clockwise.
    RotateLeft,
    /// Quarter turn clockwise.
    RotateRight,
    /// One step forward, clamped to the field.
    Forward,
    /// No-op. The step is still logged.
    Ignore,
}

impl RobotOp {
    /// Applies this operation to `pos`, producing the next pose.
    pub fn apply(self, pos: &RobotPosition, bounds: &FieldBounds) -> RobotPosition {
        match self {
            RobotOp::RotateLeft => pos.rotated_left(),
            RobotOp::RotateRight => pos.rotated_right(),
            RobotOp::Forward => pos.moved_forward(bounds),
            RobotOp::Ignore => *pos,
        }
    }
}

/// Resolves command characters into [`RobotOp`]s.
#[derive(Clone, Debug)]
pub struct CommandInterpreter {
    op_map: HashMap<char, RobotOp>,
    config: RobotConfig,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        let mut interpreter = Self::new(RobotConfig::default());
        interpreter.populate_standard_symbols();
        interpreter
    }
}

impl CommandInterpreter {
    /// Creates an interpreter with an empty symbol map.
    ///
    /// Every character resolves to [`RobotOp::Ignore`] until mappings are
    /// registered.
    pub fn new(config: RobotConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, RobotOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns `op` to `symbol`, replacing any earlier mapping.
    pub fn set_op(&mut self, symbol: char, op: RobotOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the rotate and forward symbols named in the config.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            (self.config.rotate_left, RobotOp::RotateLeft),
            (self.config.rotate_right, RobotOp::RotateRight),
            (self.config.forward, RobotOp::Forward),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Looks up the operation for `symbol`. Unmapped symbols are ignored.
    pub fn op_for(&self, symbol: char) -> RobotOp {
        self.op_map.get(&symbol).copied().unwrap_or(RobotOp::Ignore)
    }

    /// The symbols this interpreter was built from.
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }
}

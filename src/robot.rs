//! The robot simulator: walks a command string across the field and records
//! every pose it takes and every bomb it stands on.

use crate::error::ParseError;
use crate::field::{FieldBounds, Threat, find_threat};
use crate::interpreter::{CommandInterpreter, RobotOp};
use crate::position::RobotPosition;
use std::sync::Arc;

/// Fixed marker appended to the results after each detected position.
pub const THREAT_DETECTED: &str = "Threat detected";

/// A single robot exploring the field.
///
/// Construction does no validation. The initial position string is parsed by
/// [`Robot::explore`], which then fills the trace, position and result logs.
/// Calling `explore` again appends a second run to the same logs.
#[derive(Clone, Debug)]
pub struct Robot {
    name: String,
    commands: String,
    initial_position: String,
    bounds: FieldBounds,
    threats: Arc<[Threat]>,
    interpreter: CommandInterpreter,

    trace: Vec<String>,
    positions: Vec<RobotPosition>,
    results: Vec<String>,
    detections: Vec<RobotPosition>,
}

impl Robot {
    /// Creates a robot using the standard `L`/`R`/`F` command symbols.
    ///
    /// `threats` may be any list that converts into a shared slice, so one
    /// threat list can be handed to several robots without copying.
    pub fn new(
        threats: impl Into<Arc<[Threat]>>,
        name: impl Into<String>,
        initial_position: impl Into<String>,
        commands: impl Into<String>,
        max_x: i32,
        max_y: i32,
    ) -> Self {
        Self {
            name: name.into(),
            commands: commands.into(),
            initial_position: initial_position.into(),
            bounds: FieldBounds::new(max_x, max_y),
            threats: threats.into(),
            interpreter: CommandInterpreter::default(),
            trace: Vec::new(),
            positions: Vec::new(),
            results: Vec::new(),
            detections: Vec::new(),
        }
    }

    /// Swaps in a custom command interpreter (builder pattern).
    pub fn with_interpreter(mut self, interpreter: CommandInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Runs the command string from the initial position.
    ///
    /// For each command the current cell is checked for a bomb first, then
    /// the command is applied. The starting cell is only checked as part of
    /// the first command, so a robot with no commands is never checked.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the initial position string is malformed.
    /// Nothing is logged in that case.
    pub fn explore(&mut self) -> Result<(), ParseError> {
        let mut pos: RobotPosition = self.initial_position.parse()?;
        let detections_before = self.detections.len();

        tracing::info!(
            robot = %self.name,
            start = %pos,
            commands = self.commands.chars().count(),
            "starting exploration"
        );

        self.positions.push(pos);
        self.trace.push(format!("Robot name: {}", self.name));
        self.trace.push("Exploring grid for bomb presence".to_owned());
        self.trace
            .push(format!("Robot initial position {}", pos.to_trace_string()));
        self.trace.push(format!("Robot Commands=[{}]", self.commands));

        if !self.bounds.contains(pos.cell()) {
            tracing::warn!(
                robot = %self.name,
                start = %pos,
                max_x = self.bounds.max.x,
                max_y = self.bounds.max.y,
                "initial position lies outside the field"
            );
        }

        // Taken so `self` stays mutably borrowable inside the loop; restored below.
        let commands = std::mem::take(&mut self.commands);
        for command in commands.chars() {
            self.locate_bomb_at(&pos);

            let op = self.interpreter.op_for(command);
            if op == RobotOp::Forward && pos.heading.delta().is_none() {
                tracing::warn!(
                    robot = %self.name,
                    heading = %pos.heading,
                    "forward requested with unrecognized heading; position unchanged"
                );
            }
            pos = op.apply(&pos, &self.bounds);
            tracing::debug!(robot = %self.name, %command, ?op, position = %pos, "command executed");

            self.trace.push(format!("Executing command [{command}]"));
            self.trace
                .push(format!("Affected Robot position {}", pos.to_trace_string()));
            self.positions.push(pos);
        }
        self.commands = commands;

        self.trace.push("Finished exploration".to_owned());
        tracing::info!(
            robot = %self.name,
            finish = %pos,
            detections = self.detections.len() - detections_before,
            "finished exploration"
        );
        Ok(())
    }

    /// Checks `pos` against the threat list and records a bomb hit.
    fn locate_bomb_at(&mut self, pos: &RobotPosition) {
        self.trace.push(format!(
            "Locating bomb using coordinates ({},{})",
            pos.x, pos.y
        ));

        let Some(threat) = find_threat(&self.threats, pos.x, pos.y) else {
            return;
        };
        if !threat.kind.is_bomb() {
            return;
        }

        tracing::info!(robot = %self.name, x = pos.x, y = pos.y, "bomb detected");
        self.results.push(pos.to_string());
        self.results.push(THREAT_DETECTED.to_owned());
        self.trace
            .push(format!("Threat detected at ({},{})", pos.x, pos.y));
        self.detections.push(*pos);
    }

    /// The robot's identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command string as supplied.
    pub fn commands(&self) -> &str {
        &self.commands
    }

    /// The field limits moves are clamped to.
    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    /// The threat list, in lookup order.
    pub fn threats(&self) -> &[Threat] {
        &self.threats
    }

    /// Human-readable log of every exploration step.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Every pose taken: the initial one, then one per command.
    pub fn positions(&self) -> &[RobotPosition] {
        &self.positions
    }

    /// Detection records: for each hit, the pose as `x y F` followed by
    /// [`THREAT_DETECTED`].
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Poses at which a bomb was detected, in detection order.
    pub fn detections(&self) -> &[RobotPosition] {
        &self.detections
    }

    /// The last logged pose, if `explore` has run.
    pub fn final_position(&self) -> Option<RobotPosition> {
        self.positions.last().copied()
    }
}

// tests/exploration.rs
use minefield_robot::{
    CommandInterpreter, Heading, ParseError, Robot, RobotConfig, RobotOp, RobotPosition,
    THREAT_DETECTED, Threat, ThreatKind,
};
use std::sync::Arc;

fn pos(x: i32, y: i32, heading: char) -> RobotPosition {
    RobotPosition::new(x, y, Heading::from_char(heading))
}

fn explored(threats: Vec<Threat>, initial: &str, commands: &str, max: i32) -> Robot {
    let mut robot = Robot::new(threats, "R2", initial, commands, max, max);
    robot.explore().unwrap();
    robot
}

#[test]
fn test_walk_without_threats() {
    let robot = explored(Vec::new(), "0 0 N", "FFRFF", 5);

    assert_eq!(
        robot.positions(),
        &[
            pos(0, 0, 'N'),
            pos(0, 1, 'N'),
            pos(0, 2, 'N'),
            pos(0, 2, 'E'),
            pos(1, 2, 'E'),
            pos(2, 2, 'E'),
        ]
    );
    assert_eq!(robot.final_position(), Some(pos(2, 2, 'E')));
    assert!(robot.results().is_empty());
    assert!(robot.detections().is_empty());
}

#[test]
fn test_bomb_on_path_is_reported_once() {
    let robot = explored(vec![Threat::bomb(0, 1)], "0 0 N", "FFRFF", 5);

    // Checked before the second F, while standing on (0,1).
    assert_eq!(robot.results(), &["0 1 N", THREAT_DETECTED]);
    assert_eq!(robot.detections(), &[pos(0, 1, 'N')]);
    assert!(robot.trace().iter().any(|t| t == "Threat detected at (0,1)"));
    assert_eq!(robot.positions().len(), 6);
}

#[test]
fn test_non_bomb_threat_is_silent() {
    let threats = vec![Threat::new(0, 1, ThreatKind::Other('M'))];
    let robot = explored(threats, "0 0 N", "FFRFF", 5);
    assert!(robot.results().is_empty());
}

#[test]
fn test_first_listed_threat_wins() {
    // A non-bomb listed first hides a bomb on the same cell.
    let threats = vec![
        Threat::new(0, 1, ThreatKind::Other('M')),
        Threat::bomb(0, 1),
    ];
    let robot = explored(threats, "0 0 N", "FF", 5);
    assert!(robot.results().is_empty());
}

#[test]
fn test_empty_commands() {
    let robot = explored(vec![Threat::bomb(0, 0)], "0 0 N", "", 5);

    // The start cell is only checked inside the command loop.
    assert_eq!(robot.positions(), &[pos(0, 0, 'N')]);
    assert!(robot.results().is_empty());
    assert_eq!(
        robot.trace(),
        &[
            "Robot name: R2",
            "Exploring grid for bomb presence",
            "Robot initial position (0,0,N)",
            "Robot Commands=[]",
            "Finished exploration",
        ]
    );
}

#[test]
fn test_start_cell_checked_on_first_command() {
    let robot = explored(vec![Threat::bomb(2, 3)], "2 3 E", "L", 5);
    assert_eq!(robot.results(), &["2 3 E", THREAT_DETECTED]);
}

#[test]
fn test_trace_for_single_step() {
    let robot = explored(vec![Threat::bomb(1, 1)], "1 1 S", "F", 5);
    assert_eq!(
        robot.trace(),
        &[
            "Robot name: R2",
            "Exploring grid for bomb presence",
            "Robot initial position (1,1,S)",
            "Robot Commands=[F]",
            "Locating bomb using coordinates (1,1)",
            "Threat detected at (1,1)",
            "Executing command [F]",
            "Affected Robot position (1,0,S)",
            "Finished exploration",
        ]
    );
}

#[test]
fn test_forward_clamps_at_every_edge() {
    let robot = explored(Vec::new(), "5 5 N", "F", 5);
    assert_eq!(robot.final_position(), Some(pos(5, 5, 'N')));

    let robot = explored(Vec::new(), "5 5 E", "FFF", 5);
    assert_eq!(robot.final_position(), Some(pos(5, 5, 'E')));

    let robot = explored(Vec::new(), "0 0 S", "F", 5);
    assert_eq!(robot.final_position(), Some(pos(0, 0, 'S')));

    let robot = explored(Vec::new(), "0 2 W", "FFRFFFFFFFF", 5);
    assert_eq!(robot.final_position(), Some(pos(0, 5, 'N')));

    for p in robot.positions() {
        assert!((0..=5).contains(&p.x) && (0..=5).contains(&p.y));
    }
}

#[test]
fn test_rotations_cycle() {
    let robot = explored(Vec::new(), "1 1 N", "LLLLRRRRLR", 5);
    let headings: String = robot
        .positions()
        .iter()
        .map(|p| p.heading.as_char())
        .collect();
    assert_eq!(headings, "NWSENESWNWN");
    assert!(robot.positions().iter().all(|p| p.x == 1 && p.y == 1));
}

#[test]
fn test_unknown_commands_are_logged_no_ops() {
    let robot = explored(Vec::new(), "1 1 N", "FxF?", 5);
    assert_eq!(robot.positions().len(), 5);
    assert_eq!(robot.positions()[2], robot.positions()[1]);
    assert_eq!(robot.positions()[4], robot.positions()[3]);
    assert_eq!(robot.final_position(), Some(pos(1, 3, 'N')));
    assert!(robot.trace().iter().any(|t| t == "Executing command [x]"));
}

#[test]
fn test_unknown_heading_never_moves() {
    let robot = explored(Vec::new(), "2 2 Q", "FLFRF", 5);
    assert!(robot.positions().iter().all(|p| *p == pos(2, 2, 'Q')));
}

#[test]
fn test_position_count_matches_command_count() {
    for commands in ["", "F", "LRF", "FFFFFFFFFFFF", "ab"] {
        let robot = explored(Vec::new(), "0 0 N", commands, 3);
        assert_eq!(robot.positions().len(), commands.chars().count() + 1);
    }
}

#[test]
fn test_malformed_initial_position_fails_without_logging() {
    for initial in ["", "1 2", "1 2 N extra", "x 2 N", "1 y N"] {
        let mut robot = Robot::new(Vec::new(), "R2", initial, "F", 5, 5);
        let err = robot.explore().unwrap_err();
        assert!(matches!(
            err,
            ParseError::TokenCount { .. } | ParseError::InvalidCoordinate { .. }
        ));
        assert!(robot.trace().is_empty());
        assert!(robot.positions().is_empty());
        assert!(robot.results().is_empty());
    }
}

#[test]
fn test_second_explore_appends() {
    let mut robot = Robot::new(vec![Threat::bomb(0, 0)], "R2", "0 0 N", "F", 5, 5);
    robot.explore().unwrap();
    robot.explore().unwrap();
    assert_eq!(robot.positions().len(), 4);
    assert_eq!(robot.results().len(), 4);
    assert_eq!(robot.trace().len(), 2 * 9);
}

#[test]
fn test_custom_interpreter() {
    let mut interpreter = CommandInterpreter::new(RobotConfig {
        rotate_left: 'I',
        rotate_right: 'D',
        forward: 'A',
        ..RobotConfig::default()
    });
    interpreter.populate_standard_symbols();
    interpreter.set_op('F', RobotOp::Forward);

    // `L` is no longer mapped, so only the trailing `I` turns left.
    let mut robot =
        Robot::new(Vec::new(), "R2", "0 0 N", "AADFLI", 5, 5).with_interpreter(interpreter);
    robot.explore().unwrap();
    assert_eq!(robot.positions()[4], pos(1, 2, 'E'));
    assert_eq!(robot.positions()[5], pos(1, 2, 'E'));
    assert_eq!(robot.final_position(), Some(pos(1, 2, 'N')));
}

#[test]
fn test_shared_threats_across_threads() {
    let threats: Arc<[Threat]> = vec![Threat::bomb(0, 1), Threat::bomb(1, 0)].into();

    let handles: Vec<_> = ["0 0 N", "0 0 E"]
        .into_iter()
        .map(|initial| {
            let threats = Arc::clone(&threats);
            std::thread::spawn(move || {
                let mut robot = Robot::new(threats, initial, initial, "FF", 5, 5);
                robot.explore().unwrap();
                robot.results().to_vec()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], ["0 1 N", THREAT_DETECTED]);
    assert_eq!(results[1], ["1 0 E", THREAT_DETECTED]);
}

#[test]
fn test_accessors() {
    let robot = Robot::new(vec![Threat::bomb(3, 3)], "Sweeper", "0 0 N", "FF", 4, 6);
    assert_eq!(robot.name(), "Sweeper");
    assert_eq!(robot.commands(), "FF");
    assert_eq!(robot.threats().len(), 1);
    assert_eq!(robot.bounds().max.to_array(), [4, 6]);
    assert_eq!(robot.final_position(), None);
}

#[test]
fn test_positions_serialize() {
    let robot = explored(Vec::new(), "0 0 N", "R", 5);
    let json = serde_json::to_string(robot.positions()).unwrap();
    let back: Vec<RobotPosition> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, robot.positions());
}

#[test]
fn test_forward_at_integer_limits_does_not_overflow() {
    let mut robot = Robot::new(Vec::new(), "R2", "0 2147483647 N", "F", 5, i32::MAX);
    robot.explore().unwrap();
    assert_eq!(robot.final_position(), Some(pos(0, i32::MAX, 'N')));

    let mut robot = Robot::new(Vec::new(), "R2", "2147483647 0 E", "FF", i32::MAX, 5);
    robot.explore().unwrap();
    assert_eq!(robot.final_position(), Some(pos(i32::MAX, 0, 'E')));

    let mut robot = Robot::new(Vec::new(), "R2", "-2147483648 -2147483648 W", "FLF", 5, 5);
    robot.explore().unwrap();
    assert_eq!(
        robot.positions(),
        &[
            pos(i32::MIN, i32::MIN, 'W'),
            pos(0, i32::MIN, 'W'),
            pos(0, i32::MIN, 'S'),
            pos(0, 0, 'S'),
        ]
    );
}

#[test]
fn test_off_field_start_still_explores() {
    let robot = explored(vec![Threat::bomb(9, 9)], "9 9 N", "FLF", 5);
    assert!(!robot.bounds().contains(robot.positions()[0].cell()));
    assert_eq!(robot.results(), &["9 9 N", THREAT_DETECTED]);
    assert_eq!(robot.final_position(), Some(pos(8, 5, 'W')));
}

#[test]
fn test_commands_survive_exploration() {
    let mut robot = Robot::new(Vec::new(), "R2", "0 0 N", "FRF", 5, 5);
    robot.explore().unwrap();
    assert_eq!(robot.commands(), "FRF");
    robot.explore().unwrap();
    assert_eq!(robot.positions().len(), 8);
    assert_eq!(robot.trace()[3], "Robot Commands=[FRF]");
    assert_eq!(robot.trace()[3 + 4 + 3 * 3 + 1], "Robot Commands=[FRF]");
}

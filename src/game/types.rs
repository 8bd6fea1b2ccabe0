use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Facing of the character on the grid. East is the catalog default.
///
/// Directions form a 4-cycle: turning right is +1 and turning left is +3,
/// both modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    fn ordinal(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    fn from_ordinal(n: u8) -> Self {
        match n % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    pub fn turn_right(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub fn turn_left(self) -> Self {
        Self::from_ordinal(self.ordinal() + 3)
    }

    /// Unit movement vector for this facing. The y axis grows downward,
    /// so North is (0, -1).
    pub fn vector(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// The four primitive actions a program can emit.
///
/// The serialized names are the wire vocabulary shared by the translator,
/// the simulator, and clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    #[serde(rename = "MOVE")]
    Move,
    #[serde(rename = "TURN_LEFT")]
    TurnLeft,
    #[serde(rename = "TURN_RIGHT")]
    TurnRight,
    #[serde(rename = "COLLECT")]
    Collect,
}

impl CommandKind {
    /// Parse a wire-level command name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MOVE" => Some(CommandKind::Move),
            "TURN_LEFT" => Some(CommandKind::TurnLeft),
            "TURN_RIGHT" => Some(CommandKind::TurnRight),
            "COLLECT" => Some(CommandKind::Collect),
            _ => None,
        }
    }
}

/// One primitive action derived from the learner's program.
///
/// The payload is opaque to the simulator and only carried through for
/// clients that want to attach block metadata to a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub kind: CommandKind,
    pub payload: Option<String>,
}

impl Command {
    pub fn new(kind: CommandKind) -> Self {
        Self { kind, payload: None }
    }
}

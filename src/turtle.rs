//! Turtle state and operations for grid interpretation.

use crate::grammar::Symbol;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Compass heading on the integer grid, in clockwise order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise order; a heading's position here is its index.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps `index` modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    pub fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Unit step for this heading. North is `+Y`.
    pub fn vector(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::NEG_Y,
            Direction::West => IVec2::NEG_X,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

/// The state of the grid turtle.
///
/// Built fresh for every walk; never shared between runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current grid position. Starts at the origin.
    pub position: IVec2,

    /// Current heading. Starts facing North.
    pub direction: Direction,
}

impl TurtleState {
    /// Moves one unit along the current heading.
    pub fn forward(&mut self) {
        self.position += self.direction.vector();
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    /// Executes `op`. Returns `true` if the turtle moved.
    pub fn apply(&mut self, op: TurtleOp) -> bool {
        match op {
            TurtleOp::Forward => {
                self.forward();
                return true;
            }
            TurtleOp::TurnLeft => self.turn_left(),
            TurtleOp::TurnRight => self.turn_right(),
            TurtleOp::Ignore => {}
        }
        false
    }
}

/// Operations that can be performed by the grid turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Step one unit forward (`F`).
    Forward,
    /// Quarter turn counter-clockwise (`L`).
    TurnLeft,
    /// Quarter turn clockwise (`R`).
    TurnRight,
    /// No-op: `a`, `b` and anything without a registered meaning.
    Ignore,
}

impl From<Symbol> for TurtleOp {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Forward => TurtleOp::Forward,
            Symbol::Left => TurtleOp::TurnLeft,
            Symbol::Right => TurtleOp::TurnRight,
            Symbol::A | Symbol::B | Symbol::Other(_) => TurtleOp::Ignore,
        }
    }
}

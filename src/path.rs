use crate::turtle::Direction;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A waypoint captured right after a forward move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// 1-based count of forward moves so far.
    pub step_index: u64,

    /// Turtle position after the move.
    pub position: IVec2,

    /// Heading the move was made in.
    pub direction: Direction,
}

impl PathStep {
    pub fn new(step_index: u64, position: IVec2, direction: Direction) -> Self {
        Self {
            step_index,
            position,
            direction,
        }
    }

    pub fn direction_name(&self) -> &'static str {
        self.direction.name()
    }
}

/// The outcome of one dragon walk.
///
/// This is the only thing a computation hands back to its caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Where the turtle stopped.
    pub final_position: IVec2,

    /// Forward moves executed.
    pub total_steps: u64,

    /// Sampled waypoints, ordered by `step_index`.
    pub path_steps: Vec<PathStep>,

    /// Length of the sequence that was walked, counted once even when looped.
    pub sequence_length_used: usize,

    /// Whether the sequence was walked cyclically.
    pub looped: bool,

    /// The depth the caller asked for, when the walk was depth-driven.
    pub requested_depth: Option<u32>,

    /// The depth actually materialized after capping and the safety cutoff.
    pub expanded_depth: Option<u32>,
}

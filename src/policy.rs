//! Depth selection and the capped-loop fallback.
//!
//! The dragon expansion doubles with every round, so deep curves are never
//! materialized. Instead a large requested depth is capped and the capped
//! sequence is walked cyclically. That walk is an approximation: a real deep
//! dragon is not periodic. It is kept because its output is deterministic and
//! callers compare against it.

use crate::error::{DragonError, Result};
use crate::interpreter::{DragonConfig, DragonInterpreter};
use crate::path::SimulationResult;
use serde::{Deserialize, Serialize};
use tracing::info;

/// How a walk will be carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragonPlan {
    /// The depth the walk stands for.
    pub requested_depth: u32,
    /// The depth handed to the expander.
    pub expansion_depth: u32,
    /// Walk the expansion cyclically until the budget is spent.
    pub looped: bool,
}

impl DragonPlan {
    /// Plans a walk of a given requested depth.
    ///
    /// Depths at or above `loop_threshold_depth` are capped at
    /// `practical_depth_cap` and looped; shallower ones are expanded exactly.
    pub fn for_depth(depth: u32, config: &DragonConfig) -> Self {
        if depth >= config.loop_threshold_depth {
            Self {
                requested_depth: depth,
                expansion_depth: depth.min(config.practical_depth_cap),
                looped: true,
            }
        } else {
            Self {
                requested_depth: depth,
                expansion_depth: depth,
                looped: false,
            }
        }
    }

    /// Plans the walk for a step budget, picking the depth with
    /// [`effective_depth`].
    pub fn for_budget(step_budget: u64, config: &DragonConfig) -> Self {
        Self::for_depth(effective_depth(step_budget, config), config)
    }
}

/// Small budgets get the shallow depth, everything else the full one.
pub fn effective_depth(step_budget: u64, config: &DragonConfig) -> u32 {
    if step_budget <= config.small_budget_limit {
        config.small_budget_depth
    } else {
        config.full_depth
    }
}

/// Computes the dragon walk for `step_budget` with the default configuration.
///
/// ```no_run
/// let result = heighway_dragon::compute_dragon_path(1012).unwrap();
/// println!("{},{}", result.final_position.x, result.final_position.y);
/// ```
pub fn compute_dragon_path(step_budget: u64) -> Result<SimulationResult> {
    compute_dragon_path_with(step_budget, &DragonConfig::default())
}

pub fn compute_dragon_path_with(
    step_budget: u64,
    config: &DragonConfig,
) -> Result<SimulationResult> {
    if step_budget == 0 {
        return Err(DragonError::EmptyStepBudget);
    }

    let depth = effective_depth(step_budget, config);
    info!(step_budget, depth, "computing dragon path");
    DragonInterpreter::new(config.clone()).walk_depth(depth, step_budget)
}

//! Interpreter that walks a dragon command sequence on the integer grid.
//!
//! The entry point is [`DragonInterpreter`]. Configure it with a [`DragonConfig`]
//! and call [`DragonInterpreter::simulate`] on a [`Sequence`], or
//! [`DragonInterpreter::walk_depth`] to expand and walk in one go. Symbios
//! states are walked through [`DragonInterpreter::simulate_state`] after
//! registering symbol mappings with [`DragonInterpreter::set_op`] or
//! [`DragonInterpreter::populate_standard_symbols`].

use crate::error::Result;
use crate::grammar::{DragonGrammar, Sequence};
use crate::path::{PathStep, SimulationResult};
use crate::policy::DragonPlan;
use crate::turtle::{TurtleOp, TurtleState};
use serde::{Deserialize, Serialize};
use symbios::{SymbiosState, SymbolTable};
use tracing::{debug, info, warn};

/// Configuration for dragon expansion and interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragonConfig {
    /// Expansion stops early once a sequence grows past this many symbols...
    pub cutoff_length: usize,
    /// ...but only for rounds numbered below this one.
    pub cutoff_round_limit: u32,
    /// Requested depths at or above this are walked with the capped-loop fallback.
    pub loop_threshold_depth: u32,
    /// Deepest expansion the capped-loop fallback will materialize.
    pub practical_depth_cap: u32,
    /// Step budgets up to this value use `small_budget_depth`.
    pub small_budget_limit: u64,
    pub small_budget_depth: u32,
    /// Depth used for every budget above `small_budget_limit`.
    pub full_depth: u32,
    /// Every forward move up to this count is traced.
    pub trace_head: u64,
    /// In looping mode, every move that is a multiple of this is traced. Zero disables.
    pub trace_interval: u64,
}

impl Default for DragonConfig {
    fn default() -> Self {
        Self {
            cutoff_length: 100_000,
            cutoff_round_limit: 15,
            loop_threshold_depth: 20,
            practical_depth_cap: 25,
            small_budget_limit: 100,
            small_budget_depth: 15,
            full_depth: 50,
            trace_head: 20,
            trace_interval: 100,
        }
    }
}

/// Interprets dragon sequences as grid turtle movement.
pub struct DragonInterpreter {
    op_map: Vec<TurtleOp>,
    config: DragonConfig,
}

impl Default for DragonInterpreter {
    fn default() -> Self {
        Self::new(DragonConfig::default())
    }
}

impl DragonInterpreter {
    /// Creates a new interpreter with the given configuration and an empty
    /// Symbios symbol map.
    ///
    /// The map only matters for [`simulate_state`](Self::simulate_state);
    /// [`Sequence`]s carry their own typed alphabet.
    pub fn new(config: DragonConfig) -> Self {
        Self {
            op_map: Vec::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map (builder pattern).
    ///
    /// `map` is indexed by symbol ID as returned by [`symbios::SymbolTable`].
    /// Any ID outside the slice is treated as [`TurtleOp::Ignore`].
    pub fn with_map(mut self, map: Vec<TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol ID, growing the map with
    /// [`TurtleOp::Ignore`] as needed.
    pub fn set_op(&mut self, sym_id: u16, op: TurtleOp) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, TurtleOp::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Maps `F`, `L` and `R` in `interner` to their turtle operations.
    /// Symbols the interner has never seen are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("F", TurtleOp::Forward),
            ("L", TurtleOp::TurnLeft),
            ("R", TurtleOp::TurnRight),
        ];

        for (sym, op) in mappings {
            if let Some(id) = interner.resolve_id(sym) {
                self.set_op(id, op);
            }
        }
    }

    pub fn config(&self) -> &DragonConfig {
        &self.config
    }

    /// Walks `sequence` once, stopping after `step_budget` forward moves or
    /// at the end of the sequence, whichever comes first.
    pub fn simulate(&self, sequence: &Sequence, step_budget: u64) -> SimulationResult {
        let walk = self.walk(move || sequence.symbols().map(TurtleOp::from), step_budget, false);
        walk.into_result(sequence.len(), false)
    }

    /// Walks `sequence` cyclically until exactly `step_budget` forward moves
    /// have been made.
    ///
    /// The turtle keeps its heading and position across restarts, so the
    /// resulting path is not the path of any deeper dragon. A sequence with no
    /// `F` is walked once.
    pub fn simulate_looped(&self, sequence: &Sequence, step_budget: u64) -> SimulationResult {
        let walk = self.walk(move || sequence.symbols().map(TurtleOp::from), step_budget, true);
        walk.into_result(sequence.len(), true)
    }

    /// Walks a Symbios state once through the registered symbol map.
    pub fn simulate_state(&self, state: &SymbiosState, step_budget: u64) -> SimulationResult {
        let ops = move || {
            (0..state.len())
                .map_while(move |i| state.get_view(i))
                .map(move |view| {
                    self.op_map
                        .get(view.sym as usize)
                        .copied()
                        .unwrap_or(TurtleOp::Ignore)
                })
        };
        let walk = self.walk(ops, step_budget, false);
        walk.into_result(state.len(), false)
    }

    /// Expands the grammar for `depth` and walks it under the fallback rules
    /// in [`DragonPlan::for_depth`].
    pub fn walk_depth(&self, depth: u32, step_budget: u64) -> Result<SimulationResult> {
        let plan = DragonPlan::for_depth(depth, &self.config);
        let expansion = DragonGrammar::new(&self.config).expand(plan.expansion_depth)?;
        info!(
            requested_depth = depth,
            expanded_depth = expansion.depth_reached,
            length = expansion.sequence.len(),
            looped = plan.looped,
            step_budget,
            "walking dragon sequence"
        );

        let mut result = if plan.looped {
            self.simulate_looped(&expansion.sequence, step_budget)
        } else {
            self.simulate(&expansion.sequence, step_budget)
        };
        result.requested_depth = Some(depth);
        result.expanded_depth = Some(expansion.depth_reached);

        debug!(
            x = result.final_position.x,
            y = result.final_position.y,
            total_steps = result.total_steps,
            "dragon walk finished"
        );
        Ok(result)
    }

    fn should_trace(&self, steps: u64, step_budget: u64, looped: bool) -> bool {
        let interval = self.config.trace_interval;
        steps <= self.config.trace_head
            || steps == step_budget
            || (looped && interval != 0 && steps % interval == 0)
    }

    fn walk<S, I>(&self, ops: S, step_budget: u64, looped: bool) -> Walk
    where
        S: Fn() -> I,
        I: Iterator<Item = TurtleOp>,
    {
        let mut turtle = TurtleState::default();
        let mut steps = 0u64;
        let mut path_steps = Vec::new();

        'walk: loop {
            let steps_before_pass = steps;
            for op in ops() {
                if steps >= step_budget {
                    break 'walk;
                }
                if turtle.apply(op) {
                    steps += 1;
                    if self.should_trace(steps, step_budget, looped) {
                        path_steps.push(PathStep::new(steps, turtle.position, turtle.direction));
                    }
                }
            }

            if !looped || steps >= step_budget {
                break;
            }
            if steps == steps_before_pass {
                warn!(step_budget, "sequence has no forward moves, abandoning looped walk");
                break;
            }
        }

        Walk {
            turtle,
            steps,
            path_steps,
        }
    }
}

struct Walk {
    turtle: TurtleState,
    steps: u64,
    path_steps: Vec<PathStep>,
}

impl Walk {
    fn into_result(self, sequence_length_used: usize, looped: bool) -> SimulationResult {
        SimulationResult {
            final_position: self.turtle.position,
            total_steps: self.steps,
            path_steps: self.path_steps,
            sequence_length_used,
            looped,
            requested_depth: None,
            expanded_depth: None,
        }
    }
}

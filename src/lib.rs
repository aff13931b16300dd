//! # heighway-dragon
//!
//! Expands the Heighway dragon L-system (`Fa`, `a → aRbFR`, `b → LFaLb`) and
//! walks the result as a turtle on the integer grid.
//!
//! The grammar doubles with every round, so the public entry point,
//! [`compute_dragon_path`], never materializes deep curves. It picks a depth
//! from the step budget, caps it, and walks the capped sequence cyclically
//! when needed. See [`policy`] for the exact rules.
//!
//! Symbios states can be walked directly with
//! [`DragonInterpreter::simulate_state`].

pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod path;
pub mod policy;
pub mod turtle;

pub use error::DragonError;
pub use grammar::*;
pub use interpreter::*;
pub use path::*;
pub use policy::*;
pub use turtle::*;

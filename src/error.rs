//! Error type shared by the expander, the walker and the Symbios bridge.

/// Faults that can interrupt a dragon-path computation.
///
/// The safety cutoff and the capped-loop fallback are not errors: they always
/// produce a valid result.
#[derive(Debug, thiserror::Error)]
pub enum DragonError {
    #[error("step budget must be greater than zero")]
    EmptyStepBudget,

    #[error("could not allocate {symbols} symbols for round {depth}")]
    Allocation { depth: u32, symbols: usize },

    #[error("symbios error: {0}")]
    Symbios(String),
}

pub type Result<T> = std::result::Result<T, DragonError>;

use crate::Discrete;
use rand::distributions::WeightedError;
use thiserror::Error;

/// Errors raised by the discrete MDP runtime.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Environment must be reset before calling step")]
    NotReset,

    #[error("Invalid action {action}: action space is Discrete({n})")]
    InvalidAction { action: Discrete, n: Discrete },

    #[error("No transitions defined for state {s} and action {a}")]
    MissingTransitions { s: Discrete, a: Discrete },

    #[error("Initial state distribution has {got} entries, expected {expected}")]
    IsdShape { expected: usize, got: usize },

    #[error("Invalid probability distribution: {0}")]
    Distribution(#[from] WeightedError),
}

//! Error types shared by every component of the real-coded GA.
//!
//! All failures are caller contract violations: the engine never retries or
//! silently repairs a population, because a masked error would break the
//! population-size invariant.

use crate::ga::ControllerState;

/// Errors raised by the real-coded GA components.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RealGaError {
    /// The population holds fewer individuals than the crossover needs.
    #[error("insufficient population: {required} parents required, population holds {available}")]
    InsufficientPopulation { required: usize, available: usize },

    /// The two primary UNDX parents coincide, so the primary axis is undefined.
    #[error("degenerate parents: the primary pair coincides")]
    DegenerateParents,

    /// The family is too small for the survival selection.
    #[error("invalid family: {parents} parents and {kids} kids, survival needs {required}")]
    InvalidFamily {
        parents: usize,
        kids: usize,
        required: usize,
    },

    /// The controller was used before `initialize()`.
    #[error("controller used before initialize()")]
    Uninitialized,

    /// An operation was called out of the `make_offspring → next_generation` cycle.
    #[error("{operation} is not allowed in state {state:?}")]
    OutOfSequence {
        operation: &'static str,
        state: ControllerState,
    },

    /// A crossover received fewer parents than it requires.
    #[error("not enough parents: {required} required, {found} given")]
    NotEnoughParents { required: usize, found: usize },

    /// A family member reached survival selection without an evaluation.
    #[error("family member {family_index} has not been evaluated")]
    Unevaluated { family_index: usize },

    /// A solution vector does not match the configured dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RealGaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = RealGaError::InsufficientPopulation {
            required: 3,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient population: 3 parents required, population holds 2"
        );

        let err = RealGaError::OutOfSequence {
            operation: "next_generation",
            state: ControllerState::Ready,
        };
        assert!(err.to_string().contains("next_generation"));
        assert!(err.to_string().contains("Ready"));
    }
}

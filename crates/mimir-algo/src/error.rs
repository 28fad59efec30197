//! Error types for the algorithm crate.

use mimir_ir::IrError;
use thiserror::Error;

/// Errors that can occur when building or decoding algorithm circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// The target register is empty.
    #[error("Register is empty: {0}")]
    EmptyRegister(String),

    /// A qubit appears more than once in a register.
    #[error("Duplicate qubit q{0} in register")]
    DuplicateQubit(u32),

    /// No outcomes to decode.
    #[error("Cannot decode phase: counts are empty")]
    EmptyCounts,

    /// A measured bitstring could not be parsed.
    #[error("Invalid bitstring '{0}'")]
    InvalidBitstring(String),

    /// Circuit construction failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for algorithm operations.
pub type AlgoResult<T> = Result<T, AlgoError>;

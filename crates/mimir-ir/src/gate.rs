//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// A gate operation with known semantics.
///
/// Rotation angles are concrete values in radians. Every gate has a
/// well-defined inverse, which is what makes circuit-level
/// [`inverse`](crate::Circuit::inverse) possible: phase angles negate,
/// `S`/`T` swap with their daggers, and the rest are self-inverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Phase gate: diag(1, e^{iθ}).
    P(f64),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// Controlled phase gate: phase e^{iθ} on |11⟩.
    CP(f64),
    /// SWAP gate.
    Swap,
}

impl Gate {
    /// Get the name of this gate (OpenQASM 3 naming).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::I => "id",
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::T => "t",
            Gate::Tdg => "tdg",
            Gate::P(_) => "p",
            Gate::CX => "cx",
            Gate::CZ => "cz",
            Gate::CP(_) => "cp",
            Gate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::I
            | Gate::X
            | Gate::Y
            | Gate::Z
            | Gate::H
            | Gate::S
            | Gate::Sdg
            | Gate::T
            | Gate::Tdg
            | Gate::P(_) => 1,
            Gate::CX | Gate::CZ | Gate::CP(_) | Gate::Swap => 2,
        }
    }

    /// Get the inverse of this gate.
    #[inline]
    #[must_use]
    pub fn inverse(&self) -> Gate {
        match self {
            Gate::S => Gate::Sdg,
            Gate::Sdg => Gate::S,
            Gate::T => Gate::Tdg,
            Gate::Tdg => Gate::T,
            Gate::P(theta) => Gate::P(-theta),
            Gate::CP(theta) => Gate::CP(-theta),
            // Pauli, Hadamard, CX, CZ and Swap are involutions.
            other => *other,
        }
    }

    /// Get the rotation angle if this gate carries one.
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        match self {
            Gate::P(theta) | Gate::CP(theta) => Some(*theta),
            _ => None,
        }
    }
}

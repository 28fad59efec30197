//! Quantum phase estimation.
//!
//! Estimates the eigenvalue phase of the phase gate `P(θ)` from its
//! eigenvector `|1⟩`. The circuit uses `n` ancilla qubits and one
//! eigenstate qubit:
//!
//! 1. `X` on the eigenstate qubit prepares the `|1⟩` eigenvector,
//! 2. Hadamard on every ancilla,
//! 3. ancilla `i` controls a `CP(θ · 2^i)` on the eigenstate qubit —
//!    phase kickback writes `θ`'s binary fraction into the ancilla
//!    register's relative phases,
//! 4. the inverse QFT over the ancillas (ancilla 0 least significant)
//!    decodes those phases into computational-basis amplitudes,
//! 5. every ancilla is measured into its classical bit.
//!
//! For `θ = 2πk/2^n` the measured register equals `k` with certainty in an
//! ideal simulation; otherwise the distribution peaks at the nearest
//! `n`-bit approximation.

use std::f64::consts::PI;

use tracing::debug;

use mimir_hal::Counts;
use mimir_ir::{Circuit, ClbitId, QubitId};

use crate::error::{AlgoError, AlgoResult};
use crate::qft::inverse_qft;

/// Composer for quantum phase estimation circuits.
#[derive(Debug, Clone, Copy)]
pub struct PhaseEstimation {
    ancillas: u32,
    base_phase: f64,
}

impl PhaseEstimation {
    /// Create a phase estimation problem with `ancillas` counting qubits
    /// and the unitary `P(base_phase)`.
    pub fn new(ancillas: u32, base_phase: f64) -> AlgoResult<Self> {
        if ancillas == 0 {
            return Err(AlgoError::EmptyRegister("phase estimation".into()));
        }
        Ok(Self {
            ancillas,
            base_phase,
        })
    }

    /// Create a phase estimation problem from a fraction of a full turn:
    /// `base_phase = 2π · fraction`.
    pub fn from_fraction(ancillas: u32, fraction: f64) -> AlgoResult<Self> {
        Self::new(ancillas, 2.0 * PI * fraction)
    }

    /// Number of ancilla qubits.
    pub fn num_ancillas(&self) -> u32 {
        self.ancillas
    }

    /// The phase of the estimated unitary, in radians.
    pub fn base_phase(&self) -> f64 {
        self.base_phase
    }

    /// Resolution of the estimate: one part in `2^n` of a turn.
    pub fn resolution(&self) -> f64 {
        2.0 * PI / (1u64 << self.ancillas.min(63)) as f64
    }

    /// Build the full estimation circuit.
    ///
    /// Qubits `0..n` are ancillas, qubit `n` is the eigenstate qubit;
    /// ancilla `i` is measured into classical bit `i`.
    pub fn circuit(&self) -> AlgoResult<Circuit> {
        let n = self.ancillas;
        let mut circuit = Circuit::with_size("qpe", n + 1, n);
        let eigenstate = QubitId(n);

        // Eigenvector preparation: P(θ)|1⟩ = e^{iθ}|1⟩.
        circuit.x(eigenstate)?;

        for i in 0..n {
            circuit.h(QubitId(i))?;
        }

        // Kickback ladder: ancilla i accumulates θ·2^i.
        for i in 0..n {
            let angle = self.base_phase * 2.0_f64.powi(i as i32);
            circuit.cp(angle, QubitId(i), eigenstate)?;
        }

        circuit.barrier_all()?;

        // Decode with the inverse QFT. Ancilla 0 carries the least
        // significant kickback weight, so it sits last in the register
        // slice (position 0 is the most significant bit).
        let register: Vec<_> = (0..n).rev().map(QubitId).collect();
        inverse_qft(&mut circuit, &register)?;

        for i in 0..n {
            circuit.measure(QubitId(i), ClbitId(i))?;
        }

        debug!(
            ancillas = n,
            ops = circuit.num_ops(),
            depth = circuit.depth(),
            "built qpe circuit"
        );
        Ok(circuit)
    }
}

/// A decoded phase estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseEstimate {
    /// The winning register value `k`.
    pub register: u64,
    /// `k / 2^n`, the estimated fraction of a full turn.
    pub fraction: f64,
    /// `2π · fraction`, the estimated phase in radians.
    pub phase: f64,
    /// Shots that produced the winning register value.
    pub count: u64,
    /// Total shots observed.
    pub total_shots: u64,
}

/// Decode the most frequent outcome into a phase estimate.
pub fn estimate_phase(counts: &Counts, num_ancillas: u32) -> AlgoResult<PhaseEstimate> {
    let (bitstring, count) = counts.most_frequent().ok_or(AlgoError::EmptyCounts)?;

    let register = u64::from_str_radix(bitstring, 2)
        .map_err(|_| AlgoError::InvalidBitstring(bitstring.to_string()))?;

    let denom = (1u64 << num_ancillas.min(63)) as f64;
    let fraction = register as f64 / denom;

    Ok(PhaseEstimate {
        register,
        fraction,
        phase: 2.0 * PI * fraction,
        count,
        total_shots: counts.total_shots(),
    })
}

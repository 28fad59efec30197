//! Mimir Circuit Builders
//!
//! Builders for the Quantum Fourier Transform and Quantum Phase
//! Estimation, plus decoding of measured counts into a phase estimate.
//!
//! # Quantum Phase Estimation
//!
//! Given the unitary `P(θ)` and its eigenvector `|1⟩`, QPE writes `θ` into
//! the relative phases of an ancilla register via phase kickback, then
//! decodes it with an inverse QFT:
//!
//! ```rust
//! use mimir_algo::PhaseEstimation;
//!
//! // θ = 2π·(5/8), exactly representable with 3 ancilla bits.
//! let qpe = PhaseEstimation::from_fraction(3, 0.625).unwrap();
//! let circuit = qpe.circuit().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 4); // 3 ancillas + eigenstate qubit
//! assert_eq!(circuit.num_clbits(), 3);
//! ```
//!
//! In an ideal simulation the measured register reads `101` (binary 5)
//! with probability 1.
//!
//! # Quantum Fourier Transform
//!
//! [`qft`] and [`inverse_qft`] append the transform over any qubit
//! register to an existing circuit; [`qft_circuit`] and
//! [`inverse_qft_circuit`] build standalone circuits. The inverse is
//! derived from the forward builder by gate-order reversal and angle
//! negation.

pub mod error;
pub mod qft;
pub mod qpe;

pub use error::{AlgoError, AlgoResult};
pub use qft::{inverse_qft, inverse_qft_circuit, qft, qft_circuit};
pub use qpe::{PhaseEstimate, PhaseEstimation, estimate_phase};

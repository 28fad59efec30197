//! Mimir Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Mimir: wire identifiers, gates, instructions, and the
//! [`Circuit`] builder.
//!
//! # Overview
//!
//! A circuit is an ordered sequence of gate operations over a fixed number
//! of qubits and classical bits. Instructions are validated as they are
//! appended: every referenced index must be in range, gate arity must match
//! the operand count, and multi-qubit operations must not repeat a qubit.
//!
//! # Core Components
//!
//! - **Wires**: [`QubitId`], [`ClbitId`] for addressing quantum and
//!   classical registers
//! - **Gates**: [`Gate`] for the supported gate operations, each with a
//!   well-defined [`inverse`](Gate::inverse)
//! - **Instructions**: [`Instruction`] combining gates with their operands,
//!   plus measurement and barrier operations
//! - **Circuit**: [`Circuit`] high-level builder API with circuit
//!   composition ([`append`](Circuit::append)) and circuit inversion
//!   ([`inverse`](Circuit::inverse))
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use mimir_ir::{Circuit, QubitId};
//!
//! // Create a new circuit with 2 qubits and 2 classical bits
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! // Add measurement
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert!(circuit.depth() >= 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `T`, `Tdg` | 1 | T and T-dagger gates |
//! | `P(θ)` | 1 | Phase gate |
//! | `CX`, `CZ` | 2 | Controlled-NOT and Controlled-Z |
//! | `CP(θ)` | 2 | Controlled phase gate |
//! | `Swap` | 2 | SWAP gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};

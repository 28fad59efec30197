//! Mimir Local Statevector Simulator
//!
//! This crate provides the local execution oracle for Mimir circuits: a
//! statevector simulator behind the [`mimir_hal::Backend`] trait. It is
//! exact (noiseless) and limited to ~20-25 qubits by memory.
//!
//! # Features
//!
//! - **Exact simulation**: full statevector representation
//! - **All IR gates**: supports every gate in `mimir-ir`
//! - **Measurement sampling**: shots drawn from the final distribution,
//!   with bitstrings assembled from the circuit's measure map
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//!
//! # Example
//!
//! ```ignore
//! use mimir_adapter_sim::StatevectorBackend;
//! use mimir_hal::Backend;
//! use mimir_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = StatevectorBackend::new();
//!
//!     // Run a Bell state
//!     let circuit = Circuit::bell()?;
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("Results: {:?}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::StatevectorBackend;
pub use statevector::Statevector;

//! Mimir Backend Abstraction Layer
//!
//! This crate provides a unified interface for executing quantum circuits.
//! The executing engine is treated as an opaque oracle: it accepts a
//! finished circuit plus a shot count and returns measurement-outcome
//! counts. Everything else — how the engine represents state, how it
//! samples — stays behind the [`Backend`] trait.
//!
//! # Overview
//!
//! - A common [`Backend`] trait for job submission and management
//! - [`Capabilities`] to describe engine features and constraints
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//! - A [`BackendRegistry`] for name-based backend lookup
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use mimir_hal::Backend;
//! use mimir_adapter_sim::StatevectorBackend;
//! use mimir_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a Bell state circuit
//!     let circuit = Circuit::bell()?;
//!
//!     // Initialize the simulator backend
//!     let backend = StatevectorBackend::new();
//!
//!     // Submit the job
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!
//!     // Wait for results
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Analyze the most frequent outcome
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("Most frequent: {} ({} times)", bitstring, count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod registry;
pub mod result;

pub use backend::{Backend, BackendAvailability, ValidationResult};
pub use capability::{Capabilities, GateSet, Topology, TopologyKind};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use registry::BackendRegistry;
pub use result::{Counts, ExecutionResult};

//! Backend capability introspection.
//!
//! Describes what a backend can do: qubit count, supported gates,
//! connectivity, and shot limits. Callers use these to validate circuits
//! before submission. All edges in [`Topology`] are bidirectional.

use serde::{Deserialize, Serialize};

/// Hardware capabilities of a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set (OpenQASM 3 naming convention).
    pub gate_set: GateSet,
    /// Qubit connectivity topology. All edges are bidirectional.
    pub topology: Topology,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator (`true`) vs real hardware (`false`).
    pub is_simulator: bool,
    /// Additional capability flags, e.g. `"statevector"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Create capabilities for a statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "statevector".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            topology: Topology::full(num_qubits),
            max_shots: 100_000,
            is_simulator: true,
            features: vec!["statevector".into()],
        }
    }
}

/// The set of gates a backend supports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSet {
    gates: Vec<String>,
}

impl GateSet {
    /// Create a gate set from gate names.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            gates: gates.into_iter().map(Into::into).collect(),
        }
    }

    /// The gate set of the statevector simulator.
    pub fn universal() -> Self {
        Self::new([
            "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "p", "cx", "cz", "cp", "swap",
        ])
    }

    /// Check whether a gate name is supported.
    pub fn supports(&self, name: &str) -> bool {
        self.gates.iter().any(|g| g == name)
    }

    /// The supported gate names.
    pub fn gates(&self) -> &[String] {
        &self.gates
    }
}

/// Qubit connectivity topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    /// The kind of topology.
    pub kind: TopologyKind,
    /// Bidirectional coupling edges.
    pub edges: Vec<(u32, u32)>,
}

/// The shape of a connectivity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopologyKind {
    /// All-to-all connectivity.
    Full,
    /// Nearest-neighbour chain.
    Linear,
}

impl Topology {
    /// All-to-all connectivity over `n` qubits.
    pub fn full(n: u32) -> Self {
        let mut edges = vec![];
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j));
            }
        }
        Self {
            kind: TopologyKind::Full,
            edges,
        }
    }

    /// Nearest-neighbour chain over `n` qubits.
    pub fn linear(n: u32) -> Self {
        let edges = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
        Self {
            kind: TopologyKind::Linear,
            edges,
        }
    }

    /// Check whether two qubits are coupled.
    pub fn connected(&self, a: u32, b: u32) -> bool {
        self.edges
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// A circuit is an ordered sequence of instructions over a fixed set of
/// qubits and classical bits. Every instruction is validated on insertion:
/// operand indices must be in range, gate arity must match the operand
/// count, and multi-qubit operations must not repeat a qubit.
///
/// The gate methods return `IrResult<&mut Self>` so circuits can be built
/// fluently:
///
/// ```
/// use mimir_ir::{Circuit, ClbitId, QubitId};
///
/// let mut circuit = Circuit::with_size("bell", 2, 2);
/// circuit
///     .h(QubitId(0)).unwrap()
///     .cx(QubitId(0), QubitId(1)).unwrap()
///     .measure(QubitId(0), ClbitId(0)).unwrap()
///     .measure(QubitId(1), ClbitId(1)).unwrap();
///
/// assert_eq!(circuit.depth(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Instructions in execution order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: 0,
            num_clbits: 0,
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.num_clbits);
        self.num_clbits += 1;
        id
    }

    /// Append a validated instruction.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<()> {
        let gate_name = match &instruction.kind {
            InstructionKind::Gate(gate) => Some(gate.name().to_string()),
            _ => None,
        };

        // Gate arity must match the operand count.
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = u32::try_from(instruction.qubits.len())
                .map_err(|_| IrError::InvalidCircuit("operand count exceeds u32".into()))?;
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }

        // Operand indices must be in range.
        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }
        for &clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        // Multi-qubit operations must not repeat a qubit.
        for (i, &qubit) in instruction.qubits.iter().enumerate() {
            if instruction.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        self.instructions.push(instruction);
        Ok(())
    }

    fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.push(instruction)?;
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::Sdg, qubit))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::T, qubit))
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::Tdg, qubit))
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::P(theta), qubit))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(Gate::CX, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(Gate::CZ, control, target))
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(Gate::CP(theta), control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(Gate::Swap, q1, q2))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))
    }

    /// Measure all qubits to corresponding classical bits.
    ///
    /// Grows the classical register if it is smaller than the quantum one.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        while self.num_clbits < self.num_qubits {
            self.add_clbit();
        }
        for i in 0..self.num_qubits {
            self.push(Instruction::measure(QubitId(i), ClbitId(i)))?;
        }
        Ok(self)
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.apply(Instruction::barrier(qubits))
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.apply(Instruction::barrier(qubits))
    }

    /// Append all instructions of another circuit to this one.
    ///
    /// The other circuit must not address qubits or classical bits beyond
    /// this circuit's registers.
    pub fn append(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        for inst in &other.instructions {
            self.push(inst.clone())?;
        }
        Ok(self)
    }

    /// Build the inverse (dagger) of this circuit.
    ///
    /// Instructions are reversed and each gate replaced by its inverse.
    /// Fails on measurements, which have no inverse.
    pub fn inverse(&self) -> IrResult<Circuit> {
        let mut inverted = Circuit::with_size(
            format!("{}_dg", self.name),
            self.num_qubits,
            self.num_clbits,
        );
        for inst in self.instructions.iter().rev() {
            let kind = match &inst.kind {
                InstructionKind::Gate(gate) => InstructionKind::Gate(gate.inverse()),
                InstructionKind::Barrier => InstructionKind::Barrier,
                InstructionKind::Measure => {
                    return Err(IrError::NotInvertible("measure".into()));
                }
            };
            inverted.push(Instruction {
                kind,
                qubits: inst.qubits.clone(),
                clbits: inst.clbits.clone(),
            })?;
        }
        Ok(inverted)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the number of operations (gates and measurements; barriers excluded).
    pub fn num_ops(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| !i.is_barrier())
            .count()
    }

    /// Get the number of measurement instructions.
    pub fn num_measurements(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_measure()).count()
    }

    /// Iterate over instructions in execution order.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    /// Calculate the circuit depth.
    ///
    /// The depth is the longest chain of operations over any wire. Gates
    /// acting on disjoint wires share a layer; barriers synchronize wires
    /// without occupying a layer of their own.
    pub fn depth(&self) -> usize {
        let mut qubit_front = vec![0usize; self.num_qubits as usize];
        let mut clbit_front = vec![0usize; self.num_clbits as usize];

        for inst in &self.instructions {
            let level = inst
                .qubits
                .iter()
                .map(|q| qubit_front[q.index()])
                .chain(inst.clbits.iter().map(|c| clbit_front[c.index()]))
                .max()
                .unwrap_or(0);

            let level = if inst.is_barrier() { level } else { level + 1 };

            for q in &inst.qubits {
                qubit_front[q.index()] = level;
            }
            for c in &inst.clbits {
                clbit_front[c.index()] = level;
            }
        }

        qubit_front
            .into_iter()
            .chain(clbit_front)
            .max()
            .unwrap_or(0)
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        circuit
            .h(QubitId(0))?
            .cx(QubitId(0), QubitId(1))?
            .measure(QubitId(0), ClbitId(0))?
            .measure(QubitId(1), ClbitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        if n == 0 {
            return Ok(Self::new("ghz_0"));
        }

        let mut circuit = Self::with_size("ghz", n, n);
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.measure(QubitId(i), ClbitId(i))?;
        }
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_circuit_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
    }

    #[test]
    fn test_add_wires() {
        let mut circuit = Circuit::new("test");
        assert_eq!(circuit.add_qubit(), QubitId(0));
        assert_eq!(circuit.add_qubit(), QubitId(1));
        assert_eq!(circuit.add_clbit(), ClbitId(0));
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 1);
    }

    #[test]
    fn test_bell_state() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
        assert_eq!(circuit.num_measurements(), 2);
    }

    #[test]
    fn test_ghz_state() {
        let circuit = Circuit::ghz(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 5);
        assert_eq!(circuit.num_ops(), 5 + 4 + 5);
    }

    #[test]
    fn test_parallel_gates_depth() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap().h(QubitId(1)).unwrap();
        assert_eq!(circuit.depth(), 1);
    }

    #[test]
    fn test_barrier_does_not_add_depth() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.barrier_all().unwrap();
        circuit.h(QubitId(1)).unwrap();
        // The barrier pushes q1's H after q0's H without its own layer.
        assert_eq!(circuit.depth(), 2);
        assert_eq!(circuit.num_ops(), 2);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let result = circuit.cx(QubitId(0), QubitId(99));
        match result {
            Err(IrError::QubitNotFound { qubit, gate_name }) => {
                assert_eq!(qubit, QubitId(99));
                assert_eq!(gate_name, Some("cx".to_string()));
            }
            _ => panic!("Expected QubitNotFound error"),
        }
    }

    #[test]
    fn test_clbit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let result = circuit.measure(QubitId(0), ClbitId(0));
        assert!(matches!(result, Err(IrError::ClbitNotFound { .. })));
    }

    #[test]
    fn test_gate_arity_mismatch() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let result = circuit.push(Instruction::gate(Gate::CX, [QubitId(0)]));
        match result {
            Err(IrError::QubitCountMismatch {
                gate_name,
                expected,
                got,
            }) => {
                assert_eq!(gate_name, "cx");
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            _ => panic!("Expected QubitCountMismatch error"),
        }
    }

    #[test]
    fn test_duplicate_qubit() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let result = circuit.swap(QubitId(1), QubitId(1));
        assert!(matches!(result, Err(IrError::DuplicateQubit { .. })));
    }

    #[test]
    fn test_measure_all_grows_clbits() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.num_measurements(), 3);
    }

    #[test]
    fn test_append() {
        let mut a = Circuit::with_size("a", 2, 0);
        a.h(QubitId(0)).unwrap();
        let mut b = Circuit::with_size("b", 2, 0);
        b.cx(QubitId(0), QubitId(1)).unwrap();

        a.append(&b).unwrap();
        assert_eq!(a.num_ops(), 2);
        assert_eq!(a.depth(), 2);
    }

    #[test]
    fn test_inverse_reverses_and_negates() {
        let mut circuit = Circuit::with_size("frag", 2, 0);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cp(PI / 4.0, QubitId(1), QubitId(0))
            .unwrap()
            .s(QubitId(1))
            .unwrap();

        let inv = circuit.inverse().unwrap();
        assert_eq!(inv.name(), "frag_dg");

        let gates: Vec<_> = inv.instructions().map(|i| i.as_gate().copied()).collect();
        assert_eq!(
            gates,
            vec![Some(Gate::Sdg), Some(Gate::CP(-PI / 4.0)), Some(Gate::H)]
        );
    }

    #[test]
    fn test_inverse_of_empty_circuit() {
        let circuit = Circuit::with_size("empty", 3, 0);
        let inv = circuit.inverse().unwrap();
        assert_eq!(inv.num_ops(), 0);
        assert_eq!(inv.num_qubits(), 3);
    }

    #[test]
    fn test_inverse_rejects_measurement() {
        let circuit = Circuit::bell().unwrap();
        assert!(matches!(
            circuit.inverse(),
            Err(IrError::NotInvertible(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let circuit = Circuit::bell().unwrap();
        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Build a measurement-free circuit from (gate choice, qubit, angle) seeds.
        fn build_circuit(seeds: &[(u8, u32, f64)], n: u32) -> Circuit {
            let mut circuit = Circuit::with_size("prop", n, 0);
            for &(choice, q, theta) in seeds {
                let q0 = QubitId(q % n);
                let q1 = QubitId((q + 1) % n);
                let result = match choice % 6 {
                    0 => circuit.h(q0),
                    1 => circuit.x(q0),
                    2 => circuit.p(theta, q0),
                    3 => circuit.cp(theta, q0, q1),
                    4 => circuit.swap(q0, q1),
                    _ => circuit.t(q0),
                };
                result.unwrap();
            }
            circuit
        }

        proptest! {
            #[test]
            fn double_inverse_is_identity(
                seeds in prop::collection::vec((any::<u8>(), any::<u32>(), -10.0f64..10.0), 0..40)
            ) {
                let circuit = build_circuit(&seeds, 4);
                let twice = circuit.inverse().unwrap().inverse().unwrap();
                let original: Vec<_> = circuit.instructions().cloned().collect();
                let round_trip: Vec<_> = twice.instructions().cloned().collect();
                prop_assert_eq!(original, round_trip);
            }

            #[test]
            fn depth_bounded_by_ops(
                seeds in prop::collection::vec((any::<u8>(), any::<u32>(), -10.0f64..10.0), 0..40)
            ) {
                let circuit = build_circuit(&seeds, 4);
                prop_assert!(circuit.depth() <= circuit.num_ops());
            }
        }
    }
}

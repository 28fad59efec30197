//! Quantum Fourier Transform builders.
//!
//! The QFT circuit over a register follows the textbook layout: for each
//! position `i`, a Hadamard followed by controlled-phase rotations
//! `CP(π / 2^(j-i))` from every later position `j`, and a final swap
//! network reversing the register. Position 0 of the register slice is the
//! most significant bit of the transformed value.
//!
//! The inverse transform is the dagger of the forward circuit: gate order
//! reversed, phase angles negated ([`Circuit::inverse`]).

use std::f64::consts::PI;

use tracing::debug;

use mimir_ir::{Circuit, QubitId};

use crate::error::{AlgoError, AlgoResult};

// Range errors surface from the circuit itself on push; this only checks
// what the fragment cannot.
fn check_register(qubits: &[QubitId]) -> AlgoResult<()> {
    if qubits.is_empty() {
        return Err(AlgoError::EmptyRegister("qft".into()));
    }
    for (i, q) in qubits.iter().enumerate() {
        if qubits[..i].contains(q) {
            return Err(AlgoError::DuplicateQubit(q.0));
        }
    }
    Ok(())
}

/// Build the QFT over `qubits` as a standalone fragment sized to
/// `num_qubits` total wires.
fn qft_fragment(num_qubits: usize, qubits: &[QubitId]) -> AlgoResult<Circuit> {
    check_register(qubits)?;

    let mut fragment = Circuit::with_size("qft", num_qubits as u32, 0);
    let n = qubits.len();

    for i in 0..n {
        fragment.h(qubits[i])?;

        for j in (i + 1)..n {
            let k = j - i;
            let angle = PI / (1u64 << k) as f64;
            fragment.cp(angle, qubits[j], qubits[i])?;
        }
    }

    // Reverse the register with SWAPs.
    for i in 0..n / 2 {
        fragment.swap(qubits[i], qubits[n - 1 - i])?;
    }

    debug!(register = n, ops = fragment.num_ops(), "built qft fragment");
    Ok(fragment)
}

/// Append the QFT over `qubits` to a circuit.
pub fn qft(circuit: &mut Circuit, qubits: &[QubitId]) -> AlgoResult<()> {
    let fragment = qft_fragment(circuit.num_qubits(), qubits)?;
    circuit.append(&fragment)?;
    Ok(())
}

/// Append the inverse QFT over `qubits` to a circuit.
pub fn inverse_qft(circuit: &mut Circuit, qubits: &[QubitId]) -> AlgoResult<()> {
    let fragment = qft_fragment(circuit.num_qubits(), qubits)?.inverse()?;
    circuit.append(&fragment)?;
    Ok(())
}

/// Create a standalone n-qubit QFT circuit (without measurements).
pub fn qft_circuit(n: u32) -> AlgoResult<Circuit> {
    let qubits: Vec<_> = (0..n).map(QubitId).collect();
    qft_fragment(n as usize, &qubits)
}

/// Create a standalone n-qubit inverse QFT circuit (without measurements).
pub fn inverse_qft_circuit(n: u32) -> AlgoResult<Circuit> {
    Ok(qft_circuit(n)?.inverse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimir_ir::Gate;

    #[test]
    fn test_qft_single_qubit_is_hadamard() {
        let circuit = qft_circuit(1).unwrap();
        let gates: Vec<_> = circuit.instructions().map(|i| i.as_gate().copied()).collect();
        assert_eq!(gates, vec![Some(Gate::H)]);
    }

    #[test]
    fn test_qft_gate_count() {
        // n Hadamards, n(n-1)/2 controlled phases, n/2 swaps.
        let circuit = qft_circuit(4).unwrap();
        assert_eq!(circuit.num_ops(), 4 + 6 + 2);
    }

    #[test]
    fn test_qft_three_qubit_structure() {
        let circuit = qft_circuit(3).unwrap();
        let ops: Vec<_> = circuit
            .instructions()
            .map(|i| (i.as_gate().copied().unwrap(), i.qubits.clone()))
            .collect();

        assert_eq!(
            ops,
            vec![
                (Gate::H, vec![QubitId(0)]),
                (Gate::CP(PI / 2.0), vec![QubitId(1), QubitId(0)]),
                (Gate::CP(PI / 4.0), vec![QubitId(2), QubitId(0)]),
                (Gate::H, vec![QubitId(1)]),
                (Gate::CP(PI / 2.0), vec![QubitId(2), QubitId(1)]),
                (Gate::H, vec![QubitId(2)]),
                (Gate::Swap, vec![QubitId(0), QubitId(2)]),
            ]
        );
    }

    #[test]
    fn test_inverse_qft_negates_and_reverses() {
        let forward = qft_circuit(3).unwrap();
        let inverse = inverse_qft_circuit(3).unwrap();

        assert_eq!(inverse.num_ops(), forward.num_ops());

        // First instruction of the inverse is the last of the forward.
        let first = inverse.instructions().next().unwrap();
        assert_eq!(first.as_gate(), Some(&Gate::Swap));

        // Every angle is negated.
        let forward_angles: Vec<_> = forward
            .instructions()
            .filter_map(|i| i.as_gate().and_then(Gate::angle))
            .collect();
        let inverse_angles: Vec<_> = inverse
            .instructions()
            .filter_map(|i| i.as_gate().and_then(Gate::angle))
            .collect();
        let negated: Vec<_> = forward_angles.iter().rev().map(|a| -a).collect();
        assert_eq!(inverse_angles, negated);
    }

    #[test]
    fn test_qft_on_subregister() {
        let mut circuit = Circuit::with_size("sub", 5, 0);
        qft(&mut circuit, &[QubitId(1), QubitId(3)]).unwrap();

        // H(1), CP(π/2, 3→1), H(3), swap(1,3)
        assert_eq!(circuit.num_ops(), 4);
        let touched: Vec<_> = circuit
            .instructions()
            .flat_map(|i| i.qubits.clone())
            .collect();
        assert!(touched.iter().all(|q| q.0 == 1 || q.0 == 3));
    }

    #[test]
    fn test_qft_empty_register() {
        let mut circuit = Circuit::with_size("empty", 2, 0);
        assert!(matches!(
            qft(&mut circuit, &[]),
            Err(AlgoError::EmptyRegister(_))
        ));
    }

    #[test]
    fn test_qft_duplicate_qubit() {
        let mut circuit = Circuit::with_size("dup", 2, 0);
        assert!(matches!(
            qft(&mut circuit, &[QubitId(0), QubitId(0)]),
            Err(AlgoError::DuplicateQubit(0))
        ));
    }

    #[test]
    fn test_qft_out_of_range_qubit() {
        let mut circuit = Circuit::with_size("small", 2, 0);
        assert!(qft(&mut circuit, &[QubitId(0), QubitId(7)]).is_err());
    }
}

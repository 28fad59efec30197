//! Structural tests composing the QFT and QPE builders.

use std::f64::consts::PI;

use mimir_algo::{PhaseEstimation, inverse_qft, inverse_qft_circuit, qft, qft_circuit};
use mimir_ir::{Circuit, Gate, QubitId};

#[test]
fn test_qft_then_inverse_cancels_structurally() {
    let mut circuit = Circuit::with_size("roundtrip", 3, 0);
    qft(&mut circuit, &[QubitId(0), QubitId(1), QubitId(2)]).unwrap();
    inverse_qft(&mut circuit, &[QubitId(0), QubitId(1), QubitId(2)]).unwrap();

    // The inverse half mirrors the forward half gate-for-gate.
    let ops: Vec<_> = circuit.instructions().collect();
    assert_eq!(ops.len() % 2, 0);
    let (forward, backward) = ops.split_at(ops.len() / 2);
    for (f, b) in forward.iter().zip(backward.iter().rev()) {
        assert_eq!(f.qubits, b.qubits);
        let f_gate = f.as_gate().unwrap();
        let b_gate = b.as_gate().unwrap();
        assert_eq!(f_gate.inverse(), *b_gate);
    }
}

#[test]
fn test_inverse_of_inverse_is_forward() {
    let forward = qft_circuit(4).unwrap();
    let round_trip = inverse_qft_circuit(4).unwrap().inverse().unwrap();

    let forward_ops: Vec<_> = forward.instructions().cloned().collect();
    let round_trip_ops: Vec<_> = round_trip.instructions().cloned().collect();
    assert_eq!(forward_ops, round_trip_ops);
}

#[test]
fn test_qpe_uses_inverse_qft_over_reversed_ancillas() {
    let qpe = PhaseEstimation::from_fraction(3, 0.125).unwrap();
    let circuit = qpe.circuit().unwrap();

    // The decode stage must start with the swap network of the inverse
    // transform; its first swap pairs the outer ancillas.
    let first_swap = circuit
        .instructions()
        .find(|i| i.as_gate() == Some(&Gate::Swap))
        .expect("inverse qft contributes a swap");
    assert_eq!(first_swap.qubits, vec![QubitId(2), QubitId(0)]);
}

#[test]
fn test_qpe_measures_every_ancilla_once() {
    let qpe = PhaseEstimation::from_fraction(4, 0.3).unwrap();
    let circuit = qpe.circuit().unwrap();

    let measures: Vec<_> = circuit.instructions().filter(|i| i.is_measure()).collect();
    assert_eq!(measures.len(), 4);
    for (i, m) in measures.iter().enumerate() {
        assert_eq!(m.qubits, vec![QubitId(i as u32)]);
        assert_eq!(m.clbits[0].0, i as u32);
    }
    // The eigenstate qubit is never measured.
    assert!(measures.iter().all(|m| m.qubits[0] != QubitId(4)));
}

#[test]
fn test_qpe_gate_budget() {
    // 1 X + n H + n kickback CPs + inverse QFT (n H, n(n-1)/2 CP, n/2 swap)
    // + n measures.
    let n = 5usize;
    let qpe = PhaseEstimation::from_fraction(n as u32, 0.2).unwrap();
    let circuit = qpe.circuit().unwrap();

    let expected = 1 + n + n + (n + n * (n - 1) / 2 + n / 2) + n;
    assert_eq!(circuit.num_ops(), expected);
}

#[test]
fn test_qft_fragment_respects_register_order() {
    // Reversed register: the leading Hadamard lands on the highest qubit.
    let mut circuit = Circuit::with_size("rev", 3, 0);
    qft(&mut circuit, &[QubitId(2), QubitId(1), QubitId(0)]).unwrap();

    let first = circuit.instructions().next().unwrap();
    assert_eq!(first.as_gate(), Some(&Gate::H));
    assert_eq!(first.qubits, vec![QubitId(2)]);

    // Rotation ladder controls come from later slice positions.
    let first_cp = circuit
        .instructions()
        .find(|i| matches!(i.as_gate(), Some(Gate::CP(_))))
        .unwrap();
    assert_eq!(first_cp.qubits, vec![QubitId(1), QubitId(2)]);
    assert_eq!(first_cp.as_gate().and_then(Gate::angle), Some(PI / 2.0));
}

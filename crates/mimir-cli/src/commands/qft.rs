//! Qft command implementation.

use anyhow::Result;
use console::style;
use tracing::info;

use mimir_algo::{inverse_qft, qft};
use mimir_ir::{Circuit, QubitId};

use super::common::{print_json, print_results, resolve_backend, submit_and_wait};

/// Execute the qft command.
pub async fn execute(
    qubits: u32,
    basis: u64,
    roundtrip: bool,
    shots: u32,
    backend: &str,
    json: bool,
) -> Result<()> {
    if qubits == 0 {
        anyhow::bail!("Need at least one qubit");
    }
    if basis >= (1u64 << qubits.min(63)) {
        anyhow::bail!("Basis state {basis} does not fit in {qubits} qubits");
    }

    let direction = if roundtrip { "QFT + inverse QFT" } else { "QFT" };
    println!(
        "{} Applying {} to |{:0width$b}⟩ on {} ({} shots)",
        style("→").cyan().bold(),
        style(direction).green(),
        basis,
        style(backend).yellow(),
        shots,
        width = qubits as usize
    );

    let mut circuit = Circuit::with_size("qft_demo", qubits, qubits);
    for bit in 0..qubits {
        if basis & (1 << bit) != 0 {
            circuit.x(QubitId(bit))?;
        }
    }

    let register: Vec<_> = (0..qubits).map(QubitId).collect();
    qft(&mut circuit, &register)?;
    if roundtrip {
        inverse_qft(&mut circuit, &register)?;
    }
    circuit.measure_all()?;
    info!("qft demo circuit assembled: basis {basis}, roundtrip {roundtrip}");

    println!(
        "  Circuit: {} qubits, {} ops, depth {}",
        circuit.num_qubits(),
        circuit.num_ops(),
        circuit.depth()
    );

    let backend_impl = resolve_backend(backend)?;
    let result = submit_and_wait(backend_impl.as_ref(), &circuit, shots).await?;

    if json {
        print_json(&result.counts)?;
        return Ok(());
    }

    print_results(&result);

    if roundtrip {
        let expected = format!("{basis:0width$b}", width = qubits as usize);
        let observed = result.counts.get(&expected);
        if observed == u64::from(shots) {
            println!(
                "\n  {} all {} shots returned to |{}⟩",
                style("Roundtrip exact:").green().bold(),
                shots,
                expected
            );
        } else {
            println!(
                "\n  Roundtrip returned |{}⟩ in {}/{} shots",
                expected, observed, shots
            );
        }
    }

    Ok(())
}

//! Qpe command implementation.

use anyhow::Result;
use console::style;
use tracing::info;

use mimir_algo::{PhaseEstimation, estimate_phase};

use super::common::{print_json, print_results, resolve_backend, submit_and_wait};

/// Execute the qpe command.
pub async fn execute(
    ancillas: u32,
    phase_fraction: f64,
    shots: u32,
    backend: &str,
    json: bool,
) -> Result<()> {
    if !(0.0..1.0).contains(&phase_fraction) {
        anyhow::bail!("Phase fraction must be in [0, 1), got {phase_fraction}");
    }

    println!(
        "{} Estimating phase 2π·{} with {} ancillas on {} ({} shots)",
        style("→").cyan().bold(),
        style(phase_fraction).green(),
        style(ancillas).yellow(),
        style(backend).yellow(),
        shots
    );

    let qpe = PhaseEstimation::from_fraction(ancillas, phase_fraction)?;
    let circuit = qpe.circuit()?;
    info!(
        "qpe circuit: {} ancillas, resolution {:.6} rad",
        ancillas,
        qpe.resolution()
    );
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

    let estimate = estimate_phase(&result.counts, ancillas)?;
    let confidence = estimate.count as f64 / estimate.total_shots as f64 * 100.0;

    println!(
        "\n  Estimated phase: 2π·{}/{} = {:.6} rad ({:.1}% of shots)",
        style(estimate.register).cyan(),
        1u64 << ancillas,
        estimate.phase,
        confidence
    );
    println!(
        "  True phase:      2π·{} = {:.6} rad",
        phase_fraction,
        qpe.base_phase()
    );

    let error = (estimate.fraction - phase_fraction).abs();
    if error < f64::EPSILON {
        println!("  {}", style("Exact match").green().bold());
    } else {
        println!(
            "  Estimation error: {:.6} of a turn (resolution 1/{})",
            error,
            1u64 << ancillas
        );
    }

    Ok(())
}

//! Shared helpers for CLI commands.

use std::sync::Arc;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use mimir_adapter_sim::StatevectorBackend;
use mimir_hal::{Backend, BackendRegistry, Counts, ExecutionResult, JobId};
use mimir_ir::Circuit;

/// Build the registry of backends this binary ships with.
pub fn create_registry() -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry.register(Arc::new(StatevectorBackend::new()));
    registry
}

/// Look up a backend by name.
pub fn resolve_backend(name: &str) -> Result<Arc<dyn Backend>> {
    let registry = create_registry();
    registry.get(name).map_err(|_| {
        anyhow::anyhow!(
            "Unknown backend: '{name}'. Available: {}",
            registry.names().join(", ")
        )
    })
}

/// Submit a circuit, wait behind a spinner, and return the result.
pub async fn submit_and_wait(
    backend: &dyn Backend,
    circuit: &Circuit,
    shots: u32,
) -> Result<ExecutionResult> {
    let avail = backend.availability().await?;
    if !avail.is_available {
        anyhow::bail!("Backend '{}' is not available", backend.name());
    }

    let validation = backend.validate(circuit).await?;
    if let mimir_hal::ValidationResult::Invalid { reasons } = validation {
        anyhow::bail!("Circuit rejected by backend: {}", reasons.join("; "));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Submitting job...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let job_id: JobId = backend.submit(circuit, shots).await?;
    spinner.set_message(format!("Running job {job_id}..."));

    let result = backend.wait(&job_id).await?;
    spinner.finish_and_clear();

    Ok(result)
}

/// Print execution results in a table format with a bar per outcome.
pub fn print_results(result: &ExecutionResult) {
    use console::style;

    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let sorted = result.counts.sorted();
    let total = result.counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(16) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }

    if let Some(time_ms) = result.execution_time_ms {
        println!("\n  Execution time: {} ms", style(time_ms).yellow());
    }
}

/// Print counts as a JSON object keyed by bitstring.
pub fn print_json(counts: &Counts) -> Result<()> {
    let map: std::collections::BTreeMap<_, _> = counts.iter().collect();
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}

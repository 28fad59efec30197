//! Backends command implementation.

use anyhow::Result;
use console::style;

use super::common::create_registry;

/// Execute the backends command.
pub async fn execute() -> Result<()> {
    let registry = create_registry();

    println!("{} Available backends:", style("→").cyan().bold());

    for name in registry.names() {
        let backend = registry.get(name)?;
        let caps = backend.capabilities();
        let avail = backend.availability().await?;

        let status = if avail.is_available {
            style("available").green()
        } else {
            style("offline").red()
        };

        println!(
            "  {} [{}] — {} qubits, max {} shots{}",
            style(name).cyan().bold(),
            status,
            caps.num_qubits,
            caps.max_shots,
            if caps.is_simulator { ", simulator" } else { "" }
        );
        println!("    gates: {}", caps.gate_set.gates().join(" "));
    }

    Ok(())
}

//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    println!(
        "{} {}",
        style("mimir").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("  quantum phase estimation toolkit");
}

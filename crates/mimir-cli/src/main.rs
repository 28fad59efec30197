//! Mimir Command-Line Interface
//!
//! Builds quantum-phase-estimation and QFT demonstration circuits, runs
//! them on a registered backend, and renders the measured counts as a
//! terminal histogram.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, qft, qpe, version};

/// Mimir - quantum phase estimation toolkit
#[derive(Parser)]
#[command(name = "mimir")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the phase of P(2π·fraction) with ancilla qubits
    Qpe {
        /// Number of ancilla (counting) qubits
        #[arg(short, long, default_value = "3")]
        ancillas: u32,

        /// Phase as a fraction of a full turn, in [0, 1)
        #[arg(short, long, default_value = "0.625")]
        phase: f64,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Backend to use
        #[arg(short, long, default_value = "statevector")]
        backend: String,

        /// Print counts as JSON instead of a histogram
        #[arg(long)]
        json: bool,
    },

    /// Apply the QFT to a basis state and sample the result
    Qft {
        /// Number of qubits
        #[arg(short, long, default_value = "3")]
        qubits: u32,

        /// Basis state to prepare (register value)
        #[arg(long, default_value = "0")]
        basis: u64,

        /// Also apply the inverse transform, returning to the basis state
        #[arg(long)]
        roundtrip: bool,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Backend to use
        #[arg(short, long, default_value = "statevector")]
        backend: String,

        /// Print counts as JSON instead of a histogram
        #[arg(long)]
        json: bool,
    },

    /// List available backends
    Backends,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Qpe {
            ancillas,
            phase,
            shots,
            backend,
            json,
        } => qpe::execute(ancillas, phase, shots, &backend, json).await,

        Commands::Qft {
            qubits,
            basis,
            roundtrip,
            shots,
            backend,
            json,
        } => qft::execute(qubits, basis, roundtrip, shots, &backend, json).await,

        Commands::Backends => backends::execute().await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

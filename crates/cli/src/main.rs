//! Pipeline register chain simulator CLI.
//!
//! This binary replays scripted stimulus through a configured register chain.
//! It performs:
//! 1. **Configuration:** Builds the chain from a JSON config file and/or
//!    command-line overrides.
//! 2. **Replay:** Drives a JSON stimulus program one step per clock cycle and
//!    prints the output sampled at each rising edge.
//! 3. **Reporting:** Optionally prints the run statistics table.

use clap::{Parser, Subcommand};
use std::{fs, process};

use pipereg_core::config::{ChainConfig, ResetMode};
use pipereg_core::sim::{Simulator, Stimulus};

#[derive(Parser, Debug)]
#[command(
    name = "pregsim",
    author,
    version,
    about = "Cycle-accurate pipeline register chain simulator",
    long_about = "Replay a stimulus program through a parameterized register chain.\n\nThe chain is configured from a JSON file and/or flag overrides; the stimulus is a JSON list of per-cycle pin samples.\n\nExamples:\n  pregsim run vectors.json\n  pregsim run --width 16 --stages 4 vectors.json\n  pregsim run --config chain.json --stats vectors.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a stimulus program through the chain.
    Run {
        /// Stimulus program (JSON), driven one step per rising edge.
        file: String,

        /// Chain configuration file (JSON); flag overrides apply on top.
        #[arg(short, long)]
        config: Option<String>,

        /// Datapath width in bits (1-64).
        #[arg(long)]
        width: Option<u32>,

        /// Number of register stages (0 = passthrough).
        #[arg(long)]
        stages: Option<u32>,

        /// Reset mode selector: 0 = async, 1 = sync, any other value = none.
        #[arg(long)]
        reset_mode: Option<i64>,

        /// Print the statistics report after the run.
        #[arg(long)]
        stats: bool,

        /// Enable per-edge trace output (honors RUST_LOG filtering).
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            config,
            width,
            stages,
            reset_mode,
            stats,
            verbose,
        } => run(&file, config.as_deref(), width, stages, reset_mode, stats, verbose),
    }
}

/// Loads the chain configuration from an optional file plus flag overrides.
fn build_config(
    path: Option<&str>,
    width: Option<u32>,
    stages: Option<u32>,
    reset_mode: Option<i64>,
) -> ChainConfig {
    let mut config = path.map_or_else(ChainConfig::default, |p| {
        let text = fs::read_to_string(p).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: Could not read config '{}': {}", p, e);
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: Malformed config '{}': {}", p, e);
            process::exit(1);
        })
    });
    if let Some(w) = width {
        config.width = w;
    }
    if let Some(s) = stages {
        config.stages = s;
    }
    if let Some(raw) = reset_mode {
        config.reset_mode = ResetMode::from_selector(raw);
    }
    config
}

fn run(
    file: &str,
    config_path: Option<&str>,
    width: Option<u32>,
    stages: Option<u32>,
    reset_mode: Option<i64>,
    stats: bool,
    verbose: bool,
) {
    if verbose {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = build_config(config_path, width, stages, reset_mode);

    let stimulus = Stimulus::from_path(file).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });

    let mut sim = Simulator::new(&config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(2);
    });

    let outputs = sim.run(&stimulus);

    // One hex sample per edge, zero-padded to the bus width.
    let digits = ((sim.chain.width() + 3) / 4) as usize;
    for q in outputs {
        println!("{:0w$x}", q, w = digits);
    }

    if stats {
        sim.stats.print();
    }
}

// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use clap::Parser;
use debugtargets_config::{InjectorConfig, TargetConfig};
use debugtargets_core::console::CrlfWriter;
use debugtargets_core::{abort, sweep};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

const EXIT_OK: u8 = 0;
const EXIT_CONFIG_ERROR: u8 = 2;
const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Debugger test target that raises and logs null dereferences",
    long_about = None
)]
struct Cli {
    /// Path to the target config (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many sweeps instead of waiting for a key press
    #[arg(long)]
    iterations: Option<u64>,

    /// Enable debug-level logging
    #[arg(short, long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.trace {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(|| CrlfWriter::new(io::stderr()))
        .init();

    let config = match TargetConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match run(&config.injector, cli.iterations) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_RUNTIME_ERROR)
        }
    }
}

fn run(config: &InjectorConfig, iterations: Option<u64>) -> Result<()> {
    let mut stdout = CrlfWriter::new(io::stdout());
    let mut abort = abort::from_terminal(iterations);
    let mut sweeps: u64 = 0;

    info!(sweep_delay_ms = config.sweep_delay_ms, "Starting fault sweeps");
    while !abort
        .abort_requested()
        .context("Failed to poll abort signal")?
    {
        let reports = sweep(&mut stdout).context("Fault sweep violated its contract")?;
        sweeps += 1;
        debug!(sweep = sweeps, faults = reports.len(), "Sweep complete");

        std::thread::sleep(config.sweep_delay());
    }

    info!(sweeps, "Fault injector stopped");
    Ok(())
}

// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use clap::Parser;
use debugtargets_config::{ExposerConfig, TargetConfig};
use debugtargets_core::console::CrlfWriter;
use debugtargets_core::{abort, memory, ExposedState};
use std::hint::black_box;
use std::io::{self, Write};
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
    about = "Debugger test target that keeps a fixed object graph alive",
    long_about = None
)]
struct Cli {
    /// Path to the target config (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks instead of waiting for a key press
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

    match run(&config.exposer, cli.iterations) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_RUNTIME_ERROR)
        }
    }
}

fn run(config: &ExposerConfig, iterations: Option<u64>) -> Result<()> {
    let mut stdout = CrlfWriter::new(io::stdout());
    writeln!(stdout, "Pid of this process: {}", std::process::id())?;
    writeln!(stdout, "Press any key...")?;
    stdout.flush()?;

    let state = ExposedState::new();
    info!(
        tick_interval_ms = config.tick_interval_ms,
        "Exposed state ready at {:p}",
        &*state
    );

    let mut abort = abort::from_terminal(iterations);
    while !abort
        .abort_requested()
        .context("Failed to poll abort signal")?
    {
        state
            .tick(&mut stdout, config.tick_interval())
            .context("Failed to write tick progress")?;

        if config.probe_memory {
            let installed_kib = memory::installed_memory_kib();
            debug!(?installed_kib, "Installed system memory queried");
        }
    }
    drop(abort);

    writeln!(stdout)?;
    stdout.flush()?;
    info!(ticks = state.tick_count(), "State exposer stopped");
    black_box(&state);

    Ok(())
}

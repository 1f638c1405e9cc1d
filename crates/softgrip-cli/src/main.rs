//! `softgrip-cli` – exercise the codrive gripper against a simulated board.
//!
//! This binary is the workspace's smoke harness.  It:
//!
//! 1. Initialises structured logging from `RUST_LOG` (defaults to "info");
//!    set `SOFTGRIP_LOG_FORMAT=json` to emit newline-delimited JSON logs.
//! 2. Loads an instance config from the TOML file given as the first
//!    argument, or falls back to a built-in demo instance.
//! 3. Validates the config, creates one [`SimBoard`] per required
//!    dependency, and constructs the driver the way a host would.
//! 4. Runs a grab → open cycle and prints the recorded pin write trace.

mod config;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use softgrip_driver::Codrive;
use softgrip_hal::sim::SimBoard;
use softgrip_hal::{Board, CallOptions, Component, Gripper, ResourceTable};
use tracing::{error, info};

use crate::config::InstanceConfig;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let instance = match std::env::args().nth(1) {
        Some(path) => InstanceConfig::load(path.as_ref())?,
        None => {
            info!("no config file given, using the built-in demo instance");
            InstanceConfig::demo()
        }
    };
    let config = instance.to_component_config()?;
    info!(name = %config.name, model = %config.model, "validating instance config");

    let deps = Codrive::validate_config(&config)?;

    // Stand in for the host: resolve every required dependency name onto a
    // simulated board.
    let mut table = ResourceTable::new();
    let mut boards = Vec::new();
    for name in &deps.required {
        let board = SimBoard::new(name.clone());
        table.insert_board(Arc::new(board.clone()));
        boards.push(board);
    }
    info!(required = ?deps.required, "dependencies resolved onto simulated boards");

    let gripper = Codrive::new(&config, &table)?;

    let grabbed = gripper.grab(CallOptions::default()).await?;
    info!(grabbed, "grab sequence complete");

    let started = Instant::now();
    gripper.open(CallOptions::default()).await?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "open sequence complete"
    );

    for board in &boards {
        println!("pin writes on board `{}`:", board.name());
        for (pin, high) in board.writes() {
            println!("  {pin} -> {}", if high { "high" } else { "low" });
        }
    }

    Ok(())
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if std::env::var("SOFTGRIP_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }
}

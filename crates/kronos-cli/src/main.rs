//! # kronos
//!
//! What if an hour had 100 minutes and a minute had 100 seconds?
//! Renders a decimal-time clock next to a standard one in the terminal.

mod cli;
mod output;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use clap::Parser;
use kronos_common::config::KronosConfig;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .map_err(|e| anyhow::anyhow!("failed to set termination handler: {e}"))?;

    let config = KronosConfig::default();
    let summary =
        kronos_tui::runner::run(&config, &shutdown).context("kronos session failed")?;
    tracing::debug!(reason = ?summary.reason, frames = summary.frames, "exiting");

    output::farewell();
    Ok(())
}

//! Command-line interface definition.
//!
//! The program takes no options; `--help` only documents the shortcuts.

use clap::Parser;

/// Time flow is not that objective.
#[derive(Parser, Debug)]
#[command(
    name = kronos_common::constants::BIN_NAME,
    long_about = None,
    after_help = crate::output::SHORTCUTS,
)]
pub struct Cli {}

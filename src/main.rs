// Copyright © 2025 Potato Util. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Potato Util CLI
//!
//! This is the main entry point for the Potato Util command-line interface.
//! It initializes the logger, honours the process-wide debug mode, and runs
//! the selected command.

use anyhow::Context;
use log::debug;
use potato_util::{cli, runtime};

/// Initializes logging and runs the selected command.
///
/// The logger defaults to `debug` level when the `DEBUG` environment
/// variable is truthy and `info` otherwise; `RUST_LOG` still takes
/// precedence when set.
///
/// # Errors
///
/// Returns an error when the command fails, with context describing the
/// failing stage.
fn run() -> Result<(), anyhow::Error> {
    let debug_mode = runtime::is_debug_mode();
    let default_level = if debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .init();

    debug!("Debug mode enabled; verbose logging is on");
    if debug_mode {
        cli::print_banner();
    }

    cli::execute().context("Failed to execute command")
}

/// The main entry point for the Potato Util CLI.
fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

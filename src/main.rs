// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use anyhow::Result;
use clap::Parser;
use tracing::{trace, Level};

/// Print a greeting and exit.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {
    /// log diagnostics to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = App::parse();

    let level = if args.verbose {
        Level::TRACE
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_ansi(false)
        .init();

    trace!(?args, "parsed arguments");

    hello::greet_stdout()
}

// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Project scaffold
//!
//! This crate is a starting point: it prints a fixed greeting and exits.
//!
//! # Quick Start
//!
//! ```no_run
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     hello::greet_stdout()
//! }
//! ```
//!
//! The greeting can be written to any [Write](std::io::Write) sink:
//!
//! ```
//! let mut out = Vec::new();
//! hello::greet(&mut out).expect("greeting");
//! assert_eq!(b"Hello, world!\n".as_slice(), out.as_slice());
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

/// The greeting, without its trailing newline.
pub const GREETING: &str = "Hello, world!";

/// Writes [GREETING] followed by a newline to `out` and flushes it.
pub fn greet<W: Write>(out: &mut W) -> Result<()> {
    debug!(greeting = GREETING, "writing greeting");
    writeln!(out, "{GREETING}").context("failed to write greeting")?;
    out.flush().context("failed to write greeting")?;
    Ok(())
}

/// Writes the greeting to standard output.
pub fn greet_stdout() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    greet(&mut handle)
}

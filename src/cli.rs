// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line arguments and the formatting loop behind the binary.

use crate::time_utils::{format_iso8601, parse_instant};
use crate::zone::Zone;
use anyhow::Context;
use clap::Parser;
use std::io::Write;

/// Format timestamps as yyyy-MM-ddTHH:mm:ss.sss±HH:mm
#[derive(Parser, Debug)]
#[command(name = "spot-timeutils", version, about, long_about = None)]
pub struct Args {
    /// Zone to render in: local, UTC, +05:30 or an IANA name
    #[arg(long, value_name = "ZONE")]
    pub tz: Option<Zone>,

    /// Epoch milliseconds or `now`; read one per line from stdin if omitted
    pub values: Vec<String>,
}

/// Write one formatted timestamp per line for each non-blank value.
///
/// Stops at the first value that is not epoch milliseconds or `now`; lines
/// already written stay written. Returns the number of timestamps written.
pub fn format_all<'a, I, W>(values: I, zone: &Zone, out: &mut W) -> anyhow::Result<usize>
where
    I: IntoIterator<Item = &'a str>,
    W: Write,
{
    let mut count = 0;
    for value in values.into_iter().map(str::trim).filter(|v| !v.is_empty()) {
        let instant = parse_instant(value)
            .with_context(|| format!("Failed to parse timestamp {value:?}"))?;
        writeln!(out, "{}", format_iso8601(&zone.localize(&instant)))?;
        count += 1;
    }
    Ok(count)
}

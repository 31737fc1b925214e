// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spot time CLI
//!
//! Prints epoch-millisecond timestamps as ISO 8601 strings with an explicit
//! UTC offset, one per line.

use anyhow::Context;
use clap::Parser;
use spot_timeutils::cli::{self, Args};
use spot_timeutils::config::{Config, LogFormat};
use std::io::{self, BufRead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(config.log_format)?;

    let args = Args::parse();
    let zone = args.tz.unwrap_or(config.default_zone);
    tracing::debug!(zone = %zone, "Formatting timestamps");

    let values = if args.values.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?
    } else {
        args.values
    };

    let mut out = io::stdout().lock();
    let count = cli::format_all(values.iter().map(String::as_str), &zone, &mut out)?;

    tracing::info!(count, zone = %zone, "Timestamps formatted");
    Ok(())
}

/// Initialize logging on stderr so stdout carries only timestamps.
fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn").add_directive("spot_timeutils=info".parse()?),
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
    Ok(())
}

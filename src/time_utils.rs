// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use crate::error::{Result, TimeError};
use crate::zone::Zone;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::fmt;

/// `yyyy-MM-ddTHH:mm:ss.sss±HH:mm`. Milliseconds are truncated, and UTC is
/// written as `+00:00` rather than `Z`.
pub const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Everything after the year in [`ISO8601_FORMAT`].
const AFTER_YEAR_FORMAT: &str = "-%m-%dT%H:%M:%S%.3f%:z";

/// Format an already-localized timestamp, keeping its own offset.
///
/// Years past 9999 are written as plain digits (`10000-01-01T...`), without
/// the leading `+` chrono's `%Y` adds.
pub fn format_iso8601<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let year = date.year();
    if year > 9999 {
        format!("{year}{}", date.format(AFTER_YEAR_FORMAT))
    } else {
        date.format(ISO8601_FORMAT).to_string()
    }
}

/// Format an instant in the process default time zone.
///
/// The zone is looked up on every call, so the offset suffix follows any
/// change to the host configuration (or `TZ`) between calls. Returns `None`
/// when no instant is given.
pub fn convert_to_iso8601(date: Option<DateTime<Utc>>) -> Option<String> {
    convert_to_iso8601_in(date, &Zone::Local)
}

/// Format an instant in an explicit zone. Returns `None` when no instant is
/// given.
///
/// The offset is written as `±HH:mm`, so offsets with a seconds part are
/// truncated to the minute: Kolkata local mean time (+05:53:28) renders as
/// `+05:53`, and such output parses back 28 seconds away from the input.
pub fn convert_to_iso8601_in(date: Option<DateTime<Utc>>, zone: &Zone) -> Option<String> {
    date.map(|date| format_iso8601(&zone.localize(&date)))
}

/// Build an instant from milliseconds since the Unix epoch.
pub fn instant_from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or(TimeError::OutOfRange(millis))
}

/// Parse command-line input: epoch milliseconds or `now`.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }

    let millis: i64 = text
        .parse()
        .map_err(|_| TimeError::InvalidInstant(text.to_string()))?;
    instant_from_millis(millis)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time zone selection for timestamp rendering.
//!
//! A [`Zone`] is resolved against each instant separately, so named zones
//! pick up daylight saving changes and [`Zone::Local`] follows the process
//! default zone as it is at the moment of the call.

use crate::error::{Result, TimeError};
use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Zone an instant is localized to before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    /// Host default zone, read at call time (honours `TZ`)
    #[default]
    Local,
    /// Constant UTC offset
    Fixed(FixedOffset),
    /// IANA zone such as `Asia/Kolkata`
    Named(chrono_tz::Tz),
}

impl Zone {
    /// UTC itself, rendered with a `+00:00` offset.
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// UTC offset this zone has at the given instant.
    pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Local => instant.with_timezone(&Local).offset().fix(),
            Zone::Fixed(offset) => *offset,
            Zone::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
        }
    }

    /// Convert an instant to local clock time in this zone.
    pub fn localize(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset_at(instant))
    }
}

/// Parse `±HH:MM` or `±HHMM` with chrono, plus the bare `±HH` form.
fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text.len() == 3 && text[1..].bytes().all(|b| b.is_ascii_digit()) {
        return format!("{text}:00").parse().ok();
    }
    text.parse().ok()
}

impl FromStr for Zone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty()
            || text.eq_ignore_ascii_case("local")
            || text.eq_ignore_ascii_case("system")
        {
            return Ok(Zone::Local);
        }
        if text.eq_ignore_ascii_case("z") || text.eq_ignore_ascii_case("utc") {
            return Ok(Zone::utc());
        }
        if text.starts_with(['+', '-']) {
            return parse_offset(text)
                .map(Zone::Fixed)
                .ok_or_else(|| TimeError::InvalidZone(text.to_string()));
        }

        text.parse::<chrono_tz::Tz>().map(Zone::Named).map_err(|e| {
            tracing::debug!(zone = text, error = %e, "Unknown IANA time zone");
            TimeError::InvalidZone(text.to_string())
        })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl TryFrom<String> for Zone {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.to_string()
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Spot time utilities: ISO 8601 timestamp rendering.
//!
//! This crate formats instants as `yyyy-MM-ddTHH:mm:ss.sss±HH:mm`, in the
//! process default time zone or an explicitly chosen one.

pub mod cli;
pub mod config;
pub mod error;
pub mod time_utils;
pub mod zone;

pub use time_utils::{convert_to_iso8601, convert_to_iso8601_in};
pub use zone::Zone;

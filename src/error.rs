// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for time conversion helpers.

/// Errors raised while preparing an instant or zone for formatting.
///
/// Formatting itself never fails; these only come from the helpers that
/// turn user input into chrono values.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    #[error("Invalid time zone: {0}")]
    InvalidZone(String),

    #[error("Epoch milliseconds out of range: {0}")]
    OutOfRange(i64),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),
}

impl TimeError {
    /// True when the error came from user-supplied zone text.
    pub fn is_zone_error(&self) -> bool {
        matches!(self, TimeError::InvalidZone(_))
    }
}

/// Result type alias for time helpers
pub type Result<T> = std::result::Result<T, TimeError>;

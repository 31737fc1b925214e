// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use spot_timeutils::config::{Config, ConfigError, TIMEZONE_VAR};
use spot_timeutils::error::TimeError;
use spot_timeutils::Zone;
use std::error::Error;

#[test]
fn test_is_zone_error_matches() {
    let err = "Atlantis/Central".parse::<Zone>().unwrap_err();
    assert!(err.is_zone_error());
    assert_eq!(err.to_string(), "Invalid time zone: Atlantis/Central");

    let err = "+25:00".parse::<Zone>().unwrap_err();
    assert!(err.is_zone_error());
}

#[test]
fn test_is_zone_error_no_match() {
    assert!(!TimeError::OutOfRange(i64::MIN).is_zone_error());
    assert!(!TimeError::InvalidInstant("abc".to_string()).is_zone_error());
}

#[test]
fn test_messages() {
    assert_eq!(
        TimeError::OutOfRange(42).to_string(),
        "Epoch milliseconds out of range: 42"
    );
    assert_eq!(
        TimeError::InvalidInstant("tomorrow".to_string()).to_string(),
        "Invalid instant: tomorrow"
    );
}

#[test]
fn test_config_error_keeps_source() {
    let err = Config::from_lookup(|key| (key == TIMEZONE_VAR).then(|| "+99".to_string()))
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidZone { .. }));
    assert_eq!(err.to_string(), "Invalid time zone in SPOT_TIMEZONE");
    let source = err.source().expect("zone error as source");
    assert_eq!(source.to_string(), "Invalid time zone: +99");
}

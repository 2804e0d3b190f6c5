// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! RFC 3339 timestamp helpers.
//!
//! Records keep their timestamps as strings, exactly as the store holds
//! them. These helpers exist for the few places that need to produce or
//! compare one.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::DomainError;

/// Returns the current UTC time formatted as RFC 3339.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the clock value cannot be formatted.
pub fn now_rfc3339() -> Result<String, DomainError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| DomainError::InvalidTimestamp {
            value: String::from("now"),
            error: e.to_string(),
        })
}

/// Parses an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if `value` is not RFC 3339.
pub fn parse_rfc3339(value: &str) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| DomainError::InvalidTimestamp {
        value: value.to_string(),
        error: e.to_string(),
    })
}

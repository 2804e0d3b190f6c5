// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building or decoding marketplace records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string literal does not name a variant of a closed enumeration.
    InvalidValue {
        /// The enumeration being parsed (e.g. "order status").
        kind: &'static str,
        /// The rejected literal.
        value: String,
    },
    /// A status move is not listed in the lifecycle's transition table.
    InvalidStatusTransition {
        /// The lifecycle being checked.
        kind: &'static str,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// A timestamp is not valid RFC 3339.
    InvalidTimestamp {
        /// The rejected timestamp.
        value: String,
        /// The parser's message.
        error: String,
    },
    /// A negotiation entry is not strictly later than the last one.
    NonMonotonicHistory {
        /// Timestamp of the current last entry.
        previous: String,
        /// Timestamp of the rejected entry.
        next: String,
    },
    /// A profile was supplied for a role that does not carry one.
    ProfileRoleMismatch {
        /// The user's role, or "none".
        role: String,
    },
    /// A stored profile does not decode as the variant its role selects.
    InvalidProfile {
        /// The user's role.
        role: String,
        /// The decoder's message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { kind, value } => write!(f, "Invalid {kind}: '{value}'"),
            Self::InvalidStatusTransition { kind, from, to } => {
                write!(f, "Invalid {kind} transition from '{from}' to '{to}'")
            }
            Self::InvalidTimestamp { value, error } => {
                write!(f, "Invalid timestamp '{value}': {error}")
            }
            Self::NonMonotonicHistory { previous, next } => {
                write!(
                    f,
                    "Negotiation entry at {next} is not later than the previous entry at {previous}"
                )
            }
            Self::ProfileRoleMismatch { role } => {
                write!(f, "Role '{role}' does not carry a profile")
            }
            Self::InvalidProfile { role, error } => {
                write!(f, "Invalid {role} profile: {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

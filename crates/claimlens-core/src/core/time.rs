// crates/claimlens-core/src/core/time.rs
// ============================================================================
// Module: ClaimLens Time Model
// Description: UTC timestamp representation for audit records.
// Purpose: Provide ISO-8601 timestamps with an explicit-value path for replay.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Audit entries carry a UTC timestamp serialized as RFC 3339 (ISO-8601).
//! Wall-clock capture is isolated in [`UtcTimestamp::now`]; everything else
//! accepts explicit values so tests and replay stay deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: UTC Timestamp
// ============================================================================

/// UTC timestamp serialized as an RFC 3339 string.
///
/// # Invariants
/// - Always carries UTC; constructors normalize any offset to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtcTimestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl UtcTimestamp {
    /// Captures the current wall-clock time in UTC.
    #[must_use]
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Wraps an explicit datetime, normalized to UTC.
    #[must_use]
    pub fn from_datetime(datetime: OffsetDateTime) -> Self {
        Self(datetime.to_offset(time::UtcOffset::UTC))
    }

    /// Returns the inner datetime value.
    #[must_use]
    pub const fn as_datetime(&self) -> OffsetDateTime {
        self.0
    }
}

impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

// crates/claimlens-core/src/core/fairness.rs
// ============================================================================
// Module: ClaimLens Fairness Types
// Description: Batch-level disparity statistics and decided-claim inputs.
// Purpose: Provide serializable fairness reports with lossless infinite ratios.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Fairness monitoring aggregates outlier rates across grouping dimensions
//! (state, provider) for a completed batch of decided claims. A group rate
//! of zero makes the disparity ratio infinite; that is maximal disparity,
//! not an error, so [`RateRatio`] keeps infinity representable and
//! round-trippable through JSON (bare `f64::INFINITY` would serialize to
//! null).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as DeError;

// ============================================================================
// SECTION: Decided Claims
// ============================================================================

/// Batch input row: one decided claim with its outlier flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecidedClaim {
    /// Patient state code, when present upstream.
    #[serde(default)]
    pub patient_state: Option<String>,
    /// Billing provider name, when present upstream.
    #[serde(default)]
    pub provider_name: Option<String>,
    /// True when the per-claim engine flagged the claim.
    pub is_outlier: bool,
}

// ============================================================================
// SECTION: Rate Ratio
// ============================================================================

/// Disparity ratio between the highest and lowest group outlier rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateRatio {
    /// Finite max/min rate ratio.
    Finite(f64),
    /// Ratio with a zero minimum rate (maximal disparity).
    Infinite,
}

impl RateRatio {
    /// Computes the ratio of two group rates, guarding the zero minimum.
    #[must_use]
    pub fn from_rates(max_rate: f64, min_rate: f64) -> Self {
        if min_rate > 0.0 {
            Self::Finite(max_rate / min_rate)
        } else {
            Self::Infinite
        }
    }

    /// Returns true when the ratio strictly exceeds the threshold.
    ///
    /// An infinite ratio exceeds every threshold.
    #[must_use]
    pub fn exceeds(self, threshold: f64) -> bool {
        match self {
            Self::Finite(value) => value > threshold,
            Self::Infinite => true,
        }
    }

    /// Returns true for the infinite (zero-minimum) case.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }
}

impl fmt::Display for RateRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value:.2}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

/// Serialized marker for the infinite ratio.
const INFINITE_RATIO_TOKEN: &str = "infinity";

impl Serialize for RateRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(value) => serializer.serialize_f64(*value),
            Self::Infinite => serializer.serialize_str(INFINITE_RATIO_TOKEN),
        }
    }
}

impl<'de> Deserialize<'de> for RateRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(Self::Finite)
                .ok_or_else(|| DeError::custom("rate ratio out of f64 range")),
            serde_json::Value::String(token) if token == INFINITE_RATIO_TOKEN => {
                Ok(Self::Infinite)
            }
            other => Err(DeError::custom(format!("invalid rate ratio: {other}"))),
        }
    }
}

// ============================================================================
// SECTION: Disparity Statistics
// ============================================================================

/// Outlier-rate spread for one grouping dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisparityStats {
    /// Highest group outlier rate.
    pub max_rate: f64,
    /// Lowest group outlier rate.
    pub min_rate: f64,
    /// Ratio of highest to lowest rate.
    pub ratio: RateRatio,
}

// ============================================================================
// SECTION: Fairness Report
// ============================================================================

/// Batch-level fairness report across grouping dimensions.
///
/// A dimension is omitted (`None`) when the batch carries no values for its
/// grouping field; that is a data gap, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FairnessReport {
    /// Outlier-rate disparities across patient states.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_disparities: Option<DisparityStats>,
    /// Outlier-rate disparities across providers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_disparities: Option<DisparityStats>,
}

// ============================================================================
// SECTION: Alert Thresholds
// ============================================================================

/// Disparity multipliers above which alerts fire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairnessThresholds {
    /// State ratio multiplier (alert strictly above).
    pub state_ratio: f64,
    /// Provider ratio multiplier (alert strictly above).
    pub provider_ratio: f64,
}

impl Default for FairnessThresholds {
    fn default() -> Self {
        Self {
            state_ratio: 2.0,
            provider_ratio: 3.0,
        }
    }
}

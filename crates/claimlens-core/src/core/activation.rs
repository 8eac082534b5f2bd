// crates/claimlens-core/src/core/activation.rs
// ============================================================================
// Module: ClaimLens Rule Activations
// Description: Rule identifiers, confidence levels, and activation records.
// Purpose: Provide stable, serializable evidence of rule trigger conditions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`RuleActivation`] is the evidence that one business rule's trigger
//! condition held for a claim. Activations are created once per rule
//! evaluation, never mutated, and collected in evaluation order so reports
//! replay identically across runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Rule Identifiers
// ============================================================================

/// Closed enumeration of business rule identifiers.
///
/// Marked non-exhaustive: rules are added, never removed, as reference data
/// evolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum RuleId {
    /// Known-invalid diagnosis-procedure combination.
    UnusualCombo,
    /// Claim amount above the procedure's normal maximum.
    HighAmount,
    /// Virtual consultation billed from a non-covered state.
    GeographicRestriction,
}

impl RuleId {
    /// Returns the stable report-facing identifier string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnusualCombo => "UNUSUAL_COMBO",
            Self::HighAmount => "HIGH_AMOUNT",
            Self::GeographicRestriction => "GEOGRAPHIC_RESTRICTION",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Confidence Levels
// ============================================================================

/// Ordinal qualitative strength of a rule activation or assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    /// Weak signal.
    Low,
    /// Moderate signal.
    Medium,
    /// Strong signal.
    High,
}

impl Confidence {
    /// Returns the report-facing label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Rule Activation
// ============================================================================

/// Record of one rule evaluating true against a claim.
///
/// # Invariants
/// - Created once per rule evaluation per claim; never mutated.
/// - Collection order equals the engine's fixed rule evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleActivation {
    /// Identifier of the rule that fired.
    pub rule_id: RuleId,
    /// Human-readable description built from claim fields.
    pub description: String,
    /// Qualitative strength of the activation.
    pub confidence: Confidence,
    /// Quantitative justification for the activation.
    pub evidence: String,
}

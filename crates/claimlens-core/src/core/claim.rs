// crates/claimlens-core/src/core/claim.rs
// ============================================================================
// Module: ClaimLens Claim Record
// Description: Canonical claim input record and validation outcome types.
// Purpose: Provide an immutable, serializable claim with a strict ingestion boundary.
// Dependencies: crate::core::identifiers, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`Claim`] is the unit of analysis for the interpretability engine. Claims
//! are immutable once constructed; every component reads them without
//! mutation. Ingestion from loose JSON rows ignores unknown keys but fails
//! loudly when the `claim_id` contract is violated — that is the one fatal
//! caller error in the system. Domain violations (bad amount, bad state) are
//! soft and reported through [`ValidationOutcome`] instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::identifiers::ClaimId;

// ============================================================================
// SECTION: Claim Record
// ============================================================================

/// Canonical claim record consumed by the interpretability engine.
///
/// # Invariants
/// - Immutable after construction; all analysis is pure over it.
/// - `claim_id` is never empty for claims built through [`Claim::from_json_value`].
/// - Unknown upstream fields are dropped at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique claim identifier.
    pub claim_id: ClaimId,
    /// Patient identifier, when the upstream row carries one.
    #[serde(default)]
    pub patient_id: Option<String>,
    /// Billing provider name, used for fairness grouping.
    #[serde(default)]
    pub provider_name: Option<String>,
    /// Procedure type string; analyzed only when it matches a reference entry.
    #[serde(default)]
    pub procedure_type: Option<String>,
    /// Diagnosis string; mapped into a category or "Unknown".
    #[serde(default)]
    pub diagnosis: Option<String>,
    /// Claim amount in currency units. Defaults to zero when absent upstream.
    #[serde(default)]
    pub claim_amount: f64,
    /// Service date string, carried through untouched.
    #[serde(default)]
    pub claim_date: Option<String>,
    /// Two-letter patient state code, compared case-insensitively.
    #[serde(default)]
    pub patient_state: Option<String>,
}

impl Claim {
    /// Builds a claim from a loose JSON row, ignoring unknown fields.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimInputError::MissingClaimId`] when `claim_id` is absent
    /// or empty, and [`ClaimInputError::Malformed`] when a known field has an
    /// incompatible shape.
    pub fn from_json_value(row: Value) -> Result<Self, ClaimInputError> {
        let has_id = row
            .get("claim_id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty());
        if !has_id {
            return Err(ClaimInputError::MissingClaimId);
        }
        serde_json::from_value(row).map_err(|err| ClaimInputError::Malformed(err.to_string()))
    }

    /// Returns the patient state normalized to uppercase, or an empty string.
    #[must_use]
    pub fn normalized_state(&self) -> String {
        self.patient_state.as_deref().unwrap_or_default().to_uppercase()
    }
}

// ============================================================================
// SECTION: Ingestion Errors
// ============================================================================

/// Fatal caller contract violations raised at the ingestion boundary.
#[derive(Debug, Error)]
pub enum ClaimInputError {
    /// The row carried no usable `claim_id`.
    #[error("claim record is missing a claim_id")]
    MissingClaimId,
    /// The row could not be decoded into the claim shape.
    #[error("malformed claim record: {0}")]
    Malformed(String),
}

// ============================================================================
// SECTION: Validation Outcome
// ============================================================================

/// Soft validation result for a claim's domain bounds.
///
/// # Invariants
/// - `valid` is true iff `errors` is empty.
/// - Never raised as a fault; invalid claims remain eligible for rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// True when no domain bound was violated.
    pub valid: bool,
    /// Accumulated human-readable violation messages.
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    /// Builds an outcome from an accumulated error list.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

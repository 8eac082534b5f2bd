// crates/claimlens-core/src/runtime/validator.rs
// ============================================================================
// Module: ClaimLens Validator
// Description: Domain bounds validation for claim records.
// Purpose: Accumulate every bounds violation without short-circuiting.
// Dependencies: crate::core::{claim, reference}
// ============================================================================

//! ## Overview
//! Validation checks a claim against static domain bounds: the amount range,
//! the valid state code set, and the known procedure set. All violations
//! accumulate into one [`ValidationOutcome`]; validation never stops at the
//! first error and never raises a fault. An invalid claim remains eligible
//! for rule evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::claim::Claim;
use crate::core::claim::ValidationOutcome;
use crate::core::reference::ReferenceData;

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Validates claims against injected domain reference bounds.
#[derive(Debug, Clone)]
pub struct Validator {
    /// Reference tables supplying bounds and closed sets.
    reference: ReferenceData,
}

impl Validator {
    /// Creates a validator over the provided reference tables.
    #[must_use]
    pub const fn new(reference: ReferenceData) -> Self {
        Self {
            reference,
        }
    }

    /// Validates a claim, accumulating every violation.
    #[must_use]
    pub fn validate(&self, claim: &Claim) -> ValidationOutcome {
        let mut errors = Vec::new();

        let amount = claim.claim_amount;
        if !self.reference.amount_bounds.contains(amount) {
            errors.push(format!(
                "Invalid claim amount: ${amount}. Must be between $1 and $10,000"
            ));
        }

        let state = claim.normalized_state();
        if !self.reference.valid_states.contains(&state) {
            errors.push(format!("Invalid state code: {state}"));
        }

        // Absent procedure is a data gap, not a violation.
        if let Some(procedure) = claim.procedure_type.as_deref()
            && !self.reference.norms.contains_key(procedure)
        {
            errors.push(format!("Invalid procedure type: {procedure}"));
        }

        ValidationOutcome::from_errors(errors)
    }
}

// crates/claimlens-core/src/runtime/counterfactual.rs
// ============================================================================
// Module: ClaimLens Counterfactual Generator
// Description: Minimal amount perturbations that avoid threshold flags.
// Purpose: Explain what input change would likely clear an amount flag.
// Dependencies: crate::core::{claim, reference}
// ============================================================================

//! ## Overview
//! Counterfactuals cover amount-threshold rules only. When the claim's
//! procedure has a configured counterfactual threshold and the amount
//! exceeds it, the safe amount is 90% of the threshold — guaranteed to sit
//! below the trigger. The wording stays "likely": this is a heuristic, not
//! a guarantee.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::claim::Claim;
use crate::core::reference::ReferenceData;

// ============================================================================
// SECTION: Safe Amount
// ============================================================================

/// Fraction of the threshold used for the suggested safe amount.
const SAFE_AMOUNT_FACTOR: f64 = 0.9;

/// Computes the suggested safe amount for a threshold.
#[must_use]
pub fn safe_amount(threshold: f64) -> f64 {
    threshold * SAFE_AMOUNT_FACTOR
}

// ============================================================================
// SECTION: Counterfactual Generation
// ============================================================================

/// Generates counterfactual statements for a claim.
///
/// Only procedures with a configured counterfactual threshold are eligible;
/// others yield no statements.
#[must_use]
pub fn generate_counterfactuals(claim: &Claim, reference: &ReferenceData) -> Vec<String> {
    let mut counterfactuals = Vec::new();
    let amount = claim.claim_amount;

    if let Some(procedure) = claim.procedure_type.as_deref()
        && let Some(threshold) = reference.counterfactual_thresholds.get(procedure).copied()
        && amount > threshold
    {
        let suggested = safe_amount(threshold);
        counterfactuals.push(format!(
            "If claim amount were ${suggested:.2} instead of ${amount}, this claim would \
             likely not be flagged as an outlier"
        ));
    }

    counterfactuals
}

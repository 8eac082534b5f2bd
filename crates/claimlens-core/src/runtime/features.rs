// crates/claimlens-core/src/runtime/features.rs
// ============================================================================
// Module: ClaimLens Feature Analyzer
// Description: Deviation-from-norm statistics and diagnosis categorization.
// Purpose: Compute per-dimension claim features against reference tables.
// Dependencies: crate::core::{claim, reference, report}
// ============================================================================

//! ## Overview
//! Feature analysis compares a claim against the reference cost norms:
//! sigma deviation from the procedure average, threshold violation, the
//! expected cost range, and the diagnosis category. Unknown procedures
//! degrade to an absent procedure analysis; unknown diagnoses map to the
//! "Unknown" category. No errors are possible.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::claim::Claim;
use crate::core::reference::ReferenceData;
use crate::core::report::AmountAnalysis;
use crate::core::report::DiagnosisAnalysis;
use crate::core::report::FeatureAnalysis;
use crate::core::report::GeographicAnalysis;
use crate::core::report::ProcedureAnalysis;

// ============================================================================
// SECTION: Feature Analyzer
// ============================================================================

/// Fixed guidance string attached to every diagnosis analysis.
const TYPICAL_PROCEDURES_NOTE: &str =
    "Mental Health procedures typically for Mental Health diagnoses";

/// Computes per-dimension claim features against injected reference tables.
#[derive(Debug, Clone)]
pub struct FeatureAnalyzer {
    /// Reference tables supplying norms and category maps.
    reference: ReferenceData,
}

impl FeatureAnalyzer {
    /// Creates a feature analyzer over the provided reference tables.
    #[must_use]
    pub const fn new(reference: ReferenceData) -> Self {
        Self {
            reference,
        }
    }

    /// Analyzes a claim's features. Pure and infallible.
    #[must_use]
    pub fn analyze(&self, claim: &Claim) -> FeatureAnalysis {
        FeatureAnalysis {
            procedure_analysis: self.analyze_procedure(claim),
            diagnosis_analysis: self.analyze_diagnosis(claim),
            amount_analysis: AmountAnalysis {
                within_bounds: self.reference.amount_bounds.contains(claim.claim_amount),
            },
            geographic_analysis: self.analyze_geography(claim),
        }
    }

    /// Computes cost statistics when the procedure has a configured norm.
    fn analyze_procedure(&self, claim: &Claim) -> Option<ProcedureAnalysis> {
        let norm = self.reference.norm_for(claim.procedure_type.as_deref()?)?;
        let amount = claim.claim_amount;
        let deviation_sigma = if norm.std > 0.0 { (amount - norm.avg) / norm.std } else { 0.0 };
        Some(ProcedureAnalysis {
            expected_range: format!("${} - ${}", norm.avg - norm.std, norm.avg + norm.std),
            actual_amount: format!("${amount}"),
            deviation_sigma,
            threshold_violation: amount > norm.max_normal,
        })
    }

    /// Categorizes the diagnosis by exact match, or "Unknown".
    fn analyze_diagnosis(&self, claim: &Claim) -> DiagnosisAnalysis {
        DiagnosisAnalysis {
            diagnosis_category: self
                .reference
                .diagnosis_category(claim.diagnosis.as_deref())
                .to_string(),
            typical_procedures: TYPICAL_PROCEDURES_NOTE.to_string(),
        }
    }

    /// Checks state recognition and virtual-consultation restrictions.
    fn analyze_geography(&self, claim: &Claim) -> GeographicAnalysis {
        let state = claim.normalized_state();
        GeographicAnalysis {
            state_recognized: self.reference.valid_states.contains(&state),
            restricted_for_virtual: self.reference.restricted_states.contains(&state),
        }
    }
}

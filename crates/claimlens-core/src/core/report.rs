// crates/claimlens-core/src/core/report.rs
// ============================================================================
// Module: ClaimLens Decision Report
// Description: Feature analysis, confidence assessment, and decision report types.
// Purpose: Provide the aggregate interpretability artifact for one claim.
// Dependencies: crate::core::{activation, identifiers}, serde
// ============================================================================

//! ## Overview
//! A [`DecisionReport`] is the complete interpretability artifact for one
//! claim: per-dimension feature analysis, the ordered rule activations, the
//! decision pathway, a scored confidence assessment, recommended human
//! actions, and counterfactual statements. Reports are created once per
//! claim and never mutated afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::activation::Confidence;
use crate::core::activation::RuleActivation;
use crate::core::identifiers::ClaimId;

// ============================================================================
// SECTION: Feature Analysis
// ============================================================================

/// Cost analysis for a claim whose procedure has a configured norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureAnalysis {
    /// Expected cost range formatted as `$lo - $hi` (avg ± std).
    pub expected_range: String,
    /// Actual claim amount formatted as `$amount`.
    pub actual_amount: String,
    /// Deviation from the average in standard deviations (0 when std is 0).
    pub deviation_sigma: f64,
    /// True when the amount exceeds the procedure's normal maximum.
    pub threshold_violation: bool,
}

/// Diagnosis categorization for a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisAnalysis {
    /// Matched category name, or "Unknown" when no category contains it.
    pub diagnosis_category: String,
    /// Fixed guidance on typical procedure pairings.
    pub typical_procedures: String,
}

/// Amount bounds check mirrored into the feature analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountAnalysis {
    /// True when the amount lies inside the configured domain bounds.
    pub within_bounds: bool,
}

/// Geographic coverage analysis for a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographicAnalysis {
    /// True when the state code belongs to the valid set.
    pub state_recognized: bool,
    /// True when the state is restricted for virtual consultations.
    pub restricted_for_virtual: bool,
}

/// Structured per-dimension analysis of a claim's features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAnalysis {
    /// Procedure cost analysis; `None` for unknown or absent procedures.
    pub procedure_analysis: Option<ProcedureAnalysis>,
    /// Diagnosis categorization.
    pub diagnosis_analysis: DiagnosisAnalysis,
    /// Amount bounds check.
    pub amount_analysis: AmountAnalysis,
    /// Geographic coverage check.
    pub geographic_analysis: GeographicAnalysis,
}

// ============================================================================
// SECTION: Confidence Assessment
// ============================================================================

/// Scored confidence assessment aggregated over rule activations.
///
/// # Invariants
/// - `score` lies in `[0, 1]` and is exactly 0 iff no rules activated.
/// - `level` follows the fixed thresholds: >= 0.7 High, >= 0.4 Medium, else Low.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    /// Qualitative level derived from the score.
    pub level: Confidence,
    /// High-confidence activation share of all activations.
    pub score: f64,
    /// Human-readable basis for the score.
    pub reason: String,
}

// ============================================================================
// SECTION: Decision Summary
// ============================================================================

/// Aggregated pathway, confidence, and recommendations for one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSummary {
    /// Ordered human-readable causal trace, in rule priority order.
    pub decision_pathway: Vec<String>,
    /// Scored confidence assessment.
    pub confidence_assessment: ConfidenceAssessment,
    /// One recommended action per distinct triggered rule, deduplicated.
    pub recommendations: Vec<String>,
}

// ============================================================================
// SECTION: Decision Report
// ============================================================================

/// Aggregate interpretability artifact for one claim.
///
/// # Invariants
/// - Created once per claim; never mutated after creation.
/// - `rules_activated` preserves the engine's fixed evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    /// Identifier of the analyzed claim.
    pub claim_id: ClaimId,
    /// Structured per-dimension feature analysis.
    pub feature_analysis: FeatureAnalysis,
    /// Ordered rule activations (evaluation order, stable).
    pub rules_activated: Vec<RuleActivation>,
    /// Ordered human-readable causal trace.
    pub decision_pathway: Vec<String>,
    /// Scored confidence assessment.
    pub confidence_assessment: ConfidenceAssessment,
    /// Recommended human review actions.
    pub recommendations: Vec<String>,
    /// Counterfactual alternate-outcome statements.
    pub counterfactuals: Vec<String>,
}

impl DecisionReport {
    /// Returns true when at least one rule activated.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        !self.rules_activated.is_empty()
    }
}

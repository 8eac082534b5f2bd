// crates/claimlens-core/src/runtime/aggregate.rs
// ============================================================================
// Module: ClaimLens Decision Aggregator
// Description: Pathway tracing, confidence scoring, and recommendations.
// Purpose: Derive the decision summary deterministically from activations.
// Dependencies: crate::core::{activation, report}
// ============================================================================

//! ## Overview
//! Aggregation consumes the ordered rule activations and produces the
//! decision pathway, the scored confidence assessment, and the recommended
//! human actions. Pathway and recommendations follow a fixed causal priority
//! order (unusual combination, then high amount, then geographic
//! restriction), independent of raw activation order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::activation::Confidence;
use crate::core::activation::RuleActivation;
use crate::core::activation::RuleId;
use crate::core::report::ConfidenceAssessment;
use crate::core::report::DecisionSummary;

// ============================================================================
// SECTION: Priority Order
// ============================================================================

/// Causal priority order for pathway and recommendation derivation.
const PRIORITY_ORDER: [RuleId; 3] =
    [RuleId::UnusualCombo, RuleId::HighAmount, RuleId::GeographicRestriction];

/// Returns the fixed pathway sentence for a rule category.
const fn pathway_sentence(rule_id: RuleId) -> &'static str {
    match rule_id {
        RuleId::UnusualCombo => "Primary trigger: Unusual diagnosis-procedure combination",
        RuleId::HighAmount => "Supporting factor: Abnormally high claim amount",
        RuleId::GeographicRestriction => "Geographic constraint violation",
    }
}

/// Returns the fixed recommendation for a rule category.
const fn recommendation_sentence(rule_id: RuleId) -> &'static str {
    match rule_id {
        RuleId::UnusualCombo => "Review medical necessity of procedure-diagnosis combination",
        RuleId::HighAmount => "Verify procedure coding and duration justification",
        RuleId::GeographicRestriction => "Confirm patient residency and coverage eligibility",
    }
}

// ============================================================================
// SECTION: Pathway
// ============================================================================

/// Traces the decision pathway in causal priority order.
#[must_use]
pub fn trace_decision_pathway(activations: &[RuleActivation]) -> Vec<String> {
    PRIORITY_ORDER
        .into_iter()
        .filter(|rule_id| activations.iter().any(|activation| activation.rule_id == *rule_id))
        .map(|rule_id| pathway_sentence(rule_id).to_string())
        .collect()
}

// ============================================================================
// SECTION: Confidence
// ============================================================================

/// Scores confidence as the high-confidence share of all activations.
///
/// Zero activations yield `{Low, 0, "No rules activated"}`.
#[must_use]
pub fn assess_confidence(activations: &[RuleActivation]) -> ConfidenceAssessment {
    let total = activations.len();
    if total == 0 {
        return ConfidenceAssessment {
            level: Confidence::Low,
            score: 0.0,
            reason: "No rules activated".to_string(),
        };
    }

    let high_count = activations
        .iter()
        .filter(|activation| activation.confidence == Confidence::High)
        .count();
    #[allow(clippy::cast_precision_loss, reason = "Activation counts are tiny.")]
    let score = high_count as f64 / total as f64;

    let level = if score >= 0.7 {
        Confidence::High
    } else if score >= 0.4 {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    ConfidenceAssessment {
        level,
        score,
        reason: format!("{high_count} high-confidence rules out of {total} total"),
    }
}

// ============================================================================
// SECTION: Recommendations
// ============================================================================

/// Emits one recommendation per distinct triggered rule category.
#[must_use]
pub fn generate_recommendations(activations: &[RuleActivation]) -> Vec<String> {
    PRIORITY_ORDER
        .into_iter()
        .filter(|rule_id| activations.iter().any(|activation| activation.rule_id == *rule_id))
        .map(|rule_id| recommendation_sentence(rule_id).to_string())
        .collect()
}

// ============================================================================
// SECTION: Aggregation
// ============================================================================

/// Aggregates activations into the full decision summary.
#[must_use]
pub fn aggregate(activations: &[RuleActivation]) -> DecisionSummary {
    DecisionSummary {
        decision_pathway: trace_decision_pathway(activations),
        confidence_assessment: assess_confidence(activations),
        recommendations: generate_recommendations(activations),
    }
}

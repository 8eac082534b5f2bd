// crates/claimlens-core/src/runtime/rules.rs
// ============================================================================
// Module: ClaimLens Rule Engine
// Description: Fixed, ordered business rule evaluation over claims.
// Purpose: Produce deterministic rule activations with evidence strings.
// Dependencies: crate::core::{activation, claim, reference}
// ============================================================================

//! ## Overview
//! The rule engine evaluates a fixed, ordered set of independent business
//! rules against a claim. Each rule is pure and order-independent in effect;
//! only the activation list's iteration order is fixed, for reproducible
//! reporting. Rules never suppress one another, and evaluation is stateless.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::activation::Confidence;
use crate::core::activation::RuleActivation;
use crate::core::activation::RuleId;
use crate::core::claim::Claim;
use crate::core::reference::ReferenceData;
use crate::core::reference::VIRTUAL_CONSULTATION;

// ============================================================================
// SECTION: Rule Trait
// ============================================================================

/// One independent business rule over a claim.
///
/// Implementations must be pure: no state, no I/O, and no dependence on
/// other rules' outcomes.
pub trait ClaimRule: Send + Sync {
    /// Returns the rule's stable identifier.
    fn rule_id(&self) -> RuleId;

    /// Evaluates the rule, returning an activation when the trigger holds.
    fn evaluate(&self, claim: &Claim, reference: &ReferenceData) -> Option<RuleActivation>;
}

// ============================================================================
// SECTION: Unusual Combination Rule
// ============================================================================

/// Flags known-invalid diagnosis-procedure combinations.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnusualComboRule;

impl ClaimRule for UnusualComboRule {
    fn rule_id(&self) -> RuleId {
        RuleId::UnusualCombo
    }

    fn evaluate(&self, claim: &Claim, reference: &ReferenceData) -> Option<RuleActivation> {
        let procedure = claim.procedure_type.as_deref()?;
        let diagnosis = claim.diagnosis.as_deref()?;
        if !reference.is_unusual_combo(procedure, diagnosis) {
            return None;
        }
        Some(RuleActivation {
            rule_id: RuleId::UnusualCombo,
            description: format!("Unusual combination: {procedure} + {diagnosis}"),
            confidence: Confidence::High,
            evidence: "Combination statistically rare in historical data".to_string(),
        })
    }
}

// ============================================================================
// SECTION: High Amount Rule
// ============================================================================

/// Flags claim amounts above the procedure's normal maximum.
///
/// The threshold falls back to +infinity for unknown procedures, so the rule
/// never fires without a configured norm.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighAmountRule;

impl ClaimRule for HighAmountRule {
    fn rule_id(&self) -> RuleId {
        RuleId::HighAmount
    }

    fn evaluate(&self, claim: &Claim, reference: &ReferenceData) -> Option<RuleActivation> {
        let amount = claim.claim_amount;
        let threshold = reference.amount_threshold(claim.procedure_type.as_deref());
        if amount <= threshold {
            return None;
        }
        let confidence =
            if amount > threshold * 1.5 { Confidence::High } else { Confidence::Medium };
        let percent_above = (amount / threshold - 1.0) * 100.0;
        Some(RuleActivation {
            rule_id: RuleId::HighAmount,
            description: format!("Claim amount ${amount} exceeds ${threshold} threshold"),
            confidence,
            evidence: format!("{percent_above:.1}% above expected maximum"),
        })
    }
}

// ============================================================================
// SECTION: Geographic Restriction Rule
// ============================================================================

/// Flags virtual consultations billed from non-covered states.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeographicRestrictionRule;

impl ClaimRule for GeographicRestrictionRule {
    fn rule_id(&self) -> RuleId {
        RuleId::GeographicRestriction
    }

    fn evaluate(&self, claim: &Claim, reference: &ReferenceData) -> Option<RuleActivation> {
        let state = claim.normalized_state();
        let restricted = reference.restricted_states.contains(&state);
        let virtual_consult = claim.procedure_type.as_deref() == Some(VIRTUAL_CONSULTATION);
        if !(restricted && virtual_consult) {
            return None;
        }
        Some(RuleActivation {
            rule_id: RuleId::GeographicRestriction,
            description: format!("Virtual consultation from restricted state: {state}"),
            confidence: Confidence::High,
            evidence: "State not covered for virtual consultations".to_string(),
        })
    }
}

// ============================================================================
// SECTION: Rule Engine
// ============================================================================

/// Evaluates the fixed rule set against claims in a stable order.
pub struct RuleEngine {
    /// Reference tables injected into every rule evaluation.
    reference: ReferenceData,
    /// Rules in their fixed evaluation order.
    rules: Vec<Box<dyn ClaimRule>>,
}

impl RuleEngine {
    /// Creates the engine with the default rule set in canonical order.
    #[must_use]
    pub fn new(reference: ReferenceData) -> Self {
        Self::with_rules(
            reference,
            vec![
                Box::new(UnusualComboRule),
                Box::new(HighAmountRule),
                Box::new(GeographicRestrictionRule),
            ],
        )
    }

    /// Creates the engine with a caller-supplied ordered rule set.
    #[must_use]
    pub fn with_rules(reference: ReferenceData, rules: Vec<Box<dyn ClaimRule>>) -> Self {
        Self {
            reference,
            rules,
        }
    }

    /// Evaluates every rule independently, in the fixed order.
    #[must_use]
    pub fn evaluate(&self, claim: &Claim) -> Vec<RuleActivation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(claim, &self.reference))
            .collect()
    }

    /// Returns the rule identifiers in evaluation order.
    #[must_use]
    pub fn rule_order(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.rule_id()).collect()
    }
}

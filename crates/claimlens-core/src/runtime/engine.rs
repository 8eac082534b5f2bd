// crates/claimlens-core/src/runtime/engine.rs
// ============================================================================
// Module: ClaimLens Interpreter Engine
// Description: Per-claim interpretability pipeline.
// Purpose: Run validation, analysis, rules, aggregation, and auditing as one pass.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! The interpreter is the single canonical execution path for per-claim
//! analysis. Every operation is pure and synchronous over the immutable
//! claim, so the pipeline is safe to map over a batch with no coordination.
//! A report and audit record are always produced for any well-formed claim,
//! valid or not; the validation outcome rides inside the records instead of
//! aborting processing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::audit::AuditRecord;
use crate::core::claim::Claim;
use crate::core::claim::ValidationOutcome;
use crate::core::hashing::HashError;
use crate::core::identifiers::SystemVersion;
use crate::core::reference::ReferenceData;
use crate::core::report::DecisionReport;
use crate::core::time::UtcTimestamp;
use crate::runtime::aggregate::aggregate;
use crate::runtime::audit::AuditLogger;
use crate::runtime::counterfactual::generate_counterfactuals;
use crate::runtime::features::FeatureAnalyzer;
use crate::runtime::rules::RuleEngine;
use crate::runtime::validator::Validator;

// ============================================================================
// SECTION: Decision Strings
// ============================================================================

/// Decision string recorded when at least one rule fired.
pub const DECISION_FLAGGED: &str = "FLAGGED_FOR_REVIEW";

/// Decision string recorded when no rule fired.
pub const DECISION_APPROVED: &str = "APPROVED";

// ============================================================================
// SECTION: Claim Outcome
// ============================================================================

/// Combined output of one full pipeline pass over a claim.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimOutcome {
    /// The interpretability report.
    pub report: DecisionReport,
    /// The tamper-evident audit record.
    pub audit: AuditRecord,
}

// ============================================================================
// SECTION: Claim Interpreter
// ============================================================================

/// Deterministic per-claim interpretability engine.
pub struct ClaimInterpreter {
    /// Domain bounds validator.
    validator: Validator,
    /// Feature analyzer over reference norms.
    analyzer: FeatureAnalyzer,
    /// Ordered business rule engine.
    rules: RuleEngine,
    /// Audit entry builder.
    auditor: AuditLogger,
    /// Reference tables shared with counterfactual generation.
    reference: ReferenceData,
}

impl ClaimInterpreter {
    /// Creates an interpreter over the provided reference tables.
    #[must_use]
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            validator: Validator::new(reference.clone()),
            analyzer: FeatureAnalyzer::new(reference.clone()),
            rules: RuleEngine::new(reference.clone()),
            auditor: AuditLogger::new(reference.clone()),
            reference,
        }
    }

    /// Creates an interpreter with the production reference tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(ReferenceData::builtin())
    }

    /// Overrides the release tag stamped into audit records.
    #[must_use]
    pub fn with_version(mut self, version: SystemVersion) -> Self {
        self.auditor = self.auditor.with_version(version);
        self
    }

    /// Validates a claim against domain bounds.
    #[must_use]
    pub fn validate(&self, claim: &Claim) -> ValidationOutcome {
        self.validator.validate(claim)
    }

    /// Produces the full interpretability report for a claim.
    #[must_use]
    pub fn interpret(&self, claim: &Claim) -> DecisionReport {
        let feature_analysis = self.analyzer.analyze(claim);
        let rules_activated = self.rules.evaluate(claim);
        let summary = aggregate(&rules_activated);
        let counterfactuals = generate_counterfactuals(claim, &self.reference);

        DecisionReport {
            claim_id: claim.claim_id.clone(),
            feature_analysis,
            rules_activated,
            decision_pathway: summary.decision_pathway,
            confidence_assessment: summary.confidence_assessment,
            recommendations: summary.recommendations,
            counterfactuals,
        }
    }

    /// Runs the full pipeline: report plus audit record.
    ///
    /// The decision string derives from the activations: any activation
    /// yields [`DECISION_FLAGGED`], none yields [`DECISION_APPROVED`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the claim cannot be canonicalized.
    pub fn process(&self, claim: &Claim) -> Result<ClaimOutcome, HashError> {
        let report = self.interpret(claim);
        let decision = if report.is_flagged() { DECISION_FLAGGED } else { DECISION_APPROVED };
        let audit = self.auditor.create_entry(claim, &report.rules_activated, decision)?;
        Ok(ClaimOutcome {
            report,
            audit,
        })
    }

    /// Runs the full pipeline with an explicit timestamp and decision string.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the claim cannot be canonicalized.
    pub fn process_at(
        &self,
        timestamp: UtcTimestamp,
        claim: &Claim,
        decision: impl Into<String>,
    ) -> Result<ClaimOutcome, HashError> {
        let report = self.interpret(claim);
        let audit =
            self.auditor.create_entry_at(timestamp, claim, &report.rules_activated, decision)?;
        Ok(ClaimOutcome {
            report,
            audit,
        })
    }
}

impl Default for ClaimInterpreter {
    fn default() -> Self {
        Self::builtin()
    }
}

// crates/claimlens-core/src/runtime/mod.rs
// ============================================================================
// Module: ClaimLens Runtime
// Description: Evaluation components for the interpretability pipeline.
// Purpose: Validate, analyze, evaluate, aggregate, and audit claims.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Runtime components implement the per-claim pipeline (validator, feature
//! analyzer, rule engine, aggregator, counterfactuals, audit logger) plus
//! the batch-level fairness monitor. All operations are pure, synchronous,
//! and free of I/O; claims can be processed concurrently with no
//! coordination.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod aggregate;
pub mod audit;
pub mod counterfactual;
pub mod engine;
pub mod fairness;
pub mod features;
pub mod render;
pub mod rules;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use aggregate::aggregate;
pub use aggregate::assess_confidence;
pub use aggregate::generate_recommendations;
pub use aggregate::trace_decision_pathway;
pub use audit::AuditLogger;
pub use counterfactual::generate_counterfactuals;
pub use counterfactual::safe_amount;
pub use engine::ClaimInterpreter;
pub use engine::ClaimOutcome;
pub use engine::DECISION_APPROVED;
pub use engine::DECISION_FLAGGED;
pub use fairness::FairnessMonitor;
pub use features::FeatureAnalyzer;
pub use render::ReportSections;
pub use rules::ClaimRule;
pub use rules::GeographicRestrictionRule;
pub use rules::HighAmountRule;
pub use rules::RuleEngine;
pub use rules::UnusualComboRule;
pub use validator::Validator;

// crates/claimlens-core/src/lib.rs
// ============================================================================
// Module: ClaimLens Core Library
// Description: Public API surface for the ClaimLens interpretability engine.
// Purpose: Expose core types and runtime components for claim analysis.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! ClaimLens core flags anomalous healthcare insurance claims with a fixed
//! set of deterministic business rules and produces auditable, human-readable
//! explanations for every flag. The engine is pure and I/O-free; persistence
//! and presentation integrate through the serializable records it emits.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use runtime::AuditLogger;
pub use runtime::ClaimInterpreter;
pub use runtime::ClaimOutcome;
pub use runtime::ClaimRule;
pub use runtime::DECISION_APPROVED;
pub use runtime::DECISION_FLAGGED;
pub use runtime::FairnessMonitor;
pub use runtime::FeatureAnalyzer;
pub use runtime::GeographicRestrictionRule;
pub use runtime::HighAmountRule;
pub use runtime::ReportSections;
pub use runtime::RuleEngine;
pub use runtime::UnusualComboRule;
pub use runtime::Validator;

// crates/claimlens-core/src/core/mod.rs
// ============================================================================
// Module: ClaimLens Core Types
// Description: Canonical claim, reference, report, audit, and fairness types.
// Purpose: Provide stable, serializable types for claim interpretation.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! ClaimLens core types define the claim record, immutable reference tables,
//! rule activations, decision reports, audit records, and fairness
//! statistics. These types are the canonical source of truth for any derived
//! API surfaces (reporting layers, stores, or agents).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod activation;
pub mod audit;
pub mod claim;
pub mod fairness;
pub mod hashing;
pub mod identifiers;
pub mod reference;
pub mod report;
pub mod time;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use activation::Confidence;
pub use activation::RuleActivation;
pub use activation::RuleId;
pub use audit::AuditRecord;
pub use claim::Claim;
pub use claim::ClaimInputError;
pub use claim::ValidationOutcome;
pub use fairness::DecidedClaim;
pub use fairness::DisparityStats;
pub use fairness::FairnessReport;
pub use fairness::FairnessThresholds;
pub use fairness::RateRatio;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::CURRENT_SYSTEM_VERSION;
pub use identifiers::ClaimId;
pub use identifiers::SystemVersion;
pub use reference::AmountBounds;
pub use reference::ProcedureNorm;
pub use reference::ReferenceData;
pub use reference::VIRTUAL_CONSULTATION;
pub use report::AmountAnalysis;
pub use report::ConfidenceAssessment;
pub use report::DecisionReport;
pub use report::DecisionSummary;
pub use report::DiagnosisAnalysis;
pub use report::FeatureAnalysis;
pub use report::GeographicAnalysis;
pub use report::ProcedureAnalysis;
pub use time::UtcTimestamp;

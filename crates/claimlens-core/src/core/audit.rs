// crates/claimlens-core/src/core/audit.rs
// ============================================================================
// Module: ClaimLens Audit Record
// Description: Immutable, hash-anchored audit entry for compliance replay.
// Purpose: Capture a claim decision and its justification for later review.
// Dependencies: crate::core::{activation, claim, hashing, identifiers, time}, serde
// ============================================================================

//! ## Overview
//! An [`AuditRecord`] summarizes one claim decision in a tamper-evident form:
//! the rule identifiers that fired, the confidence labels, the decision
//! pathway, and a content hash of the canonicalized claim input. Persistence
//! is an external collaborator's responsibility; the core's job ends at
//! producing the record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::activation::Confidence;
use crate::core::activation::RuleId;
use crate::core::claim::ValidationOutcome;
use crate::core::hashing::HashDigest;
use crate::core::identifiers::ClaimId;
use crate::core::identifiers::SystemVersion;
use crate::core::time::UtcTimestamp;

// ============================================================================
// SECTION: Audit Record
// ============================================================================

/// Persisted, tamper-evident summary of one claim decision.
///
/// # Invariants
/// - `audit_hash` is a deterministic function of the claim's field values
///   only; in-memory field ordering never affects it.
/// - Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// UTC creation time (RFC 3339).
    pub timestamp: UtcTimestamp,
    /// Identifier of the audited claim.
    pub claim_id: ClaimId,
    /// Final decision status string.
    pub decision: String,
    /// Identifiers of the rules that fired, in evaluation order.
    pub rules_activated: Vec<RuleId>,
    /// Confidence labels of the fired rules, aligned with `rules_activated`.
    pub confidence_labels: Vec<Confidence>,
    /// Ordered human-readable causal trace.
    pub decision_pathway: Vec<String>,
    /// Engine release tag that produced the record.
    pub system_version: SystemVersion,
    /// Content hash of the canonicalized claim input.
    pub audit_hash: HashDigest,
    /// Validation outcome re-run on the same claim.
    pub validation_status: ValidationOutcome,
}

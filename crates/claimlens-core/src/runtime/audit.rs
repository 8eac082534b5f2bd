// crates/claimlens-core/src/runtime/audit.rs
// ============================================================================
// Module: ClaimLens Audit Logger
// Description: Tamper-evident audit entry construction.
// Purpose: Produce hash-anchored audit records for compliance replay.
// Dependencies: crate::core::{audit, hashing, time}, crate::runtime::{aggregate, validator}
// ============================================================================

//! ## Overview
//! The audit logger assembles an [`AuditRecord`] from a claim, its rule
//! activations, and the final decision string. The claim content hash uses
//! RFC 8785 canonical JSON, so insertion order never affects it. Validation
//! is re-run on the same claim so the record is self-contained. Persistence
//! belongs to an external store; construction here has no side effects.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::activation::RuleActivation;
use crate::core::audit::AuditRecord;
use crate::core::claim::Claim;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::SystemVersion;
use crate::core::reference::ReferenceData;
use crate::core::time::UtcTimestamp;
use crate::runtime::aggregate::trace_decision_pathway;
use crate::runtime::validator::Validator;

// ============================================================================
// SECTION: Audit Logger
// ============================================================================

/// Builds immutable audit entries for decided claims.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    /// Validator used to re-check claims into the record.
    validator: Validator,
    /// Engine release tag stamped into every record.
    version: SystemVersion,
}

impl AuditLogger {
    /// Creates an audit logger over the provided reference tables.
    #[must_use]
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            validator: Validator::new(reference),
            version: SystemVersion::default(),
        }
    }

    /// Overrides the release tag stamped into records.
    #[must_use]
    pub fn with_version(mut self, version: SystemVersion) -> Self {
        self.version = version;
        self
    }

    /// Creates an audit entry stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the claim cannot be canonicalized.
    pub fn create_entry(
        &self,
        claim: &Claim,
        activations: &[RuleActivation],
        decision: impl Into<String>,
    ) -> Result<AuditRecord, HashError> {
        self.create_entry_at(UtcTimestamp::now(), claim, activations, decision)
    }

    /// Creates an audit entry with an explicit timestamp, for replay.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the claim cannot be canonicalized.
    pub fn create_entry_at(
        &self,
        timestamp: UtcTimestamp,
        claim: &Claim,
        activations: &[RuleActivation],
        decision: impl Into<String>,
    ) -> Result<AuditRecord, HashError> {
        let audit_hash = hash_canonical_json(claim)?;
        Ok(AuditRecord {
            timestamp,
            claim_id: claim.claim_id.clone(),
            decision: decision.into(),
            rules_activated: activations.iter().map(|activation| activation.rule_id).collect(),
            confidence_labels: activations
                .iter()
                .map(|activation| activation.confidence)
                .collect(),
            decision_pathway: trace_decision_pathway(activations),
            system_version: self.version.clone(),
            audit_hash,
            validation_status: self.validator.validate(claim),
        })
    }
}

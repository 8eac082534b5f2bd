// crates/claimlens-core/tests/pipeline.rs
// ============================================================================
// Module: End-to-End Pipeline Tests
// Description: Full interpretability pipeline scenarios.
// Purpose: Exercise the documented end-to-end claims and idempotence.
// ============================================================================
//! ## Overview
//! Runs the reference scenarios through the full pipeline: report, audit
//! record, rendered sections, and repeat-run idempotence.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use claimlens_core::Claim;
use claimlens_core::ClaimInputError;
use claimlens_core::ClaimInterpreter;
use claimlens_core::Confidence;
use claimlens_core::DECISION_APPROVED;
use claimlens_core::DECISION_FLAGGED;
use claimlens_core::ReportSections;
use claimlens_core::RuleId;
use claimlens_core::UtcTimestamp;
use serde_json::json;
use time::macros::datetime;

/// Builds a claim from a JSON row, panicking on contract violations.
fn claim_from(row: serde_json::Value) -> Claim {
    Claim::from_json_value(row).unwrap()
}

// ============================================================================
// SECTION: Reference Scenarios
// ============================================================================

/// Scenario: unusual diagnosis-procedure combination in a covered state.
#[test]
fn test_scenario_unusual_combo() {
    let interpreter = ClaimInterpreter::builtin();
    let claim = claim_from(json!({
        "claim_id": "CLM-S1",
        "procedure_type": "Mental Health Session",
        "diagnosis": "Common Cold",
        "claim_amount": 200.0,
        "patient_state": "CA",
    }));

    let report = interpreter.interpret(&claim);
    assert_eq!(report.rules_activated.len(), 1);
    assert_eq!(report.rules_activated[0].rule_id, RuleId::UnusualCombo);
    assert_eq!(report.rules_activated[0].confidence, Confidence::High);
    assert!(
        report
            .decision_pathway
            .contains(&"Primary trigger: Unusual diagnosis-procedure combination".to_string())
    );
    assert!(
        report
            .recommendations
            .iter()
            .any(|rec| rec.contains("Review medical necessity"))
    );
}

/// Scenario: amount above the virtual consultation threshold.
#[test]
fn test_scenario_high_amount_with_counterfactual() {
    let interpreter = ClaimInterpreter::builtin();
    let claim = claim_from(json!({
        "claim_id": "CLM-S2",
        "procedure_type": "Virtual Consultation",
        "claim_amount": 500.0,
        "patient_state": "CA",
    }));

    let report = interpreter.interpret(&claim);
    assert_eq!(report.rules_activated.len(), 1);
    assert_eq!(report.rules_activated[0].rule_id, RuleId::HighAmount);
    assert_eq!(report.rules_activated[0].confidence, Confidence::Medium);
    assert_eq!(report.counterfactuals.len(), 1);
    assert!(report.counterfactuals[0].contains("$405.00"));

    let analysis = report.feature_analysis.procedure_analysis.as_ref().unwrap();
    assert!(analysis.threshold_violation);
    assert_eq!(analysis.expected_range, "$105 - $195");
}

/// Scenario: restricted-state virtual consultation with a normal amount.
#[test]
fn test_scenario_geographic_restriction_only() {
    let interpreter = ClaimInterpreter::builtin();
    let claim = claim_from(json!({
        "claim_id": "CLM-S3",
        "procedure_type": "Virtual Consultation",
        "claim_amount": 100.0,
        "patient_state": "WY",
    }));

    let report = interpreter.interpret(&claim);
    let ids: Vec<RuleId> =
        report.rules_activated.iter().map(|activation| activation.rule_id).collect();
    assert_eq!(ids, vec![RuleId::GeographicRestriction]);
    assert!(report.counterfactuals.is_empty());
}

/// Scenario: invalid amount still flows through rule evaluation.
#[test]
fn test_scenario_invalid_claim_still_evaluated() {
    let interpreter = ClaimInterpreter::builtin();
    let claim = claim_from(json!({
        "claim_id": "CLM-S4",
        "procedure_type": "Virtual Consultation",
        "claim_amount": 15_000.0,
        "patient_state": "CA",
    }));

    let validation = interpreter.validate(&claim);
    assert!(!validation.valid);
    assert!(validation.errors.iter().any(|err| err.contains("Must be between $1 and $10,000")));

    let outcome = interpreter.process(&claim).unwrap();
    assert!(outcome.report.rules_activated.iter().any(|a| a.rule_id == RuleId::HighAmount));
    assert_eq!(outcome.audit.decision, DECISION_FLAGGED);
    assert!(!outcome.audit.validation_status.valid);
}

/// Scenario: clean claim approves with an empty report.
#[test]
fn test_scenario_clean_claim_approves() {
    let interpreter = ClaimInterpreter::builtin();
    let claim = claim_from(json!({
        "claim_id": "CLM-S5",
        "procedure_type": "Follow-up Visit",
        "diagnosis": "Hypertension",
        "claim_amount": 120.0,
        "patient_state": "TX",
    }));

    let outcome = interpreter.process(&claim).unwrap();
    assert!(outcome.report.rules_activated.is_empty());
    assert_eq!(outcome.audit.decision, DECISION_APPROVED);
    assert_eq!(outcome.report.confidence_assessment.level, Confidence::Low);
    assert!((outcome.report.confidence_assessment.score - 0.0).abs() < f64::EPSILON);
}

// ============================================================================
// SECTION: Idempotence
// ============================================================================

/// Verifies two runs over the same claim are byte-identical.
#[test]
fn test_pipeline_is_idempotent() {
    let interpreter = ClaimInterpreter::builtin();
    let claim = claim_from(json!({
        "claim_id": "CLM-IDEM",
        "procedure_type": "Emergency Consult",
        "diagnosis": "Allergies",
        "claim_amount": 1_000.0,
        "patient_state": "CA",
    }));
    let stamp = UtcTimestamp::from_datetime(datetime!(2026-02-01 00:00:00 UTC));

    let first = interpreter.process_at(stamp, &claim, DECISION_FLAGGED).unwrap();
    let second = interpreter.process_at(stamp, &claim, DECISION_FLAGGED).unwrap();

    assert_eq!(first.report, second.report);
    assert_eq!(first.audit, second.audit);
    assert_eq!(
        serde_json::to_string(&first.report).unwrap(),
        serde_json::to_string(&second.report).unwrap()
    );
    assert_eq!(first.audit.audit_hash, second.audit.audit_hash);
}

// ============================================================================
// SECTION: Rendered Sections
// ============================================================================

/// Verifies the four presentation labels are always emitted.
#[test]
fn test_rendered_sections_carry_the_four_labels() {
    let interpreter = ClaimInterpreter::builtin();
    let claim = claim_from(json!({
        "claim_id": "CLM-RENDER",
        "procedure_type": "Virtual Consultation",
        "claim_amount": 500.0,
        "patient_state": "CA",
    }));

    let report = interpreter.interpret(&claim);
    let rendered = ReportSections::from_report(&report).to_string();

    for label in ["SUMMARY:", "TRIGGERED RULES:", "CONFIDENCE:", "RECOMMENDATION:"] {
        assert!(rendered.contains(label), "missing {label} in:\n{rendered}");
    }
    assert!(rendered.contains("HIGH_AMOUNT"));
}

// ============================================================================
// SECTION: Ingestion Boundary
// ============================================================================

/// Verifies missing claim identifiers fail loudly at ingestion.
#[test]
fn test_missing_claim_id_is_fatal() {
    let missing = Claim::from_json_value(json!({"claim_amount": 100.0}));
    assert!(matches!(missing, Err(ClaimInputError::MissingClaimId)));

    let empty = Claim::from_json_value(json!({"claim_id": ""}));
    assert!(matches!(empty, Err(ClaimInputError::MissingClaimId)));
}

/// Verifies unknown upstream fields are ignored.
#[test]
fn test_unknown_fields_are_ignored() {
    let claim = claim_from(json!({
        "claim_id": "CLM-EXTRA",
        "claim_amount": 100.0,
        "patient_state": "CA",
        "warehouse_partition": "2026-01",
        "ingest_batch": 42,
    }));
    assert_eq!(claim.claim_id.as_str(), "CLM-EXTRA");
}

// crates/claimlens-core/src/core/reference.rs
// ============================================================================
// Module: ClaimLens Reference Tables
// Description: Immutable domain reference data for claim interpretation.
// Purpose: Provide injectable procedure norms, diagnosis maps, and bounds.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Reference tables are loaded once and never mutated. Every runtime
//! component receives a [`ReferenceData`] at construction so tests can
//! substitute alternate tables without touching evaluation logic.
//! [`ReferenceData::builtin`] carries the production defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Procedure Norms
// ============================================================================

/// Cost norm for one procedure type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcedureNorm {
    /// Average historical cost.
    pub avg: f64,
    /// Historical standard deviation.
    pub std: f64,
    /// Maximum amount considered normal for the procedure.
    pub max_normal: f64,
}

impl ProcedureNorm {
    /// Creates a procedure norm.
    #[must_use]
    pub const fn new(avg: f64, std: f64, max_normal: f64) -> Self {
        Self {
            avg,
            std,
            max_normal,
        }
    }
}

// ============================================================================
// SECTION: Amount Bounds
// ============================================================================

/// Inclusive claim amount bounds enforced by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountBounds {
    /// Minimum acceptable claim amount.
    pub min: f64,
    /// Maximum acceptable claim amount.
    pub max: f64,
}

impl AmountBounds {
    /// Returns true when the amount lies inside the inclusive bounds.
    #[must_use]
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

// ============================================================================
// SECTION: Reference Data
// ============================================================================

/// Immutable reference tables injected into every runtime component.
///
/// # Invariants
/// - Never mutated after construction; cloning is cheap enough for injection.
/// - Counterfactual thresholds are a subset of the procedures in `norms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Inclusive claim amount bounds.
    pub amount_bounds: AmountBounds,
    /// Valid two-letter state codes (uppercase).
    pub valid_states: BTreeSet<String>,
    /// Cost norms keyed by procedure type.
    pub norms: BTreeMap<String, ProcedureNorm>,
    /// Diagnosis category name mapped to its member diagnoses.
    pub diagnosis_categories: BTreeMap<String, Vec<String>>,
    /// Known-invalid (procedure, diagnosis) pairs.
    pub unusual_combos: BTreeSet<(String, String)>,
    /// States where virtual consultations are not covered.
    pub restricted_states: BTreeSet<String>,
    /// Amount thresholds eligible for counterfactual suggestions.
    pub counterfactual_thresholds: BTreeMap<String, f64>,
}

/// Procedure name with remote-coverage restrictions.
pub const VIRTUAL_CONSULTATION: &str = "Virtual Consultation";

impl ReferenceData {
    /// Returns the production reference tables.
    #[must_use]
    pub fn builtin() -> Self {
        let valid_states = [
            "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN",
            "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV",
            "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN",
            "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let norms = BTreeMap::from([
            (VIRTUAL_CONSULTATION.to_string(), ProcedureNorm::new(150.0, 45.0, 450.0)),
            ("Mental Health Session".to_string(), ProcedureNorm::new(200.0, 60.0, 600.0)),
            ("Prescription Refill".to_string(), ProcedureNorm::new(50.0, 15.0, 150.0)),
            ("Follow-up Visit".to_string(), ProcedureNorm::new(120.0, 36.0, 360.0)),
            ("Emergency Consult".to_string(), ProcedureNorm::new(300.0, 90.0, 900.0)),
        ]);

        let diagnosis_categories = BTreeMap::from([
            (
                "Mental Health".to_string(),
                vec!["Anxiety".to_string(), "Depression".to_string(), "Insomnia".to_string()],
            ),
            (
                "Physical".to_string(),
                vec![
                    "Hypertension".to_string(),
                    "Diabetes".to_string(),
                    "Common Cold".to_string(),
                    "Back Pain".to_string(),
                    "Migraine".to_string(),
                    "Allergies".to_string(),
                    "Stomach Flu".to_string(),
                ],
            ),
        ]);

        let unusual_combos = BTreeSet::from([
            ("Mental Health Session".to_string(), "Common Cold".to_string()),
            ("Mental Health Session".to_string(), "Back Pain".to_string()),
            ("Emergency Consult".to_string(), "Allergies".to_string()),
            ("Emergency Consult".to_string(), "Common Cold".to_string()),
        ]);

        let restricted_states =
            BTreeSet::from(["WY".to_string(), "AK".to_string(), "MT".to_string()]);

        let counterfactual_thresholds = BTreeMap::from([
            (VIRTUAL_CONSULTATION.to_string(), 450.0),
            ("Mental Health Session".to_string(), 600.0),
            ("Emergency Consult".to_string(), 900.0),
        ]);

        Self {
            amount_bounds: AmountBounds {
                min: 1.0,
                max: 10_000.0,
            },
            valid_states,
            norms,
            diagnosis_categories,
            unusual_combos,
            restricted_states,
            counterfactual_thresholds,
        }
    }

    /// Returns the cost norm for a procedure, if configured.
    #[must_use]
    pub fn norm_for(&self, procedure: &str) -> Option<&ProcedureNorm> {
        self.norms.get(procedure)
    }

    /// Returns the outlier threshold for a procedure, or +infinity when unknown.
    ///
    /// The infinite fallback guarantees amount rules never fire for
    /// procedures without a configured norm.
    #[must_use]
    pub fn amount_threshold(&self, procedure: Option<&str>) -> f64 {
        procedure
            .and_then(|name| self.norms.get(name))
            .map_or(f64::INFINITY, |norm| norm.max_normal)
    }

    /// Returns the diagnosis category for an exact diagnosis match.
    #[must_use]
    pub fn diagnosis_category(&self, diagnosis: Option<&str>) -> &str {
        diagnosis
            .and_then(|diag| {
                self.diagnosis_categories
                    .iter()
                    .find(|(_, members)| members.iter().any(|member| member == diag))
                    .map(|(category, _)| category.as_str())
            })
            .unwrap_or("Unknown")
    }

    /// Returns true when the (procedure, diagnosis) pair is known-invalid.
    #[must_use]
    pub fn is_unusual_combo(&self, procedure: &str, diagnosis: &str) -> bool {
        self.unusual_combos
            .iter()
            .any(|(combo_procedure, combo_diagnosis)| {
                combo_procedure == procedure && combo_diagnosis == diagnosis
            })
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

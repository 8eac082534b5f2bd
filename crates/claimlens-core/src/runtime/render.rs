// crates/claimlens-core/src/runtime/render.rs
// ============================================================================
// Module: ClaimLens Report Sections
// Description: Labeled report sections for downstream presentation layers.
// Purpose: Expose the SUMMARY / TRIGGERED RULES / CONFIDENCE / RECOMMENDATION contract.
// Dependencies: crate::core::report
// ============================================================================

//! ## Overview
//! Downstream presentation layers render exactly four labeled sections from
//! a decision report. [`ReportSections`] carries the data behind each label;
//! its `Display` emits the labels verbatim. Exact prose beyond the labels is
//! a presentation concern and may change.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::report::DecisionReport;

// ============================================================================
// SECTION: Report Sections
// ============================================================================

/// The four labeled sections a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSections {
    /// One-line claim outcome summary.
    pub summary: String,
    /// Triggered rule lines, one per activation, in evaluation order.
    pub triggered_rules: Vec<String>,
    /// Confidence level, score, and basis.
    pub confidence: String,
    /// Recommended actions joined for display.
    pub recommendation: String,
}

impl ReportSections {
    /// Derives the four sections from a decision report.
    #[must_use]
    pub fn from_report(report: &DecisionReport) -> Self {
        let summary = if report.is_flagged() {
            format!(
                "Claim {} flagged as an outlier by {} business rule(s)",
                report.claim_id,
                report.rules_activated.len()
            )
        } else {
            format!("Claim {} passed all business rules", report.claim_id)
        };

        let triggered_rules = report
            .rules_activated
            .iter()
            .map(|activation| {
                format!(
                    "{} ({}): {} [{}]",
                    activation.rule_id,
                    activation.confidence,
                    activation.description,
                    activation.evidence
                )
            })
            .collect();

        let assessment = &report.confidence_assessment;
        let confidence = format!(
            "{} (score {:.2}) - {}",
            assessment.level, assessment.score, assessment.reason
        );

        let recommendation = if report.recommendations.is_empty() {
            "No action required".to_string()
        } else {
            report.recommendations.join("; ")
        };

        Self {
            summary,
            triggered_rules,
            confidence,
            recommendation,
        }
    }
}

impl fmt::Display for ReportSections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SUMMARY: {}", self.summary)?;
        if self.triggered_rules.is_empty() {
            writeln!(f, "TRIGGERED RULES: none")?;
        } else {
            writeln!(f, "TRIGGERED RULES: {}", self.triggered_rules.join("; "))?;
        }
        writeln!(f, "CONFIDENCE: {}", self.confidence)?;
        write!(f, "RECOMMENDATION: {}", self.recommendation)
    }
}

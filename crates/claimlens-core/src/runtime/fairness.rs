// crates/claimlens-core/src/runtime/fairness.rs
// ============================================================================
// Module: ClaimLens Fairness Monitor
// Description: Batch-level outlier-rate disparity monitoring.
// Purpose: Detect systematic disparities across state and provider groups.
// Dependencies: crate::core::fairness
// ============================================================================

//! ## Overview
//! The fairness monitor aggregates outlier rates across grouping dimensions
//! for a complete batch of decided claims. It must see a consistent snapshot
//! of the batch (no streaming partials) and does not mutate per-claim
//! records. A dimension with no values in the batch is omitted from the
//! report rather than treated as an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::fairness::DecidedClaim;
use crate::core::fairness::DisparityStats;
use crate::core::fairness::FairnessReport;
use crate::core::fairness::FairnessThresholds;
use crate::core::fairness::RateRatio;

// ============================================================================
// SECTION: Fairness Monitor
// ============================================================================

/// Monitors outlier-rate disparities across a batch of decided claims.
#[derive(Debug, Clone, Default)]
pub struct FairnessMonitor {
    /// Multipliers above which disparity alerts fire.
    thresholds: FairnessThresholds,
}

impl FairnessMonitor {
    /// Creates a monitor with the provided alert thresholds.
    #[must_use]
    pub const fn new(thresholds: FairnessThresholds) -> Self {
        Self {
            thresholds,
        }
    }

    /// Computes disparity statistics for every available dimension.
    #[must_use]
    pub fn check_fairness(&self, batch: &[DecidedClaim]) -> FairnessReport {
        FairnessReport {
            state_disparities: disparities_by(batch, |claim| claim.patient_state.as_deref()),
            provider_disparities: disparities_by(batch, |claim| claim.provider_name.as_deref()),
        }
    }

    /// Emits one alert per dimension whose ratio strictly exceeds its threshold.
    #[must_use]
    pub fn generate_alerts(&self, report: &FairnessReport) -> Vec<String> {
        let mut alerts = Vec::new();

        if let Some(stats) = &report.state_disparities
            && stats.ratio.exceeds(self.thresholds.state_ratio)
        {
            alerts
                .push(format!("HIGH DISPARITY: State outlier rates vary by {}x", stats.ratio));
        }

        if let Some(stats) = &report.provider_disparities
            && stats.ratio.exceeds(self.thresholds.provider_ratio)
        {
            alerts.push(format!(
                "HIGH DISPARITY: Provider outlier rates vary by {}x",
                stats.ratio
            ));
        }

        alerts
    }
}

// ============================================================================
// SECTION: Group Rates
// ============================================================================

/// Computes disparity statistics for one grouping dimension.
///
/// Returns `None` when no claim in the batch carries the grouping field.
fn disparities_by<'a>(
    batch: &'a [DecidedClaim],
    group_key: impl Fn(&'a DecidedClaim) -> Option<&'a str>,
) -> Option<DisparityStats> {
    /// Running outlier tally for one group value.
    #[derive(Default)]
    struct GroupTally {
        /// Number of flagged claims in the group.
        outliers: usize,
        /// Total claims in the group.
        total: usize,
    }

    let mut groups: BTreeMap<&str, GroupTally> = BTreeMap::new();
    for claim in batch {
        if let Some(key) = group_key(claim) {
            let tally = groups.entry(key).or_default();
            tally.total += 1;
            if claim.is_outlier {
                tally.outliers += 1;
            }
        }
    }
    if groups.is_empty() {
        return None;
    }

    let mut max_rate = f64::MIN;
    let mut min_rate = f64::MAX;
    for tally in groups.values() {
        #[allow(clippy::cast_precision_loss, reason = "Batch sizes fit in f64.")]
        let rate = tally.outliers as f64 / tally.total as f64;
        max_rate = max_rate.max(rate);
        min_rate = min_rate.min(rate);
    }

    Some(DisparityStats {
        max_rate,
        min_rate,
        ratio: RateRatio::from_rates(max_rate, min_rate),
    })
}

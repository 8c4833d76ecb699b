// SPDX-License-Identifier: PMPL-1.0-or-later
//! Overall rating rollup.
//!
//! The rating buckets on the total issue count only. Severity is tracked
//! in the per-severity counts for display but does not move the buckets.

use crate::issue::{Issue, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fewer issues than this rate as Good
pub const DEFAULT_GOOD_BELOW: usize = 3;

/// Up to this many issues (inclusive) rate as Fair
pub const DEFAULT_FAIR_MAX: usize = 5;

/// Qualitative rating for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "excellent"),
            Rating::Good => write!(f, "good"),
            Rating::Fair => write!(f, "fair"),
            Rating::Poor => write!(f, "poor"),
        }
    }
}

/// Issue-count boundaries between rating buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingThresholds {
    pub good_below: usize,
    pub fair_max: usize,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            good_below: DEFAULT_GOOD_BELOW,
            fair_max: DEFAULT_FAIR_MAX,
        }
    }
}

impl RatingThresholds {
    pub fn rate(&self, issue_count: usize) -> Rating {
        if issue_count == 0 {
            Rating::Excellent
        } else if issue_count < self.good_below {
            Rating::Good
        } else if issue_count <= self.fair_max {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }
}

/// Rating plus per-severity counts, recomputed for every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub overall_rating: Rating,
    pub issue_counts_by_severity: BTreeMap<Severity, usize>,
}

impl AnalysisSummary {
    pub fn count(&self, severity: Severity) -> usize {
        self.issue_counts_by_severity.get(&severity).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.issue_counts_by_severity.values().sum()
    }
}

/// Summarize with the default thresholds
pub fn summarize(issues: &[Issue]) -> AnalysisSummary {
    summarize_with(issues, &RatingThresholds::default())
}

pub fn summarize_with(issues: &[Issue], thresholds: &RatingThresholds) -> AnalysisSummary {
    let mut counts: BTreeMap<Severity, usize> = Severity::ALL.iter().map(|s| (*s, 0)).collect();
    for issue in issues {
        *counts.entry(issue.severity).or_insert(0) += 1;
    }

    AnalysisSummary {
        overall_rating: thresholds.rate(issues.len()),
        issue_counts_by_severity: counts,
    }
}

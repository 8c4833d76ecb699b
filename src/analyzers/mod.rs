// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page analyzers.
//!
//! Each analyzer is a pure function of the snapshot and the configuration.
//! They share nothing mutable, so the scanner runs them side by side on a
//! worker pool against the same read-only snapshot.

pub mod alt_text;
pub mod consistency;
pub mod contrast;
pub mod cta;
pub mod document;
pub mod hierarchy;
pub mod keyboard;

use crate::config::Config;
use crate::error::Result;
use crate::issue::Issue;
use crate::snapshot::DomSnapshot;

/// Trait implemented by all analyzers
pub trait Analyzer: Send + Sync {
    /// Human-readable name of this analyzer
    fn name(&self) -> &str;

    /// Short description of what this analyzer checks
    fn description(&self) -> &str;

    /// Analyze a snapshot and return issues in a stable order
    fn analyze(&self, snapshot: &DomSnapshot, config: &Config) -> Result<Vec<Issue>>;

    /// Whether the configuration turns this analyzer on
    fn enabled(&self, _config: &Config) -> bool {
        true
    }

    /// Follow-up a person has to do that a snapshot cannot answer
    fn manual_review(&self) -> Option<&str> {
        None
    }
}

/// Every analyzer, in the order their issues are reported
pub fn registry() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(contrast::ContrastAnalyzer),
        Box::new(consistency::ConsistencyAnalyzer),
        Box::new(hierarchy::HierarchyAnalyzer),
        Box::new(alt_text::AltTextAnalyzer),
        Box::new(keyboard::KeyboardAnalyzer),
        Box::new(document::DocumentAnalyzer),
    ]
}

/// The analyzers the configuration enables
pub fn enabled_analyzers(config: &Config) -> Vec<Box<dyn Analyzer>> {
    registry().into_iter().filter(|a| a.enabled(config)).collect()
}

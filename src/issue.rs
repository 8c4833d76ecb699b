// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue records produced by the analyzers.
//!
//! Issues are append-only: analyzers create them, the pipeline collects
//! them in order, and the rollup only reads their severities.

use serde::{Deserialize, Serialize};

/// Rule identifiers emitted by the analyzers
pub mod rules {
    pub const CONTRAST_AA: &str = "contrast-aa";
    pub const STYLE_INCONSISTENCY: &str = "style-inconsistency";
    pub const HEADING_HIERARCHY: &str = "heading-hierarchy";
    pub const IMAGE_ALT: &str = "image-alt";
    pub const IMAGE_ALT_BLANK: &str = "image-alt-blank";
    pub const PAGE_TITLE: &str = "page-title";
    pub const PAGE_LANG: &str = "page-lang";
    pub const VIEWPORT_META: &str = "viewport-meta";
    pub const MISSING_H1: &str = "missing-h1";
    pub const KEYBOARD_ACCESS: &str = "keyboard-access";
    pub const POSITIVE_TABINDEX: &str = "positive-tabindex";
    pub const PAGE_LOAD: &str = "page-load";
}

/// Ordered issue severity, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, lowest first
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// High and critical issues fail a check run
    pub fn is_blocking(&self) -> bool {
        *self >= Severity::High
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// A single problem found on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Rule identifier (e.g., "contrast-aa")
    pub rule_id: String,
    pub severity: Severity,
    /// Which element or page area is affected
    pub element_description: String,
    pub message: String,
    pub suggested_fix: Option<String>,
    /// WCAG success criterion, when the rule maps to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wcag_criterion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wcag_level: Option<WcagLevel>,
}

impl Issue {
    pub fn new(rule_id: &str, severity: Severity, message: &str) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity,
            element_description: String::new(),
            message: message.to_string(),
            suggested_fix: None,
            wcag_criterion: None,
            wcag_level: None,
        }
    }

    pub fn with_element(mut self, description: &str) -> Self {
        self.element_description = description.to_string();
        self
    }

    pub fn with_fix(mut self, fix: &str) -> Self {
        self.suggested_fix = Some(fix.to_string());
        self
    }

    pub fn with_wcag(mut self, criterion: &str, level: WcagLevel) -> Self {
        self.wcag_criterion = Some(criterion.to_string());
        self.wcag_level = Some(level);
        self
    }

    /// The page could not be captured; this issue replaces every other check.
    pub fn page_load_failure(reason: &str) -> Self {
        Issue::new(
            rules::PAGE_LOAD,
            Severity::Critical,
            &format!("Could not load or render the page for analysis: {}", reason),
        )
        .with_element("Entire page")
        .with_fix("Check the URL and that the site is reachable, then capture the page again")
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy analyzer - WCAG 1.3.1 Info and Relationships (advisory)
//!
//! Expects `mean(H1) > mean(H2) > mean(P)` over declared font sizes. A role
//! with no measurable elements drops out of the chain; it is never treated
//! as size 0.

use crate::analyzers::Analyzer;
use crate::config::Config;
use crate::error::Result;
use crate::issue::{rules, Issue, Severity, WcagLevel};
use crate::snapshot::{DomSnapshot, ElementDescriptor, StyleProperty, TagKind};

/// Pixel size of 1rem/1em when converting relative font sizes
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Roles compared, largest expected first
const HIERARCHY_CHAIN: [TagKind; 3] = [TagKind::H1, TagKind::H2, TagKind::P];

/// Heading hierarchy analyzer
pub struct HierarchyAnalyzer;

impl Analyzer for HierarchyAnalyzer {
    fn name(&self) -> &str {
        "Heading Hierarchy Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that H1 text is larger than H2 text, and H2 larger than body text"
    }

    fn analyze(&self, snapshot: &DomSnapshot, _config: &Config) -> Result<Vec<Issue>> {
        Ok(check_heading_hierarchy(snapshot.visible_elements()))
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.hierarchy
    }
}

/// Parse a declared font size into pixels. `px`, `pt`, `rem`, `em` and bare numbers.
pub fn parse_font_size(value: &str) -> Option<f64> {
    let value = value.trim().to_ascii_lowercase();
    let (number, scale) = if let Some(n) = value.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = value.strip_suffix("pt") {
        (n, 4.0 / 3.0)
    } else if let Some(n) = value.strip_suffix("rem") {
        (n, ROOT_FONT_SIZE_PX)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, ROOT_FONT_SIZE_PX)
    } else {
        (value.as_str(), 1.0)
    };

    let size = number.trim().parse::<f64>().ok()? * scale;
    if size.is_finite() && size > 0.0 {
        Some(size)
    } else {
        None
    }
}

/// Mean font size of the elements with `role`, skipping unparseable sizes
pub fn mean_font_size<'a>(
    elements: impl IntoIterator<Item = &'a ElementDescriptor>,
    role: TagKind,
) -> Option<f64> {
    let sizes: Vec<f64> = elements
        .into_iter()
        .filter(|e| e.tag == role)
        .filter_map(|e| e.style(StyleProperty::FontSize).and_then(parse_font_size))
        .collect();

    if sizes.is_empty() {
        None
    } else {
        Some(sizes.iter().sum::<f64>() / sizes.len() as f64)
    }
}

/// One high-severity issue per adjacent pair in H1 → H2 → P that is not strictly decreasing
pub fn check_heading_hierarchy<'a>(
    elements: impl IntoIterator<Item = &'a ElementDescriptor>,
) -> Vec<Issue> {
    let elements: Vec<&ElementDescriptor> = elements.into_iter().collect();

    let present: Vec<(TagKind, f64)> = HIERARCHY_CHAIN
        .iter()
        .filter_map(|role| mean_font_size(elements.iter().copied(), *role).map(|m| (*role, m)))
        .collect();

    present
        .windows(2)
        .filter(|pair| pair[0].1 <= pair[1].1)
        .map(|pair| {
            let (upper, upper_mean) = pair[0];
            let (lower, lower_mean) = pair[1];
            Issue::new(
                rules::HEADING_HIERARCHY,
                Severity::High,
                &format!(
                    "Advisory: mean {} font size ({:.1}px) is not larger than mean {} font size ({:.1}px)",
                    upper, upper_mean, lower, lower_mean
                ),
            )
            .with_element(&format!("{} vs {}", upper, lower))
            .with_wcag("1.3.1", WcagLevel::A)
            .with_fix(&format!(
                "Size {} text above {} text so the visual order matches the document outline",
                upper, lower
            ))
        })
        .collect()
}

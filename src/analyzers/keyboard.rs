// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard navigation analyzer - WCAG 2.1.1 Keyboard (Level A), 2.4.3 Focus Order (Level A)
//!
//! Checks the captured controls for keyboard reachability:
//! - Buttons and links can receive focus (native control, `href`, or `tabindex >= 0`)
//! - No positive tabindex values (disrupts natural tab order)
//!
//! Focus visibility and traps cannot be judged from a snapshot and are left
//! to manual review.

use crate::analyzers::Analyzer;
use crate::config::Config;
use crate::error::Result;
use crate::issue::{rules, Issue, Severity, WcagLevel};
use crate::snapshot::{DomSnapshot, ElementDescriptor, TagKind};

/// Tags the browser puts in the tab order without a tabindex
const NATIVE_FOCUSABLE_TAGS: &[&str] = &["BUTTON", "INPUT", "SELECT", "TEXTAREA"];

/// Keyboard navigation analyzer
pub struct KeyboardAnalyzer;

impl Analyzer for KeyboardAnalyzer {
    fn name(&self) -> &str {
        "Keyboard Navigation Analyzer"
    }

    fn description(&self) -> &str {
        "Checks keyboard accessibility (WCAG 2.1.1, 2.4.3)"
    }

    fn analyze(&self, snapshot: &DomSnapshot, _config: &Config) -> Result<Vec<Issue>> {
        Ok(snapshot
            .visible_elements()
            .filter(|e| e.tag.is_cta())
            .filter_map(check_control)
            .collect())
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.keyboard
    }

    fn manual_review(&self) -> Option<&str> {
        Some("Full keyboard navigation testing (tab order, focus visibility, all controls operable)")
    }
}

/// Whether a control lands in the tab order
pub fn is_focusable(element: &ElementDescriptor) -> bool {
    match element.tab_index {
        Some(index) => index >= 0,
        None => {
            NATIVE_FOCUSABLE_TAGS.contains(&element.tag_name.as_str())
                || (element.tag_name == "A" && element.href.is_some())
        }
    }
}

/// At most one issue per control, unreachable before out of order
pub fn check_control(element: &ElementDescriptor) -> Option<Issue> {
    let label = element.describe();

    if !is_focusable(element) {
        let message = match element.tab_index {
            Some(index) => format!(
                "{} has tabindex=\"{}\" and cannot be reached with the keyboard",
                element.tag, index
            ),
            None if element.tag == TagKind::Link && element.tag_name == "A" => {
                "Link has no href and cannot be reached with the keyboard".to_string()
            }
            None => format!(
                "<{}> acting as a {} is not keyboard focusable",
                element.tag_name.to_ascii_lowercase(),
                element.tag.to_string().to_ascii_lowercase()
            ),
        };
        return Some(
            Issue::new(rules::KEYBOARD_ACCESS, Severity::High, &message)
                .with_element(&label)
                .with_wcag("2.1.1", WcagLevel::A)
                .with_fix("Use a native <button> or <a href>, or add tabindex=\"0\" with key handlers"),
        );
    }

    match element.tab_index {
        Some(index) if index > 0 => Some(
            Issue::new(
                rules::POSITIVE_TABINDEX,
                Severity::Medium,
                &format!(
                    "{} has tabindex=\"{}\" (positive). Positive tabindex disrupts natural tab order.",
                    element.tag, index
                ),
            )
            .with_element(&label)
            .with_wcag("2.4.3", WcagLevel::A)
            .with_fix("Remove the tabindex attribute or use tabindex=\"0\" to follow natural document order"),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Rect;

    fn control(id: usize, tag: TagKind) -> ElementDescriptor {
        ElementDescriptor::new(id, tag, Rect::new(0.0, 0.0, 120.0, 40.0)).with_text("Go")
    }

    fn run(elements: Vec<ElementDescriptor>) -> Vec<Issue> {
        KeyboardAnalyzer
            .analyze(&DomSnapshot::new(elements), &Config::default())
            .unwrap()
    }

    #[test]
    fn test_native_controls_pass() {
        let issues = run(vec![
            control(0, TagKind::Button),
            control(1, TagKind::Link).with_href("/pricing"),
            control(2, TagKind::Button).with_tab_index(0),
        ]);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_link_without_href_is_unreachable() {
        let issues = run(vec![control(0, TagKind::Link)]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, "keyboard-access");
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].wcag_criterion.as_deref(), Some("2.1.1"));
        assert!(issues[0].message.contains("no href"));
    }

    #[test]
    fn test_link_without_href_but_tabindex_passes() {
        assert!(run(vec![control(0, TagKind::Link).with_tab_index(0)]).is_empty());
    }

    #[test]
    fn test_role_button_on_span_needs_tabindex() {
        let span = control(0, TagKind::Button).with_tag_name("SPAN");
        let issues = run(vec![span.clone()]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "<span> acting as a button is not keyboard focusable");

        assert!(run(vec![span.with_tab_index(0)]).is_empty());
    }

    #[test]
    fn test_negative_tabindex_removes_native_control() {
        let issues = run(vec![control(0, TagKind::Button).with_tab_index(-1)]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, "keyboard-access");
        assert!(issues[0].message.contains("tabindex=\"-1\""));
    }

    #[test]
    fn test_positive_tabindex() {
        let issues = run(vec![control(0, TagKind::Link).with_href("/").with_tab_index(3)]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, "positive-tabindex");
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].wcag_criterion.as_deref(), Some("2.4.3"));
    }

    #[test]
    fn test_hidden_controls_and_other_tags_are_ignored() {
        let p = ElementDescriptor::new(1, TagKind::P, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(run(vec![control(0, TagKind::Link).hidden(), p]).is_empty());
    }

    #[test]
    fn test_manual_review_is_requested() {
        assert!(KeyboardAnalyzer.manual_review().is_some());
    }
}

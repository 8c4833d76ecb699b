// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document-level checks.
//!
//! Covers WCAG 2.4.2 Page Titled and 3.1.1 Language of Page when the
//! capture layer recorded document metadata, plus the viewport meta tag
//! and the presence of a visible H1. Snapshots without metadata only get
//! the H1 check.

use crate::analyzers::Analyzer;
use crate::config::Config;
use crate::error::Result;
use crate::issue::{rules, Issue, Severity, WcagLevel};
use crate::snapshot::{DocumentMetadata, DomSnapshot, TagKind};

/// Document-level analyzer
pub struct DocumentAnalyzer;

impl Analyzer for DocumentAnalyzer {
    fn name(&self) -> &str {
        "Document Structure Analyzer"
    }

    fn description(&self) -> &str {
        "Checks page title, language, viewport and top-level heading (WCAG 2.4.2, 3.1.1)"
    }

    fn analyze(&self, snapshot: &DomSnapshot, _config: &Config) -> Result<Vec<Issue>> {
        let mut issues = snapshot
            .document
            .as_ref()
            .map(check_metadata)
            .unwrap_or_default();

        if !snapshot.visible_elements().any(|e| e.tag == TagKind::H1) {
            issues.push(
                Issue::new(
                    rules::MISSING_H1,
                    Severity::Medium,
                    "Page has no visible H1 heading",
                )
                .with_element("Entire page")
                .with_fix("Add one H1 that names the main content of the page"),
            );
        }

        Ok(issues)
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.document
    }
}

/// Title, language and viewport checks
pub fn check_metadata(document: &DocumentMetadata) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !document.has_title {
        issues.push(
            Issue::new(rules::PAGE_TITLE, Severity::High, "Page has no <title>")
                .with_element("<head>")
                .with_wcag("2.4.2", WcagLevel::A)
                .with_fix("Add a <title> that describes the page's topic or purpose"),
        );
    }

    let has_lang = document
        .lang
        .as_deref()
        .map(|l| !l.trim().is_empty())
        .unwrap_or(false);
    if !has_lang {
        issues.push(
            Issue::new(
                rules::PAGE_LANG,
                Severity::Medium,
                "The <html> element has no lang attribute",
            )
            .with_element("<html>")
            .with_wcag("3.1.1", WcagLevel::A)
            .with_fix("Add lang=\"en\" (or the page's language) to the <html> element"),
        );
    }

    if !document.has_viewport_meta {
        issues.push(
            Issue::new(
                rules::VIEWPORT_META,
                Severity::Medium,
                "Page has no viewport meta tag",
            )
            .with_element("<head>")
            .with_fix("Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ElementDescriptor, Rect};

    fn complete() -> DocumentMetadata {
        DocumentMetadata {
            has_title: true,
            lang: Some("en".to_string()),
            has_viewport_meta: true,
        }
    }

    fn h1() -> ElementDescriptor {
        ElementDescriptor::new(0, TagKind::H1, Rect::new(0.0, 0.0, 300.0, 40.0)).with_text("Welcome")
    }

    #[test]
    fn test_complete_document_passes() {
        let snapshot = DomSnapshot::new(vec![h1()]).with_document(complete());
        let issues = DocumentAnalyzer.analyze(&snapshot, &Config::default()).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_metadata_fields() {
        let issues = check_metadata(&DocumentMetadata::default());
        let rules: Vec<&str> = issues.iter().map(|i| i.rule_id.as_str()).collect();
        assert_eq!(rules, vec!["page-title", "page-lang", "viewport-meta"]);
        assert_eq!(issues[0].severity, Severity::High);
    }

    #[test]
    fn test_blank_lang_counts_as_missing() {
        let mut doc = complete();
        doc.lang = Some("  ".to_string());
        assert_eq!(check_metadata(&doc)[0].rule_id, "page-lang");
    }

    #[test]
    fn test_no_metadata_only_checks_h1() {
        let snapshot = DomSnapshot::new(vec![h1()]);
        assert!(DocumentAnalyzer.analyze(&snapshot, &Config::default()).unwrap().is_empty());

        let snapshot = DomSnapshot::new(vec![h1().hidden()]);
        let issues = DocumentAnalyzer.analyze(&snapshot, &Config::default()).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, "missing-h1");
    }
}

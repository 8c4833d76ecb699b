// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text analyzer - WCAG 1.1.1 Non-text Content (Level A)
//!
//! - A visible image must carry an `alt` attribute
//! - `alt=""` marks a decorative image and passes, when the capture could
//!   tell it apart from a missing attribute
//! - Whitespace-only or generic alt text ("image", "photo") helps nobody

use crate::analyzers::Analyzer;
use crate::config::Config;
use crate::error::Result;
use crate::issue::{rules, Issue, Severity, WcagLevel};
use crate::snapshot::{DomSnapshot, ElementDescriptor, TagKind};

/// Alt values that describe the file type instead of the content
const GENERIC_ALT_VALUES: &[&str] = &[
    "image",
    "photo",
    "picture",
    "icon",
    "graphic",
    "img",
    "banner",
    "logo",
    "untitled",
    "screenshot",
    "thumbnail",
    "placeholder",
];

/// Analyzer for image alt text
pub struct AltTextAnalyzer;

impl Analyzer for AltTextAnalyzer {
    fn name(&self) -> &str {
        "Alt Text Analyzer"
    }

    fn description(&self) -> &str {
        "Checks images for proper alt text (WCAG 1.1.1)"
    }

    fn analyze(&self, snapshot: &DomSnapshot, _config: &Config) -> Result<Vec<Issue>> {
        Ok(snapshot
            .visible_elements()
            .filter(|e| e.tag == TagKind::Image)
            .filter_map(check_image)
            .collect())
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.alt_text
    }
}

/// At most one issue per image, the most serious one
pub fn check_image(image: &ElementDescriptor) -> Option<Issue> {
    let label = image.describe();
    match image.alt.as_deref() {
        None => Some(
            Issue::new(
                rules::IMAGE_ALT,
                Severity::High,
                "Image is missing an alt attribute",
            )
            .with_element(&label)
            .with_wcag("1.1.1", WcagLevel::A)
            .with_fix("Add alt=\"description\" for informative images or alt=\"\" for decorative images"),
        ),
        Some("") => None,
        Some(alt) if alt.trim().is_empty() => Some(
            Issue::new(
                rules::IMAGE_ALT_BLANK,
                Severity::Medium,
                "Image alt text contains only whitespace",
            )
            .with_element(&label)
            .with_wcag("1.1.1", WcagLevel::A)
            .with_fix("Use alt=\"\" for decorative images, otherwise describe the image"),
        ),
        Some(alt) if is_generic_alt(alt) => Some(
            Issue::new(
                rules::IMAGE_ALT,
                Severity::Low,
                &format!("Image alt text \"{}\" is generic and does not describe the content", alt.trim()),
            )
            .with_element(&label)
            .with_wcag("1.1.1", WcagLevel::A)
            .with_fix("Describe what the image shows or what it is for"),
        ),
        Some(_) => None,
    }
}

fn is_generic_alt(alt: &str) -> bool {
    let alt = alt.trim().to_lowercase();
    GENERIC_ALT_VALUES.contains(&alt.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Rect;

    fn image(id: usize) -> ElementDescriptor {
        ElementDescriptor::new(id, TagKind::Image, Rect::new(0.0, 0.0, 120.0, 80.0))
    }

    fn run(elements: Vec<ElementDescriptor>) -> Vec<Issue> {
        AltTextAnalyzer
            .analyze(&DomSnapshot::new(elements), &Config::default())
            .unwrap()
    }

    #[test]
    fn test_missing_alt_is_high() {
        let issues = run(vec![image(0)]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, "image-alt");
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].wcag_criterion.as_deref(), Some("1.1.1"));
    }

    #[test]
    fn test_empty_alt_is_decorative() {
        assert!(run(vec![image(0).with_alt("")]).is_empty());
    }

    #[test]
    fn test_whitespace_alt() {
        let issues = run(vec![image(0).with_alt("   ")]);
        assert_eq!(issues[0].rule_id, "image-alt-blank");
        assert_eq!(issues[0].severity, Severity::Medium);
    }

    #[test]
    fn test_generic_alt_is_low() {
        let issues = run(vec![image(0).with_alt(" Photo ")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Low);
    }

    #[test]
    fn test_descriptive_alt_passes() {
        assert!(run(vec![image(0).with_alt("Team photo at the 2024 offsite")]).is_empty());
    }

    #[test]
    fn test_hidden_images_and_other_tags_are_ignored() {
        let p = ElementDescriptor::new(1, TagKind::P, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(run(vec![image(0).hidden(), p]).is_empty());
    }
}

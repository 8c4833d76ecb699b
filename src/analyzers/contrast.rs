// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast analyzer - WCAG 1.4.3 Contrast (Minimum, Level AA)
//!
//! Takes one text/background pair per visible text-bearing element and
//! compares the WCAG contrast ratio against a single threshold. The
//! threshold is a setting (4.5:1 normal text, 3:1 large text); it is never
//! switched automatically from the element's font size.

use crate::analyzers::Analyzer;
use crate::color::{contrast_ratio, parse_color, ColorSample, Rgb, Rgba};
use crate::config::Config;
use crate::error::Result;
use crate::issue::{rules, Issue, Severity, WcagLevel};
use crate::snapshot::{DomSnapshot, ElementDescriptor, StyleProperty};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Contrast analyzer over sampled text/background pairs
pub struct ContrastAnalyzer;

impl Analyzer for ContrastAnalyzer {
    fn name(&self) -> &str {
        "Color Contrast Analyzer"
    }

    fn description(&self) -> &str {
        "Checks text/background contrast ratios against the WCAG AA minimum (1.4.3)"
    }

    fn analyze(&self, snapshot: &DomSnapshot, config: &Config) -> Result<Vec<Issue>> {
        let threshold = config.contrast.threshold;
        let sampled = collect_color_samples(snapshot)?;
        for note in &sampled.skipped {
            debug!("Contrast sample skipped: {}", note);
        }

        let results = evaluate_contrast(&sampled.samples, threshold);
        Ok(contrast_issues(&results, threshold, snapshot))
    }

    fn manual_review(&self) -> Option<&str> {
        Some("Manual verification of color contrast over images, gradients and small text")
    }
}

/// Outcome of comparing one sample against the threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub sample: ColorSample,
    /// Always >= 1.0
    pub ratio: f64,
    pub passes_aa_normal: bool,
}

/// Samples taken from a snapshot, plus the elements that could not be sampled
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    pub samples: Vec<ColorSample>,
    pub skipped: Vec<String>,
}

/// Compute the contrast ratio of each sample and whether it meets `threshold`
pub fn evaluate_contrast(samples: &[ColorSample], threshold: f64) -> Vec<ContrastResult> {
    samples
        .iter()
        .map(|sample| {
            let ratio = contrast_ratio(sample.text_color, sample.background_color);
            ContrastResult {
                sample: *sample,
                ratio,
                passes_aa_normal: ratio >= threshold,
            }
        })
        .collect()
}

/// Turn failing results into issues, one per failing sample
pub fn contrast_issues(
    results: &[ContrastResult],
    threshold: f64,
    snapshot: &DomSnapshot,
) -> Vec<Issue> {
    results
        .iter()
        .filter(|r| r.ratio < threshold)
        .map(|r| {
            let element = snapshot
                .element(r.sample.element_ref)
                .map(ElementDescriptor::describe)
                .unwrap_or_else(|| format!("element {}", r.sample.element_ref));

            Issue::new(
                rules::CONTRAST_AA,
                Severity::Medium,
                &format!("contrast {:.2}:1 below {:.1}:1", r.ratio, threshold),
            )
            .with_element(&element)
            .with_wcag("1.4.3", WcagLevel::AA)
            .with_fix(&format!(
                "Darken or lighten text {} against background {} until the ratio reaches {:.1}:1",
                r.sample.text_color, r.sample.background_color, threshold
            ))
        })
        .collect()
}

/// Build one sample per visible text-level element that carries text.
///
/// Containers are left out: their captured text is the text of their
/// descendants, which are sampled on their own. Elements whose text color
/// is missing or not a concrete color are skipped
/// and noted. A numerically invalid color anywhere on the background walk
/// is returned as an error.
pub fn collect_color_samples(snapshot: &DomSnapshot) -> Result<SampleSet> {
    let mut set = SampleSet::default();

    for element in snapshot.visible_elements() {
        if !element.is_text_level() || element.text_excerpt.is_empty() {
            continue;
        }

        let text = match element.style(StyleProperty::Color) {
            Some(value) => match parse_color(value)? {
                Some(color) => color,
                None => {
                    set.skipped.push(format!(
                        "{}: unsupported text color \"{}\"",
                        element.describe(),
                        value
                    ));
                    continue;
                }
            },
            None => {
                set.skipped.push(format!("{}: no text color", element.describe()));
                continue;
            }
        };

        let background = resolve_background(snapshot, element)?;
        let text_color = if text.is_opaque() { text.rgb } else { text.over(background) };

        set.samples.push(ColorSample::new(text_color, background, element.id));
    }

    Ok(set)
}

/// Walk from the element through its ancestors until an opaque background
/// is found, compositing translucent layers on the way. White when nothing
/// opaque is found.
pub fn resolve_background(snapshot: &DomSnapshot, element: &ElementDescriptor) -> Result<Rgb> {
    let mut layers: Vec<Rgba> = Vec::new();
    let mut base = Rgb::WHITE;
    let mut current = Some(element);
    let mut hops = 0;

    while let Some(el) = current {
        // parent links come from the capture layer; guard against cycles
        if hops > snapshot.elements.len() {
            break;
        }
        hops += 1;

        if let Some(value) = el.style(StyleProperty::BackgroundColor) {
            if let Some(color) = parse_color(value)? {
                if color.is_opaque() {
                    base = color.rgb;
                    break;
                }
                if !color.is_transparent() {
                    layers.push(color);
                }
            }
        }

        current = el.parent.and_then(|p| snapshot.element(p));
    }

    Ok(layers.iter().rev().fold(base, |below, layer| layer.over(below)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SitebotError;
    use crate::snapshot::{ElementId, Rect, TagKind};

    fn block(id: usize, tag: TagKind) -> ElementDescriptor {
        ElementDescriptor::new(id, tag, Rect::new(0.0, 0.0, 200.0, 40.0))
    }

    fn sample(fg: Rgb, bg: Rgb) -> ColorSample {
        ColorSample::new(fg, bg, ElementId(0))
    }

    #[test]
    fn test_black_on_white_passes() {
        let results = evaluate_contrast(&[sample(Rgb::BLACK, Rgb::WHITE)], 4.5);
        assert!(results[0].passes_aa_normal);
        assert!((results[0].ratio - 21.0).abs() < 1e-3);
    }

    #[test]
    fn test_grey_on_grey_fails() {
        let fg = Rgb::new(0x77, 0x77, 0x77);
        let bg = Rgb::new(0x80, 0x80, 0x80);
        let results = evaluate_contrast(&[sample(fg, bg)], 4.5);
        assert!(!results[0].passes_aa_normal);
        assert!(results[0].ratio >= 1.0 && results[0].ratio < 1.5);
    }

    #[test]
    fn test_identical_colors_fail_with_ratio_one() {
        let grey = Rgb::new(0x77, 0x77, 0x77);
        let results = evaluate_contrast(&[sample(grey, grey)], 4.5);
        assert_eq!(results[0].ratio, 1.0);
        assert!(!results[0].passes_aa_normal);
    }

    #[test]
    fn test_large_text_threshold_is_configurable() {
        // #949494 on white sits between 3:1 and 4.5:1
        let fg = Rgb::new(0x94, 0x94, 0x94);
        let normal = evaluate_contrast(&[sample(fg, Rgb::WHITE)], 4.5);
        let large = evaluate_contrast(&[sample(fg, Rgb::WHITE)], 3.0);
        assert!(!normal[0].passes_aa_normal);
        assert!(large[0].passes_aa_normal);
    }

    #[test]
    fn test_failing_samples_become_one_issue_each() {
        let snapshot = DomSnapshot::new(vec![block(0, TagKind::P).with_text("faint")]);
        let grey = Rgb::new(0x77, 0x77, 0x77);
        let results = evaluate_contrast(
            &[
                sample(grey, Rgb::new(0x80, 0x80, 0x80)),
                sample(Rgb::BLACK, Rgb::WHITE),
                sample(grey, grey),
            ],
            4.5,
        );
        let issues = contrast_issues(&results, 4.5, &snapshot);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.rule_id == "contrast-aa"));
        assert!(issues.iter().all(|i| i.severity == Severity::Medium));
        assert_eq!(issues[1].message, "contrast 1.00:1 below 4.5:1");
        assert_eq!(issues[0].element_description, "P 'faint'");
    }

    #[test]
    fn test_background_walks_to_ancestor() {
        let snapshot = DomSnapshot::new(vec![
            block(0, TagKind::Other).with_style(StyleProperty::BackgroundColor, "rgb(0, 0, 0)"),
            block(1, TagKind::Other)
                .with_style(StyleProperty::BackgroundColor, "rgba(0, 0, 0, 0)")
                .with_parent(0),
            block(2, TagKind::P)
                .with_text("hi")
                .with_style(StyleProperty::Color, "rgb(255, 255, 255)")
                .with_parent(1),
        ]);
        let set = collect_color_samples(&snapshot).unwrap();
        assert_eq!(set.samples.len(), 1);
        assert_eq!(set.samples[0].background_color, Rgb::BLACK);
        assert_eq!(set.samples[0].element_ref, ElementId(2));
    }

    #[test]
    fn test_background_defaults_to_white() {
        let snapshot = DomSnapshot::new(vec![block(0, TagKind::P)
            .with_text("hi")
            .with_style(StyleProperty::Color, "#000")]);
        let set = collect_color_samples(&snapshot).unwrap();
        assert_eq!(set.samples[0].background_color, Rgb::WHITE);
    }

    #[test]
    fn test_translucent_background_is_composited() {
        let snapshot = DomSnapshot::new(vec![
            block(0, TagKind::Other).with_style(StyleProperty::BackgroundColor, "#ffffff"),
            block(1, TagKind::P)
                .with_text("hi")
                .with_style(StyleProperty::Color, "#000")
                .with_style(StyleProperty::BackgroundColor, "rgba(0, 0, 0, 0.5)")
                .with_parent(0),
        ]);
        let set = collect_color_samples(&snapshot).unwrap();
        assert_eq!(set.samples[0].background_color, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let snapshot = DomSnapshot::new(vec![
            block(0, TagKind::Other).with_parent(1),
            block(1, TagKind::P)
                .with_text("loop")
                .with_style(StyleProperty::Color, "#000")
                .with_parent(0),
        ]);
        let set = collect_color_samples(&snapshot).unwrap();
        assert_eq!(set.samples[0].background_color, Rgb::WHITE);
    }

    #[test]
    fn test_hidden_images_and_empty_text_are_not_sampled() {
        let snapshot = DomSnapshot::new(vec![
            block(0, TagKind::P).with_text("hidden").with_style(StyleProperty::Color, "#000").hidden(),
            block(1, TagKind::Image).with_text("logo").with_style(StyleProperty::Color, "#000"),
            block(2, TagKind::P).with_style(StyleProperty::Color, "#000"),
            block(3, TagKind::P).with_text("inherit").with_style(StyleProperty::Color, "inherit"),
        ]);
        let set = collect_color_samples(&snapshot).unwrap();
        assert!(set.samples.is_empty());
        assert_eq!(set.skipped.len(), 1);
    }

    #[test]
    fn test_containers_are_not_sampled() {
        // the wrapper's text is its children's text; only the children count
        let snapshot = DomSnapshot::new(vec![
            block(0, TagKind::Other)
                .with_tag_name("DIV")
                .with_text("Welcome Read more")
                .with_style(StyleProperty::Color, "rgb(200, 200, 200)")
                .with_style(StyleProperty::BackgroundColor, "#ffffff"),
            block(1, TagKind::H1)
                .with_text("Welcome")
                .with_style(StyleProperty::Color, "#000")
                .with_parent(0),
            block(2, TagKind::P)
                .with_text("Read more")
                .with_style(StyleProperty::Color, "#000")
                .with_parent(0),
            block(3, TagKind::Input)
                .with_text("typed value")
                .with_style(StyleProperty::Color, "#eee")
                .with_parent(0),
        ]);
        let issues = ContrastAnalyzer.analyze(&snapshot, &Config::default()).unwrap();
        assert!(issues.is_empty());

        let set = collect_color_samples(&snapshot).unwrap();
        let sampled: Vec<ElementId> = set.samples.iter().map(|s| s.element_ref).collect();
        assert_eq!(sampled, vec![ElementId(1), ElementId(2)]);
    }

    #[test]
    fn test_span_and_role_button_are_sampled() {
        let snapshot = DomSnapshot::new(vec![
            block(0, TagKind::Other)
                .with_tag_name("SPAN")
                .with_text("faint")
                .with_style(StyleProperty::Color, "#ccc"),
            block(1, TagKind::Button)
                .with_tag_name("DIV")
                .with_text("Go")
                .with_style(StyleProperty::Color, "#ddd"),
        ]);
        let issues = ContrastAnalyzer.analyze(&snapshot, &Config::default()).unwrap();
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_threshold_is_printed_with_one_decimal() {
        let snapshot = DomSnapshot::new(vec![block(0, TagKind::P).with_text("faint")]);
        let grey = Rgb::new(0x77, 0x77, 0x77);
        let results = evaluate_contrast(&[sample(grey, grey)], 3.0);
        let issues = contrast_issues(&results, 3.0, &snapshot);
        assert_eq!(issues[0].message, "contrast 1.00:1 below 3.0:1");
    }

    #[test]
    fn test_out_of_range_color_is_a_typed_failure() {
        let snapshot = DomSnapshot::new(vec![block(0, TagKind::P)
            .with_text("bad")
            .with_style(StyleProperty::Color, "rgb(256, 0, 0)")]);
        let err = ContrastAnalyzer.analyze(&snapshot, &Config::default()).unwrap_err();
        assert!(matches!(err, SitebotError::InvalidColorValue(_)));
    }
}

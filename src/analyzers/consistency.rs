// SPDX-License-Identifier: PMPL-1.0-or-later
//! Style consistency aggregation.
//!
//! Elements are grouped by role and by a style signature taken from a
//! role-specific subset of their computed style. A role whose members are
//! spread over more than one signature is styled inconsistently.
//!
//! Heading levels are separate roles: H1s are compared with H1s, H2s with
//! H2s. Cross-level sizing is the hierarchy analyzer's job.

use crate::analyzers::cta;
use crate::analyzers::Analyzer;
use crate::color::parse_color;
use crate::config::{Config, CtaConfig};
use crate::error::Result;
use crate::issue::{rules, Issue, Severity};
use crate::snapshot::{DomSnapshot, ElementDescriptor, StyleProperty, TagKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typography fields compared for headings and paragraphs
const TYPOGRAPHY_FIELDS: &[StyleProperty] = &[
    StyleProperty::FontSize,
    StyleProperty::FontWeight,
    StyleProperty::FontFamily,
];

/// Fields compared for buttons and links
const CTA_FIELDS: &[StyleProperty] = &[
    StyleProperty::BackgroundColor,
    StyleProperty::Color,
    StyleProperty::FontSize,
    StyleProperty::FontWeight,
];

/// Style consistency analyzer
pub struct ConsistencyAnalyzer;

impl Analyzer for ConsistencyAnalyzer {
    fn name(&self) -> &str {
        "Style Consistency Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that headings, paragraphs, buttons and links share one style per role"
    }

    fn analyze(&self, snapshot: &DomSnapshot, config: &Config) -> Result<Vec<Issue>> {
        let groups = aggregate_consistency_with(snapshot.visible_elements(), &config.cta);
        Ok(consistency_issues(&groups))
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.consistency
    }
}

/// Normalized values of the style fields a role is compared on
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSignature(BTreeMap<StyleProperty, String>);

impl StyleSignature {
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.0.get(&property).map(String::as_str)
    }
}

impl std::fmt::Display for StyleSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(k, v)| format!("{:?}={}", k, v))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Elements sharing one role and one signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyGroup {
    pub role: TagKind,
    pub signature: StyleSignature,
    pub member_count: usize,
    /// How many members are prominent calls to action (always 0 outside Button/Link)
    pub prominent_members: usize,
}

/// The grouping role of a tag, if it takes part in consistency checks
pub fn consistency_role(tag: TagKind) -> Option<TagKind> {
    match tag {
        TagKind::H1
        | TagKind::H2
        | TagKind::H3
        | TagKind::H4
        | TagKind::H5
        | TagKind::H6
        | TagKind::P
        | TagKind::Button
        | TagKind::Link => Some(tag),
        TagKind::Image | TagKind::Input | TagKind::Other => None,
    }
}

fn signature_fields(role: TagKind) -> &'static [StyleProperty] {
    if role.is_cta() {
        CTA_FIELDS
    } else {
        TYPOGRAPHY_FIELDS
    }
}

/// Build the signature of an element for its role. Missing fields stay absent,
/// so two elements missing the same field still match.
pub fn style_signature(element: &ElementDescriptor, role: TagKind) -> StyleSignature {
    let fields = signature_fields(role)
        .iter()
        .filter_map(|p| element.style(*p).map(|v| (*p, normalize_value(*p, v))))
        .collect();
    StyleSignature(fields)
}

fn normalize_value(property: StyleProperty, value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    match property {
        StyleProperty::Color | StyleProperty::BackgroundColor => match parse_color(&lowered) {
            Ok(Some(c)) if c.is_transparent() => "transparent".to_string(),
            Ok(Some(c)) if c.is_opaque() => c.rgb.to_hex(),
            Ok(Some(c)) => format!("{}/{:.2}", c.rgb.to_hex(), c.alpha),
            _ => lowered,
        },
        StyleProperty::FontWeight => match lowered.as_str() {
            "normal" => "400".to_string(),
            "bold" => "700".to_string(),
            _ => lowered,
        },
        StyleProperty::FontFamily => lowered
            .split(',')
            .map(|f| f.trim().trim_matches(|c: char| c == '"' || c == '\''))
            .collect::<Vec<_>>()
            .join(","),
        StyleProperty::FontSize | StyleProperty::LineHeight => lowered,
    }
}

/// Group elements by role and signature with the default CTA thresholds
pub fn aggregate_consistency<'a>(
    elements: impl IntoIterator<Item = &'a ElementDescriptor>,
) -> Vec<ConsistencyGroup> {
    aggregate_consistency_with(elements, &CtaConfig::default())
}

/// Group elements by role and signature. Groups come back ordered by role, then signature.
pub fn aggregate_consistency_with<'a>(
    elements: impl IntoIterator<Item = &'a ElementDescriptor>,
    cta_config: &CtaConfig,
) -> Vec<ConsistencyGroup> {
    let mut groups: BTreeMap<(TagKind, StyleSignature), (usize, usize)> = BTreeMap::new();

    for element in elements {
        let role = match consistency_role(element.tag) {
            Some(r) => r,
            None => continue,
        };
        let signature = style_signature(element, role);
        let entry = groups.entry((role, signature)).or_insert((0, 0));
        entry.0 += 1;
        if cta::is_prominent(element, cta_config) {
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|((role, signature), (member_count, prominent_members))| ConsistencyGroup {
            role,
            signature,
            member_count,
            prominent_members,
        })
        .collect()
}

/// One low-severity issue per role that has more than one signature
pub fn consistency_issues(groups: &[ConsistencyGroup]) -> Vec<Issue> {
    let mut per_role: BTreeMap<TagKind, (usize, usize)> = BTreeMap::new();
    for group in groups {
        let entry = per_role.entry(group.role).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += group.member_count;
    }

    per_role
        .into_iter()
        .filter(|(_, (distinct, members))| *distinct > 1 && *members > 1)
        .map(|(role, (distinct, members))| {
            Issue::new(
                rules::STYLE_INCONSISTENCY,
                Severity::Low,
                &format!(
                    "{} has {} distinct styles across {} elements",
                    role, distinct, members
                ),
            )
            .with_element(&format!("All {} elements", role))
            .with_fix(&format!(
                "Give every {} element the same {} through a shared class",
                role,
                describe_fields(role)
            ))
        })
        .collect()
}

fn describe_fields(role: TagKind) -> &'static str {
    if role.is_cta() {
        "colors, font size and weight"
    } else {
        "font size, weight and family"
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! DOM snapshot ingestion.
//!
//! A snapshot is the JSON document captured by the browser driver: a flat
//! list of elements with their bounding boxes and computed styles plus a
//! little document-level metadata. Ingestion narrows the open-ended style
//! map to the closed [`StyleMap`], derives visibility, and skips elements
//! that lack a tag or a bounding box. One bad element never aborts the
//! snapshot; it becomes a diagnostic instead.

use crate::error::{Result, SitebotError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Maximum number of characters kept from an element's text content
pub const TEXT_EXCERPT_LIMIT: usize = 100;

/// Opacity below which an element is treated as invisible
pub const MIN_VISIBLE_OPACITY: f64 = 0.05;

/// Tags whose text content is their own rather than their descendants'
const TEXT_LEVEL_TAGS: &[&str] = &[
    "H1", "H2", "H3", "H4", "H5", "H6", "P", "A", "SPAN", "LI", "LABEL", "BUTTON",
];

/// Position of an element in the captured element list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Closed set of element kinds the analyzers reason about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TagKind {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Button,
    Link,
    Image,
    Input,
    Other,
}

impl TagKind {
    /// Classify a tag name, letting an explicit ARIA role promote generic elements.
    pub fn from_tag_name(tag: &str, role: Option<&str>) -> Self {
        let kind = match tag.trim().to_ascii_uppercase().as_str() {
            "H1" => TagKind::H1,
            "H2" => TagKind::H2,
            "H3" => TagKind::H3,
            "H4" => TagKind::H4,
            "H5" => TagKind::H5,
            "H6" => TagKind::H6,
            "P" => TagKind::P,
            "BUTTON" => TagKind::Button,
            "A" => TagKind::Link,
            "IMG" => TagKind::Image,
            "INPUT" | "SELECT" | "TEXTAREA" => TagKind::Input,
            _ => TagKind::Other,
        };

        if kind != TagKind::Other {
            return kind;
        }

        match role.map(|r| r.trim().to_ascii_lowercase()) {
            Some(r) if r == "button" => TagKind::Button,
            Some(r) if r == "link" => TagKind::Link,
            _ => TagKind::Other,
        }
    }

    /// Heading level 1-6, if this is a heading
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            TagKind::H1 => Some(1),
            TagKind::H2 => Some(2),
            TagKind::H3 => Some(3),
            TagKind::H4 => Some(4),
            TagKind::H5 => Some(5),
            TagKind::H6 => Some(6),
            _ => None,
        }
    }

    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Buttons and links are call-to-action candidates
    pub fn is_cta(&self) -> bool {
        matches!(self, TagKind::Button | TagKind::Link)
    }

    /// The HTML tag a kind stands for when no captured tag name is available
    pub fn canonical_tag_name(&self) -> &'static str {
        match self {
            TagKind::H1 => "H1",
            TagKind::H2 => "H2",
            TagKind::H3 => "H3",
            TagKind::H4 => "H4",
            TagKind::H5 => "H5",
            TagKind::H6 => "H6",
            TagKind::P => "P",
            TagKind::Button => "BUTTON",
            TagKind::Link => "A",
            TagKind::Image => "IMG",
            TagKind::Input => "INPUT",
            TagKind::Other => "DIV",
        }
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TagKind::H1 => "H1",
            TagKind::H2 => "H2",
            TagKind::H3 => "H3",
            TagKind::H4 => "H4",
            TagKind::H5 => "H5",
            TagKind::H6 => "H6",
            TagKind::P => "P",
            TagKind::Button => "Button",
            TagKind::Link => "Link",
            TagKind::Image => "Image",
            TagKind::Input => "Input",
            TagKind::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Bounding box in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Recognized computed-style properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    FontFamily,
    FontSize,
    FontWeight,
    Color,
    BackgroundColor,
    LineHeight,
}

impl StyleProperty {
    /// Look up a property by its CSS name, accepting `fontSize` or `font-size`.
    pub fn from_key(key: &str) -> Option<Self> {
        match kebab_case(key).as_str() {
            "font-family" => Some(StyleProperty::FontFamily),
            "font-size" => Some(StyleProperty::FontSize),
            "font-weight" => Some(StyleProperty::FontWeight),
            "color" => Some(StyleProperty::Color),
            "background-color" => Some(StyleProperty::BackgroundColor),
            "line-height" => Some(StyleProperty::LineHeight),
            _ => None,
        }
    }
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.trim().chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// The closed style map carried by every element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<StyleProperty, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, property: StyleProperty, value: impl Into<String>) {
        self.0.insert(property, value.into());
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.0.get(&property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One captured element after ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub id: ElementId,
    pub tag: TagKind,
    /// Uppercase tag name as captured (`SPAN`, `DIV`, ...)
    #[serde(default)]
    pub tag_name: String,
    pub bounding_box: Rect,
    pub computed_style: StyleMap,
    pub text_excerpt: String,
    /// Nearest captured ancestor, used for background resolution
    pub parent: Option<ElementId>,
    /// `alt` attribute for images; `None` when the attribute is absent
    pub alt: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub tab_index: Option<i32>,
    pub visible: bool,
}

impl ElementDescriptor {
    pub fn new(id: usize, tag: TagKind, bounding_box: Rect) -> Self {
        Self {
            id: ElementId(id),
            tag,
            tag_name: tag.canonical_tag_name().to_string(),
            bounding_box,
            computed_style: StyleMap::new(),
            text_excerpt: String::new(),
            parent: None,
            alt: None,
            href: None,
            tab_index: None,
            visible: bounding_box.has_area(),
        }
    }

    pub fn with_style(mut self, property: StyleProperty, value: &str) -> Self {
        self.computed_style.insert(property, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text_excerpt = excerpt(text);
        self
    }

    pub fn with_parent(mut self, parent: usize) -> Self {
        self.parent = Some(ElementId(parent));
        self
    }

    pub fn with_alt(mut self, alt: &str) -> Self {
        self.alt = Some(alt.to_string());
        self
    }

    pub fn with_tag_name(mut self, tag_name: &str) -> Self {
        self.tag_name = tag_name.trim().to_ascii_uppercase();
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.computed_style.get(property)
    }

    /// Whether the text content belongs to this element. Containers such as
    /// `DIV` report the text of every descendant and are not text-level.
    pub fn is_text_level(&self) -> bool {
        self.tag.is_cta() || TEXT_LEVEL_TAGS.contains(&self.tag_name.as_str())
    }

    /// Short human-readable label used in issue descriptions
    pub fn describe(&self) -> String {
        if self.text_excerpt.is_empty() {
            format!("{} element {}", self.tag, self.id)
        } else {
            format!("{} '{}'", self.tag, self.text_excerpt)
        }
    }
}

/// Document-level facts captured alongside the element list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub has_title: bool,
    pub lang: Option<String>,
    pub has_viewport_meta: bool,
}

/// An ingested snapshot, read-only for the rest of the run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomSnapshot {
    pub url: Option<String>,
    /// Set by the capture layer when the page could not be loaded
    pub load_error: Option<String>,
    pub document: Option<DocumentMetadata>,
    pub elements: Vec<ElementDescriptor>,
    /// Ingestion problems that were recovered locally
    pub diagnostics: Vec<String>,
}

impl DomSnapshot {
    /// Build a snapshot from descriptors, ordering them by id
    pub fn new(mut elements: Vec<ElementDescriptor>) -> Self {
        elements.sort_by_key(|e| e.id);
        Self { elements, ..Self::default() }
    }

    pub fn with_document(mut self, document: DocumentMetadata) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_load_error(mut self, reason: &str) -> Self {
        self.load_error = Some(reason.to_string());
        self
    }

    /// Parse the captured JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(content)?;
        Ok(ingest(raw))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up an element by id. Ids are ascending because ingestion preserves capture order.
    pub fn element(&self, id: ElementId) -> Option<&ElementDescriptor> {
        self.elements
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|idx| &self.elements[idx])
    }

    pub fn visible_elements(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.elements.iter().filter(|e| e.visible)
    }
}

/// Load a snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> Result<DomSnapshot> {
    let content = std::fs::read_to_string(path)?;
    let mut snapshot = DomSnapshot::from_json(&content)?;
    if snapshot.url.is_none() {
        snapshot.url = Some(path.display().to_string());
    }
    Ok(snapshot)
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    url: Option<String>,
    #[serde(default, alias = "loadError")]
    load_error: Option<String>,
    #[serde(default)]
    document: Option<DocumentMetadata>,
    #[serde(default, alias = "elements", alias = "keyElements")]
    key_elements: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    #[serde(default, alias = "tagName", alias = "tag")]
    tag_name: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default, alias = "textContent", alias = "text")]
    text_content: Option<String>,
    #[serde(default, alias = "boundingBox")]
    bounding_box: Option<Rect>,
    #[serde(default, alias = "computedStyles", alias = "computed_style")]
    computed_styles: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    parent: Option<usize>,
    #[serde(default)]
    alt: Option<String>,
    /// Set by captures that can tell `alt=""` from a missing attribute
    #[serde(default, alias = "hasAlt")]
    has_alt: Option<bool>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default, alias = "tabIndex", alias = "tabindex")]
    tab_index: Option<serde_json::Value>,
}

fn ingest(raw: RawSnapshot) -> DomSnapshot {
    let mut snapshot = DomSnapshot {
        url: raw.url,
        load_error: raw.load_error,
        document: raw.document,
        elements: Vec::with_capacity(raw.key_elements.len()),
        diagnostics: Vec::new(),
    };

    for (index, value) in raw.key_elements.into_iter().enumerate() {
        match ingest_element(index, value) {
            Ok(element) => snapshot.elements.push(element),
            Err(e) => {
                warn!("Skipping element: {}", e);
                snapshot.diagnostics.push(e.to_string());
            }
        }
    }

    debug!(
        "Ingested {} elements ({} skipped)",
        snapshot.elements.len(),
        snapshot.diagnostics.len()
    );
    snapshot
}

fn ingest_element(index: usize, value: serde_json::Value) -> Result<ElementDescriptor> {
    let malformed = |reason: String| SitebotError::MalformedElementDescriptor { index, reason };

    let raw: RawElement = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;

    let tag_name = raw
        .tag_name
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| malformed("missing tag name".to_string()))?;
    let bounding_box = raw
        .bounding_box
        .ok_or_else(|| malformed("missing bounding box".to_string()))?;

    let mut computed_style = StyleMap::new();
    let mut visible = bounding_box.has_area();

    for (key, value) in &raw.computed_styles {
        let value = match value {
            serde_json::Value::String(s) => s.trim().to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => continue,
        };

        match kebab_case(key).as_str() {
            "display" if value.eq_ignore_ascii_case("none") => visible = false,
            "visibility"
                if value.eq_ignore_ascii_case("hidden") || value.eq_ignore_ascii_case("collapse") =>
            {
                visible = false
            }
            "opacity" => {
                if let Ok(opacity) = value.parse::<f64>() {
                    if opacity < MIN_VISIBLE_OPACITY {
                        visible = false;
                    }
                }
            }
            _ => {
                if let Some(property) = StyleProperty::from_key(key) {
                    computed_style.insert(property, value);
                }
            }
        }
    }

    Ok(ElementDescriptor {
        id: ElementId(index),
        tag: TagKind::from_tag_name(&tag_name, raw.role.as_deref()),
        tag_name: tag_name.trim().to_ascii_uppercase(),
        bounding_box,
        computed_style,
        text_excerpt: raw.text_content.as_deref().map(excerpt).unwrap_or_default(),
        parent: raw.parent.filter(|p| *p != index).map(ElementId),
        alt: resolve_alt(raw.alt, raw.has_alt),
        href: raw.href.map(|h| h.trim().to_string()).filter(|h| !h.is_empty()),
        tab_index: raw.tab_index.as_ref().and_then(parse_tab_index),
        visible,
    })
}

/// Browser captures report `element.alt`, which is `""` both for a missing
/// attribute and for `alt=""`. Without a `has_alt` flag an empty value is
/// taken as missing; with it, `alt=""` stays a decorative marker.
fn resolve_alt(alt: Option<String>, has_alt: Option<bool>) -> Option<String> {
    match has_alt {
        Some(false) => None,
        Some(true) => Some(alt.unwrap_or_default()),
        None => alt.filter(|a| !a.is_empty()),
    }
}

fn parse_tab_index(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn excerpt(text: &str) -> String {
    text.trim().chars().take(TEXT_EXCERPT_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "url": "https://example.com",
        "document": { "has_title": true, "lang": "en", "has_viewport_meta": false },
        "key_elements": [
            {
                "tag_name": "DIV",
                "bounding_box": { "x": 0, "y": 0, "width": 800, "height": 600 },
                "computed_styles": { "backgroundColor": "rgb(255, 255, 255)", "cursor": "auto" }
            },
            {
                "tag_name": "H1",
                "text_content": "  Welcome  ",
                "bounding_box": { "x": 10, "y": 10, "width": 300, "height": 40 },
                "computed_styles": { "fontSize": "32px", "font-weight": "700", "zIndex": "1" },
                "parent": 0
            },
            {
                "tag_name": "P",
                "text_content": "no box"
            },
            {
                "tag_name": "SPAN",
                "role": "button",
                "text_content": "Buy",
                "bounding_box": { "x": 10, "y": 80, "width": 90, "height": 30 },
                "computed_styles": { "opacity": "0" }
            },
            "not an element"
        ]
    }"#;

    #[test]
    fn test_ingest_keeps_recognized_styles_only() {
        let snapshot = DomSnapshot::from_json(SNAPSHOT).unwrap();
        let root = snapshot.element(ElementId(0)).unwrap();
        assert_eq!(root.style(StyleProperty::BackgroundColor), Some("rgb(255, 255, 255)"));
        assert_eq!(root.computed_style.len(), 1);

        let h1 = snapshot.element(ElementId(1)).unwrap();
        assert_eq!(h1.tag, TagKind::H1);
        assert_eq!(h1.style(StyleProperty::FontSize), Some("32px"));
        assert_eq!(h1.style(StyleProperty::FontWeight), Some("700"));
        assert_eq!(h1.computed_style.len(), 2);
        assert_eq!(h1.text_excerpt, "Welcome");
        assert_eq!(h1.parent, Some(ElementId(0)));
    }

    #[test]
    fn test_malformed_elements_are_skipped_not_fatal() {
        let snapshot = DomSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.elements.len(), 3);
        assert_eq!(snapshot.diagnostics.len(), 2);
        assert!(snapshot.diagnostics[0].contains("index 2"));
        assert!(snapshot.diagnostics[0].contains("bounding box"));
        assert!(snapshot.element(ElementId(2)).is_none());
    }

    #[test]
    fn test_role_and_visibility() {
        let snapshot = DomSnapshot::from_json(SNAPSHOT).unwrap();
        let span = snapshot.element(ElementId(3)).unwrap();
        assert_eq!(span.tag, TagKind::Button);
        assert!(!span.visible);
        assert_eq!(snapshot.visible_elements().count(), 2);
    }

    #[test]
    fn test_document_metadata() {
        let snapshot = DomSnapshot::from_json(SNAPSHOT).unwrap();
        let doc = snapshot.document.unwrap();
        assert!(doc.has_title);
        assert_eq!(doc.lang.as_deref(), Some("en"));
        assert!(!doc.has_viewport_meta);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = DomSnapshot::from_json("{}").unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.document.is_none());
        assert!(snapshot.diagnostics.is_empty());
    }

    #[test]
    fn test_text_excerpt_is_bounded() {
        let long = "x".repeat(500);
        let element = ElementDescriptor::new(0, TagKind::P, Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_text(&long);
        assert_eq!(element.text_excerpt.chars().count(), TEXT_EXCERPT_LIMIT);
    }

    #[test]
    fn test_tag_kind_classification() {
        assert_eq!(TagKind::from_tag_name("a", None), TagKind::Link);
        assert_eq!(TagKind::from_tag_name("IMG", None), TagKind::Image);
        assert_eq!(TagKind::from_tag_name("textarea", None), TagKind::Input);
        assert_eq!(TagKind::from_tag_name("div", Some("link")), TagKind::Link);
        assert_eq!(TagKind::from_tag_name("h3", Some("button")), TagKind::H3);
        assert_eq!(TagKind::from_tag_name("li", None), TagKind::Other);
    }

    #[test]
    fn test_browser_capture_alt_and_focus_fields() {
        let snapshot = DomSnapshot::from_json(
            r#"{"key_elements": [
                {"id": null, "tag_name": "IMG", "text_content": null,
                 "bounding_box": {"x": 0, "y": 0, "width": 50, "height": 50, "top": 0, "right": 50, "bottom": 50, "left": 0},
                 "src": "https://example.com/a.png", "alt": "", "href": null, "role": null, "tabIndex": null},
                {"tag_name": "IMG", "bounding_box": {"width": 50, "height": 50}, "alt": "", "has_alt": true},
                {"tag_name": "A", "text_content": "Docs", "bounding_box": {"width": 50, "height": 20},
                 "href": "https://example.com/docs", "tabIndex": "-1"},
                {"tag_name": "SPAN", "role": "button", "bounding_box": {"width": 50, "height": 20}, "tabIndex": 0}
            ]}"#,
        )
        .unwrap();

        assert!(snapshot.diagnostics.is_empty());
        assert_eq!(snapshot.elements[0].alt, None);
        assert_eq!(snapshot.elements[1].alt.as_deref(), Some(""));
        assert_eq!(snapshot.elements[2].href.as_deref(), Some("https://example.com/docs"));
        assert_eq!(snapshot.elements[2].tab_index, Some(-1));
        assert_eq!(snapshot.elements[3].tag, TagKind::Button);
        assert_eq!(snapshot.elements[3].tag_name, "SPAN");
        assert_eq!(snapshot.elements[3].tab_index, Some(0));
    }

    #[test]
    fn test_text_level_elements() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(ElementDescriptor::new(0, TagKind::P, rect).is_text_level());
        assert!(ElementDescriptor::new(0, TagKind::Other, rect).with_tag_name("span").is_text_level());
        assert!(!ElementDescriptor::new(0, TagKind::Other, rect).is_text_level());
        assert!(!ElementDescriptor::new(0, TagKind::Input, rect).is_text_level());
        assert!(!ElementDescriptor::new(0, TagKind::Image, rect).is_text_level());
        // role="button" on a DIV still carries its own label
        assert!(ElementDescriptor::new(0, TagKind::Button, rect).with_tag_name("DIV").is_text_level());
    }

    #[test]
    fn test_new_orders_elements_by_id() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let snapshot = DomSnapshot::new(vec![
            ElementDescriptor::new(2, TagKind::P, rect),
            ElementDescriptor::new(0, TagKind::Other, rect),
            ElementDescriptor::new(1, TagKind::H1, rect),
        ]);
        assert_eq!(snapshot.element(ElementId(0)).map(|e| e.tag), Some(TagKind::Other));
        assert_eq!(snapshot.element(ElementId(1)).map(|e| e.tag), Some(TagKind::H1));
        assert_eq!(snapshot.element(ElementId(2)).map(|e| e.tag), Some(TagKind::P));
    }

    #[test]
    fn test_style_property_keys() {
        assert_eq!(StyleProperty::from_key("backgroundColor"), Some(StyleProperty::BackgroundColor));
        assert_eq!(StyleProperty::from_key("line-height"), Some(StyleProperty::LineHeight));
        assert_eq!(StyleProperty::from_key("zIndex"), None);
    }
}

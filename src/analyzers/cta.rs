// SPDX-License-Identifier: PMPL-1.0-or-later
//! Call-to-action prominence.
//!
//! A button or link is prominent when any one signal fires: a large
//! enough box, a bold weight, a color that is not one of the browser
//! defaults, or a position above the fold. Prominence is metadata for the
//! consistency groups and never an issue by itself.

use crate::color::{parse_color, Rgba};
use crate::config::CtaConfig;
use crate::snapshot::{ElementDescriptor, StyleProperty};
use serde::{Deserialize, Serialize};

/// Channel floor for a color to count as near-white
const NEAR_WHITE_MIN: u8 = 240;

/// Channel ceiling for a color to count as near-black
const NEAR_BLACK_MAX: u8 = 15;

/// Why a call-to-action counts as prominent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProminenceSignal {
    Size,
    Bold,
    AccentColor,
    AboveFold,
}

/// The signals that fired for one element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prominence {
    pub signals: Vec<ProminenceSignal>,
}

impl Prominence {
    pub fn is_prominent(&self) -> bool {
        !self.signals.is_empty()
    }
}

/// Assess a button or link. Returns `None` for every other element.
pub fn assess_prominence(element: &ElementDescriptor, config: &CtaConfig) -> Option<Prominence> {
    if !element.tag.is_cta() {
        return None;
    }

    let mut signals = Vec::new();
    let bbox = &element.bounding_box;

    if bbox.width > config.min_width && bbox.height > config.min_height {
        signals.push(ProminenceSignal::Size);
    }
    if element
        .style(StyleProperty::FontWeight)
        .map(|w| is_bold(w, config.bold_weight))
        .unwrap_or(false)
    {
        signals.push(ProminenceSignal::Bold);
    }
    if has_accent_color(element) {
        signals.push(ProminenceSignal::AccentColor);
    }
    if bbox.y < config.fold_cutoff {
        signals.push(ProminenceSignal::AboveFold);
    }

    Some(Prominence { signals })
}

/// Shorthand for "assessed and at least one signal fired"
pub fn is_prominent(element: &ElementDescriptor, config: &CtaConfig) -> bool {
    assess_prominence(element, config)
        .map(|p| p.is_prominent())
        .unwrap_or(false)
}

/// `bold`, `bolder`, or a numeric weight at or above `bold_weight`
pub fn is_bold(weight: &str, bold_weight: u32) -> bool {
    let weight = weight.trim().to_ascii_lowercase();
    match weight.as_str() {
        "bold" | "bolder" => true,
        other => other
            .parse::<f64>()
            .map(|w| w >= bold_weight as f64)
            .unwrap_or(false),
    }
}

fn has_accent_color(element: &ElementDescriptor) -> bool {
    [StyleProperty::BackgroundColor, StyleProperty::Color]
        .into_iter()
        .filter_map(|p| element.style(p))
        .any(|value| match parse_color(value) {
            Ok(Some(color)) => !is_default_color(&color),
            // unparseable colors carry no signal
            _ => false,
        })
}

/// Transparent, near-white and near-black are what unstyled controls look like.
pub fn is_default_color(color: &Rgba) -> bool {
    if color.is_transparent() {
        return true;
    }
    let channels = [color.rgb.r, color.rgb.g, color.rgb.b];
    channels.iter().all(|c| *c >= NEAR_WHITE_MIN) || channels.iter().all(|c| *c <= NEAR_BLACK_MAX)
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! CSS color parsing and WCAG 2.x luminance math.
//!
//! Colors arrive as computed-style strings (`rgb(12, 34, 56)`,
//! `rgba(0, 0, 0, 0)`, `#fff`, `navy`). Parsing is strict about numbers:
//! a channel outside [0,255] is an [`SitebotError::InvalidColorValue`],
//! never a clamped value, because a clamped channel silently changes the
//! contrast ratio.

use crate::error::{Result, SitebotError};
use crate::snapshot::ElementId;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Linearization knee of the WCAG 2.x relative luminance definition.
pub const LINEARIZE_KNEE: f64 = 0.03928;

/// An opaque 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integer channels, rejecting anything outside [0,255].
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: channel(r, "red")?,
            g: channel(g, "green")?,
            b: channel(b, "blue")?,
        })
    }

    /// Canonical `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn channel(value: i64, name: &str) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        SitebotError::InvalidColorValue(format!(
            "{} channel {} is outside 0-255",
            name, value
        ))
    })
}

/// A color with an alpha component in [0,1], as produced by computed styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub fn transparent() -> Self {
        Self { rgb: Rgb::BLACK, alpha: 0.0 }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Source-over composite of this color onto an opaque backdrop.
    pub fn over(&self, below: Rgb) -> Rgb {
        let a = self.alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (a * top as f64 + (1.0 - a) * bottom as f64).round() as u8
        };
        Rgb::new(
            mix(self.rgb.r, below.r),
            mix(self.rgb.g, below.g),
            mix(self.rgb.b, below.b),
        )
    }
}

/// One text/background pair taken from a text-bearing element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSample {
    pub text_color: Rgb,
    pub background_color: Rgb,
    pub element_ref: ElementId,
}

impl ColorSample {
    pub fn new(text_color: Rgb, background_color: Rgb, element_ref: ElementId) -> Self {
        Self { text_color, background_color, element_ref }
    }

    /// Build a sample from raw integer triples, failing on any out-of-range channel.
    pub fn from_channels(
        text: (i64, i64, i64),
        background: (i64, i64, i64),
        element_ref: ElementId,
    ) -> Result<Self> {
        Ok(Self {
            text_color: Rgb::from_channels(text.0, text.1, text.2)?,
            background_color: Rgb::from_channels(background.0, background.1, background.2)?,
            element_ref,
        })
    }
}

/// Parse a CSS color value.
///
/// Returns `Ok(None)` for syntax that does not name a concrete color
/// (`inherit`, `currentcolor`, gradients). Hex and `rgb()` values with
/// bad digits or out-of-range channels are errors.
pub fn parse_color(value: &str) -> Result<Option<Rgba>> {
    let trimmed = value.trim().to_lowercase();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.starts_with('#') {
        return parse_hex_color(&trimmed).map(Some);
    }
    if trimmed.starts_with("rgb") {
        return parse_rgb_function(&trimmed);
    }
    if trimmed == "transparent" {
        return Ok(Some(Rgba::transparent()));
    }
    Ok(parse_named_color(&trimmed).map(Rgba::opaque))
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
pub fn parse_hex_color(hex: &str) -> Result<Rgba> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || SitebotError::InvalidColorValue(format!("malformed hex color \"{}\"", hex));

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    let rgb = Rgb::new(byte(0)?, byte(2)?, byte(4)?);
    let alpha = if expanded.len() == 8 {
        byte(6)? as f64 / 255.0
    } else {
        1.0
    };
    Ok(Rgba { rgb, alpha })
}

fn rgb_function_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^rgba?\(\s*([^)]*)\)$").expect("valid regex"))
}

/// Parse `rgb()`/`rgba()` in comma or space separated form, with an optional `/ alpha`.
fn parse_rgb_function(value: &str) -> Result<Option<Rgba>> {
    let caps = match rgb_function_re().captures(value) {
        Some(c) => c,
        None => {
            return Err(SitebotError::InvalidColorValue(format!(
                "malformed rgb() color \"{}\"",
                value
            )))
        }
    };

    let parts: Vec<&str> = caps[1]
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 3 && parts.len() != 4 {
        return Err(SitebotError::InvalidColorValue(format!(
            "expected 3 or 4 components in \"{}\", found {}",
            value,
            parts.len()
        )));
    }

    let r = parse_channel(parts[0], value)?;
    let g = parse_channel(parts[1], value)?;
    let b = parse_channel(parts[2], value)?;
    let rgb = Rgb::from_channels(r, g, b)?;

    let alpha = match parts.get(3) {
        Some(a) => parse_alpha(a, value)?,
        None => 1.0,
    };

    Ok(Some(Rgba { rgb, alpha }))
}

fn parse_channel(part: &str, whole: &str) -> Result<i64> {
    let non_numeric = || {
        SitebotError::InvalidColorValue(format!(
            "non-numeric channel \"{}\" in \"{}\"",
            part, whole
        ))
    };
    let value = match part.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().map_err(|_| non_numeric())? * 255.0 / 100.0,
        None => part.parse::<f64>().map_err(|_| non_numeric())?,
    };
    if !value.is_finite() {
        return Err(non_numeric());
    }
    if !(0.0..=255.0).contains(&value) {
        return Err(SitebotError::InvalidColorValue(format!(
            "channel {} is outside 0-255 in \"{}\"",
            part, whole
        )));
    }
    Ok(value.round() as i64)
}

fn parse_alpha(part: &str, whole: &str) -> Result<f64> {
    let invalid = || {
        SitebotError::InvalidColorValue(format!("invalid alpha \"{}\" in \"{}\"", part, whole))
    };
    let alpha = match part.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().map_err(|_| invalid())? / 100.0,
        None => part.parse::<f64>().map_err(|_| invalid())?,
    };
    if !(0.0..=1.0).contains(&alpha) {
        return Err(invalid());
    }
    Ok(alpha)
}

/// Parse a basic CSS named color
pub fn parse_named_color(name: &str) -> Option<Rgb> {
    let (r, g, b) = match name {
        "white" => (255, 255, 255),
        "black" => (0, 0, 0),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "lime" => (0, 255, 0),
        "aqua" | "cyan" => (0, 255, 255),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "fuchsia" | "magenta" => (255, 0, 255),
        "purple" => (128, 0, 128),
        "orange" => (255, 165, 0),
        _ => return None,
    };
    Some(Rgb::new(r, g, b))
}

fn linearize(c: u8) -> f64 {
    let v = c as f64 / 255.0;
    if v <= LINEARIZE_KNEE {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x, in [0,1]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors, always within [1, 21]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

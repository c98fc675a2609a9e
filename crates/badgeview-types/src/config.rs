//! Badge configuration: raw attributes and resolved style parameters.
//!
//! [`BadgeAttrs`] is what a host reads from its markup or settings file.
//! Every field is optional; missing fields are filled from a theme when the
//! attributes are resolved into a [`BadgeStyle`].

use serde::Deserialize;

use crate::backend::Color;
use crate::error::{BadgeError, Result};

/// Raw badge attributes as supplied by the host.
///
/// ```toml
/// badge_string = "12"
/// badge_string_size = 14
/// badge_string_color = "#FFFFFF"
/// badge_oval_color = "#F44336"
/// badge_oval_padding = 6
/// badge_oval_height = 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BadgeAttrs {
    /// Initial badge text.
    pub badge_string: Option<String>,
    /// Text size in pixels.
    pub badge_string_size: Option<u16>,
    /// Text color as `#RRGGBB` or `#RRGGBBAA`.
    pub badge_string_color: Option<String>,
    /// Background shape color as `#RRGGBB` or `#RRGGBBAA`.
    pub badge_oval_color: Option<String>,
    /// Horizontal padding on each side of the text, in pixels.
    pub badge_oval_padding: Option<u32>,
    /// Fixed shape height in pixels.
    pub badge_oval_height: Option<u32>,
}

impl BadgeAttrs {
    /// Parse attributes from a TOML document.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse attributes from a JSON object.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse the text color attribute, if present.
    pub fn string_color(&self) -> Result<Option<Color>> {
        parse_color_attr("badge_string_color", self.badge_string_color.as_deref())
    }

    /// Parse the oval color attribute, if present.
    pub fn oval_color(&self) -> Result<Option<Color>> {
        parse_color_attr("badge_oval_color", self.badge_oval_color.as_deref())
    }
}

/// Resolved, immutable style parameters for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    /// Text size in pixels (> 0).
    pub text_size: u16,
    /// Text color.
    pub text_color: Color,
    /// Background shape color.
    pub oval_color: Color,
    /// Horizontal padding on each side of the text.
    pub padding: u32,
    /// Fixed shape height (> 0).
    pub height: u32,
}

impl BadgeStyle {
    /// Check the invariants the widget relies on.
    pub fn validate(&self) -> Result<()> {
        if self.text_size == 0 {
            log::warn!("Rejecting badge style: zero text size");
            return Err(BadgeError::Config("badge_string_size must be positive".into()));
        }
        if self.height == 0 {
            log::warn!("Rejecting badge style: zero oval height");
            return Err(BadgeError::Config("badge_oval_height must be positive".into()));
        }
        Ok(())
    }
}

fn parse_color_attr(name: &str, value: Option<&str>) -> Result<Option<Color>> {
    match value {
        None => Ok(None),
        Some(s) => match parse_hex_color(s) {
            Some(c) => Ok(Some(c)),
            None => {
                log::warn!("Rejecting badge attribute {name}: {s:?}");
                Err(BadgeError::Config(format!("{name}: invalid color {s:?}")))
            },
        },
    }
}

/// Parse "#RRGGBB" or "#RRGGBBAA" into a `Color`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if !s.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    match s.len() {
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

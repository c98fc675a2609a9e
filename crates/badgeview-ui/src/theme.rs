//! Default badge styling.
//!
//! Defaults are named constants collected into a [`BadgeTheme`] that the
//! host passes explicitly when building a badge from attributes.

use badgeview_types::backend::Color;
use badgeview_types::config::{BadgeAttrs, BadgeStyle};
use badgeview_types::error::Result;

/// Default text size in pixels.
pub const DEFAULT_TEXT_SIZE: u16 = 12;
/// Default text color.
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;
/// Default background shape color.
pub const DEFAULT_OVAL_COLOR: Color = Color::rgb(0xF4, 0x43, 0x36);
/// Default horizontal padding in pixels.
pub const DEFAULT_OVAL_PADDING: u32 = 5;
/// Default shape height in pixels.
pub const DEFAULT_OVAL_HEIGHT: u32 = 18;

/// Fallback values for any badge attribute the host leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeTheme {
    pub text_size: u16,
    pub text_color: Color,
    pub oval_color: Color,
    pub oval_padding: u32,
    pub oval_height: u32,
}

impl Default for BadgeTheme {
    fn default() -> Self {
        Self {
            text_size: DEFAULT_TEXT_SIZE,
            text_color: DEFAULT_TEXT_COLOR,
            oval_color: DEFAULT_OVAL_COLOR,
            oval_padding: DEFAULT_OVAL_PADDING,
            oval_height: DEFAULT_OVAL_HEIGHT,
        }
    }
}

impl BadgeTheme {
    /// The style used when no attribute overrides anything.
    pub fn style(&self) -> BadgeStyle {
        BadgeStyle {
            text_size: self.text_size,
            text_color: self.text_color,
            oval_color: self.oval_color,
            padding: self.oval_padding,
            height: self.oval_height,
        }
    }

    /// Merge `attrs` over this theme and validate the result.
    pub fn resolve(&self, attrs: &BadgeAttrs) -> Result<BadgeStyle> {
        let style = BadgeStyle {
            text_size: attrs.badge_string_size.unwrap_or(self.text_size),
            text_color: attrs.string_color()?.unwrap_or(self.text_color),
            oval_color: attrs.oval_color()?.unwrap_or(self.oval_color),
            padding: attrs.badge_oval_padding.unwrap_or(self.oval_padding),
            height: attrs.badge_oval_height.unwrap_or(self.oval_height),
        };
        style.validate()?;
        Ok(style)
    }
}

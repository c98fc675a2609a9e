//! Backend trait definitions.
//!
//! A host toolkit implements [`RenderBackend`] over whatever drawing surface
//! it owns. Widgets never call platform APIs directly: every fill and text
//! command goes through this trait.
//!
//! Only `fill_rect`, `draw_text` and `measure_text` are required. The shape
//! and text-layout methods have default implementations built on the core
//! methods, so a minimal backend works unchanged and a richer one overrides
//! them with native primitives.

use crate::error::Result;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// An axis-aligned rectangle in floating-point surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Return the rectangle shifted by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

/// Vertical font metrics, relative to the baseline.
///
/// Follows the usual raster-toolkit sign convention: `ascent` is negative
/// (above the baseline), `descent` is positive (below it).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyph (<= 0).
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyph (>= 0).
    pub descent: f32,
    /// Extra spacing recommended between lines.
    pub leading: f32,
}

impl FontMetrics {
    /// Height used to vertically center a single line of digits.
    ///
    /// `-ascent - leading - descent` tracks the visible height of numeric
    /// glyphs more closely than the full line box does.
    pub fn digit_height(&self) -> f32 {
        -self.ascent - self.leading - self.descent
    }
}

/// Drawing surface supplied by the host toolkit.
///
/// All coordinates are in surface pixels with the origin at the top-left.
/// Text is positioned by its baseline.
pub trait RenderBackend {
    // -----------------------------------------------------------------------
    // Core methods (required)
    // -----------------------------------------------------------------------

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: RectF, color: Color) -> Result<()>;

    /// Draw a single line of text with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: u16, color: Color)
    -> Result<()>;

    /// Measure the advance width of `text` at the given font size.
    fn measure_text(&self, text: &str, font_size: u16) -> f32;

    // -----------------------------------------------------------------------
    // Extended: shapes
    // -----------------------------------------------------------------------

    /// Fill a rectangle with rounded corners.
    ///
    /// `rx`/`ry` are the horizontal and vertical corner radii.
    fn fill_rounded_rect(&mut self, rect: RectF, _rx: f32, _ry: f32, color: Color) -> Result<()> {
        // Default: fall back to sharp-cornered fill_rect.
        self.fill_rect(rect, color)
    }

    /// Fill a circle centered at `(cx, cy)`.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) -> Result<()> {
        self.fill_rect(
            RectF::new(cx - radius, cy - radius, cx + radius, cy + radius),
            color,
        )
    }

    // -----------------------------------------------------------------------
    // Extended: text
    // -----------------------------------------------------------------------

    /// Vertical metrics for the font at the given size.
    fn font_metrics(&self, font_size: u16) -> FontMetrics {
        let size = font_size as f32;
        FontMetrics {
            ascent: -size * 0.8,
            descent: size * 0.2,
            leading: 0.0,
        }
    }

    /// Find the longest prefix of `text` whose measured width fits in
    /// `max_width`.
    ///
    /// Returns the prefix length in bytes (always on a char boundary) and its
    /// measured width. Prefixes are measured whole, so kerning-aware backends
    /// get an exact answer from the default.
    fn break_text(&self, text: &str, font_size: u16, max_width: f32) -> (usize, f32) {
        let mut end_byte = 0;
        let mut fitted_w = 0.0;
        for (i, ch) in text.char_indices() {
            let end = i + ch.len_utf8();
            let w = self.measure_text(&text[..end], font_size);
            if w > max_width {
                break;
            }
            end_byte = end;
            fitted_w = w;
        }
        (end_byte, fitted_w)
    }
}

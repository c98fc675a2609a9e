//! Badge widget: a short count string on a circle or pill background.
//!
//! The badge has a fixed height and grows horizontally with its text. While
//! the padded text fits inside a square of that height, the background is a
//! circle; past that it becomes a pill (a rounded rectangle whose corner
//! radius is half its height). Drawing starts at the top-left of the box the
//! parent assigns.

use crate::context::DrawContext;
use crate::layout;
use crate::theme::BadgeTheme;
use crate::widget::{ViewHost, Widget};
use badgeview_types::backend::{RectF, RenderBackend};
use badgeview_types::config::{BadgeAttrs, BadgeStyle};
use badgeview_types::error::Result;
use badgeview_types::measure::MeasureSpec;

/// Background shape chosen for a given text width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeShape {
    /// Circle with diameter equal to the badge height.
    Circle { cx: f32, cy: f32, radius: f32 },
    /// Rounded rectangle with fully rounded ends.
    Pill { rect: RectF, radius: f32 },
}

/// Geometry derived from the current text, relative to the badge origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeGeometry {
    /// Width the text occupies.
    pub text_width: f32,
    /// Background shape.
    pub shape: BadgeShape,
}

impl BadgeGeometry {
    /// Horizontal extent of the background shape.
    pub fn shape_width(&self) -> f32 {
        match self.shape {
            BadgeShape::Circle { radius, .. } => radius * 2.0,
            BadgeShape::Pill { rect, .. } => rect.width(),
        }
    }
}

/// A badge label sized to fit a short string.
///
/// Like every widget it belongs to the host's UI thread: mutation goes
/// through `&mut self` and there is no internal locking.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStringView {
    text: String,
    style: BadgeStyle,
}

impl Default for BadgeStringView {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeStringView {
    /// Create an empty badge with the default theme.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            style: BadgeTheme::default().style(),
        }
    }

    /// Create an empty badge with an explicit style.
    pub fn with_style(style: BadgeStyle) -> Result<Self> {
        style.validate()?;
        Ok(Self {
            text: String::new(),
            style,
        })
    }

    /// Create a badge from host attributes, falling back to `theme`.
    pub fn from_attrs(attrs: &BadgeAttrs, theme: &BadgeTheme) -> Result<Self> {
        let style = theme.resolve(attrs)?;
        log::debug!("Badge created: {style:?}");
        Ok(Self {
            text: attrs.badge_string.clone().unwrap_or_default(),
            style,
        })
    }

    /// Current badge text.
    pub fn badge_string(&self) -> &str {
        &self.text
    }

    /// Whether the badge has no text and therefore draws nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Resolved style parameters.
    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }

    /// Replace the badge text and ask `host` for a new layout and repaint.
    ///
    /// `None` clears the badge.
    pub fn set_badge_string(&mut self, text: Option<&str>, host: &mut dyn ViewHost) {
        self.text.clear();
        if let Some(t) = text {
            self.text.push_str(t);
        }
        host.request_layout();
        host.invalidate();
    }

    /// Compute the background shape for a text of `text_width` pixels.
    pub fn geometry(&self, text_width: f32) -> BadgeGeometry {
        let height = self.style.height as f32;
        let radius = height / 2.0;
        let padded = text_width + 2.0 * self.style.padding as f32;
        let shape = if padded <= height {
            BadgeShape::Circle {
                cx: radius,
                cy: radius,
                radius,
            }
        } else {
            BadgeShape::Pill {
                rect: RectF::new(0.0, 0.0, padded, height),
                radius,
            }
        };
        BadgeGeometry { text_width, shape }
    }

    fn text_width(&self, backend: &dyn RenderBackend) -> f32 {
        if self.text.is_empty() {
            0.0
        } else {
            backend.measure_text(&self.text, self.style.text_size)
        }
    }
}

impl Widget for BadgeStringView {
    fn measure(
        &self,
        ctx: &DrawContext<'_>,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> (u32, u32) {
        // Round up so a box of the measured width still holds every glyph.
        let desired_w = self.geometry(self.text_width(&*ctx.backend)).shape_width().ceil() as u32;
        let w = width.resolve(desired_w);
        let h = height.resolve(self.style.height);
        log::trace!("Badge measure {:?}: {width:?} x {height:?} -> {w}x{h}", self.text);
        (w, h)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: f32, y: f32, w: u32, _h: u32) -> Result<()> {
        if self.text.is_empty() {
            return Ok(());
        }
        let style = &self.style;

        // Never lay text out wider than the box leaves room for.
        let room = (w as f32 - 2.0 * style.padding as f32).max(0.0);
        let text_w = self.text_width(&*ctx.backend).min(room);
        let text_h = ctx.backend.font_metrics(style.text_size).digit_height();

        let geo = self.geometry(text_w);
        match geo.shape {
            BadgeShape::Circle { cx, cy, radius } => {
                ctx.backend
                    .fill_circle(x + cx, y + cy, radius, style.oval_color)?;
            },
            BadgeShape::Pill { rect, radius } => {
                ctx.backend
                    .fill_rounded_rect(rect.offset(x, y), radius, radius, style.oval_color)?;
            },
        }

        let (end, _) = ctx.backend.break_text(&self.text, style.text_size, geo.text_width);
        if end > 0 {
            let tx = x + layout::center(geo.shape_width(), geo.text_width);
            let ty = y + layout::center_baseline(style.height as f32, text_h);
            ctx.backend
                .draw_text(&self.text[..end], tx, ty, style.text_size, style.text_color)?;
        }
        log::trace!("Badge draw {:?} at ({x}, {y}) in {w}px: {:?}", self.text, geo.shape);
        Ok(())
    }
}

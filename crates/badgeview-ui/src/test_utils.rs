//! Shared test utilities for badgeview-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion and
//! a [`MockHost`] that counts invalidation requests.

use crate::widget::ViewHost;
use badgeview_types::backend::{Color, RectF, RenderBackend};
use badgeview_types::error::Result;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum DrawCall {
    FillRect {
        rect: RectF,
        color: Color,
    },
    FillRoundedRect {
        rect: RectF,
        rx: f32,
        ry: f32,
        color: Color,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
    DrawText {
        text: String,
        x: f32,
        y: f32,
        font_size: u16,
        color: Color,
    },
}

/// A mock backend that records all draw calls for test assertions.
///
/// Every char advances by a fixed `glyph_width`.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    pub glyph_width: f32,
}

impl MockBackend {
    pub fn with_glyph_width(glyph_width: f32) -> Self {
        Self {
            calls: Vec::new(),
            glyph_width,
        }
    }

    /// Count of `FillCircle` calls.
    pub fn fill_circle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { .. }))
            .count()
    }

    /// Count of `FillRoundedRect` calls.
    pub fn fill_rounded_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRoundedRect { .. }))
            .count()
    }

    /// Count of `DrawText` calls.
    pub fn draw_text_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawText { .. }))
            .count()
    }

    /// Return the first `DrawText` call as `(text, x, y)`.
    pub fn first_text(&self) -> Option<(&str, f32, f32)> {
        self.calls.iter().find_map(|c| {
            if let DrawCall::DrawText { text, x, y, .. } = c {
                Some((text.as_str(), *x, *y))
            } else {
                None
            }
        })
    }
}

impl RenderBackend for MockBackend {
    fn fill_rect(&mut self, rect: RectF, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { rect, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn measure_text(&self, text: &str, _font_size: u16) -> f32 {
        text.chars().count() as f32 * self.glyph_width
    }

    fn fill_rounded_rect(&mut self, rect: RectF, rx: f32, ry: f32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRoundedRect {
            rect,
            rx,
            ry,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
        Ok(())
    }
}

/// A host that counts layout and repaint requests.
#[derive(Debug, Default)]
pub struct MockHost {
    pub layout_requests: usize,
    pub invalidations: usize,
}

impl ViewHost for MockHost {
    fn request_layout(&mut self) {
        self.layout_requests += 1;
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}

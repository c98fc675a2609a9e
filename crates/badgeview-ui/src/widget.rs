//! Widget and host traits.

use crate::context::DrawContext;
use badgeview_types::error::Result;
use badgeview_types::measure::MeasureSpec;

/// A leaf element taking part in the host's measure -> layout -> draw cycle.
pub trait Widget {
    /// Report the size this widget wants under the parent's constraints.
    ///
    /// The result never exceeds an `AtMost` bound and always equals an
    /// `Exact` value on the corresponding axis.
    fn measure(&self, ctx: &DrawContext<'_>, width: MeasureSpec, height: MeasureSpec)
    -> (u32, u32);

    /// Paint the widget into the `w` x `h` box whose top-left is `(x, y)`.
    fn draw(&self, ctx: &mut DrawContext<'_>, x: f32, y: f32, w: u32, h: u32) -> Result<()>;
}

/// Scheduling callbacks a widget uses to tell its host it changed.
///
/// Batching and timing of the follow-up passes belong to the host.
pub trait ViewHost {
    /// Request a new measure and layout pass.
    fn request_layout(&mut self);

    /// Request a repaint.
    fn invalidate(&mut self);
}

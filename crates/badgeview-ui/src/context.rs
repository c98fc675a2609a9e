//! Drawing context handed to widgets during measure and draw passes.

use badgeview_types::backend::RenderBackend;

/// Bundles the backend for a single measure or draw pass.
pub struct DrawContext<'a> {
    /// The drawing surface supplied by the host.
    pub backend: &'a mut dyn RenderBackend,
}

impl<'a> DrawContext<'a> {
    /// Create a new drawing context.
    pub fn new(backend: &'a mut dyn RenderBackend) -> Self {
        Self { backend }
    }
}

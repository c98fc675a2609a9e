//! Layout helpers: centering within a box.

/// Offset that centers a child of `child_size` within `parent_size`.
///
/// Negative when the child overflows, so the overflow splits evenly.
pub fn center(parent_size: f32, child_size: f32) -> f32 {
    (parent_size - child_size) / 2.0
}

/// Baseline position that vertically centers a line of text.
///
/// `text_height` is the visible glyph height above the baseline, e.g.
/// `FontMetrics::digit_height`.
pub fn center_baseline(height: f32, text_height: f32) -> f32 {
    (height + text_height) / 2.0
}

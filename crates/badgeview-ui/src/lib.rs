//! badgeview-ui: the badge widget and the small toolkit surface it needs.
//!
//! All rendering goes through the `RenderBackend` trait and all scheduling
//! goes through `ViewHost`, so the widget carries no platform-specific code.

pub mod badge_string;
pub mod context;
pub mod layout;
pub mod theme;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use badge_string::BadgeStringView;
pub use context::DrawContext;
pub use theme::BadgeTheme;
pub use widget::{ViewHost, Widget};

pub mod geometry;
pub mod navigation;
pub mod text;

// Re-export key types for easier usage
pub use geometry::{BoundingRect, LayoutElement, StaticElement, resolve_bounding_rect};
pub use navigation::{NavigationError, QueryStringSource, decorate_navigation_url};
pub use text::WordRotation;

//! Gallery layout: pure geometry, no rendering.
//!
//! | Policy | Sizing rule | Gallery width |
//! |---|---|---|
//! | **Equal height** | fixed height, rows wider than the gallery shrink together | widest full row after correction |
//! | **Equal width** | fixed width, one correction for the whole grid | `columns × width` after correction |
//! | **Automatic** | capped at the column width, never upscaled | unchanged |
//!
//! The module is split into:
//! - **Parameters**: configuration, items, results and validation
//! - **Calculations**: [`compute_layout`] and the per-policy arithmetic

mod calculations;
mod params;

pub use calculations::{compute_layout, usable_width};
pub use params::{
    Border, GalleryConfig, GalleryItem, GridShape, ItemDimensions, LayoutError, LayoutResult,
    MediaKind, SizingMode,
};

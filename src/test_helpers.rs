//! Shared test utilities for the headless-gallery test suite.
//!
//! Builders for item lists and extractors that flatten layout results into
//! plain tuples, so assertions read as `vec![(width, height), ...]`.

use crate::layout::{GalleryItem, LayoutResult};

// =========================================================================
// Builders
// =========================================================================

/// Image items with ids `"1"`, `"2"`, ... and the given cropped dimensions.
pub fn images(dimensions: &[(u32, u32)]) -> Vec<GalleryItem> {
    dimensions
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| GalleryItem::image((i + 1).to_string(), w, h))
        .collect()
}

// =========================================================================
// Extractors
// =========================================================================

/// All item dimensions as `(width, height)` in layout order.
pub fn dims(layout: &LayoutResult) -> Vec<(u32, u32)> {
    layout.items.iter().map(|d| (d.width, d.height)).collect()
}

//! Gallery processing pipeline.
//!
//! The content-rendering hook: takes the site config and the gallery's media
//! items, computes the layout and renders every item into the frontend render
//! tree.
//!
//! ```text
//! SiteConfig + items
//!   → GalleryConfig     (grid shape, sizing policy)
//!   → LayoutResult      (per-item dimensions, corrected width)
//!   → GalleryData       (rows → columns → rendered files)
//! ```
//!
//! Layout and rendering failures stay distinguishable through
//! [`GalleryError`].

use crate::config::SiteConfig;
use crate::layout::{GalleryConfig, GalleryItem, LayoutError, LayoutResult, compute_layout};
use crate::render::{DerivativeRenderer, GalleryData, RenderError, RenderSettings, render_gallery};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Compute the layout of `items` under the site's layout settings.
pub fn plan_layout(
    config: &SiteConfig,
    items: &[GalleryItem],
) -> Result<(GalleryConfig, LayoutResult), GalleryError> {
    let count = u32::try_from(items.len())
        .map_err(|_| LayoutError::InvalidConfig(format!("too many items: {}", items.len())))?;
    let gallery = config.layout.gallery_config(count);
    let layout = compute_layout(&gallery, items)?;
    Ok((gallery, layout))
}

/// Lay out and render a gallery.
pub fn process(
    renderer: &impl DerivativeRenderer,
    config: &SiteConfig,
    items: &[GalleryItem],
) -> Result<GalleryData, GalleryError> {
    let (gallery, layout) = plan_layout(config, items)?;
    let settings = RenderSettings::from_render_config(&config.render);
    let data = render_gallery(renderer, &gallery, items, &layout, &settings)?;

    info!(
        items = items.len(),
        rows = gallery.grid.rows,
        columns = gallery.grid.columns,
        width = data.width,
        mode = gallery.sizing.name(),
        "processed gallery"
    );
    Ok(data)
}

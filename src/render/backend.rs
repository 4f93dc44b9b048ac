//! Derivative renderer trait and shared types.
//!
//! The [`DerivativeRenderer`] trait is the single seam between the gallery and
//! whatever actually produces resized media: the host framework's image
//! service, a CDN URL scheme, or the planning-only
//! [`TemplateRenderer`](super::template::TemplateRenderer).

use crate::layout::GalleryItem;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Rendering failed: {0}")]
    RenderFailed(String),
    #[error("Layout covers {dimensions} items but {items} were given")]
    LayoutMismatch { items: usize, dimensions: usize },
}

/// What to render: target size and optional output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Output file extension override (e.g. `"webp"`). `None` keeps the source format.
    pub file_extension: Option<String>,
}

/// A rendered derivative as delivered to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFile {
    pub public_url: String,
    /// Final width, which may differ from the requested one.
    pub width: u32,
    /// Final height, which may differ from the requested one.
    pub height: u32,
}

/// Trait for derivative rendering backends.
///
/// Implementations must report failures as errors rather than returning a
/// placeholder; the gallery propagates them unchanged. `Sync` because items
/// are rendered in parallel.
pub trait DerivativeRenderer: Sync {
    /// Render `item` at the requested size.
    fn render(
        &self,
        item: &GalleryItem,
        options: &RenderOptions,
    ) -> Result<RenderedFile, RenderError>;
}

//! High-level gallery rendering.
//!
//! These functions combine a computed layout with renderer calls. They take
//! the layout and render settings, compute per-format options, and assemble
//! the row/column render tree handed to the frontend.

use super::backend::{DerivativeRenderer, RenderError, RenderOptions, RenderedFile};
use crate::config::RenderConfig;
use crate::layout::{Border, GalleryConfig, GalleryItem, ItemDimensions, LayoutResult, MediaKind};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// An additional rendering of every image at a multiple of its primary size.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraFormat {
    /// Output key, e.g. `urlRetina`.
    pub key: String,
    pub factor: f64,
    pub file_extension: Option<String>,
}

/// Everything the renderer needs besides the layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSettings {
    /// Primary render format override.
    pub file_extension: Option<String>,
    pub extra_formats: Vec<ExtraFormat>,
}

impl RenderSettings {
    /// Build render settings from the (already normalised) render config.
    pub fn from_render_config(config: &RenderConfig) -> Self {
        Self {
            file_extension: config.file_extension.clone(),
            extra_formats: config
                .formats
                .iter()
                .map(|(key, format)| ExtraFormat {
                    key: key.clone(),
                    factor: format.factor,
                    file_extension: format.file_extension.clone(),
                })
                .collect(),
        }
    }
}

/// Field names of [`RenderedItem`]; extra format keys share its JSON object.
pub const RESERVED_FORMAT_KEYS: [&str; 4] = ["id", "kind", "dimensions", "file"];

/// One cell of the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedItem {
    pub id: String,
    pub kind: MediaKind,
    /// Target dimensions from the layout.
    pub dimensions: ItemDimensions,
    /// Primary rendering; absent for media that is not rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<RenderedFile>,
    /// Public URL per extra format key.
    #[serde(flatten)]
    pub formats: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryRow {
    pub columns: BTreeMap<u32, RenderedItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryCount {
    pub files: u32,
    pub columns: u32,
    pub rows: u32,
}

/// Render tree for the whole gallery. Rows and columns are keyed from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryData {
    pub rows: BTreeMap<u32, GalleryRow>,
    pub count: GalleryCount,
    /// Corrected gallery width.
    pub width: u32,
    pub column_spacing: f64,
    pub border: Border,
}

/// Plan the renderer call for one extra format.
///
/// Multiplies the primary rendering's final size by the format factor, but
/// never stretches beyond the item's own resolution.
pub fn plan_extra_format(
    item: &GalleryItem,
    primary: &RenderedFile,
    format: &ExtraFormat,
) -> RenderOptions {
    let width = (f64::from(primary.width) * format.factor).min(f64::from(item.width));
    let height = (f64::from(primary.height) * format.factor).min(f64::from(item.height));
    RenderOptions {
        width: width.floor().max(0.0) as u32,
        height: height.floor().max(0.0) as u32,
        file_extension: format.file_extension.clone(),
    }
}

/// Render one item at its layout size, then every extra format.
pub fn render_item(
    renderer: &impl DerivativeRenderer,
    item: &GalleryItem,
    dimensions: ItemDimensions,
    settings: &RenderSettings,
) -> Result<RenderedItem> {
    let mut rendered = RenderedItem {
        id: item.id.clone(),
        kind: item.kind,
        dimensions,
        file: None,
        formats: BTreeMap::new(),
    };
    if item.kind != MediaKind::Image {
        return Ok(rendered);
    }

    let primary = renderer.render(
        item,
        &RenderOptions {
            width: dimensions.width,
            height: dimensions.height,
            file_extension: settings.file_extension.clone(),
        },
    )?;

    for format in &settings.extra_formats {
        let options = plan_extra_format(item, &primary, format);
        let file = renderer.render(item, &options)?;
        rendered.formats.insert(format.key.clone(), file.public_url);
    }

    rendered.file = Some(primary);
    Ok(rendered)
}

/// Render every item of a laid-out gallery and assemble the render tree.
///
/// Items are rendered in parallel; the first renderer error aborts the whole
/// gallery and is returned unchanged.
pub fn render_gallery(
    renderer: &impl DerivativeRenderer,
    config: &GalleryConfig,
    items: &[GalleryItem],
    layout: &LayoutResult,
    settings: &RenderSettings,
) -> Result<GalleryData> {
    if items.len() != layout.items.len() {
        return Err(RenderError::LayoutMismatch {
            items: items.len(),
            dimensions: layout.items.len(),
        });
    }

    let rendered: Vec<RenderedItem> = items
        .par_iter()
        .zip(layout.items.par_iter())
        .map(|(item, &dimensions)| render_item(renderer, item, dimensions, settings))
        .collect::<Result<_>>()?;

    let grid = config.grid;
    let per_row = grid.columns.max(1) as usize;
    let mut rows: BTreeMap<u32, GalleryRow> = BTreeMap::new();
    for (index, item) in rendered.into_iter().enumerate() {
        let row = (index / per_row) as u32 + 1;
        let column = (index % per_row) as u32 + 1;
        rows.entry(row)
            .or_insert_with(|| GalleryRow {
                columns: BTreeMap::new(),
            })
            .columns
            .insert(column, item);
    }

    debug!(
        rows = rows.len(),
        items = items.len(),
        formats = settings.extra_formats.len(),
        "assembled gallery render tree"
    );

    Ok(GalleryData {
        rows,
        count: GalleryCount {
            files: grid.items,
            columns: grid.columns,
            rows: grid.rows,
        },
        width: layout.gallery_width,
        column_spacing: config.column_spacing,
        border: config.border,
    })
}

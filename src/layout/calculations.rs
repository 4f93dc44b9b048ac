//! Pure layout arithmetic.
//!
//! All functions here are pure and testable without a renderer.
//!
//! Every real-valued size is floored to whole pixels before it leaves this
//! module, so the renderer is never asked for sub-pixel derivatives.

use super::params::{
    GalleryConfig, GalleryItem, ItemDimensions, LayoutError, LayoutResult, SizingMode,
};
use tracing::debug;

/// Compute target dimensions for every item and the corrected gallery width.
///
/// Validates the configuration first; the arithmetic itself never fails and
/// never divides by zero (divisors are floored at 1).
///
/// # Examples
/// ```
/// # use headless_gallery::layout::{
/// #     Border, GalleryConfig, GalleryItem, GridShape, SizingMode, compute_layout,
/// # };
/// let items = vec![GalleryItem::image("a", 400, 200); 3];
/// let config = GalleryConfig {
///     grid: GridShape::for_items(3, 3),
///     gallery_width: 900.0,
///     column_spacing: 0.0,
///     border: Border::default(),
///     sizing: SizingMode::Automatic,
/// };
/// let layout = compute_layout(&config, &items).unwrap();
/// assert_eq!((layout.items[0].width, layout.items[0].height), (300, 150));
/// assert_eq!(layout.gallery_width, 900);
/// ```
pub fn compute_layout(
    config: &GalleryConfig,
    items: &[GalleryItem],
) -> Result<LayoutResult, LayoutError> {
    config.validate()?;
    if items.len() != config.grid.items as usize {
        return Err(LayoutError::InvalidConfig(format!(
            "grid expects {} items, got {}",
            config.grid.items,
            items.len()
        )));
    }

    let usable_width = usable_width(config);
    let result = match config.sizing {
        SizingMode::EqualHeight(height) => equal_height_layout(config, items, height, usable_width),
        SizingMode::EqualWidth(width) => equal_width_layout(config, items, width, usable_width),
        SizingMode::Automatic => automatic_layout(config, items, usable_width),
    };

    debug!(
        mode = config.sizing.name(),
        usable_width,
        correction = result.correction,
        gallery_width = result.gallery_width,
        items = result.items.len(),
        "computed gallery layout"
    );
    Ok(result)
}

/// Width left for items after column spacing and borders.
///
/// The clamp to 1 happens before the border subtraction only, so a border
/// wider than the gallery yields a zero or negative usable width.
pub fn usable_width(config: &GalleryConfig) -> f64 {
    let columns = f64::from(config.grid.columns);
    let spacing_total = (columns - 1.0) * config.column_spacing;
    let mut usable = (config.gallery_width - spacing_total).max(1.0);

    if config.border.enabled {
        let padding_total = (columns * 2.0) * config.border.padding;
        let border_total = (columns * 2.0) * config.border.width;
        usable = usable - padding_total - border_total;
    }
    usable
}

/// Floor to whole pixels, saturating at 0 (and at `u32::MAX`).
fn to_px(value: f64) -> u32 {
    value.floor().max(0.0) as u32
}

/// Divisor floor shared by every division in the layout.
fn at_least_one(value: f64) -> f64 {
    value.max(1.0)
}

fn equal_height_layout(
    config: &GalleryConfig,
    items: &[GalleryItem],
    fixed_height: f64,
    usable_width: f64,
) -> LayoutResult {
    let grid = &config.grid;
    let divisor = at_least_one(usable_width);
    let mut correction: f64 = 1.0;
    let mut max_row_width: f64 = 0.0;

    // Only fully scanned rows are tallied: the ragged last row stops the scan.
    'rows: for row in 1..=grid.rows {
        let mut row_width = 0.0;
        for column in 1..=grid.columns {
            let index = grid.index_of(row, column);
            if index >= items.len() {
                break 'rows;
            }
            let item = &items[index];
            let scaling = fixed_height / at_least_one(f64::from(item.height));
            row_width += f64::from(item.width) * scaling;
        }
        max_row_width = max_row_width.max(row_width);
        correction = correction.max(row_width / divisor);
    }

    let height = (fixed_height / correction).floor();
    let dimensions = items
        .iter()
        .map(|item| ItemDimensions {
            width: to_px(f64::from(item.width) * (height / at_least_one(f64::from(item.height)))),
            height: to_px(height),
        })
        .collect();

    LayoutResult {
        items: dimensions,
        gallery_width: to_px(max_row_width / correction),
        usable_width,
        correction,
    }
}

fn equal_width_layout(
    config: &GalleryConfig,
    items: &[GalleryItem],
    fixed_width: f64,
    usable_width: f64,
) -> LayoutResult {
    let row_width = f64::from(config.grid.columns) * fixed_width;
    let correction = (row_width / at_least_one(usable_width)).max(1.0);

    let width = (fixed_width / correction).floor();
    let dimensions = items
        .iter()
        .map(|item| ItemDimensions {
            width: to_px(width),
            height: to_px(f64::from(item.height) * (width / at_least_one(f64::from(item.width)))),
        })
        .collect();

    LayoutResult {
        items: dimensions,
        gallery_width: to_px(row_width / correction),
        usable_width,
        correction,
    }
}

fn automatic_layout(
    config: &GalleryConfig,
    items: &[GalleryItem],
    usable_width: f64,
) -> LayoutResult {
    // Truncation toward zero, so a negative usable width stays negative here.
    let max_item_width = (usable_width / f64::from(config.grid.columns)).trunc();

    let dimensions = items
        .iter()
        .map(|item| {
            let intrinsic = f64::from(item.width);
            let width = if item.width > 0 {
                max_item_width.min(intrinsic)
            } else {
                max_item_width
            };
            ItemDimensions {
                width: to_px(width),
                height: to_px(f64::from(item.height) * (width / at_least_one(intrinsic))),
            }
        })
        .collect();

    LayoutResult {
        items: dimensions,
        gallery_width: to_px(config.gallery_width),
        usable_width,
        correction: 1.0,
    }
}

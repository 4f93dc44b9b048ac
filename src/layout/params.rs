//! Input and output types for gallery layout.
//!
//! These structs describe *what* to lay out, not *how*. The arithmetic lives in
//! [`calculations`](super::calculations); this module only holds the value
//! types and the entry validation that rejects configurations the layout
//! cannot honour.
//!
//! ## Types
//!
//! - [`GridShape`]: rows × columns and the number of occupied cells.
//! - [`Border`]: optional per-item border width and padding.
//! - [`SizingMode`]: fixed height, fixed width, or automatic fit-to-cell.
//! - [`GalleryConfig`]: everything the layout needs besides the items.
//! - [`GalleryItem`]: one media element with its cropped intrinsic size.
//! - [`LayoutResult`]: per-item target dimensions plus the corrected width.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid gallery configuration: {0}")]
    InvalidConfig(String),
}

/// Grid occupied by the gallery.
///
/// Cells are addressed row-major; the last row may be ragged when `items`
/// is not a multiple of `columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: u32,
    pub columns: u32,
    /// Number of occupied cells.
    pub items: u32,
}

impl GridShape {
    /// Derive the grid for `item_count` items from a requested column count.
    ///
    /// Columns are clamped to `[1, item_count]` so a gallery never has empty
    /// columns in its first row, and rows are `ceil(items / columns)`.
    ///
    /// ```
    /// # use headless_gallery::layout::GridShape;
    /// let grid = GridShape::for_items(3, 4);
    /// assert_eq!((grid.rows, grid.columns, grid.items), (2, 3, 4));
    ///
    /// // Fewer items than requested columns
    /// let grid = GridShape::for_items(4, 2);
    /// assert_eq!((grid.rows, grid.columns), (1, 2));
    /// ```
    pub fn for_items(requested_columns: u32, item_count: u32) -> Self {
        let columns = requested_columns.min(item_count).max(1);
        let rows = item_count.div_ceil(columns).max(1);
        Self {
            rows,
            columns,
            items: item_count,
        }
    }

    /// Total number of cells, occupied or not.
    pub fn cells(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }

    /// Row-major index of a 1-based `(row, column)` cell.
    pub fn index_of(&self, row: u32, column: u32) -> usize {
        (row as usize - 1) * self.columns as usize + column as usize - 1
    }
}

/// Border drawn around every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Border {
    pub enabled: bool,
    pub width: f64,
    pub padding: f64,
}

/// Item sizing policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum SizingMode {
    /// Every item gets the same height; rows wider than the gallery shrink.
    EqualHeight(f64),
    /// Every item gets the same width; a row wider than the gallery shrinks.
    EqualWidth(f64),
    /// Items are capped at the column width, never upscaled.
    Automatic,
}

impl SizingMode {
    /// Pick the sizing mode from the optional height/width settings.
    ///
    /// A positive height takes precedence over a positive width; zero or
    /// absent values select neither.
    pub fn from_settings(equal_height: Option<f64>, equal_width: Option<f64>) -> Self {
        match (equal_height, equal_width) {
            (Some(h), _) if h > 0.0 => Self::EqualHeight(h),
            (_, Some(w)) if w > 0.0 => Self::EqualWidth(w),
            _ => Self::Automatic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EqualHeight(_) => "equal height",
            Self::EqualWidth(_) => "equal width",
            Self::Automatic => "automatic",
        }
    }
}

/// Layout configuration for one gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub grid: GridShape,
    /// Nominal width available to the whole grid.
    pub gallery_width: f64,
    /// Gap between adjacent columns.
    pub column_spacing: f64,
    pub border: Border,
    pub sizing: SizingMode,
}

impl GalleryConfig {
    /// Reject configurations the layout cannot process.
    ///
    /// Degenerate geometry (usable width at or below zero) is *not* an error;
    /// it is absorbed by the divisor guards in the calculation.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let grid = &self.grid;
        if grid.rows < 1 || grid.columns < 1 {
            return Err(LayoutError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                grid.rows, grid.columns
            )));
        }
        if u64::from(grid.items) > grid.cells() {
            return Err(LayoutError::InvalidConfig(format!(
                "{} items do not fit a {}x{} grid",
                grid.items, grid.rows, grid.columns
            )));
        }
        if !self.gallery_width.is_finite() || self.gallery_width <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "gallery width must be positive, got {}",
                self.gallery_width
            )));
        }
        non_negative("column spacing", self.column_spacing)?;
        non_negative("border width", self.border.width)?;
        non_negative("border padding", self.border.padding)?;
        match self.sizing {
            SizingMode::EqualHeight(v) | SizingMode::EqualWidth(v)
                if !v.is_finite() || v <= 0.0 =>
            {
                Err(LayoutError::InvalidConfig(format!(
                    "{} must be positive, got {v}",
                    self.sizing.name()
                )))
            }
            _ => Ok(()),
        }
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidConfig(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

/// Kind of media element. Only images go through derivative rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Other,
}

/// A media element placed in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Logical file identifier passed on to the renderer.
    pub id: String,
    /// Cropped width in pixels.
    pub width: u32,
    /// Cropped height in pixels.
    pub height: u32,
    #[serde(default)]
    pub kind: MediaKind,
}

impl GalleryItem {
    pub fn image(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            kind: MediaKind::Image,
        }
    }
}

/// Target size of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDimensions {
    pub width: u32,
    pub height: u32,
}

/// Output of [`compute_layout`](super::compute_layout).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    /// One entry per item, in input order.
    pub items: Vec<ItemDimensions>,
    /// Final rendered gallery width.
    pub gallery_width: u32,
    /// Width left after spacing and border subtraction. May be negative.
    pub usable_width: f64,
    /// Shrink factor applied to the items (always ≥ 1).
    pub correction: f64,
}

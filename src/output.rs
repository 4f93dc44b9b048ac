//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Layout
//!
//! ```text
//! Gallery 2x3 (4 items, equal height 100)
//!     Width: 600 → 350 (usable 580, correction 1.000)
//! Row 1
//!     001 1: 400x200 → 200x100
//!     002 2: 300x300 → 100x100
//!     003 3: 200x400 → 50x100
//! Row 2
//!     004 4: 800x200 → 400x100
//! ```
//!
//! ## Render
//!
//! ```text
//! Row 1
//!     001 1 → /media/_processed_/1_200x100.jpg
//!         urlRetina: /media/_processed_/1_400x200.jpg
//! ```
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::layout::{GalleryConfig, GalleryItem, LayoutResult, SizingMode};
use crate::render::GalleryData;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn sizing_label(sizing: SizingMode) -> String {
    match sizing {
        SizingMode::EqualHeight(h) => format!("equal height {h}"),
        SizingMode::EqualWidth(w) => format!("equal width {w}"),
        SizingMode::Automatic => "automatic".to_string(),
    }
}

/// Format a computed layout, one line per item grouped by row.
pub fn format_layout(
    config: &GalleryConfig,
    items: &[GalleryItem],
    layout: &LayoutResult,
) -> Vec<String> {
    let grid = config.grid;
    let mut lines = vec![
        format!(
            "Gallery {}x{} ({} items, {})",
            grid.rows,
            grid.columns,
            grid.items,
            sizing_label(config.sizing)
        ),
        format!(
            "{}Width: {} → {} (usable {}, correction {:.3})",
            indent(1),
            config.gallery_width,
            layout.gallery_width,
            layout.usable_width,
            layout.correction
        ),
    ];

    for row in 1..=grid.rows {
        let start = grid.index_of(row, 1);
        if start >= items.len() {
            break;
        }
        lines.push(format!("Row {row}"));
        let end = (start + grid.columns as usize).min(items.len());
        for index in start..end {
            let item = &items[index];
            let dims = layout.items[index];
            lines.push(format!(
                "{}{} {}: {}x{} → {}x{}",
                indent(1),
                format_index(index + 1),
                item.id,
                item.width,
                item.height,
                dims.width,
                dims.height
            ));
        }
    }
    lines
}

/// Format a render tree: primary URL per item, extra formats indented below.
pub fn format_render(data: &GalleryData) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pos = 0;
    for (row_number, row) in &data.rows {
        lines.push(format!("Row {row_number}"));
        for item in row.columns.values() {
            pos += 1;
            match &item.file {
                Some(file) => lines.push(format!(
                    "{}{} {} → {}",
                    indent(1),
                    format_index(pos),
                    item.id,
                    file.public_url
                )),
                None => lines.push(format!(
                    "{}{} {} (not rendered)",
                    indent(1),
                    format_index(pos),
                    item.id
                )),
            }
            for (key, url) in &item.formats {
                lines.push(format!("{}{key}: {url}", indent(2)));
            }
        }
    }
    lines
}

pub fn print_layout_output(config: &GalleryConfig, items: &[GalleryItem], layout: &LayoutResult) {
    for line in format_layout(config, items, layout) {
        println!("{}", line);
    }
}

pub fn print_render_output(data: &GalleryData) {
    for line in format_render(data) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Border, GridShape, MediaKind, compute_layout};
    use crate::render::backend::tests::MockRenderer;
    use crate::render::{ExtraFormat, RenderSettings, render_gallery};
    use crate::test_helpers::images;

    fn ragged_gallery() -> (GalleryConfig, Vec<GalleryItem>) {
        let config = GalleryConfig {
            grid: GridShape::for_items(3, 4),
            gallery_width: 600.0,
            column_spacing: 10.0,
            border: Border::default(),
            sizing: SizingMode::EqualHeight(100.0),
        };
        let items = images(&[(400, 200), (300, 300), (200, 400), (800, 200)]);
        (config, items)
    }

    #[test]
    fn format_layout_groups_rows() {
        let (config, items) = ragged_gallery();
        let layout = compute_layout(&config, &items).unwrap();
        let lines = format_layout(&config, &items, &layout);

        assert_eq!(
            lines,
            vec![
                "Gallery 2x3 (4 items, equal height 100)",
                "    Width: 600 → 350 (usable 580, correction 1.000)",
                "Row 1",
                "    001 1: 400x200 → 200x100",
                "    002 2: 300x300 → 100x100",
                "    003 3: 200x400 → 50x100",
                "Row 2",
                "    004 4: 800x200 → 400x100",
            ]
        );
    }

    #[test]
    fn format_layout_empty_gallery_has_header_only() {
        let config = GalleryConfig {
            grid: GridShape::for_items(2, 0),
            gallery_width: 600.0,
            column_spacing: 0.0,
            border: Border::default(),
            sizing: SizingMode::Automatic,
        };
        let layout = compute_layout(&config, &[]).unwrap();
        let lines = format_layout(&config, &[], &layout);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("automatic"));
    }

    #[test]
    fn format_render_lists_formats_under_item() {
        let (config, mut items) = ragged_gallery();
        items[3].kind = MediaKind::Other;
        let layout = compute_layout(&config, &items).unwrap();
        let settings = RenderSettings {
            file_extension: None,
            extra_formats: vec![ExtraFormat {
                key: "urlRetina".into(),
                factor: 2.0,
                file_extension: None,
            }],
        };
        let data =
            render_gallery(&MockRenderer::new(), &config, &items, &layout, &settings).unwrap();
        let lines = format_render(&data);

        assert_eq!(lines[0], "Row 1");
        assert_eq!(lines[1], "    001 1 → /processed/1_200x100.jpg");
        assert_eq!(lines[2], "        urlRetina: /processed/1_400x200.jpg");
        assert_eq!(lines.last().unwrap(), "    004 4 (not rendered)");
    }
}

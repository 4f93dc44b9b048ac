//! # Headless Gallery
//!
//! Gallery layout and frontend link routing for headless content delivery.
//! A CMS hands over media items with their cropped dimensions; this crate
//! decides how large every item is rendered in a row/column grid, asks a
//! derivative renderer for the resized files, and returns a JSON-ready render
//! tree. Links to pages are rewritten to the frontend host.
//!
//! # Pipeline
//!
//! ```text
//! 1. Layout    config + items  →  LayoutResult   (pure arithmetic)
//! 2. Render    LayoutResult    →  GalleryData    (renderer calls, parallel)
//! ```
//!
//! The layout stage is a pure function of its inputs, so it is unit tested
//! without any renderer. The render stage talks to the outside world only
//! through the [`render::DerivativeRenderer`] trait.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Grid shape, sizing policies, [`layout::compute_layout`] |
//! | [`render`] | Renderer trait, extra formats, render tree assembly |
//! | [`process`] | Config → layout → render tree in one call |
//! | [`config`] | Layered `gallery.toml` loading, validation, legacy option translation |
//! | [`routing`] | Frontend host/port rewriting for generated page links |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Three Sizing Policies
//!
//! A gallery sizes its items by a fixed height, a fixed width, or
//! automatically. The fixed policies share one correction factor so that no
//! row exceeds the usable width; the automatic policy caps every item at the
//! column width instead. All sizes are floored to whole pixels, so the
//! renderer never receives sub-pixel requests.
//!
//! ## Extra Formats Never Upscale
//!
//! Retina and placeholder renderings multiply the primary size by a factor
//! but are capped at the item's own resolution.
//!
//! ## Legacy Options at Load Time
//!
//! The older `autogenerate` switches are translated into explicit formats
//! while loading the config, so the rendering code sees only one shape.

pub mod config;
pub mod layout;
pub mod output;
pub mod process;
pub mod render;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

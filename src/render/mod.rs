//! Derivative rendering of laid-out galleries.
//!
//! | Step | Function |
//! |---|---|
//! | **Primary render** | layout dimensions + configured file extension |
//! | **Extra formats** | primary size × factor, capped at the item's resolution |
//! | **Render tree** | 1-based rows → columns, serialised for the frontend |
//!
//! The module is split into:
//! - **Backend**: [`DerivativeRenderer`] trait + shared types
//! - **Template**: [`TemplateRenderer`], a renderer that only plans URLs
//! - **Operations**: [`render_item`] and [`render_gallery`]

pub mod backend;
pub mod operations;
pub mod template;

pub use backend::{DerivativeRenderer, RenderError, RenderOptions, RenderedFile};
pub use operations::{
    ExtraFormat, GalleryCount, GalleryData, GalleryRow, RESERVED_FORMAT_KEYS, RenderSettings,
    RenderedItem, plan_extra_format, render_gallery, render_item,
};
pub use template::TemplateRenderer;

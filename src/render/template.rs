//! URL-template renderer.
//!
//! Plans derivative URLs without touching any file. The template may use
//! `{id}`, `{width}`, `{height}` and `{ext}` placeholders; the rendered size is
//! the requested size.

use super::backend::{DerivativeRenderer, RenderError, RenderOptions, RenderedFile};
use crate::layout::GalleryItem;

pub const DEFAULT_TEMPLATE: &str = "/media/_processed_/{id}_{width}x{height}.{ext}";

pub struct TemplateRenderer {
    template: String,
    default_extension: String,
}

impl TemplateRenderer {
    pub fn new(template: impl Into<String>, default_extension: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            default_extension: default_extension.into(),
        }
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, "jpg")
    }
}

impl DerivativeRenderer for TemplateRenderer {
    fn render(
        &self,
        item: &GalleryItem,
        options: &RenderOptions,
    ) -> Result<RenderedFile, RenderError> {
        if item.id.is_empty() {
            return Err(RenderError::RenderFailed(
                "item has no file identifier".to_string(),
            ));
        }
        let ext = options
            .file_extension
            .as_deref()
            .unwrap_or(&self.default_extension);
        let public_url = self
            .template
            .replace("{id}", &item.id)
            .replace("{width}", &options.width.to_string())
            .replace("{height}", &options.height.to_string())
            .replace("{ext}", ext);

        Ok(RenderedFile {
            public_url,
            width: options.width,
            height: options.height,
        })
    }
}

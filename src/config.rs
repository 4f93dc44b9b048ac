//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `gallery.toml` files. Configuration
//! is layered: stock defaults are overridden by each config file in order, so a
//! site-wide file can be refined by a per-page one.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [layout]
//! columns = 1               # Requested columns (clamped to the item count)
//! gallery_width = 600       # Width available to the whole grid, in pixels
//! column_spacing = 10       # Gap between columns, in pixels
//! # equal_media_height = 0  # Fixed item height (takes precedence)
//! # equal_media_width = 0   # Fixed item width
//!
//! [layout.border]
//! enabled = false
//! width = 2
//! padding = 0
//!
//! [render]
//! # file_extension = "webp" # Primary render format
//!
//! [render.formats.urlRetina]
//! factor = 2.0              # Extra rendering at twice the primary size
//!
//! [render.autogenerate]     # Legacy switches, translated into formats on load
//! retina2x = false
//! lqip = false
//!
//! [routing]
//! # frontend_base = "https://www.example.com:3000"
//!
//! [[routing.languages]]
//! id = 0
//! locale = "en_US.UTF-8"
//! base = "https://cms.example.com/"
//!
//! [processing]
//! # max_threads = 4         # Parallel render workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::layout::{Border, GalleryConfig, GridShape, SizingMode};
use crate::render::RESERVED_FORMAT_KEYS;
use crate::routing::SiteLanguage;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Factor of the legacy `retina2x` extra format.
pub const RETINA_RATIO: f64 = 2.0;
/// Factor of the legacy `lqip` (low quality image placeholder) extra format.
pub const LQIP_RATIO: f64 = 0.1;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `gallery.toml` files.
///
/// All fields have defaults; files only specify what they override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Grid geometry and sizing policy.
    pub layout: LayoutConfig,
    /// Derivative rendering settings.
    pub render: RenderConfig,
    /// Frontend host rewriting for generated links.
    pub routing: RoutingConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if layout.columns == 0 {
            return Err(ConfigError::Validation(
                "layout.columns must be at least 1".into(),
            ));
        }
        if !(layout.gallery_width.is_finite() && layout.gallery_width > 0.0) {
            return Err(ConfigError::Validation(
                "layout.gallery_width must be positive".into(),
            ));
        }
        for (field, value) in [
            ("layout.column_spacing", Some(layout.column_spacing)),
            ("layout.border.width", Some(layout.border.width)),
            ("layout.border.padding", Some(layout.border.padding)),
            ("layout.equal_media_height", layout.equal_media_height),
            ("layout.equal_media_width", layout.equal_media_width),
        ] {
            if let Some(v) = value
                && !(v.is_finite() && v >= 0.0)
            {
                return Err(ConfigError::Validation(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }
        for (key, format) in &self.render.formats {
            if RESERVED_FORMAT_KEYS.contains(&key.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "render.formats.{key}: key is reserved for the rendered item itself"
                )));
            }
            if !(format.factor.is_finite() && format.factor > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "render.formats.{key}.factor must be positive"
                )));
            }
        }
        self.routing.frontend_url()?;
        let mut ids = HashSet::new();
        for language in &self.routing.languages {
            if !ids.insert(language.id) {
                return Err(ConfigError::Validation(format!(
                    "routing.languages: duplicate language id {}",
                    language.id
                )));
            }
        }
        Ok(())
    }
}

/// Grid geometry and sizing policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Requested number of columns.
    pub columns: u32,
    /// Width available to the whole grid.
    pub gallery_width: f64,
    /// Gap between adjacent columns.
    pub column_spacing: f64,
    pub equal_media_height: Option<f64>,
    pub equal_media_width: Option<f64>,
    pub border: Border,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            gallery_width: 600.0,
            column_spacing: 10.0,
            equal_media_height: None,
            equal_media_width: None,
            border: Border {
                enabled: false,
                width: 2.0,
                padding: 0.0,
            },
        }
    }
}

impl LayoutConfig {
    /// Build the layout input for a gallery of `item_count` items.
    pub fn gallery_config(&self, item_count: u32) -> GalleryConfig {
        let height = self.equal_media_height.filter(|h| *h > 0.0);
        let width = self.equal_media_width.filter(|w| *w > 0.0);
        if height.is_some() && width.is_some() {
            warn!(
                "both equal_media_height and equal_media_width are set; using equal_media_height"
            );
        }
        GalleryConfig {
            grid: GridShape::for_items(self.columns, item_count),
            gallery_width: self.gallery_width,
            column_spacing: self.column_spacing,
            border: self.border,
            sizing: SizingMode::from_settings(height, width),
        }
    }
}

/// Derivative rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output format of the primary rendering; `None` keeps the source format.
    pub file_extension: Option<String>,
    /// Extra renderings per image, keyed by output key.
    pub formats: BTreeMap<String, FormatConfig>,
    /// Legacy switches; folded into `formats` by [`RenderConfig::normalize_legacy`].
    pub autogenerate: AutogenerateConfig,
}

impl RenderConfig {
    /// Translate legacy `autogenerate` switches into extra formats.
    ///
    /// A switched-on legacy flag replaces an explicit format with the same key.
    pub fn normalize_legacy(&mut self) {
        let legacy = std::mem::take(&mut self.autogenerate);
        for (enabled, key, factor) in [
            (legacy.retina2x, "urlRetina", RETINA_RATIO),
            (legacy.lqip, "urlLqip", LQIP_RATIO),
        ] {
            if !enabled {
                continue;
            }
            let format = FormatConfig {
                factor,
                file_extension: None,
            };
            if self.formats.insert(key.to_string(), format).is_some() {
                warn!(key, "legacy autogenerate flag replaces explicit format");
            }
        }
    }
}

/// One extra rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Multiplier applied to the primary rendering's size.
    #[serde(default = "default_factor")]
    pub factor: f64,
    /// Output format override for this rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
}

fn default_factor() -> f64 {
    1.0
}

/// Legacy extra-format switches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutogenerateConfig {
    /// Adds `urlRetina` at [`RETINA_RATIO`].
    pub retina2x: bool,
    /// Adds `urlLqip` at [`LQIP_RATIO`].
    pub lqip: bool,
}

/// Frontend link routing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    /// Base URL of the frontend; its host and port replace the CMS host in
    /// generated links. Empty or absent disables rewriting.
    pub frontend_base: Option<String>,
    /// Site languages. The first entry is the default language.
    pub languages: Vec<SiteLanguage>,
}

impl RoutingConfig {
    /// Parsed frontend base, or `None` when unset or empty.
    pub fn frontend_url(&self) -> Result<Option<Url>, ConfigError> {
        let Some(raw) = self.frontend_base.as_deref().filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let url = Url::parse(raw).map_err(|e| {
            ConfigError::Validation(format!("routing.frontend_base '{raw}' is not a URL: {e}"))
        })?;
        if url.host_str().is_none() {
            return Err(ConfigError::Validation(format!(
                "routing.frontend_base '{raw}' has no host"
            )));
        }
        Ok(Some(url))
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_threads: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_threads
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer that user files are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values, arrays included, replace base values entirely.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read one config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Merge overlays in order onto `base`, then deserialize, normalize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let mut config: SiteConfig = merged.try_into()?;
    config.render.normalize_legacy();
    config.validate()?;
    Ok(config)
}

/// Load config from the given files, later files overriding earlier ones.
///
/// With no files this is the validated stock configuration.
pub fn load_config(paths: &[PathBuf]) -> Result<SiteConfig, ConfigError> {
    let overlays = paths
        .iter()
        .map(|p| load_raw_config(p))
        .collect::<Result<Vec<_>, _>>()?;
    resolve_config(stock_defaults_value(), overlays)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Headless Gallery Configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Several files can be passed with repeated --config flags; later files
# override earlier ones key by key. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Requested number of columns. Clamped to the number of items.
columns = 1

# Width available to the whole gallery, in pixels.
gallery_width = 600

# Gap between adjacent columns, in pixels.
column_spacing = 10

# Sizing policy. A positive equal_media_height wins over equal_media_width;
# with neither set, items are capped at the column width.
# equal_media_height = 200
# equal_media_width = 300

[layout.border]
# Border width and padding are applied on both sides of every item.
enabled = false
width = 2
padding = 0

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[render]
# Output format of the primary rendering (omit to keep the source format).
# file_extension = "webp"

# Extra renderings, keyed by output key. Each is the primary size times
# `factor`, never larger than the source image.
# [render.formats.urlRetina]
# factor = 2.0
# file_extension = "webp"

# Legacy switches: retina2x adds urlRetina (factor 2), lqip adds urlLqip
# (factor 0.1). They replace explicit formats with the same key.
[render.autogenerate]
retina2x = false
lqip = false

# ---------------------------------------------------------------------------
# Routing
# ---------------------------------------------------------------------------
[routing]
# Frontend base URL. Its host and port replace the CMS host in generated
# page links. Omit to keep links on the CMS host.
# frontend_base = "https://www.example.com:3000"

# Site languages; the first entry is the default language.
# [[routing.languages]]
# id = 0
# locale = "en_US.UTF-8"
# base = "https://cms.example.com/"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_threads = 4
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(toml: &str) -> Result<SiteConfig, ConfigError> {
        resolve_config(stock_defaults_value(), [toml::from_str(toml)?])
    }

    #[test]
    fn default_config_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.layout.columns, 1);
        assert_eq!(config.layout.gallery_width, 600.0);
        assert_eq!(config.layout.column_spacing, 10.0);
        assert!(!config.layout.border.enabled);
        assert!(config.render.formats.is_empty());
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse(
            r#"
[layout]
columns = 3
equal_media_height = 200
"#,
        )
        .unwrap();
        assert_eq!(config.layout.columns, 3);
        assert_eq!(config.layout.equal_media_height, Some(200.0));
        // Defaults preserved
        assert_eq!(config.layout.gallery_width, 600.0);
        assert_eq!(config.layout.border.width, 2.0);
    }

    #[test]
    fn integer_values_accepted_for_float_fields() {
        let config = parse("[layout]\ngallery_width = 900\n").unwrap();
        assert_eq!(config.layout.gallery_width, 900.0);
    }

    // =========================================================================
    // Legacy autogenerate normalization
    // =========================================================================

    #[test]
    fn legacy_retina_becomes_format() {
        let config = parse("[render.autogenerate]\nretina2x = true\n").unwrap();
        assert_eq!(
            config.render.formats["urlRetina"],
            FormatConfig {
                factor: RETINA_RATIO,
                file_extension: None
            }
        );
        assert!(!config.render.formats.contains_key("urlLqip"));
        assert_eq!(config.render.autogenerate, AutogenerateConfig::default());
    }

    #[test]
    fn legacy_lqip_becomes_format() {
        let config = parse("[render.autogenerate]\nlqip = true\n").unwrap();
        assert_eq!(config.render.formats["urlLqip"].factor, LQIP_RATIO);
    }

    #[test]
    fn legacy_flag_replaces_explicit_format() {
        let config = parse(
            r#"
[render.formats.urlRetina]
factor = 3.0
file_extension = "webp"

[render.autogenerate]
retina2x = true
"#,
        )
        .unwrap();
        assert_eq!(config.render.formats["urlRetina"].factor, 2.0);
        assert_eq!(config.render.formats["urlRetina"].file_extension, None);
    }

    #[test]
    fn explicit_formats_kept_alongside_legacy() {
        let config = parse(
            r#"
[render.formats.urlWebp]
file_extension = "webp"

[render.autogenerate]
lqip = true
"#,
        )
        .unwrap();
        assert_eq!(config.render.formats.len(), 2);
        assert_eq!(config.render.formats["urlWebp"].factor, 1.0);
    }

    // =========================================================================
    // Layout conversion
    // =========================================================================

    #[test]
    fn gallery_config_derives_grid() {
        let config = parse("[layout]\ncolumns = 3\n").unwrap();
        let gallery = config.layout.gallery_config(4);
        assert_eq!(gallery.grid, GridShape::for_items(3, 4));
        assert_eq!(gallery.sizing, SizingMode::Automatic);
    }

    #[test]
    fn gallery_config_height_wins() {
        let config = parse("[layout]\nequal_media_height = 150\nequal_media_width = 300\n").unwrap();
        let gallery = config.layout.gallery_config(2);
        assert_eq!(gallery.sizing, SizingMode::EqualHeight(150.0));
    }

    #[test]
    fn gallery_config_zero_height_selects_width() {
        let config = parse("[layout]\nequal_media_height = 0\nequal_media_width = 300\n").unwrap();
        let gallery = config.layout.gallery_config(2);
        assert_eq!(gallery.sizing, SizingMode::EqualWidth(300.0));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_zero_columns() {
        let result = parse("[layout]\ncolumns = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation(msg)) if msg.contains("columns")));
    }

    #[test]
    fn validate_negative_spacing() {
        let result = parse("[layout]\ncolumn_spacing = -1\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_negative_border_padding() {
        let result = parse("[layout.border]\npadding = -2\n");
        assert!(matches!(result, Err(ConfigError::Validation(msg)) if msg.contains("padding")));
    }

    #[test]
    fn validate_zero_factor() {
        let result = parse("[render.formats.urlHalf]\nfactor = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation(msg)) if msg.contains("urlHalf")));
    }

    #[test]
    fn validate_rejects_format_keys_of_item_fields() {
        for key in ["id", "kind", "dimensions", "file"] {
            let result = parse(&format!("[render.formats.{key}]\nfactor = 2.0\n"));
            assert!(
                matches!(&result, Err(ConfigError::Validation(msg)) if msg.contains("reserved")),
                "{key}: {result:?}"
            );
        }
    }

    #[test]
    fn validate_accepts_format_key_prefixed_by_field_name() {
        let config = parse("[render.formats.fileRetina]\nfactor = 2.0\n").unwrap();
        assert!(config.render.formats.contains_key("fileRetina"));
    }

    #[test]
    fn validate_frontend_base_must_be_url() {
        let result = parse("[routing]\nfrontend_base = \"not a url\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_frontend_base_disables_rewriting() {
        let config = parse("[routing]\nfrontend_base = \"\"\n").unwrap();
        assert_eq!(config.routing.frontend_url().unwrap(), None);
    }

    #[test]
    fn validate_duplicate_language_ids() {
        let result = parse(
            r#"
[[routing.languages]]
id = 0
locale = "en_US"
base = "https://cms.test/"

[[routing.languages]]
id = 0
locale = "de_DE"
base = "https://cms.test/de/"
"#,
        );
        assert!(matches!(result, Err(ConfigError::Validation(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn unknown_key_rejected() {
        let result = parse("[layout]\ncolumnz = 3\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_section_rejected() {
        let result = parse("[thumbnails]\nsize = 3\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str("[layout]\ncolumns = 2\ngallery_width = 600\n").unwrap();
        let overlay: toml::Value = toml::from_str("[layout]\ncolumns = 4\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["layout"]["columns"].as_integer(), Some(4));
        assert_eq!(merged["layout"]["gallery_width"].as_integer(), Some(600));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("list = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("list = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["list"].as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_without_files_is_default() {
        let config = load_config(&[]).unwrap();
        assert_eq!(config.layout.gallery_width, 600.0);
    }

    #[test]
    fn load_config_later_files_override() {
        let tmp = TempDir::new().unwrap();
        let site = tmp.path().join("site.toml");
        let page = tmp.path().join("page.toml");
        fs::write(&site, "[layout]\ncolumns = 2\ngallery_width = 1200\n").unwrap();
        fs::write(&page, "[layout]\ncolumns = 4\n").unwrap();

        let config = load_config(&[site, page]).unwrap();
        assert_eq!(config.layout.columns, 4);
        assert_eq!(config.layout.gallery_width, 1200.0);
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(&[tmp.path().join("missing.toml")]);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        fs::write(&path, "[layout\ncolumns = ").unwrap();
        assert!(matches!(load_config(&[path]), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_reads_languages() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        fs::write(
            &path,
            r#"
[routing]
frontend_base = "https://www.example.com:3000"

[[routing.languages]]
id = 0
locale = "en_US.UTF-8"
base = "https://cms.example.com/"
"#,
        )
        .unwrap();

        let config = load_config(&[path]).unwrap();
        assert_eq!(config.routing.languages.len(), 1);
        let frontend = config.routing.frontend_url().unwrap().unwrap();
        assert_eq!(frontend.port(), Some(3000));
    }

    // =========================================================================
    // Stock config
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(stock_defaults_value(), [value]).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.layout.columns, defaults.layout.columns);
        assert_eq!(config.layout.gallery_width, defaults.layout.gallery_width);
        assert_eq!(config.layout.column_spacing, defaults.layout.column_spacing);
        assert_eq!(config.layout.border, defaults.layout.border);
        assert!(config.render.formats.is_empty());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let value = stock_defaults_value();
        let table = value.as_table().unwrap();
        for section in ["layout", "render", "routing", "processing"] {
            assert!(table.contains_key(section), "missing {section}");
        }
    }

    #[test]
    fn effective_threads_user_constrains_down() {
        let config = ProcessingConfig {
            max_threads: Some(1),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    #[test]
    fn effective_threads_zero_means_one() {
        let config = ProcessingConfig {
            max_threads: Some(0),
        };
        assert_eq!(effective_threads(&config), 1);
    }
}

//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content directory next to the optional `photos.toml` catalog; stock
//! defaults are overridden by whatever keys the user sets.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Cyber Knight"
//! catalog = "photos.toml"   # Photo catalog, relative to the content dir
//! assets_dir = "assets"     # Copied verbatim into the output root
//!
//! [gallery]
//! title = "Photo Gallery"
//! intro = "Explore moments from our journey - ..."   # Markdown
//! tag_preview = 2           # Tags shown on a card before "+N"
//!
//! [images]
//! placeholder = "https://images.pexels.com/photos/60504/..."
//! drive_templates = ["https://drive.google.com/uc?export=view&id={id}", ...]
//!
//! [[nav]]
//! title = "Photos"
//! href = "/"
//!
//! [colors.light]
//! background = "#f8fafc"
//! text = "#111827"
//! text_muted = "#6b7280"    # Dates, counts, captions
//! border = "#e5e7eb"
//! link = "#4f46e5"
//! link_hover = "#3730a3"
//!
//! [colors.dark]
//! background = "#111827"
//! text = "#f9fafb"
//! text_muted = "#9ca3af"
//! border = "#374151"
//! link = "#818cf8"
//! link_hover = "#c7d2fe"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [gallery]
//! tag_preview = 3
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::NavLink;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Club name shown in the header and page titles.
    pub site_title: String,
    /// Photo catalog file, relative to the content directory. When the file
    /// does not exist the compiled-in photos are used.
    pub catalog: String,
    /// Static assets directory, relative to the content directory.
    pub assets_dir: String,
    pub gallery: GalleryConfig,
    pub images: ImagesConfig,
    /// Header navigation links.
    pub nav: Vec<NavLink>,
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Cyber Knight".to_string(),
            catalog: "photos.toml".to_string(),
            assets_dir: "assets".to_string(),
            gallery: GalleryConfig::default(),
            images: ImagesConfig::default(),
            nav: vec![NavLink {
                title: "Photos".to_string(),
                href: "/".to_string(),
            }],
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_title must not be empty".into(),
            ));
        }
        if self.gallery.tag_preview == 0 {
            return Err(ConfigError::Validation(
                "gallery.tag_preview must be at least 1".into(),
            ));
        }
        if self.images.placeholder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "images.placeholder must not be empty".into(),
            ));
        }
        if let Some(t) = self
            .images
            .drive_templates
            .iter()
            .find(|t| !t.contains("{id}"))
        {
            return Err(ConfigError::Validation(format!(
                "images.drive_templates entry '{t}' has no {{id}} placeholder"
            )));
        }
        Ok(())
    }

    /// Absolute path of the catalog file for a content directory.
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.catalog)
    }
}

/// Gallery page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Heading of the photos page.
    pub title: String,
    /// Markdown shown under the heading.
    pub intro: String,
    /// Number of tags shown on a photo card; the rest collapse into `+N`.
    pub tag_preview: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Photo Gallery".to_string(),
            intro: "Explore moments from our journey - events, workshops, competitions, and team activities".to_string(),
            tag_preview: 2,
        }
    }
}

/// Image loading fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Last resort image before showing "Image unavailable".
    pub placeholder: String,
    /// Alternative endpoints for Google Drive links, tried in order.
    /// `{id}` is replaced with the Drive file id.
    pub drive_templates: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            placeholder: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            drive_templates: vec![
                "https://drive.google.com/uc?export=view&id={id}".to_string(),
                "https://drive.google.com/thumbnail?id={id}&sz=w800".to_string(),
                "https://lh3.googleusercontent.com/d/{id}".to_string(),
                "https://drive.google.com/file/d/{id}/preview".to_string(),
            ],
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Dates, result counts, captions.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f8fafc".to_string(),
            text: "#111827".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
            link: "#4f46e5".to_string(),
            link_hover: "#3730a3".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111827".to_string(),
            text: "#f9fafb".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#374151".to_string(),
            link: "#818cf8".to_string(),
            link_hover: "#c7d2fe".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Read `config.toml` from a directory as a raw TOML value, `None` if absent.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# knight-gal Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Club name, shown in the header and in page titles.
site_title = "Cyber Knight"

# Photo catalog ([[photos]] tables), relative to this directory.
# When the file is missing the built-in club photos are used.
catalog = "photos.toml"

# Directory copied verbatim into the output root (favicon, logo, ...).
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Photos page
# ---------------------------------------------------------------------------
[gallery]
title = "Photo Gallery"

# Markdown shown under the page title.
intro = "Explore moments from our journey - events, workshops, competitions, and team activities"

# Tags shown on each photo card; the rest are summarised as "+N".
tag_preview = 2

# ---------------------------------------------------------------------------
# Image fallbacks
# ---------------------------------------------------------------------------
[images]
# Shown when every alternative for a Google Drive link has failed.
placeholder = "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=800"

# Alternative endpoints for Google Drive links, tried in order.
# {id} is replaced with the Drive file id.
drive_templates = [
    "https://drive.google.com/uc?export=view&id={id}",
    "https://drive.google.com/thumbnail?id={id}&sz=w800",
    "https://lh3.googleusercontent.com/d/{id}",
    "https://drive.google.com/file/d/{id}/preview",
]

# ---------------------------------------------------------------------------
# Header navigation (replaces the whole list when set)
# ---------------------------------------------------------------------------
[[nav]]
title = "Photos"
href = "/"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f8fafc"
text = "#111827"
text_muted = "#6b7280"    # Dates, counts, captions
border = "#e5e7eb"
link = "#4f46e5"
link_hover = "#3730a3"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111827"
text = "#f9fafb"
text_muted = "#9ca3af"
border = "#374151"
link = "#818cf8"
link_hover = "#c7d2fe"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let vars = |s: &ColorScheme, pad: &str| {
        format!(
            "{pad}--color-bg: {};\n{pad}--color-text: {};\n{pad}--color-text-muted: {};\n\
             {pad}--color-border: {};\n{pad}--color-link: {};\n{pad}--color-link-hover: {};",
            s.background, s.text, s.text_muted, s.border, s.link, s.link_hover
        )
    };
    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}\n    }}\n}}",
        vars(&colors.light, "    "),
        vars(&colors.dark, "        "),
    )
}

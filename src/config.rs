//! Site configuration module.
//!
//! Handles loading, validating, and layering site settings. Configuration is
//! resolved from three layers, each overriding the one below it:
//!
//! ```text
//! stock defaults  →  content/config.toml  →  STARTASHTANGA_* environment variables
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"     # Copied verbatim to the output root
//!
//! [site]
//! name = "Start Ashtanga"
//! url = "https://startashtanga.com"
//! # analytics_script = "https://example.com/script.js"
//!
//! [contact]
//! email = "hello@startashtanga.com"
//! form_url = "https://forms.gle/a7FjzNYMpbRF8YyFA"
//!
//! [links]
//! github = "https://github.com/nataliarsand/startashtanga"
//! # donate = "https://www.paypal.com/donate/?hosted_button_id=..."
//!
//! [forms]
//! shala_submission = "https://forms.gle/c6iprH8YBpktKkYD7"
//!
//! [directory]
//! enabled = false           # false renders the "coming soon" page
//!
//! [tooltip]
//! width = 256.0             # Tooltip width in px
//! padding = 16.0            # Minimum distance from the viewport edge
//! flip_threshold = 120.0    # Space above the trigger below which it opens downwards
//! hide_delay_ms = 150       # Grace period before hiding on mouse leave
//! preview_chars = 150       # Definition length shown in the tooltip
//!
//! [map]
//! tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
//! attribution = "&copy; OpenStreetMap contributors"
//!
//! [i18n]
//! default_language = "en"
//! languages = [{ code = "en", name = "English", native_name = "English" }]
//!
//! [colors]
//! background = "#FFFFFF"
//! surface = "#F5EDDF"
//! ...
//! ```
//!
//! ## Environment Overrides
//!
//! The deployment-specific values can be set without touching `config.toml`:
//!
//! | Variable | Key |
//! |----------|-----|
//! | `STARTASHTANGA_CONTACT_EMAIL` | `contact.email` |
//! | `STARTASHTANGA_CONTACT_FORM_URL` | `contact.form_url` |
//! | `STARTASHTANGA_GITHUB_URL` | `links.github` |
//! | `STARTASHTANGA_SITE_URL` | `site.url` |
//!
//! Unknown keys in `config.toml` are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
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

/// Site configuration loaded from `config.toml` and the environment.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory under the content root copied verbatim to the output root.
    pub assets_dir: String,
    pub site: SiteSection,
    pub contact: ContactConfig,
    pub links: LinksConfig,
    pub forms: FormsConfig,
    pub directory: DirectoryConfig,
    pub tooltip: TooltipConfig,
    pub map: MapConfig,
    pub i18n: I18nConfig,
    pub colors: Palette,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            site: SiteSection::default(),
            contact: ContactConfig::default(),
            links: LinksConfig::default(),
            forms: FormsConfig::default(),
            directory: DirectoryConfig::default(),
            tooltip: TooltipConfig::default(),
            map: MapConfig::default(),
            i18n: I18nConfig::default(),
            colors: Palette::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, url) in [
            ("site.url", &self.site.url),
            ("contact.form_url", &self.contact.form_url),
            ("links.github", &self.links.github),
            ("forms.shala_submission", &self.forms.shala_submission),
        ] {
            if !is_http_url(url) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if !self.contact.email.contains('@') {
            return Err(ConfigError::Validation(
                "contact.email must be an email address".into(),
            ));
        }
        if self.tooltip.width <= 0.0 {
            return Err(ConfigError::Validation(
                "tooltip.width must be positive".into(),
            ));
        }
        if self.tooltip.padding < 0.0 || self.tooltip.flip_threshold < 0.0 {
            return Err(ConfigError::Validation(
                "tooltip.padding and tooltip.flip_threshold must not be negative".into(),
            ));
        }
        if self.i18n.languages.is_empty() {
            return Err(ConfigError::Validation(
                "i18n.languages must not be empty".into(),
            ));
        }
        if self.i18n.language(&self.i18n.default_language).is_none() {
            return Err(ConfigError::Validation(format!(
                "i18n.default_language {:?} is not listed in i18n.languages",
                self.i18n.default_language
            )));
        }
        Ok(())
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("https://") || s.starts_with("http://")
}

/// Identity of the published site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Site name, used as the title suffix and `og:site_name`.
    pub name: String,
    /// Public base URL, used for canonical links and the sitemap. No trailing slash.
    pub url: String,
    /// Optional analytics script URL, injected as a deferred `<script>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_script: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Start Ashtanga".to_string(),
            url: "https://startashtanga.com".to_string(),
            analytics_script: None,
        }
    }
}

impl SiteSection {
    /// Absolute URL for a site path such as `/glossary`.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    /// External hosted contact form.
    pub form_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@startashtanga.com".to_string(),
            form_url: "https://forms.gle/a7FjzNYMpbRF8YyFA".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    pub github: String,
    /// Donation link. The donate button is hidden while this is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donate: Option<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            github: "https://github.com/nataliarsand/startashtanga".to_string(),
            donate: None,
        }
    }
}

impl LinksConfig {
    /// Link to the contributor guide inside the repository.
    pub fn contributing_guide(&self) -> String {
        format!("{}/blob/main/CONTRIBUTING.md", self.github.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormsConfig {
    /// External form for submitting a shala to the directory.
    pub shala_submission: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            shala_submission: "https://forms.gle/c6iprH8YBpktKkYD7".to_string(),
        }
    }
}

/// Shala directory settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryConfig {
    /// When false the directory route renders a "coming soon" page instead
    /// of the searchable list and map.
    pub enabled: bool,
}

/// Glossary tooltip geometry and timing.
///
/// The same values drive [`crate::tooltip::place`] and are handed to the
/// browser script through data attributes, so both sides agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipConfig {
    pub width: f64,
    pub padding: f64,
    pub flip_threshold: f64,
    pub hide_delay_ms: u64,
    pub preview_chars: usize,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 256.0,
            padding: 16.0,
            flip_threshold: 120.0,
            hide_delay_ms: 150,
            preview_chars: 150,
        }
    }
}

/// Map tile provider used by the shala directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Tile URL template in Leaflet syntax.
    pub tile_url: String,
    /// Attribution HTML required by the tile provider.
    pub attribution: String,
    pub leaflet_css: String,
    pub leaflet_js: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            leaflet_css: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".to_string(),
            leaflet_js: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js".to_string(),
        }
    }
}

/// A language the site is published in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    /// BCP 47 code, also the locale directory name (`locales/<code>/`).
    pub code: String,
    /// English name.
    pub name: String,
    /// Name in the language itself, shown in the language switcher.
    pub native_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    /// Language published at the site root and used as the lookup fallback.
    pub default_language: String,
    pub languages: Vec<LanguageConfig>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            languages: vec![LanguageConfig {
                code: "en".to_string(),
                name: "English".to_string(),
                native_name: "English".to_string(),
            }],
        }
    }
}

impl I18nConfig {
    pub fn language(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// URL prefix for a language: empty for the default, `/<code>` otherwise.
    pub fn path_prefix(&self, code: &str) -> String {
        if code == self.default_language {
            String::new()
        } else {
            format!("/{code}")
        }
    }
}

/// Colour palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub background: String,
    /// Cream surface behind heroes and cards.
    pub surface: String,
    pub surface_alt: String,
    pub border: String,
    pub heading: String,
    pub body: String,
    /// Muted text: counts, captions, footers.
    pub subtle: String,
    pub accent: String,
    pub info: String,
    /// Dark background of the tooltip bubble.
    pub emphasis: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            surface: "#F5EDDF".to_string(),
            surface_alt: "#EFE4D2".to_string(),
            border: "#DCC8AF".to_string(),
            heading: "#4F3130".to_string(),
            body: "#753742".to_string(),
            subtle: "#967369".to_string(),
            accent: "#AA5042".to_string(),
            info: "#4A6C6F".to_string(),
            emphasis: "#4F3130".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Environment variables recognised as overrides, with the dotted config key
/// each one sets.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("STARTASHTANGA_CONTACT_EMAIL", "contact.email"),
    ("STARTASHTANGA_CONTACT_FORM_URL", "contact.form_url"),
    ("STARTASHTANGA_GITHUB_URL", "links.github"),
    ("STARTASHTANGA_SITE_URL", "site.url"),
];

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Build a TOML overlay from environment variables.
///
/// Takes the variables as an iterator so callers (and tests) decide where
/// they come from. Empty values are ignored, matching an unset variable.
/// Returns `None` when no recognised variable is present.
pub fn env_overlay<I>(vars: I) -> Option<toml::Value>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut root = toml::map::Map::new();
    for (name, value) in vars {
        if value.trim().is_empty() {
            continue;
        }
        let Some((_, key)) = ENV_OVERRIDES.iter().find(|(var, _)| *var == name) else {
            continue;
        };
        let Some((section, field)) = key.split_once('.') else {
            continue;
        };
        let table = root
            .entry(section.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
        if let toml::Value::Table(table) = table {
            table.insert(field.to_string(), toml::Value::String(value));
        }
    }
    if root.is_empty() {
        None
    } else {
        Some(toml::Value::Table(root))
    }
}

/// Merge optional overlays onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = Option<toml::Value>>,
) -> Result<SiteConfig, ConfigError> {
    let merged = overlays
        .into_iter()
        .flatten()
        .fold(base, merge_toml);
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, then apply the
/// process environment.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    load_config_with_env(root, std::env::vars())
}

/// Load config from `config.toml` in the given directory with an explicit
/// set of environment variables.
pub fn load_config_with_env<I>(root: &Path, vars: I) -> Result<SiteConfig, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let base = stock_defaults_value()?;
    let file = load_raw_config(root)?;
    resolve_config(base, [file, env_overlay(vars)])
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Start Ashtanga Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Deployment-specific values may also be set through the environment:
#   STARTASHTANGA_CONTACT_EMAIL     -> contact.email
#   STARTASHTANGA_CONTACT_FORM_URL  -> contact.form_url
#   STARTASHTANGA_GITHUB_URL        -> links.github
#   STARTASHTANGA_SITE_URL          -> site.url
# Environment values win over this file.
#
# Unknown keys will cause an error.

# Directory under the content root copied verbatim to the output root.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
name = "Start Ashtanga"
# Public base URL, used for canonical links and sitemap.xml.
url = "https://startashtanga.com"
# Optional analytics script, injected with `defer`.
# analytics_script = "https://example.com/script.js"

# ---------------------------------------------------------------------------
# Contact and links
# ---------------------------------------------------------------------------
[contact]
email = "hello@startashtanga.com"
form_url = "https://forms.gle/a7FjzNYMpbRF8YyFA"

[links]
github = "https://github.com/nataliarsand/startashtanga"
# The donate button stays hidden until this is set.
# donate = "https://www.paypal.com/donate/?hosted_button_id=XXXX"

[forms]
shala_submission = "https://forms.gle/c6iprH8YBpktKkYD7"

# ---------------------------------------------------------------------------
# Shala directory
# ---------------------------------------------------------------------------
[directory]
# false renders a "coming soon" page with the submission form instead.
enabled = false

# ---------------------------------------------------------------------------
# Glossary tooltips
# ---------------------------------------------------------------------------
[tooltip]
# Tooltip width in px.
width = 256.0
# Minimum distance kept from the left/right viewport edge, in px.
padding = 16.0
# When the trigger is closer than this to the top of the viewport the
# tooltip opens below it instead of above.
flip_threshold = 120.0
# Delay before hiding after the pointer leaves, in milliseconds.
hide_delay_ms = 150
# Definition length shown inside the tooltip before truncating with "...".
preview_chars = 150

# ---------------------------------------------------------------------------
# Map
# ---------------------------------------------------------------------------
[map]
tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
attribution = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
leaflet_css = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
leaflet_js = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"

# ---------------------------------------------------------------------------
# Languages
# ---------------------------------------------------------------------------
[i18n]
# Published at the site root; other languages go under /<code>/.
default_language = "en"
languages = [
    { code = "en", name = "English", native_name = "English" },
]

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#FFFFFF"
surface = "#F5EDDF"
surface_alt = "#EFE4D2"
border = "#DCC8AF"
heading = "#4F3130"
body = "#753742"
subtle = "#967369"
accent = "#AA5042"
info = "#4A6C6F"
emphasis = "#4F3130"
"##
}

/// Generate CSS custom properties from the colour palette.
pub fn generate_color_css(colors: &Palette) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-surface-alt: {surface_alt};
    --color-border: {border};
    --color-heading: {heading};
    --color-body: {body};
    --color-subtle: {subtle};
    --color-accent: {accent};
    --color-info: {info};
    --color-emphasis: {emphasis};
}}"#,
        background = colors.background,
        surface = colors.surface,
        surface_alt = colors.surface_alt,
        border = colors.border,
        heading = colors.heading,
        body = colors.body,
        subtle = colors.subtle,
        accent = colors.accent,
        info = colors.info,
        emphasis = colors.emphasis,
    )
}

/// Generate CSS custom properties for the tooltip geometry.
pub fn generate_tooltip_css(tooltip: &TooltipConfig) -> String {
    format!(
        r#":root {{
    --tooltip-width: {width}px;
}}"#,
        width = tooltip.width,
    )
}

//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and writes the
//! finished static site.
//!
//! ## Generated Files
//!
//! - **Pages**: one `index.html` per [`Route`], for every language
//! - **Not-found page** (`/404.html`): served by static hosts for unknown URLs
//! - **Stylesheet** (`/style.<hash>.css`): palette variables + base styles
//! - **Script** (`/site.<hash>.js`): tooltips, filters, menu, map
//! - **`sitemap.xml`** and **`robots.txt`**
//! - Everything under `content/<assets_dir>/`, copied verbatim
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── getting-started/index.html
//! ├── glossary/index.html
//! ├── ...
//! ├── pt-BR/                     # non-default languages
//! │   ├── index.html
//! │   └── glossary/index.html
//! ├── style.3f9a1c2b7d.css
//! ├── site.8e02d4a61f.js
//! ├── sitemap.xml
//! ├── robots.txt
//! └── favicon.svg                # from content/assets/
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/site.js`: Client-side behaviour
//!
//! Both are written under a content-hash file name so they can be cached
//! indefinitely.

use crate::components::{AssetLinks, PageContext};
use crate::config;
use crate::i18n::{I18nError, Translator};
use crate::pages;
use crate::routes::{Route, localized_path};
use crate::scan::Manifest;
use crate::types::GlossaryTerm;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Translation error: {0}")]
    I18n(#[from] I18nError),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Manifest has no bundle for the default language {0:?}")]
    MissingDefaultLanguage(String),
}

/// What a generate run wrote, for the CLI report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateReport {
    /// Page files relative to the output directory, in write order.
    pub pages: Vec<PathBuf>,
    pub css: String,
    pub js: String,
    pub assets: usize,
    pub languages: Vec<String>,
    pub sitemap_urls: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Read the manifest written by the scan stage and generate the site.
pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, source_dir, output_dir)
}

pub fn generate_site(
    manifest: &Manifest,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let config = &manifest.config;
    let default_language = config.i18n.default_language.as_str();
    if manifest.default_bundle().is_none() {
        return Err(GenerateError::MissingDefaultLanguage(default_language.to_string()));
    }

    fs::create_dir_all(output_dir)?;
    let mut report = GenerateReport::default();

    // Generate CSS with colors and tooltip geometry from config
    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_tooltip_css(&config.tooltip),
        CSS_STATIC
    );
    report.css = write_fingerprinted(output_dir, "style", "css", &css)?;
    report.js = write_fingerprinted(output_dir, "site", "js", JS)?;
    let assets = AssetLinks {
        css: format!("/{}", report.css),
        js: format!("/{}", report.js),
    };

    for bundle in &manifest.bundles {
        let code = bundle.language.as_str();
        let Some(t) = manifest.translator(code) else {
            continue;
        };
        let terms: Vec<GlossaryTerm> = t.objects_or_default("glossary", "terms")?;
        let lang_dir = match config.i18n.path_prefix(code).trim_start_matches('/') {
            "" => PathBuf::new(),
            prefix => PathBuf::from(prefix),
        };

        for route in Route::ALL {
            // One not-found page at the root serves every language.
            if route == Route::NotFound && code != default_language {
                continue;
            }
            let relative = lang_dir.join(route.output_file());
            write_page(output_dir, &relative, route, manifest, t, &terms, &assets)?;
            report.pages.push(relative);
        }
        tracing::debug!(language = code, "language generated");
        report.languages.push(code.to_string());
    }

    let sitemap = render_sitemap(manifest);
    report.sitemap_urls = sitemap.matches("<url>").count();
    fs::write(output_dir.join("sitemap.xml"), sitemap)?;
    fs::write(output_dir.join("robots.txt"), render_robots(&config.site.url))?;

    let assets_dir = source_dir.join(&config.assets_dir);
    if assets_dir.is_dir() {
        report.assets = copy_assets(&assets_dir, output_dir)?;
    } else {
        tracing::debug!(path = %assets_dir.display(), "no assets directory");
    }

    Ok(report)
}

fn write_page(
    output_dir: &Path,
    relative: &Path,
    route: Route,
    manifest: &Manifest,
    t: Translator<'_>,
    terms: &[GlossaryTerm],
    assets: &AssetLinks,
) -> Result<(), GenerateError> {
    let ctx = PageContext::new(&manifest.config, t, terms, route);
    let html = pages::render_page(&ctx, assets)?;
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html.into_string())?;
    Ok(())
}

/// First ten hex digits of the SHA-256 of `content`.
pub fn fingerprint(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(10);
    hex
}

fn write_fingerprinted(
    output_dir: &Path,
    stem: &str,
    ext: &str,
    content: &str,
) -> Result<String, GenerateError> {
    let name = format!("{stem}.{}.{ext}", fingerprint(content));
    fs::write(output_dir.join(&name), content)?;
    Ok(name)
}

/// Copy the assets tree into the output root. Returns the number of files.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Sitemap and robots
// ============================================================================

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Every indexable route in every generated language.
pub fn render_sitemap(manifest: &Manifest) -> String {
    let site = &manifest.config.site;
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for bundle in &manifest.bundles {
        let prefix = manifest.config.i18n.path_prefix(&bundle.language);
        for route in Route::ALL.into_iter().filter(|r| r.indexable()) {
            let loc = site.absolute_url(&localized_path(&prefix, route));
            xml.push_str(&format!("  <url>\n    <loc>{}</loc>\n  </url>\n", xml_escape(&loc)));
        }
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

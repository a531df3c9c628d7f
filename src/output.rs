//! CLI output formatting for the pipeline stages and query commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity
//! (language, page, term, shala) is shown by its identity first, with files
//! and details as indented context lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Languages
//! 001 English (en) default
//!     Source: locales/en/
//!     Namespaces: 10
//!
//! Content
//!     Glossary: 29 terms
//!     Shala directory: 4 shalas (disabled)
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! en
//!     Home → index.html
//!     Glossary → glossary/index.html
//!     ...
//!
//! Assets
//!     style.3f9a1c2b7d.css
//!     site.8e02d4a61f.js
//!     2 files copied
//!
//! Generated 8 pages in 1 language, sitemap with 7 URLs
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::GenerateReport;
use crate::geo;
use crate::glossary;
use crate::i18n::{NAMESPACES, Translator};
use crate::routes::Route;
use crate::scan::Manifest;
use crate::types::{GlossaryTerm, ShalaData};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, one: &str, other: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {other}")
    }
}

/// Human name of a route.
pub fn route_label(route: Route) -> &'static str {
    match route {
        Route::Home => "Home",
        Route::GettingStarted => "Getting Started",
        Route::PrimarySeries => "Primary Series",
        Route::Glossary => "Glossary",
        Route::About => "About",
        Route::Contribute => "Contribute",
        Route::ShalaDirectory => "Shala Directory",
        Route::NotFound => "Not Found",
    }
}

// ============================================================================
// Scan output
// ============================================================================

pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let config = &manifest.config;
    let mut lines = vec!["Languages".to_string()];

    for (i, bundle) in manifest.bundles.iter().enumerate() {
        let name = config
            .i18n
            .language(&bundle.language)
            .map(|l| l.name.as_str())
            .unwrap_or(bundle.language.as_str());
        let default = if bundle.language == config.i18n.default_language {
            " default"
        } else {
            ""
        };
        lines.push(format!(
            "{} {} ({}){}",
            format_index(i + 1),
            name,
            bundle.language,
            default
        ));
        lines.push(format!("{}Source: locales/{}/", indent(1), bundle.language));
        lines.push(format!(
            "{}Namespaces: {}/{}",
            indent(1),
            bundle.namespaces.len(),
            NAMESPACES.len()
        ));
    }

    if let Some(t) = manifest.translator(&config.i18n.default_language) {
        let terms: Vec<GlossaryTerm> = t.objects_or_default("glossary", "terms").unwrap_or_default();
        let shalas: Vec<ShalaData> = t.objects_or_default("shalas", "shalas").unwrap_or_default();
        let state = if config.directory.enabled {
            "enabled"
        } else {
            "disabled"
        };
        lines.push(String::new());
        lines.push("Content".to_string());
        lines.push(format!(
            "{}Glossary: {}",
            indent(1),
            plural(terms.len(), "term", "terms")
        ));
        lines.push(format!(
            "{}Shala directory: {} ({state})",
            indent(1),
            plural(shalas.len(), "shala", "shalas")
        ));
    }

    let mut config_lines = Vec::new();
    if source_root.join("config.toml").exists() {
        config_lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(&config.assets_dir).is_dir() {
        config_lines.push(format!("{}{}/", indent(1), config.assets_dir));
    }
    if !config_lines.is_empty() {
        lines.push(String::new());
        lines.push("Config".to_string());
        lines.extend(config_lines);
    }

    lines
}

pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_group: Option<String> = None;

    for page in &report.pages {
        let group = match page.components().next() {
            Some(first) if page.components().count() > 1 && is_language_dir(report, first) => {
                first.as_os_str().to_string_lossy().into_owned()
            }
            _ => report.languages.first().cloned().unwrap_or_default(),
        };
        if current_group.as_deref() != Some(group.as_str()) {
            if current_group.is_some() {
                lines.push(String::new());
            }
            lines.push(group.clone());
            current_group = Some(group.clone());
        }
        let relative = page.to_string_lossy().replace('\\', "/");
        let without_lang = relative
            .strip_prefix(&format!("{group}/"))
            .unwrap_or(&relative);
        let label = route_label(Route::resolve(&format!("/{without_lang}")));
        lines.push(format!("{}{} → {}", indent(1), label, relative));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("{}{}", indent(1), report.css));
    lines.push(format!("{}{}", indent(1), report.js));
    lines.push(format!(
        "{}{} copied",
        indent(1),
        plural(report.assets, "file", "files")
    ));

    lines.push(String::new());
    lines.push(format!(
        "Generated {} in {}, sitemap with {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.languages.len(), "language", "languages"),
        plural(report.sitemap_urls, "URL", "URLs"),
    ));
    lines
}

fn is_language_dir(report: &GenerateReport, component: std::path::Component<'_>) -> bool {
    let name = component.as_os_str().to_string_lossy();
    report.languages.iter().any(|l| *l == name)
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Query commands
// ============================================================================

/// Glossary search results.
///
/// ```text
/// Asana (āsana)
///     A posture. In Ashtanga, asanas are linked by breath and movement...
///
/// 1 term matching "asana"
/// ```
pub fn format_glossary_search(terms: &[&GlossaryTerm], query: &str, preview_chars: usize) -> Vec<String> {
    let query = query.trim();
    if terms.is_empty() {
        return vec![glossary::no_results_message(query)];
    }
    let mut lines = Vec::new();
    for term in terms {
        match &term.sanskrit {
            Some(sanskrit) => lines.push(format!("{} ({})", term.term, sanskrit)),
            None => lines.push(term.term.clone()),
        }
        lines.push(format!(
            "{}{}",
            indent(1),
            glossary::preview(&term.definition, preview_chars)
        ));
    }
    lines.push(String::new());
    lines.push(glossary::count_label(terms.len(), query));
    lines
}

pub fn print_glossary_search(terms: &[&GlossaryTerm], query: &str, preview_chars: usize) {
    for line in format_glossary_search(terms, query, preview_chars) {
        println!("{}", line);
    }
}

/// Shala directory listing, optionally with distances from an origin.
///
/// ```text
/// 001 Mysore Sthalam — Mysuru, India
///     Teachers: Ana, Rui
///     ~8,027 km away
///
/// 3 shalas · Sorted by distance
/// ```
pub fn format_directory(entries: &[(&ShalaData, Option<f64>)], query: &str, t: &Translator<'_>) -> Vec<String> {
    let query = query.trim();
    if entries.is_empty() {
        return vec![t.t("shalas", "results.noResults")];
    }
    let mut lines = Vec::new();
    for (i, (shala, distance)) in entries.iter().enumerate() {
        lines.push(format!(
            "{} {} — {}, {}",
            format_index(i + 1),
            shala.name,
            shala.city,
            shala.country
        ));
        if !shala.teachers.is_empty() {
            let names: Vec<&str> = shala.teachers.iter().map(|t| t.name.as_str()).collect();
            lines.push(format!("{}Teachers: {}", indent(1), names.join(", ")));
        }
        if let Some(km) = distance {
            let distance = geo::format_km(*km);
            lines.push(format!(
                "{}{}",
                indent(1),
                t.t_with("shalas", "results.distance", &[("distance", distance.as_str())])
            ));
        }
    }

    let count = entries.len().to_string();
    let mut summary = t.t_with("shalas", "results.count", &[("count", count.as_str())]);
    if !query.is_empty() {
        summary.push_str(&t.t_with("shalas", "results.forQuery", &[("query", query)]));
    }
    if entries.iter().any(|(_, d)| d.is_some()) {
        summary.push_str(" · ");
        summary.push_str(&t.t("shalas", "results.sortedByDistance"));
    }
    lines.push(String::new());
    lines.push(summary);
    lines
}

pub fn print_directory(entries: &[(&ShalaData, Option<f64>)], query: &str, t: &Translator<'_>) {
    for line in format_directory(entries, query, t) {
        println!("{}", line);
    }
}

/// Where a request path lands.
///
/// ```text
/// /glossary/ → Glossary (glossary/index.html)
/// /pt-BR/glossary → Glossary (pt-BR/glossary/index.html)
/// ```
pub fn format_route(path: &str, language: Option<&str>, route: Route) -> String {
    let file = match language {
        Some(code) if route != Route::NotFound => format!("{code}/{}", route.output_file()),
        _ => route.output_file(),
    };
    format!("{} → {} ({})", path, route_label(route), file)
}

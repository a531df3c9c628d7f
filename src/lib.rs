//! # Start Ashtanga
//!
//! Static site generator for Start Ashtanga, a beginner's guide to Ashtanga
//! yoga: what the practice is, how to begin, the Primary Series sequence, a
//! glossary of the Sanskrit and lineage vocabulary, and a directory of
//! shalas. All copy lives in per-language JSON translation files; the
//! binary turns them into a plain static site.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (config + translations → validated data)
//! 2. Generate  manifest  →  dist/            (final HTML site, CSS, JS, sitemap)
//! ```
//!
//! The manifest is human-readable JSON, so a failing build can be debugged by
//! looking at exactly what the generator was handed. Generation is a pure
//! function of the manifest plus the static assets.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — loads config and translation bundles, validates glossary and shala data |
//! | [`generate`] | Stage 2 — renders every route per language, fingerprints assets, writes sitemap |
//! | [`config`] | `config.toml` loading, environment overrides, validation, CSS generation |
//! | [`i18n`] | Translation bundles, key lookup with default-language fallback, plurals |
//! | [`types`] | Content records deserialized from translations (terms, poses, shalas) |
//! | [`glossary`] | Case-insensitive term lookup and search |
//! | [`tooltip`] | Glossary tooltip placement and show/hide state |
//! | [`geo`] | Haversine distance, shala filtering and sorting, geolocation errors |
//! | [`routes`] | The fixed route table and request path resolution |
//! | [`seo`] | Per-page title, description and social meta tags |
//! | [`components`] | Shared Maud building blocks: layout, cards, tooltips, map |
//! | [`pages`] | One renderer per route |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Translations Are The Content
//!
//! Every visible string, including structured content like the pose list and
//! the glossary, is a value in `locales/<lang>/<namespace>.json`. Adding a
//! language is adding a directory and a line in `config.toml`; keys missing
//! from it fall back to the default language.
//!
//! ## Glossary Markers
//!
//! Running text marks glossary terms inline as `[[Term]]` or
//! `[[Term|shown text]]`. The renderer turns them into tooltip triggers and
//! the scan stage warns about markers that name no glossary entry.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup is
//! a build error and all interpolation is escaped.
//!
//! ## Progressive Enhancement
//!
//! Pages are complete without JavaScript. The small `site.js` adds tooltip
//! behaviour, list filtering, the "near me" sort and the map, reading its
//! parameters from data attributes the generator writes.

pub mod components;
pub mod config;
pub mod generate;
pub mod geo;
pub mod glossary;
pub mod i18n;
pub mod output;
pub mod pages;
pub mod routes;
pub mod scan;
pub mod seo;
pub mod tooltip;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory, loads the
//! site configuration and every configured language's translation bundle,
//! validates the structured content, and produces a [`Manifest`] the
//! generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/                      # Copied verbatim to the output root
//! │   └── favicon.svg
//! └── locales/
//!     ├── en/                      # Default language (required)
//!     │   ├── common.json
//!     │   ├── glossary.json        # `terms`: the glossary
//!     │   ├── shalas.json          # `shalas`: the directory
//!     │   └── ...
//!     └── pt-BR/                   # Additional languages (optional)
//! ```
//!
//! ## Validation
//!
//! The scanner enforces these rules for every language:
//! - Glossary term names are unique, ignoring case
//! - Shala ids are unique
//! - Shala coordinates are valid latitude/longitude
//! - The default language has a locale directory
//!
//! Structured content with the wrong shape (a `terms` entry missing its
//! definition, an unknown practice option) is reported with the namespace
//! and key. Glossary references (`[[Term]]`) that match no term are logged
//! as warnings and render as plain text.

use crate::components::{Segment, parse_rich_text};
use crate::config::{self, SiteConfig};
use crate::geo::LatLng;
use crate::glossary;
use crate::i18n::{self, Bundle, I18nError, Translator};
use crate::types::{GlossaryTerm, ShalaData};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Translation error: {0}")]
    I18n(#[from] I18nError),
    #[error("No locales/{0}/ directory for the default language")]
    MissingDefaultLanguage(String),
    #[error("Duplicate glossary term {term:?} in {language}")]
    DuplicateTerm { language: String, term: String },
    #[error("Duplicate shala id {id:?} in {language}")]
    DuplicateShala { language: String, id: String },
    #[error("Shala {id:?} in {language} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        language: String,
        id: String,
        lat: f64,
        lng: f64,
    },
}

/// Manifest output from the scan stage
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub config: SiteConfig,
    /// One bundle per configured language that has a locale directory,
    /// default language first.
    pub bundles: Vec<Bundle>,
}

impl Manifest {
    pub fn bundle(&self, code: &str) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.language == code)
    }

    pub fn default_bundle(&self) -> Option<&Bundle> {
        self.bundle(&self.config.i18n.default_language)
    }

    /// Translator for `code`, falling back to the default language.
    pub fn translator(&self, code: &str) -> Option<Translator<'_>> {
        let bundle = self.bundle(code)?;
        let fallback = self.default_bundle().filter(|d| d.language != code);
        Some(Translator::new(bundle, fallback))
    }
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;
    scan_with_config(root, config)
}

/// Scan with an already-resolved config.
pub fn scan_with_config(root: &Path, config: SiteConfig) -> Result<Manifest, ScanError> {
    let locales = root.join("locales");
    let default_language = config.i18n.default_language.clone();

    let mut bundles = Vec::new();
    let mut codes: Vec<&str> = vec![default_language.as_str()];
    codes.extend(
        config
            .i18n
            .languages
            .iter()
            .map(|l| l.code.as_str())
            .filter(|c| *c != default_language),
    );

    for code in codes {
        match i18n::load_bundle(&locales, code) {
            Ok(bundle) => bundles.push(bundle),
            Err(I18nError::MissingLanguage(_)) if code == default_language => {
                return Err(ScanError::MissingDefaultLanguage(code.to_string()));
            }
            Err(I18nError::MissingLanguage(_)) => {
                tracing::warn!(language = code, "no locale directory, language skipped");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let manifest = Manifest { config, bundles };
    for bundle in &manifest.bundles {
        validate_bundle(bundle)?;
    }
    if let Some(t) = manifest.translator(&default_language) {
        let terms: Vec<GlossaryTerm> = t.objects_or_default("glossary", "terms")?;
        for bundle in &manifest.bundles {
            for term in unknown_references(bundle, &terms) {
                tracing::warn!(language = %bundle.language, term = %term, "glossary reference matches no term");
            }
        }
    }
    Ok(manifest)
}

/// Check one language's structured content. Only keys the bundle defines
/// itself are checked; anything it inherits was checked with the default.
fn validate_bundle(bundle: &Bundle) -> Result<(), ScanError> {
    let t = Translator::new(bundle, None);
    let language = &bundle.language;

    let terms: Vec<GlossaryTerm> = t.objects_or_default("glossary", "terms")?;
    let mut seen = BTreeSet::new();
    for term in &terms {
        if !seen.insert(term.term.to_lowercase()) {
            return Err(ScanError::DuplicateTerm {
                language: language.clone(),
                term: term.term.clone(),
            });
        }
    }

    let shalas: Vec<ShalaData> = t.objects_or_default("shalas", "shalas")?;
    let mut ids = BTreeSet::new();
    for shala in &shalas {
        if !ids.insert(shala.id.as_str()) {
            return Err(ScanError::DuplicateShala {
                language: language.clone(),
                id: shala.id.clone(),
            });
        }
        if !LatLng::from(shala).is_valid() {
            return Err(ScanError::InvalidCoordinates {
                language: language.clone(),
                id: shala.id.clone(),
                lat: shala.lat,
                lng: shala.lng,
            });
        }
    }
    Ok(())
}

/// Glossary references in a bundle's strings that match no known term,
/// sorted and deduplicated.
pub fn unknown_references(bundle: &Bundle, terms: &[GlossaryTerm]) -> Vec<String> {
    let mut missing = BTreeSet::new();
    for value in bundle.namespaces.values() {
        visit_strings(value, &mut |s| {
            for segment in parse_rich_text(s) {
                if let Segment::Term { term, .. } = segment {
                    if glossary::lookup(terms, term).is_none() {
                        missing.insert(term.to_string());
                    }
                }
            }
        });
    }
    missing.into_iter().collect()
}

fn visit_strings(value: &Value, f: &mut impl FnMut(&str)) {
    match value {
        Value::String(s) => f(s),
        Value::Array(items) => items.iter().for_each(|v| visit_strings(v, f)),
        Value::Object(map) => map.values().for_each(|v| visit_strings(v, f)),
        _ => {}
    }
}

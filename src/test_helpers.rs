//! Shared test utilities.
//!
//! The real `content/` directory doubles as the test fixture, so the tests
//! exercise the copy that ships with the site.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//! assert!(find_term(&manifest, "Asana").definition.contains("posture"));
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::i18n::{Bundle, Translator, load_bundle};
use crate::scan::Manifest;
use crate::types::{GlossaryTerm, ShalaData};

// =========================================================================
// Fixture setup
// =========================================================================

pub fn content_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content")
}

/// Copy `content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the shipped content.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&content_dir(), tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Stock configuration, independent of `content/config.toml` and the
/// environment.
pub fn sample_config() -> SiteConfig {
    SiteConfig::default()
}

/// The shipped English translation bundle.
pub fn sample_bundle() -> Bundle {
    load_bundle(&content_dir().join("locales"), "en").unwrap()
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

fn default_translator(manifest: &Manifest) -> Translator<'_> {
    let bundle = manifest
        .bundle(&manifest.config.i18n.default_language)
        .expect("default bundle present");
    Translator::new(bundle, None)
}

/// All glossary terms of the default language.
pub fn glossary_terms(manifest: &Manifest) -> Vec<GlossaryTerm> {
    default_translator(manifest)
        .objects("glossary", "terms")
        .unwrap()
}

/// Find a glossary term by exact name. Panics if not found.
pub fn find_term(manifest: &Manifest, name: &str) -> GlossaryTerm {
    let terms = glossary_terms(manifest);
    terms
        .iter()
        .find(|t| t.term == name)
        .cloned()
        .unwrap_or_else(|| {
            let names: Vec<&str> = terms.iter().map(|t| t.term.as_str()).collect();
            panic!("term '{name}' not found. Available: {names:?}")
        })
}

/// All shala directory entries of the default language.
pub fn shalas(manifest: &Manifest) -> Vec<ShalaData> {
    default_translator(manifest)
        .objects_or_default("shalas", "shalas")
        .unwrap()
}

// =========================================================================
// Content editing
// =========================================================================

/// Rewrite one namespace file of a fixture copy through a JSON edit.
pub fn edit_namespace(root: &Path, lang: &str, ns: &str, edit: impl FnOnce(&mut serde_json::Value)) {
    let path = root.join("locales").join(lang).join(format!("{ns}.json"));
    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    edit(&mut value);
    std::fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

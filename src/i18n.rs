//! Translation resources.
//!
//! Every piece of copy on the site lives in JSON resource files, one file per
//! namespace per language:
//!
//! ```text
//! content/locales/
//! ├── en/
//! │   ├── common.json         # footer, shared labels
//! │   ├── nav.json            # header links
//! │   ├── glossary.json       # hero + `terms` list
//! │   ├── shalas.json         # directory copy + `shalas` list
//! │   └── ...
//! └── pt-BR/
//!     └── ...                 # any missing key falls back to the default language
//! ```
//!
//! Keys are dotted paths into the JSON tree (`hero.title`). Lookups fall back
//! from the requested language to the default language and finally to the
//! key itself, so a missing translation shows up on the page instead of
//! failing the build.
//!
//! Strings may contain `{{name}}` placeholders. When a `count` variable is
//! passed, the `<key>_one` / `<key>_other` plural forms are preferred if the
//! resource defines them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("No locale directory for language {0:?}")]
    MissingLanguage(String),
    #[error("Missing translation {0}:{1}")]
    MissingKey(String, String),
    #[error("Translation {ns}:{key} has the wrong shape: {source}")]
    Shape {
        ns: String,
        key: String,
        source: serde_json::Error,
    },
}

/// Namespaces the site reads from. Other JSON files in a locale directory
/// are ignored.
pub const NAMESPACES: &[&str] = &[
    "common",
    "nav",
    "home",
    "about",
    "contributing",
    "gettingStarted",
    "glossary",
    "primarySeries",
    "seo",
    "shalas",
];

/// All translation resources of one language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bundle {
    pub language: String,
    pub namespaces: BTreeMap<String, Value>,
}

impl Bundle {
    /// Resolve a dotted key inside a namespace.
    pub fn get(&self, ns: &str, key: &str) -> Option<&Value> {
        let root = self.namespaces.get(ns)?;
        key.split('.').try_fold(root, |node, part| node.get(part))
    }
}

/// Load every known namespace of `code` from `locales_dir/<code>/`.
///
/// A missing namespace file is not an error: it simply contributes no keys
/// and lookups fall back to the default language.
pub fn load_bundle(locales_dir: &Path, code: &str) -> Result<Bundle, I18nError> {
    let dir = locales_dir.join(code);
    if !dir.is_dir() {
        return Err(I18nError::MissingLanguage(code.to_string()));
    }

    let mut namespaces = BTreeMap::new();
    for ns in NAMESPACES {
        let path = dir.join(format!("{ns}.json"));
        if !path.exists() {
            tracing::debug!(language = code, namespace = ns, "namespace file absent");
            continue;
        }
        let content = fs::read_to_string(&path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| I18nError::Json { path, source })?;
        namespaces.insert(ns.to_string(), value);
    }

    Ok(Bundle {
        language: code.to_string(),
        namespaces,
    })
}

/// Replace `{{name}}` placeholders with the matching variable.
///
/// Whitespace inside the braces is tolerated. Unknown placeholders are left
/// untouched.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let name = rest[start + 2..start + 2 + len].trim();
        out.push_str(&rest[..start]);
        match vars.iter().find(|(k, _)| *k == name) {
            Some((_, v)) => out.push_str(v),
            None => out.push_str(&rest[start..start + 4 + len]),
        }
        rest = &rest[start + 4 + len..];
    }
    out.push_str(rest);
    out
}

/// Looks up translations for one language with fallback to the default.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    bundle: &'a Bundle,
    fallback: Option<&'a Bundle>,
}

impl<'a> Translator<'a> {
    /// `fallback` is the default-language bundle; pass `None` when `bundle`
    /// already is the default.
    pub fn new(bundle: &'a Bundle, fallback: Option<&'a Bundle>) -> Self {
        Self { bundle, fallback }
    }

    pub fn language(&self) -> &'a str {
        &self.bundle.language
    }

    fn lookup(&self, ns: &str, key: &str) -> Option<&'a Value> {
        self.bundle
            .get(ns, key)
            .or_else(|| self.fallback.and_then(|f| f.get(ns, key)))
    }

    pub fn has(&self, ns: &str, key: &str) -> bool {
        self.lookup(ns, key).is_some()
    }

    /// Translate a key. Falls back to the key itself when it is missing.
    pub fn t(&self, ns: &str, key: &str) -> String {
        match self.lookup(ns, key).and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => {
                tracing::warn!(language = self.language(), ns, key, "missing translation");
                key.to_string()
            }
        }
    }

    /// Translate with `{{var}}` interpolation and count-based plurals.
    pub fn t_with(&self, ns: &str, key: &str, vars: &[(&str, &str)]) -> String {
        let plural_key = vars
            .iter()
            .find(|(k, _)| *k == "count")
            .map(|(_, count)| {
                let form = if *count == "1" { "one" } else { "other" };
                format!("{key}_{form}")
            })
            .filter(|k| self.has(ns, k));
        let template = self.t(ns, plural_key.as_deref().unwrap_or(key));
        interpolate(&template, vars)
    }

    /// Deserialize structured content stored under a key.
    pub fn objects<T: DeserializeOwned>(&self, ns: &str, key: &str) -> Result<T, I18nError> {
        let value = self
            .lookup(ns, key)
            .ok_or_else(|| I18nError::MissingKey(ns.to_string(), key.to_string()))?;
        T::deserialize(value).map_err(|source| I18nError::Shape {
            ns: ns.to_string(),
            key: key.to_string(),
            source,
        })
    }

    /// Like [`Translator::objects`], but a missing key yields `T::default()`.
    pub fn objects_or_default<T: DeserializeOwned + Default>(
        &self,
        ns: &str,
        key: &str,
    ) -> Result<T, I18nError> {
        if self.has(ns, key) {
            self.objects(ns, key)
        } else {
            Ok(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GlossaryTerm;
    use serde_json::json;
    use tempfile::TempDir;

    fn bundle(language: &str, ns: &str, value: Value) -> Bundle {
        let mut namespaces = BTreeMap::new();
        namespaces.insert(ns.to_string(), value);
        Bundle {
            language: language.to_string(),
            namespaces,
        }
    }

    #[test]
    fn dotted_lookup() {
        let b = bundle("en", "home", json!({"hero": {"title": "Start Ashtanga"}}));
        let t = Translator::new(&b, None);
        assert_eq!(t.t("home", "hero.title"), "Start Ashtanga");
    }

    #[test]
    fn missing_key_renders_key() {
        let b = bundle("en", "home", json!({}));
        let t = Translator::new(&b, None);
        assert_eq!(t.t("home", "hero.title"), "hero.title");
    }

    #[test]
    fn falls_back_to_default_language() {
        let en = bundle("en", "nav", json!({"home": "Home", "about": "About"}));
        let pt = bundle("pt-BR", "nav", json!({"home": "Início"}));
        let t = Translator::new(&pt, Some(&en));
        assert_eq!(t.t("nav", "home"), "Início");
        assert_eq!(t.t("nav", "about"), "About");
        assert_eq!(t.language(), "pt-BR");
    }

    #[test]
    fn interpolate_replaces_known_vars() {
        assert_eq!(
            interpolate("{{count}} shalas for {{ query }}", &[("count", "3"), ("query", "goa")]),
            "3 shalas for goa"
        );
    }

    #[test]
    fn interpolate_keeps_unknown_and_unterminated() {
        assert_eq!(interpolate("hi {{name}}", &[]), "hi {{name}}");
        assert_eq!(interpolate("broken {{name", &[("name", "x")]), "broken {{name");
    }

    #[test]
    fn plural_forms_selected_by_count() {
        let b = bundle(
            "en",
            "shalas",
            json!({"results": {"count_one": "{{count}} shala", "count_other": "{{count}} shalas"}}),
        );
        let t = Translator::new(&b, None);
        assert_eq!(t.t_with("shalas", "results.count", &[("count", "1")]), "1 shala");
        assert_eq!(t.t_with("shalas", "results.count", &[("count", "0")]), "0 shalas");
    }

    #[test]
    fn plural_without_forms_uses_base_key() {
        let b = bundle("en", "x", json!({"n": "{{count}} items"}));
        let t = Translator::new(&b, None);
        assert_eq!(t.t_with("x", "n", &[("count", "1")]), "1 items");
    }

    #[test]
    fn objects_deserializes_terms() {
        let b = bundle(
            "en",
            "glossary",
            json!({"terms": [{"term": "Asana", "sanskrit": "āsana", "definition": "Posture."}]}),
        );
        let t = Translator::new(&b, None);
        let terms: Vec<GlossaryTerm> = t.objects("glossary", "terms").unwrap();
        assert_eq!(terms[0].sanskrit.as_deref(), Some("āsana"));
    }

    #[test]
    fn objects_missing_key_is_error() {
        let b = bundle("en", "glossary", json!({}));
        let t = Translator::new(&b, None);
        let result: Result<Vec<GlossaryTerm>, _> = t.objects("glossary", "terms");
        assert!(matches!(result, Err(I18nError::MissingKey(_, _))));
        let empty: Vec<GlossaryTerm> = t.objects_or_default("glossary", "terms").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn objects_wrong_shape_is_error() {
        let b = bundle("en", "glossary", json!({"terms": "not a list"}));
        let t = Translator::new(&b, None);
        let result: Result<Vec<GlossaryTerm>, _> = t.objects("glossary", "terms");
        assert!(matches!(result, Err(I18nError::Shape { .. })));
    }

    #[test]
    fn load_bundle_reads_namespaces() {
        let tmp = TempDir::new().unwrap();
        let en = tmp.path().join("en");
        fs::create_dir_all(&en).unwrap();
        fs::write(en.join("nav.json"), r#"{"home": "Home"}"#).unwrap();
        fs::write(en.join("unrelated.json"), r#"{"x": 1}"#).unwrap();

        let b = load_bundle(tmp.path(), "en").unwrap();
        assert_eq!(b.language, "en");
        assert_eq!(b.namespaces.len(), 1);
        assert_eq!(b.get("nav", "home").and_then(Value::as_str), Some("Home"));
    }

    #[test]
    fn load_bundle_missing_language() {
        let tmp = TempDir::new().unwrap();
        let result = load_bundle(tmp.path(), "de");
        assert!(matches!(result, Err(I18nError::MissingLanguage(code)) if code == "de"));
    }

    #[test]
    fn load_bundle_invalid_json_names_file() {
        let tmp = TempDir::new().unwrap();
        let en = tmp.path().join("en");
        fs::create_dir_all(&en).unwrap();
        fs::write(en.join("seo.json"), "{ nope").unwrap();
        let err = load_bundle(tmp.path(), "en").unwrap_err();
        assert!(err.to_string().contains("seo.json"));
    }
}

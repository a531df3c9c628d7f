//! Per-page `<head>` metadata: title, description, canonical link, Open Graph
//! and Twitter card tags.

use crate::config::SiteConfig;
use crate::i18n::Translator;
use crate::routes::{Route, localized_path};
use maud::{Markup, html};

/// Resolved metadata for one rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Absolute canonical URL. `None` for pages that should not be indexed.
    pub canonical: Option<String>,
    pub og_type: &'static str,
    pub site_name: String,
    pub noindex: bool,
}

/// Full document title. The home page uses the bare site name.
pub fn full_title(title: &str, site_name: &str) -> String {
    if title == "Home" || title.is_empty() {
        site_name.to_string()
    } else {
        format!("{title} | {site_name}")
    }
}

impl PageMeta {
    /// Metadata for `route` in the translator's language.
    pub fn for_route(route: Route, config: &SiteConfig, t: &Translator<'_>) -> Self {
        let site_name = config.site.name.clone();
        if route == Route::NotFound {
            return Self {
                title: full_title("Page Not Found", &site_name),
                description: t.t("seo", "notFound.description"),
                canonical: None,
                og_type: "website",
                site_name,
                noindex: true,
            };
        }

        let key = route.seo_key();
        let prefix = config.i18n.path_prefix(t.language());
        Self {
            title: full_title(&t.t("seo", &format!("{key}.title")), &site_name),
            description: t.t("seo", &format!("{key}.description")),
            canonical: Some(config.site.absolute_url(&localized_path(&prefix, route))),
            og_type: "website",
            site_name,
            noindex: false,
        }
    }

    pub fn head_tags(&self) -> Markup {
        html! {
            title { (self.title) }
            meta name="description" content=(self.description);
            @if self.noindex {
                meta name="robots" content="noindex, nofollow";
            }
            @if let Some(canonical) = &self.canonical {
                link rel="canonical" href=(canonical);
                meta property="og:url" content=(canonical);
            }
            meta property="og:title" content=(self.title);
            meta property="og:description" content=(self.description);
            meta property="og:type" content=(self.og_type);
            meta property="og:site_name" content=(self.site_name);
            meta name="twitter:card" content="summary";
            meta name="twitter:title" content=(self.title);
            meta name="twitter:description" content=(self.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Bundle;
    use std::collections::BTreeMap;

    fn seo_bundle() -> Bundle {
        let mut namespaces = BTreeMap::new();
        namespaces.insert(
            "seo".to_string(),
            serde_json::json!({
                "home": {"title": "Home", "description": "Learn Ashtanga."},
                "glossary": {"title": "Glossary", "description": "Terms & words."},
                "notFound": {"description": "Nothing here."}
            }),
        );
        Bundle {
            language: "en".to_string(),
            namespaces,
        }
    }

    #[test]
    fn home_uses_bare_site_name() {
        assert_eq!(full_title("Home", "Start Ashtanga"), "Start Ashtanga");
        assert_eq!(full_title("About", "Start Ashtanga"), "About | Start Ashtanga");
    }

    #[test]
    fn route_meta_has_canonical() {
        let bundle = seo_bundle();
        let t = Translator::new(&bundle, None);
        let meta = PageMeta::for_route(Route::Glossary, &SiteConfig::default(), &t);
        assert_eq!(meta.title, "Glossary | Start Ashtanga");
        assert_eq!(
            meta.canonical.as_deref(),
            Some("https://startashtanga.com/glossary")
        );
        assert!(!meta.noindex);
    }

    #[test]
    fn not_found_is_noindex() {
        let bundle = seo_bundle();
        let t = Translator::new(&bundle, None);
        let meta = PageMeta::for_route(Route::NotFound, &SiteConfig::default(), &t);
        assert_eq!(meta.title, "Page Not Found | Start Ashtanga");
        assert!(meta.noindex);
        let html = meta.head_tags().into_string();
        assert!(html.contains(r#"content="noindex, nofollow""#));
        assert!(!html.contains("canonical"));
    }

    #[test]
    fn head_tags_escape_and_include_social() {
        let bundle = seo_bundle();
        let t = Translator::new(&bundle, None);
        let html = PageMeta::for_route(Route::Glossary, &SiteConfig::default(), &t)
            .head_tags()
            .into_string();
        assert!(html.contains("Terms &amp; words."));
        assert!(html.contains(r#"property="og:site_name" content="Start Ashtanga""#));
        assert!(html.contains(r#"name="twitter:card" content="summary""#));
        assert!(html.contains(r#"rel="canonical""#));
    }
}

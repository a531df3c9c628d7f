//! Site routes.
//!
//! Every page the generator writes corresponds to one [`Route`]. Paths that
//! match nothing resolve to [`Route::NotFound`], which is written as
//! `404.html` so static hosts serve it for unknown URLs.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    GettingStarted,
    PrimarySeries,
    Glossary,
    About,
    Contribute,
    ShalaDirectory,
    NotFound,
}

impl Route {
    /// Every route, in sitemap order.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::GettingStarted,
        Route::PrimarySeries,
        Route::Glossary,
        Route::About,
        Route::Contribute,
        Route::ShalaDirectory,
        Route::NotFound,
    ];

    /// Header navigation, in display order.
    pub const NAV: [Route; 4] = [
        Route::Home,
        Route::GettingStarted,
        Route::Glossary,
        Route::About,
    ];

    /// URL path without language prefix. Not-found has no canonical path.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::GettingStarted => "/getting-started",
            Route::PrimarySeries => "/primary-series",
            Route::Glossary => "/glossary",
            Route::About => "/about",
            Route::Contribute => "/contribute",
            Route::ShalaDirectory => "/shala-directory",
            Route::NotFound => "/404",
        }
    }

    /// File written under the output (or language) directory.
    pub fn output_file(self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            Route::NotFound => "404.html".to_string(),
            other => format!("{}/index.html", other.path().trim_start_matches('/')),
        }
    }

    /// Key of the page's entry in the `seo` namespace.
    pub fn seo_key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::GettingStarted => "gettingStarted",
            Route::PrimarySeries => "primarySeries",
            Route::Glossary => "glossary",
            Route::About => "about",
            Route::Contribute => "contributing",
            Route::ShalaDirectory => "shalaDirectory",
            Route::NotFound => "notFound",
        }
    }

    /// Key of the nav label in the `nav` namespace.
    pub fn nav_key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::GettingStarted => "gettingStarted",
            Route::PrimarySeries => "primarySeries",
            Route::Glossary => "glossary",
            Route::About => "about",
            Route::Contribute => "contribute",
            Route::ShalaDirectory => "shalaDirectory",
            Route::NotFound => "notFound",
        }
    }

    pub fn in_nav(self) -> bool {
        Self::NAV.contains(&self)
    }

    /// Whether the page belongs in the sitemap.
    pub fn indexable(self) -> bool {
        self != Route::NotFound
    }

    /// Resolve a request path to a route.
    ///
    /// Query strings, fragments, a trailing slash and a trailing
    /// `index.html` are ignored. Anything unrecognised is [`Route::NotFound`].
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix("index.html").unwrap_or(path);
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .filter(|r| *r != Route::NotFound)
            .find(|r| r.path() == normalized)
            .unwrap_or(Route::NotFound)
    }
}

/// Split a `/<code>` language prefix off a request path.
///
/// Only the given codes are recognised, and only as a whole path segment:
/// `/pt-BR/glossary` gives `(Some("pt-BR"), "/glossary")` but `/pt-BRx`
/// is left alone.
pub fn split_language<'p, 'c>(path: &'p str, codes: &[&'c str]) -> (Option<&'c str>, &'p str) {
    for &code in codes {
        let Some(rest) = path.strip_prefix('/').and_then(|p| p.strip_prefix(code)) else {
            continue;
        };
        if rest.is_empty() {
            return (Some(code), "/");
        }
        if rest.starts_with(['/', '?', '#']) {
            return (Some(code), rest);
        }
    }
    (None, path)
}

/// Join a language prefix (`""` or `/pt-BR`) and a route path.
pub fn localized_path(prefix: &str, route: Route) -> String {
    match (prefix, route) {
        ("", r) => r.path().to_string(),
        (p, Route::Home) => format!("{p}/"),
        (p, r) => format!("{p}{}", r.path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/getting-started"), Route::GettingStarted);
        assert_eq!(Route::resolve("/primary-series"), Route::PrimarySeries);
        assert_eq!(Route::resolve("/glossary"), Route::Glossary);
        assert_eq!(Route::resolve("/about"), Route::About);
        assert_eq!(Route::resolve("/contribute"), Route::Contribute);
        assert_eq!(Route::resolve("/shala-directory"), Route::ShalaDirectory);
    }

    #[test]
    fn normalizes_suffixes() {
        assert_eq!(Route::resolve("/glossary/"), Route::Glossary);
        assert_eq!(Route::resolve("/glossary/index.html"), Route::Glossary);
        assert_eq!(Route::resolve("/glossary?q=bandha"), Route::Glossary);
        assert_eq!(Route::resolve("/about#contact"), Route::About);
        assert_eq!(Route::resolve("/index.html"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
    }

    #[test]
    fn undefined_paths_are_not_found() {
        for path in [
            "/nope",
            "/glossary/asana",
            "/Glossary",
            "/404",
            "../../etc/passwd",
            "/\u{1F9D8}",
        ] {
            assert_eq!(Route::resolve(path), Route::NotFound, "{path}");
        }
    }

    #[test]
    fn output_files() {
        assert_eq!(Route::Home.output_file(), "index.html");
        assert_eq!(Route::Glossary.output_file(), "glossary/index.html");
        assert_eq!(Route::NotFound.output_file(), "404.html");
    }

    #[test]
    fn nav_membership() {
        assert!(Route::Home.in_nav());
        assert!(Route::About.in_nav());
        assert!(!Route::PrimarySeries.in_nav());
        assert!(!Route::NotFound.in_nav());
    }

    #[test]
    fn language_prefix_is_stripped() {
        let codes = ["pt-BR", "de"];
        assert_eq!(split_language("/pt-BR/glossary/", &codes), (Some("pt-BR"), "/glossary/"));
        assert_eq!(split_language("/pt-BR", &codes), (Some("pt-BR"), "/"));
        assert_eq!(split_language("/de?x=1", &codes), (Some("de"), "?x=1"));
        assert_eq!(split_language("/pt-BRx/about", &codes), (None, "/pt-BRx/about"));
        assert_eq!(split_language("/glossary", &codes), (None, "/glossary"));
        assert_eq!(split_language("/fr/glossary", &codes), (None, "/fr/glossary"));

        let (_, rest) = split_language("/pt-BR/glossary", &codes);
        assert_eq!(Route::resolve(rest), Route::Glossary);
        let (_, rest) = split_language("/de?x=1", &codes);
        assert_eq!(Route::resolve(rest), Route::Home);
    }

    #[test]
    fn localized_paths() {
        assert_eq!(localized_path("", Route::Home), "/");
        assert_eq!(localized_path("", Route::About), "/about");
        assert_eq!(localized_path("/pt-BR", Route::Home), "/pt-BR/");
        assert_eq!(localized_path("/pt-BR", Route::Glossary), "/pt-BR/glossary");
    }
}

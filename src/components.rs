//! Presentational building blocks shared by every page.
//!
//! Each component is a plain function returning [`Markup`]. Components that
//! need translations, config or the glossary take a [`PageContext`].
//!
//! ## Inline glossary references
//!
//! Translation strings may reference glossary terms inline:
//!
//! ```text
//! "Most shalas teach [[Mysore style]], where each student practises the [[Primary Series|series]] at their own pace."
//! ```
//!
//! [`rich_text`] renders `[[Term]]` and `[[Term|label]]` as a
//! [`glossary_tooltip`]. References to terms missing from the glossary render
//! as plain text.

use crate::config::SiteConfig;
use crate::glossary;
use crate::i18n::Translator;
use crate::routes::{Route, localized_path};
use crate::seo::PageMeta;
use crate::tooltip::Placement;
use crate::types::{GlossaryTerm, Item, SectionLink, ShalaData, TeacherLevel};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use pulldown_cmark::{Parser, html as md_html};
use std::cell::Cell;

/// Everything a component may need while rendering one page.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub t: Translator<'a>,
    pub terms: &'a [GlossaryTerm],
    pub route: Route,
    prefix: String,
    tooltip_seq: Cell<usize>,
}

impl<'a> PageContext<'a> {
    pub fn new(
        config: &'a SiteConfig,
        t: Translator<'a>,
        terms: &'a [GlossaryTerm],
        route: Route,
    ) -> Self {
        Self {
            prefix: config.i18n.path_prefix(t.language()),
            config,
            t,
            terms,
            route,
            tooltip_seq: Cell::new(0),
        }
    }

    /// Link to a route in the current language.
    pub fn href(&self, route: Route) -> String {
        localized_path(&self.prefix, route)
    }

    pub fn language(&self) -> &'a str {
        self.t.language()
    }

    /// Unique element id for the next tooltip on this page.
    fn next_tooltip_id(&self, term: &str) -> String {
        let n = self.tooltip_seq.get() + 1;
        self.tooltip_seq.set(n);
        format!("tooltip-{}-{n}", slug(term))
    }
}

/// Fingerprinted stylesheet and script paths for the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLinks {
    pub css: String,
    pub js: String,
}

/// Lowercase, hyphen-separated anchor id: `"Nādi Śodhana"` → `"nādi-śodhana"`.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

// ============================================================================
// Icons
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowLeft,
    ArrowRight,
    Award,
    Book,
    Certificate,
    Close,
    Code,
    Compass,
    Crosshairs,
    Envelope,
    Expand,
    External,
    Github,
    Hands,
    Heart,
    Info,
    Leaf,
    Lightbulb,
    MapPin,
    Menu,
    Om,
    Pen,
    Search,
    Sun,
    Users,
    Warning,
}

impl Icon {
    /// Icon named in content resources. Unknown names fall back to a leaf.
    pub fn from_name(name: &str) -> Icon {
        match name {
            "award" => Icon::Award,
            "book" => Icon::Book,
            "code" => Icon::Code,
            "compass" => Icon::Compass,
            "envelope" => Icon::Envelope,
            "hands" => Icon::Hands,
            "heart" => Icon::Heart,
            "info" => Icon::Info,
            "lightbulb" => Icon::Lightbulb,
            "map" | "map-pin" => Icon::MapPin,
            "om" => Icon::Om,
            "pen" => Icon::Pen,
            "search" => Icon::Search,
            "sun" => Icon::Sun,
            "users" => Icon::Users,
            _ => Icon::Leaf,
        }
    }

    fn path(self) -> &'static str {
        match self {
            Icon::ArrowLeft => "M15 5l-7 7 7 7M8 12h12",
            Icon::ArrowRight => "M9 5l7 7-7 7M16 12H4",
            Icon::Award => "M12 3a6 6 0 100 12 6 6 0 000-12zM8 14l-2 7 6-3 6 3-2-7",
            Icon::Book => "M4 5a2 2 0 012-2h13v16H6a2 2 0 00-2 2zM4 5v16M8 7h7",
            Icon::Certificate => "M12 2l2.4 3.2 4-.6.6 4L22 12l-3 3.4-.6 4-4-.6L12 22l-2.4-3.2-4 .6-.6-4L2 12l3-3.4.6-4 4 .6z",
            Icon::Close => "M6 18L18 6M6 6l12 12",
            Icon::Code => "M8 7l-5 5 5 5M16 7l5 5-5 5M14 4l-4 16",
            Icon::Compass => "M12 3a9 9 0 100 18 9 9 0 000-18zM15.5 8.5l-2 5-5 2 2-5z",
            Icon::Crosshairs => "M12 2v4M12 18v4M2 12h4M18 12h4M12 7a5 5 0 100 10 5 5 0 000-10z",
            Icon::Envelope => "M3 6h18v12H3zM3 6l9 7 9-7",
            Icon::Expand => "M4 9V4h5M20 9V4h-5M4 15v5h5M20 15v5h-5",
            Icon::External => "M14 4h6v6M20 4l-9 9M18 14v6H4V6h6",
            Icon::Github => "M12 2a10 10 0 00-3.2 19.5c.5.1.7-.2.7-.5v-1.7c-2.8.6-3.4-1.3-3.4-1.3-.5-1.2-1.1-1.5-1.1-1.5-.9-.6.1-.6.1-.6 1 .1 1.5 1 1.5 1 .9 1.5 2.4 1.1 2.9.8.1-.6.4-1.1.6-1.3-2.2-.3-4.6-1.1-4.6-5 0-1.1.4-2 1-2.7-.1-.3-.4-1.3.1-2.7 0 0 .8-.3 2.7 1a9.4 9.4 0 015 0c1.9-1.3 2.7-1 2.7-1 .5 1.4.2 2.4.1 2.7.6.7 1 1.6 1 2.7 0 3.9-2.4 4.7-4.6 5 .4.3.7.9.7 1.9V21c0 .3.2.6.7.5A10 10 0 0012 2z",
            Icon::Hands => "M7 11V6a1.5 1.5 0 013 0v5M10 10V4.5a1.5 1.5 0 013 0V10M13 10V5.5a1.5 1.5 0 013 0V13c0 4-3 7-6 7s-5-2-6-4l-1.5-3a1.5 1.5 0 012.6-1.5L7 13",
            Icon::Heart => "M12 21s-7-4.5-9.5-9A5.5 5.5 0 0112 6a5.5 5.5 0 019.5 6c-2.5 4.5-9.5 9-9.5 9z",
            Icon::Info => "M12 3a9 9 0 100 18 9 9 0 000-18zM12 11v6M12 7.5v.5",
            Icon::Leaf => "M5 19c0-9 6-14 15-14 0 9-5 15-14 15M5 19l7-7",
            Icon::Lightbulb => "M9 18h6M10 21h4M12 3a6 6 0 00-3.5 10.9V16h7v-2.1A6 6 0 0012 3z",
            Icon::MapPin => "M12 21s-7-6.5-7-12a7 7 0 0114 0c0 5.5-7 12-7 12zM12 6.5a2.5 2.5 0 100 5 2.5 2.5 0 000-5z",
            Icon::Menu => "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5",
            Icon::Om => "M5 8a4 4 0 116 3.5A4.5 4.5 0 115 15M13 13c1.5-2 5-2 5 1.5S15 19 13 17M15 5l3-2",
            Icon::Pen => "M4 20l4-1L19 8l-3-3L5 16zM14 7l3 3",
            Icon::Search => "M11 4a7 7 0 100 14 7 7 0 000-14zM20 20l-4-4",
            Icon::Sun => "M12 8a4 4 0 100 8 4 4 0 000-8zM12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4",
            Icon::Users => "M9 11a4 4 0 100-8 4 4 0 000 8zM2 21v-1a6 6 0 0112 0v1M16 3.5a4 4 0 010 7.5M22 21v-1a6 6 0 00-4-5.6",
            Icon::Warning => "M12 3L2 20h20zM12 10v4M12 17v.5",
        }
    }
}

pub fn icon(glyph: Icon, class: &str) -> Markup {
    html! {
        svg class={ "icon " (class) } viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="1.75" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            path d=(glyph.path()) {}
        }
    }
}

// ============================================================================
// Basic components
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// What a button renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonKind<'a> {
    /// A `<button type="button">`.
    Button,
    /// Internal navigation.
    Link(&'a str),
    /// External link, opened in a new tab.
    Anchor(&'a str),
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Outline => "btn--outline",
        ButtonVariant::Info => "btn--info",
    };
    let size = match size {
        ButtonSize::Sm => "btn--sm",
        ButtonSize::Md => "btn--md",
        ButtonSize::Lg => "btn--lg",
    };
    format!("btn {variant} {size}")
}

pub fn button(variant: ButtonVariant, size: ButtonSize, kind: ButtonKind<'_>, content: Markup) -> Markup {
    let class = button_classes(variant, size);
    html! {
        @match kind {
            ButtonKind::Button => {
                button type="button" class=(class) { (content) }
            }
            ButtonKind::Link(href) => {
                a class=(class) href=(href) { (content) }
            }
            ButtonKind::Anchor(href) => {
                a class=(class) href=(href) target="_blank" rel="noopener noreferrer" { (content) }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Accent,
    Info,
}

pub fn badge(variant: BadgeVariant, content: Markup) -> Markup {
    let class = match variant {
        BadgeVariant::Default => "badge",
        BadgeVariant::Accent => "badge badge--accent",
        BadgeVariant::Info => "badge badge--info",
    };
    html! { span class=(class) { (content) } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalloutVariant {
    #[default]
    Info,
    Warning,
    Tip,
}

pub fn callout_box(glyph: Icon, title: Option<&str>, variant: CalloutVariant, body: Markup) -> Markup {
    let class = match variant {
        CalloutVariant::Info => "callout callout--info",
        CalloutVariant::Warning => "callout callout--warning",
        CalloutVariant::Tip => "callout callout--tip",
    };
    html! {
        div class=(class) {
            (icon(glyph, "callout-icon"))
            div {
                @if let Some(title) = title {
                    h4.callout-title { (title) }
                }
                div.callout-body { (body) }
            }
        }
    }
}

pub fn checklist_item(item: &Item) -> Markup {
    html! {
        div.checklist-item {
            span.checkbox aria-hidden="true" {}
            div {
                span.checklist-title { (item.title) }
                @if let Some(description) = &item.description {
                    p.checklist-description { (description) }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Cream,
    White,
}

pub fn content_card(variant: CardVariant, extra_class: Option<&str>, content: Markup) -> Markup {
    let variant = match variant {
        CardVariant::Cream => "card--cream",
        CardVariant::White => "card--white",
    };
    let class = match extra_class {
        Some(extra) => format!("card {variant} {extra}"),
        None => format!("card {variant}"),
    };
    html! {
        div class=(class) { (content) }
    }
}

pub fn page_hero(title: &str, subtitle: Option<&str>, extra: Markup) -> Markup {
    html! {
        section.page-hero {
            div.container.center {
                h1 { (title) }
                @if let Some(subtitle) = subtitle {
                    p.hero-subtitle { (subtitle) }
                }
                (extra)
            }
        }
    }
}

pub fn section_nav(items: &[SectionLink]) -> Markup {
    html! {
        nav.section-nav aria-label="On this page" {
            @for item in items {
                a href={ "#" (item.id) } { (item.label) }
            }
        }
    }
}

/// Text input wired to a client-side filter. `target` is the id of the list
/// it filters.
pub fn search_input(id: &str, placeholder: &str, target: &str) -> Markup {
    html! {
        div.search-input {
            (icon(Icon::Search, "search-icon"))
            input type="search" id=(id) placeholder=(placeholder) autocomplete="off"
                aria-label=(placeholder) data-filter-target=(target);
        }
    }
}

/// Render markdown from a translation string.
pub fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

// ============================================================================
// Glossary tooltips
// ============================================================================

/// A piece of translated text: plain, or a glossary reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'s> {
    Text(&'s str),
    Term { term: &'s str, label: Option<&'s str> },
}

/// Split text into plain runs and `[[Term]]` / `[[Term|label]]` references.
///
/// An opening `[[` without a closing `]]` is kept as text.
pub fn parse_rich_text(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("[[") {
        let Some(len) = rest[start + 2..].find("]]") else {
            break;
        };
        if start > 0 {
            out.push(Segment::Text(&rest[..start]));
        }
        let inner = &rest[start + 2..start + 2 + len];
        let segment = match inner.split_once('|') {
            Some((term, label)) => Segment::Term {
                term: term.trim(),
                label: Some(label),
            },
            None => Segment::Term {
                term: inner.trim(),
                label: None,
            },
        };
        out.push(segment);
        rest = &rest[start + 4 + len..];
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

/// Render translated text, turning glossary references into tooltips.
pub fn rich_text(ctx: &PageContext<'_>, text: &str) -> Markup {
    html! {
        @for segment in parse_rich_text(text) {
            @match segment {
                Segment::Text(s) => {
                    (s)
                }
                Segment::Term { term, label } => {
                    (glossary_tooltip(ctx, term, html! { (label.unwrap_or(term)) }))
                }
            }
        }
    }
}

/// Shorthand for a translated string rendered through [`rich_text`].
pub fn tr(ctx: &PageContext<'_>, ns: &str, key: &str) -> Markup {
    rich_text(ctx, &ctx.t.t(ns, key))
}

/// A dotted-underlined label with a definition bubble.
///
/// The bubble is present in the markup but hidden; the page script shows it
/// on hover, focus or tap and picks its placement. Unknown terms render the
/// label alone.
pub fn glossary_tooltip(ctx: &PageContext<'_>, term: &str, label: Markup) -> Markup {
    let Some(entry) = glossary::lookup(ctx.terms, term) else {
        return html! { span { (label) } };
    };
    let id = ctx.next_tooltip_id(&entry.term);
    let definition = glossary::preview(&entry.definition, ctx.config.tooltip.preview_chars);
    let glossary_href = format!("{}#term-{}", ctx.href(Route::Glossary), slug(&entry.term));

    html! {
        span.glossary-tooltip data-term=(entry.term) {
            span.glossary-trigger tabindex="0" role="button"
                aria-describedby=(id) aria-expanded="false" {
                (label)
            }
            span class={ "tooltip " (Placement::default().classes()) } id=(id) role="tooltip" hidden {
                span.tooltip-arrow {}
                span.tooltip-term {
                    (entry.term)
                    @if let Some(sanskrit) = &entry.sanskrit {
                        span.tooltip-sanskrit { (sanskrit) }
                    }
                }
                span.tooltip-definition { (definition) }
                a.tooltip-link href=(glossary_href) {
                    (ctx.t.t("glossary", "tooltip.viewInGlossary"))
                }
            }
        }
    }
}

// ============================================================================
// Shala directory components
// ============================================================================

/// Characters escaped in a URL query value: everything except the RFC 3986
/// unreserved set.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub fn directions_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(address, QUERY_VALUE)
    )
}

/// Lowercased text the client-side filter matches against, one field per
/// line so a query never matches across two fields.
pub fn shala_search_text(shala: &ShalaData) -> String {
    let mut parts = vec![
        shala.name.as_str(),
        shala.city.as_str(),
        shala.country.as_str(),
    ];
    parts.extend(shala.teachers.iter().map(|t| t.name.as_str()));
    parts.join("\n").to_lowercase()
}

fn teacher_badge(ctx: &PageContext<'_>, level: Option<TeacherLevel>) -> Markup {
    match level {
        Some(TeacherLevel::Certified) => {
            glossary_tooltip(ctx, "Certified", icon(Icon::Certificate, "teacher-icon teacher-icon--certified"))
        }
        Some(TeacherLevel::Authorized2 | TeacherLevel::Authorized1) => {
            glossary_tooltip(ctx, "Authorised", icon(Icon::Award, "teacher-icon teacher-icon--authorised"))
        }
        None => html! { span class="teacher-icon teacher-icon--none" {} },
    }
}

pub fn shala_card(ctx: &PageContext<'_>, shala: &ShalaData) -> Markup {
    let body = html! {
        div.shala-card-body {
            h3 { (shala.name) }
            p.shala-location { (shala.city) ", " (shala.country) }
            hr;
            div.shala-columns {
                div {
                    p.eyebrow { (ctx.t.t("shalas", "card.teachers")) }
                    ul.teacher-list {
                        @for teacher in &shala.teachers {
                            li {
                                (teacher_badge(ctx, teacher.level))
                                span { (teacher.name) }
                            }
                        }
                    }
                }
                div {
                    p.eyebrow { (ctx.t.t("shalas", "card.classes")) }
                    div.practice-list {
                        @for practice in &shala.practices {
                            @let (label, term) = practice.label();
                            span.practice {
                                @if let Some(term) = term {
                                    (glossary_tooltip(ctx, term, html! { (label) }))
                                } @else {
                                    (label)
                                }
                            }
                        }
                    }
                }
            }
        }
        div.shala-card-links {
            a href=(directions_url(&shala.address)) target="_blank" rel="noopener noreferrer" {
                (ctx.t.t("shalas", "card.directions")) " " (icon(Icon::External, "icon-xs"))
            }
            a href=(shala.website) target="_blank" rel="noopener noreferrer" {
                (ctx.t.t("shalas", "card.website")) " " (icon(Icon::External, "icon-xs"))
            }
        }
    };

    html! {
        div.shala-entry id={ "shala-" (shala.id) }
            data-search=(shala_search_text(shala)) data-lat=(shala.lat) data-lng=(shala.lng) {
            (content_card(CardVariant::Cream, Some("shala-card"), body))
            p.shala-distance hidden {}
        }
    }
}

/// Serialize data for the page script into a JSON `<script>` block.
///
/// `</` is escaped so the payload cannot close the element early.
pub fn json_script(id: &str, value: &serde_json::Value) -> Markup {
    let json = value.to_string().replace("</", "<\\/");
    html! {
        script type="application/json" id=(id) { (PreEscaped(json)) }
    }
}

/// Interactive Leaflet map of the directory, with "near me" and expand
/// controls. Marker data and messages are handed to the script as JSON.
pub fn shala_map(ctx: &PageContext<'_>, shalas: &[ShalaData]) -> Markup {
    let t = &ctx.t;
    let errors: serde_json::Map<String, serde_json::Value> = crate::geo::GeolocationError::ALL
        .iter()
        .map(|e| (e.key().to_string(), serde_json::Value::String(e.message(t))))
        .collect();
    let markers: Vec<serde_json::Value> = shalas
        .iter()
        .map(|s| {
            serde_json::json!({
                "id": s.id, "name": s.name, "city": s.city,
                "country": s.country, "lat": s.lat, "lng": s.lng,
            })
        })
        .collect();
    let data = serde_json::json!({
        "tileUrl": ctx.config.map.tile_url,
        "attribution": ctx.config.map.attribution,
        "shalas": markers,
        "errors": errors,
        "yourLocation": t.t("shalas", "map.yourLocation"),
        "sortedByDistance": t.t("shalas", "results.sortedByDistance"),
        "expand": t.t("shalas", "map.expand"),
        "collapse": t.t("shalas", "map.collapse"),
    });

    html! {
        div.shala-map id="shala-map" {
            div.shala-map-canvas id="shala-map-canvas" {}
            (json_script("shala-map-data", &data))
            div.map-controls {
                p.map-error role="alert" hidden {}
                div.map-buttons {
                    button.map-button type="button" data-action="near-me"
                        aria-label=(t.t("shalas", "map.nearMeLabel")) {
                        (icon(Icon::Crosshairs, "icon-sm"))
                        (t.t("shalas", "map.nearMe"))
                    }
                    button.map-button type="button" data-action="expand"
                        aria-label=(t.t("shalas", "map.expandLabel")) {
                        (icon(Icon::Expand, "icon-sm"))
                        span.map-button-label { (t.t("shalas", "map.expand")) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Donation link. Renders nothing until `links.donate` is configured.
pub fn donate_button(ctx: &PageContext<'_>, size: ButtonSize) -> Markup {
    match &ctx.config.links.donate {
        Some(href) => button(
            ButtonVariant::Primary,
            size,
            ButtonKind::Anchor(href),
            html! { (icon(Icon::Heart, "icon-sm")) (ctx.t.t("common", "donate")) },
        ),
        None => html! {},
    }
}

/// Static code badge for a single-language site, links to the current page
/// in every language otherwise.
pub fn language_switcher(ctx: &PageContext<'_>) -> Markup {
    let i18n = &ctx.config.i18n;
    if i18n.languages.len() == 1 {
        return html! { span.lang-badge { (i18n.languages[0].code) } };
    }
    let route = if ctx.route == Route::NotFound {
        Route::Home
    } else {
        ctx.route
    };
    html! {
        nav.lang-switcher aria-label=(ctx.t.t("common", "language")) {
            ul {
                @for lang in &i18n.languages {
                    @let current = lang.code == ctx.language();
                    li {
                        a href=(localized_path(&i18n.path_prefix(&lang.code), route))
                            hreflang=(lang.code) lang=(lang.code)
                            aria-current=[current.then_some("true")]
                            class=[current.then_some("current")] {
                            (lang.native_name)
                        }
                    }
                }
            }
        }
    }
}

fn nav_links(ctx: &PageContext<'_>, class: &str) -> Markup {
    html! {
        ul class=(class) {
            @for route in Route::NAV {
                @let active = route == ctx.route;
                li {
                    a href=(ctx.href(route)) class=[active.then_some("active")]
                        aria-current=[active.then_some("page")] {
                        (ctx.t.t("nav", route.nav_key()))
                    }
                }
            }
        }
    }
}

pub fn site_header(ctx: &PageContext<'_>) -> Markup {
    html! {
        header.site-header {
            nav.container.header-bar aria-label="Main navigation" {
                a.site-name href=(ctx.href(Route::Home)) { (ctx.config.site.name) }
                div.desktop-nav {
                    (nav_links(ctx, "nav-links"))
                    (language_switcher(ctx))
                }
                button.menu-toggle type="button" aria-expanded="false" aria-controls="mobile-menu"
                    aria-label=(ctx.t.t("nav", "openMenu"))
                    data-label-open=(ctx.t.t("nav", "openMenu"))
                    data-label-close=(ctx.t.t("nav", "closeMenu")) {
                    span.menu-icon-open { (icon(Icon::Menu, "icon-md")) }
                    span.menu-icon-close hidden { (icon(Icon::Close, "icon-md")) }
                }
            }
            div.mobile-menu id="mobile-menu" hidden {
                div.container {
                    (nav_links(ctx, "mobile-nav-links"))
                    div.mobile-lang { (language_switcher(ctx)) }
                }
            }
        }
    }
}

pub fn site_footer(ctx: &PageContext<'_>) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                div.footer-row {
                    p.footer-tagline { (ctx.t.t("common", "footer.tagline")) }
                    nav aria-label="Footer navigation" {
                        ul.footer-links {
                            li {
                                a href=(ctx.config.links.github) target="_blank" rel="noopener noreferrer" {
                                    (icon(Icon::Github, "icon-sm"))
                                    (ctx.t.t("common", "footer.github"))
                                }
                            }
                            li {
                                a href={ (ctx.href(Route::About)) "#contact" } {
                                    (ctx.t.t("common", "footer.contact"))
                                }
                            }
                            @let donate = donate_button(ctx, ButtonSize::Sm);
                            @if !donate.0.is_empty() {
                                li { (donate) }
                            }
                        }
                    }
                }
                p.footer-love {
                    (ctx.t.t("common", "footer.madeWithLove")) " "
                    (icon(Icon::Heart, "icon-xs heart"))
                }
            }
        }
    }
}

/// The full HTML document around a page body.
pub fn base_document(ctx: &PageContext<'_>, meta: &PageMeta, assets: &AssetLinks, content: Markup) -> Markup {
    let tooltip = &ctx.config.tooltip;
    let with_map = ctx.route == Route::ShalaDirectory && ctx.config.directory.enabled;
    html! {
        (DOCTYPE)
        html lang=(ctx.language()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content=(generator());
                (meta.head_tags())
                link rel="stylesheet" href=(assets.css);
                @if with_map {
                    link rel="stylesheet" href=(ctx.config.map.leaflet_css);
                    script defer src=(ctx.config.map.leaflet_js) {}
                }
                script defer src=(assets.js) {}
                @if let Some(analytics) = &ctx.config.site.analytics_script {
                    script defer src=(analytics) {}
                }
            }
            body data-tooltip-width=(tooltip.width)
                data-tooltip-padding=(tooltip.padding)
                data-tooltip-flip=(tooltip.flip_threshold)
                data-tooltip-hide-delay=(tooltip.hide_delay_ms) {
                a.skip-link href="#main" { (ctx.t.t("common", "skipToContent")) }
                (site_header(ctx))
                main id="main" { (content) }
                (site_footer(ctx))
            }
        }
    }
}

fn generator() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("start-ashtanga {version} ({hash})"),
        _ => format!("start-ashtanga {version}"),
    }
}

//! Page bodies, one function per route.
//!
//! Every page reads its copy from the namespace named after it and composes
//! the shared [`components`](crate::components). [`render_page`] wraps the
//! body in the site chrome and head metadata.

use crate::components::{
    AssetLinks, BadgeVariant, ButtonKind, ButtonSize, ButtonVariant, CalloutVariant, CardVariant,
    Icon, PageContext, badge, base_document, button, callout_box, checklist_item, content_card,
    donate_button, glossary_tooltip, icon, markdown, page_hero, rich_text, search_input,
    section_nav, shala_card, shala_map, slug, tr,
};
use crate::glossary;
use crate::i18n::I18nError;
use crate::routes::Route;
use crate::seo::PageMeta;
use crate::types::{Faq, IconCard, Item, Mantra, Pose, SectionLink, ShalaData, SuryaGroup};
use maud::{Markup, html};

/// Render the complete HTML document for `ctx.route`.
pub fn render_page(ctx: &PageContext<'_>, assets: &AssetLinks) -> Result<Markup, I18nError> {
    let body = match ctx.route {
        Route::Home => home(ctx),
        Route::GettingStarted => getting_started(ctx)?,
        Route::PrimarySeries => primary_series(ctx)?,
        Route::Glossary => glossary(ctx),
        Route::About => about(ctx)?,
        Route::Contribute => contributing(ctx)?,
        Route::ShalaDirectory if ctx.config.directory.enabled => shala_directory(ctx)?,
        Route::ShalaDirectory => coming_soon(ctx),
        Route::NotFound => not_found(ctx),
    };
    let meta = PageMeta::for_route(ctx.route, ctx.config, &ctx.t);
    Ok(base_document(ctx, &meta, assets, body))
}

// ============================================================================
// Shared page sections
// ============================================================================

fn section_links(ctx: &PageContext<'_>, ns: &str, items: &[(&'static str, &str)]) -> Vec<SectionLink> {
    items
        .iter()
        .map(|&(id, key)| SectionLink {
            id,
            label: ctx.t.t(ns, &format!("nav.{key}")),
        })
        .collect()
}

/// Full-width gradient call to action closing most pages.
fn cta_section(glyph: Icon, title: &str, text: Markup, action: Markup) -> Markup {
    html! {
        section.cta {
            div.container.center {
                (icon(glyph, "cta-icon"))
                h2 { (title) }
                p.cta-text { (text) }
                div.cta-action { (action) }
            }
        }
    }
}

fn icon_card(ctx: &PageContext<'_>, card: &IconCard) -> Markup {
    content_card(
        CardVariant::Cream,
        Some("icon-card"),
        html! {
            div.icon-badge { (icon(Icon::from_name(&card.icon), "icon-md")) }
            div {
                h3 { (card.title) }
                p { (rich_text(ctx, &card.description)) }
            }
        },
    )
}

fn bullet_list(ctx: &PageContext<'_>, items: &[String]) -> Markup {
    html! {
        ul.bullets {
            @for item in items {
                li { (rich_text(ctx, item)) }
            }
        }
    }
}

fn arrow_label(label: String) -> Markup {
    html! { (label) " " (icon(Icon::ArrowRight, "icon-sm")) }
}

// ============================================================================
// Home
// ============================================================================

fn home(ctx: &PageContext<'_>) -> Markup {
    let directory_open = ctx.config.directory.enabled;
    let actions = [
        ("start", Route::GettingStarted, Icon::Compass, false),
        ("findClass", Route::ShalaDirectory, Icon::MapPin, !directory_open),
        ("explore", Route::About, Icon::Book, false),
    ];
    let features = [
        ("mysoreStyle", Icon::Users),
        ("forBeginners", Icon::Leaf),
        ("beyondPoses", Icon::Om),
    ];

    html! {
        section.home-hero {
            div.container.center {
                p.eyebrow { (ctx.t.t("home", "hero.tagline")) }
                h1 { (ctx.t.t("home", "hero.title")) }
                p.hero-subtitle { (tr(ctx, "home", "hero.subtitle")) }
            }
        }
        section.quick-actions {
            div.container.grid-3 {
                @for (key, route, glyph, soon) in actions {
                    a.quick-action href=(ctx.href(route)) {
                        (icon(glyph, "icon-lg"))
                        span.quick-action-label {
                            (ctx.t.t("home", &format!("quickActions.{key}.label")))
                            @if soon {
                                " " (badge(BadgeVariant::Accent, html! { (ctx.t.t("common", "soon")) }))
                            }
                        }
                        span.quick-action-description {
                            (ctx.t.t("home", &format!("quickActions.{key}.description")))
                        }
                    }
                }
            }
        }
        section.features {
            div.container.grid-3 {
                @for (key, glyph) in features {
                    div.feature {
                        div.icon-badge { (icon(glyph, "icon-md")) }
                        h3 { (ctx.t.t("home", &format!("features.{key}.title"))) }
                        p { (tr(ctx, "home", &format!("features.{key}.description"))) }
                    }
                }
            }
        }
        (cta_section(
            Icon::Sun,
            &ctx.t.t("home", "cta.title"),
            tr(ctx, "home", "cta.description"),
            button(
                ButtonVariant::Secondary,
                ButtonSize::Lg,
                ButtonKind::Link(&ctx.href(Route::GettingStarted)),
                arrow_label(ctx.t.t("home", "cta.buttonText")),
            ),
        ))
    }
}

// ============================================================================
// Getting started
// ============================================================================

fn getting_started(ctx: &PageContext<'_>) -> Result<Markup, I18nError> {
    const NS: &str = "gettingStarted";
    let t = &ctx.t;
    let nav = section_links(
        ctx,
        NS,
        &[
            ("ashtanga", "whatIsAshtanga"),
            ("led-vs-mysore", "ledVsMysore"),
            ("first-class", "firstClass"),
            ("what-to-bring", "whatToBring"),
            ("find-shala", "findShala"),
            ("faq", "faq"),
        ],
    );
    let sequences: Vec<String> = t.objects(NS, "ashtanga.sequences.items")?;
    let tristhana: Vec<Item> = t.objects(NS, "ashtanga.tristhana.items")?;
    let led_points: Vec<String> = t.objects(NS, "ledVsMysore.led.points")?;
    let mysore_points: Vec<String> = t.objects(NS, "ledVsMysore.mysore.points")?;
    let steps: Vec<Item> = t.objects(NS, "firstClass.steps")?;
    let bring: Vec<Item> = t.objects(NS, "whatToBring.items")?;
    let important: Vec<String> = t.objects(NS, "whatToBring.important.items")?;
    let faq: Vec<Faq> = t.objects(NS, "faq.items")?;

    Ok(html! {
        (page_hero(&t.t(NS, "hero.title"), Some(&t.t(NS, "hero.subtitle")), section_nav(&nav)))
        div.page-body {
            div.container.narrow {
                section id="ashtanga" {
                    h2 { (t.t(NS, "ashtanga.title")) }
                    p.lead { (tr(ctx, NS, "ashtanga.intro")) }
                    (callout_box(
                        Icon::Lightbulb,
                        Some(&t.t(NS, "ashtanga.eightLimbs.title")),
                        CalloutVariant::Info,
                        html! { p { (tr(ctx, NS, "ashtanga.eightLimbs.text")) } },
                    ))
                    (content_card(CardVariant::White, None, html! {
                        h3 { (t.t(NS, "ashtanga.sequences.title")) }
                        (bullet_list(ctx, &sequences))
                        p.note { (tr(ctx, NS, "ashtanga.sequences.note")) }
                    }))
                    (content_card(CardVariant::White, None, html! {
                        h3 { (t.t(NS, "ashtanga.tristhana.title")) }
                        ul.bullets {
                            @for item in &tristhana {
                                li {
                                    strong { (rich_text(ctx, &item.title)) }
                                    @if let Some(description) = &item.description {
                                        " " (rich_text(ctx, description))
                                    }
                                }
                            }
                        }
                    }))
                }
                hr.divider;
                section id="led-vs-mysore" {
                    h2 { (t.t(NS, "ledVsMysore.title")) }
                    p { (tr(ctx, NS, "ledVsMysore.intro")) }
                    div.grid-2 {
                        (content_card(CardVariant::White, None, html! {
                            h3 { (icon(Icon::Users, "icon-md")) (t.t(NS, "ledVsMysore.led.title")) }
                            p { (tr(ctx, NS, "ledVsMysore.led.description")) }
                            (bullet_list(ctx, &led_points))
                        }))
                        (content_card(CardVariant::Cream, Some("card--featured"), html! {
                            h3 { (icon(Icon::Leaf, "icon-md")) (t.t(NS, "ledVsMysore.mysore.title")) }
                            p { (tr(ctx, NS, "ledVsMysore.mysore.description")) }
                            (bullet_list(ctx, &mysore_points))
                        }))
                    }
                    (callout_box(
                        Icon::Lightbulb,
                        Some(&t.t(NS, "ledVsMysore.recommendation.title")),
                        CalloutVariant::Tip,
                        html! { p { (tr(ctx, NS, "ledVsMysore.recommendation.text")) } },
                    ))
                }
                hr.divider;
                section id="first-class" {
                    h2 { (t.t(NS, "firstClass.title")) }
                    p { (tr(ctx, NS, "firstClass.intro")) }
                    div.schedule {
                        h4 { (t.t(NS, "firstClass.classSchedule.title")) }
                        p { (tr(ctx, NS, "firstClass.classSchedule.text")) }
                        p.note { (tr(ctx, NS, "firstClass.classSchedule.arrivalNote")) }
                    }
                    ol.steps {
                        @for (index, step) in steps.iter().enumerate() {
                            li.step {
                                span.step-number aria-hidden="true" { (index + 1) }
                                div {
                                    h4 { (rich_text(ctx, &step.title)) }
                                    @if let Some(description) = &step.description {
                                        p { (rich_text(ctx, description)) }
                                    }
                                }
                            }
                        }
                    }
                    (callout_box(
                        Icon::Om,
                        Some(&t.t(NS, "firstClass.mantra.title")),
                        CalloutVariant::Info,
                        html! { p { (tr(ctx, NS, "firstClass.mantra.text")) } },
                    ))
                    div.surface-box {
                        h4 { (t.t(NS, "firstClass.duration.title")) }
                        p { (tr(ctx, NS, "firstClass.duration.text")) }
                    }
                }
                hr.divider;
                section id="what-to-bring" {
                    h2 { (t.t(NS, "whatToBring.title")) }
                    div.grid-2 {
                        @for item in &bring {
                            div.surface-box {
                                p.item-title { (item.title) }
                                @if let Some(note) = &item.description {
                                    p.item-note { (rich_text(ctx, note)) }
                                }
                            }
                        }
                    }
                    (callout_box(
                        Icon::Warning,
                        Some(&t.t(NS, "whatToBring.important.title")),
                        CalloutVariant::Warning,
                        bullet_list(ctx, &important),
                    ))
                }
                hr.divider;
                section id="find-shala" {
                    h2 { (t.t(NS, "findShala.title")) }
                    p { (tr(ctx, NS, "findShala.text")) }
                    (content_card(CardVariant::Cream, Some("card--placeholder center"), html! {
                        (icon(Icon::MapPin, "icon-lg accent"))
                        p { (t.t(NS, "findShala.comingSoon")) }
                        (button(
                            ButtonVariant::Primary,
                            ButtonSize::Sm,
                            ButtonKind::Anchor(&ctx.config.forms.shala_submission),
                            html! { (icon(Icon::MapPin, "icon-xs")) (t.t(NS, "findShala.submitButton")) },
                        ))
                    }))
                    (callout_box(
                        Icon::Award,
                        Some(&t.t(NS, "findShala.tip.title")),
                        CalloutVariant::Tip,
                        html! { p { (tr(ctx, NS, "findShala.tip.text")) } },
                    ))
                }
                hr.divider;
                section id="faq" {
                    h2 { (t.t(NS, "faq.title")) }
                    div.faq {
                        @for item in &faq {
                            details.faq-item {
                                summary { (item.q) }
                                p { (rich_text(ctx, &item.a)) }
                            }
                        }
                    }
                }
            }
        }
        (cta_section(
            Icon::Heart,
            &t.t(NS, "cta.title"),
            html! { (t.t(NS, "cta.text")) },
            button(
                ButtonVariant::Secondary,
                ButtonSize::Lg,
                ButtonKind::Link(&ctx.href(Route::About)),
                arrow_label(t.t(NS, "cta.button")),
            ),
        ))
    })
}

// ============================================================================
// Primary series
// ============================================================================

fn mantra_lines(lines: &[String], lang: Option<&str>) -> Markup {
    html! {
        div.mantra-lines lang=[lang] {
            @for line in lines {
                @if line.trim().is_empty() {
                    span.mantra-spacer aria-hidden="true" {}
                } @else {
                    p { (line) }
                }
            }
        }
    }
}

fn mantra_cards(ctx: &PageContext<'_>, mantra: &Mantra) -> Markup {
    const NS: &str = "primarySeries";
    let columns = [
        ("sanskrit", &mantra.sanskrit, Some("sa")),
        ("transliteration", &mantra.transliteration, None),
        ("translation", &mantra.translation, None),
    ];
    html! {
        div.mantra {
            @for (key, lines, lang) in columns {
                (content_card(CardVariant::Cream, Some("mantra-card"), html! {
                    p.eyebrow { (ctx.t.t(NS, &format!("mantraColumns.{key}"))) }
                    (mantra_lines(lines, lang))
                }))
            }
        }
    }
}

fn load_mantra(ctx: &PageContext<'_>, key: &str) -> Result<Mantra, I18nError> {
    const NS: &str = "primarySeries";
    Ok(Mantra {
        sanskrit: ctx.t.objects_or_default(NS, &format!("{key}.sanskrit"))?,
        transliteration: ctx.t.objects_or_default(NS, &format!("{key}.transliteration"))?,
        translation: ctx.t.objects_or_default(NS, &format!("{key}.translation"))?,
    })
}

fn pose_list(ctx: &PageContext<'_>, poses: &[Pose]) -> Markup {
    const NS: &str = "primarySeries";
    html! {
        ol.pose-list {
            @for pose in poses {
                @let class = if pose.gatekeeper { "pose pose--gatekeeper" } else { "pose" };
                li class=(class) {
                    div.pose-name {
                        @if pose.pranayama {
                            (glossary_tooltip(ctx, "Nādi Śodhana", html! { (pose.name) }))
                            " "
                            span.pose-tag {
                                "(" (glossary_tooltip(ctx, "Pranayama", html! { (ctx.t.t(NS, "labels.pranayama")) })) ")"
                            }
                        } @else {
                            (pose.name)
                        }
                        @if pose.gatekeeper {
                            " "
                            span.pose-tag {
                                "(" (glossary_tooltip(ctx, "Gatekeeper Pose", html! { (ctx.t.t(NS, "labels.gatekeeper")) })) ")"
                            }
                        }
                    }
                    @if !pose.sanskrit.is_empty() && pose.sanskrit != pose.name {
                        div.pose-sanskrit lang="sa" { (pose.sanskrit) }
                    }
                    div.pose-meaning { (pose.meaning) }
                    @if pose.sides || pose.repetitions.is_some() {
                        div.pose-meta {
                            @if pose.sides {
                                span { (ctx.t.t(NS, "labels.bothSides")) }
                            }
                            @if let Some(reps) = &pose.repetitions {
                                span { (reps) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn primary_series(ctx: &PageContext<'_>) -> Result<Markup, I18nError> {
    const NS: &str = "primarySeries";
    let t = &ctx.t;
    let nav = section_links(
        ctx,
        NS,
        &[
            ("opening-mantra", "openingMantra"),
            ("surya-namaskara", "suryaNamaskara"),
            ("standing", "standing"),
            ("seated", "seated"),
            ("finishing", "finishing"),
            ("closing-mantra", "closingMantra"),
        ],
    );
    let opening = load_mantra(ctx, "openingMantra")?;
    let closing = load_mantra(ctx, "closingMantra")?;
    let groups: Vec<SuryaGroup> = t.objects(NS, "suryaNamaskara.groups")?;
    let sequences = [
        ("standing", t.objects::<Vec<Pose>>(NS, "standing.poses")?),
        ("seated", t.objects::<Vec<Pose>>(NS, "seated.poses")?),
        ("finishing", t.objects::<Vec<Pose>>(NS, "finishing.poses")?),
    ];

    Ok(html! {
        (page_hero(&t.t(NS, "hero.title"), Some(&t.t(NS, "hero.subtitle")), section_nav(&nav)))
        div.page-body {
            div.container.narrow {
                (callout_box(
                    Icon::Info,
                    Some(&t.t(NS, "intro.title")),
                    CalloutVariant::Info,
                    html! { p { (tr(ctx, NS, "intro.text")) } },
                ))
                section id="opening-mantra" {
                    h2 { (t.t(NS, "openingMantra.title")) }
                    p { (tr(ctx, NS, "openingMantra.subtitle")) }
                    (mantra_cards(ctx, &opening))
                }
                hr.divider;
                section id="surya-namaskara" {
                    h2 { (t.t(NS, "suryaNamaskara.title")) }
                    p { (tr(ctx, NS, "suryaNamaskara.subtitle")) }
                    p.note { (tr(ctx, NS, "suryaNamaskara.description")) }
                    @for group in &groups {
                        div.surya-group {
                            h3 {
                                (group.name) " "
                                span.pose-sanskrit lang="sa" { (group.sanskrit) }
                                " " (badge(BadgeVariant::Info, html! { (group.repetitions) }))
                            }
                            (pose_list(ctx, &group.poses))
                        }
                    }
                }
                @for (key, poses) in &sequences {
                    hr.divider;
                    section id=(key) {
                        h2 { (t.t(NS, &format!("{key}.title"))) }
                        p { (tr(ctx, NS, &format!("{key}.subtitle"))) }
                        (pose_list(ctx, poses))
                    }
                }
                hr.divider;
                section id="closing-mantra" {
                    h2 { (t.t(NS, "closingMantra.title")) }
                    p { (tr(ctx, NS, "closingMantra.subtitle")) }
                    (mantra_cards(ctx, &closing))
                }
            }
        }
    })
}

// ============================================================================
// Glossary
// ============================================================================

fn glossary(ctx: &PageContext<'_>) -> Markup {
    const NS: &str = "glossary";
    let t = &ctx.t;
    let count = ctx.terms.len().to_string();

    html! {
        (page_hero(
            &t.t(NS, "hero.title"),
            Some(&t.t(NS, "hero.subtitle")),
            search_input("glossary-search", &t.t(NS, "search.placeholder"), "glossary-list"),
        ))
        div.page-body {
            div.container.narrow {
                div.glossary-list id="glossary-list" {
                    @for term in ctx.terms {
                        article.glossary-entry id={ "term-" (slug(&term.term)) }
                            data-search=(glossary::search_text(term)) {
                            (content_card(CardVariant::Cream, None, html! {
                                h3 {
                                    (term.term)
                                    @if let Some(sanskrit) = &term.sanskrit {
                                        " " span.term-sanskrit lang="sa" { (sanskrit) }
                                    }
                                }
                                p { (term.definition) }
                            }))
                        }
                    }
                }
                p.no-results id="glossary-empty" role="status" hidden
                    data-template=(t.t(NS, "search.noResults")) {}
                p.result-count id="glossary-count"
                    data-template-one=(t.t(NS, "search.count_one"))
                    data-template-other=(t.t(NS, "search.count_other"))
                    data-template-query=(t.t(NS, "search.matching")) {
                    (t.t_with(NS, "search.count", &[("count", count.as_str())]))
                }
            }
        }
    }
}

// ============================================================================
// About
// ============================================================================

fn about(ctx: &PageContext<'_>) -> Result<Markup, I18nError> {
    const NS: &str = "about";
    let t = &ctx.t;
    let nav = section_links(
        ctx,
        NS,
        &[
            ("mission", "mission"),
            ("approach", "approach"),
            ("values", "values"),
            ("support", "support"),
            ("contact", "contact"),
        ],
    );
    let values: Vec<IconCard> = t.objects(NS, "values.items")?;

    Ok(html! {
        (page_hero(&t.t(NS, "hero.title"), Some(&t.t(NS, "hero.subtitle")), section_nav(&nav)))
        div.page-body {
            div.container.narrow {
                section id="mission" {
                    h2 { (t.t(NS, "mission.title")) }
                    p.lead { (tr(ctx, NS, "mission.text")) }
                }
                hr.divider;
                section id="approach" {
                    h2 { (t.t(NS, "approach.title")) }
                    p { (tr(ctx, NS, "approach.text")) }
                }
                hr.divider;
                section id="values" {
                    h2 { (t.t(NS, "values.title")) }
                    div.stack {
                        @for value in &values {
                            (icon_card(ctx, value))
                        }
                    }
                }
                hr.divider;
                section id="support" {
                    h2 { (t.t(NS, "support.title")) }
                    p { (tr(ctx, NS, "support.text")) }
                    (donate_button(ctx, ButtonSize::Lg))
                }
                hr.divider;
                section id="contact" {
                    h2 { (t.t(NS, "contact.title")) }
                    p { (t.t(NS, "contact.text")) }
                    p.contact-email {
                        (icon(Icon::Envelope, "icon-sm"))
                        a href={ "mailto:" (ctx.config.contact.email) } { (ctx.config.contact.email) }
                    }
                    (button(
                        ButtonVariant::Primary,
                        ButtonSize::Md,
                        ButtonKind::Anchor(&ctx.config.contact.form_url),
                        html! { (t.t(NS, "contact.formButton")) },
                    ))
                }
            }
        }
        (cta_section(
            Icon::Users,
            &t.t(NS, "cta.title"),
            html! { (t.t(NS, "cta.text")) },
            button(
                ButtonVariant::Secondary,
                ButtonSize::Lg,
                ButtonKind::Link(&ctx.href(Route::Contribute)),
                arrow_label(t.t(NS, "cta.button")),
            ),
        ))
    })
}

// ============================================================================
// Contributing
// ============================================================================

fn contributing(ctx: &PageContext<'_>) -> Result<Markup, I18nError> {
    const NS: &str = "contributing";
    let t = &ctx.t;
    let nav = section_links(
        ctx,
        NS,
        &[
            ("intro", "intro"),
            ("ways", "ways"),
            ("shala", "shala"),
            ("wanted", "wanted"),
            ("technical", "technical"),
        ],
    );
    let ways: Vec<IconCard> = t.objects(NS, "ways.items")?;
    let wanted: Vec<Item> = t.objects(NS, "wanted.items")?;
    let features: Vec<String> = t.objects(NS, "technical.features")?;
    let guide = ctx.config.links.contributing_guide();

    Ok(html! {
        (page_hero(&t.t(NS, "hero.title"), Some(&t.t(NS, "hero.subtitle")), section_nav(&nav)))
        div.page-body {
            div.container.narrow {
                section id="intro" {
                    h2 { (t.t(NS, "intro.title")) }
                    p.lead { (tr(ctx, NS, "intro.text")) }
                }
                hr.divider;
                section id="ways" {
                    h2 { (t.t(NS, "ways.title")) }
                    div.grid-2 {
                        @for way in &ways {
                            (icon_card(ctx, way))
                        }
                    }
                }
                hr.divider;
                section id="shala" {
                    h2 { (t.t(NS, "shala.title")) }
                    p { (tr(ctx, NS, "shala.text")) }
                    (content_card(CardVariant::Cream, Some("card--featured icon-card"), html! {
                        div.icon-badge { (icon(Icon::MapPin, "icon-md")) }
                        div {
                            p { (tr(ctx, NS, "shala.note")) }
                            p.note { (t.t(NS, "shala.coming")) }
                            (button(
                                ButtonVariant::Primary,
                                ButtonSize::Md,
                                ButtonKind::Anchor(&ctx.config.forms.shala_submission),
                                html! { (icon(Icon::MapPin, "icon-sm")) (t.t(NS, "shala.button")) },
                            ))
                        }
                    }))
                }
                hr.divider;
                section id="wanted" {
                    h2 { (t.t(NS, "wanted.title")) }
                    p { (t.t(NS, "wanted.text")) }
                    div.checklist {
                        @for item in &wanted {
                            (checklist_item(item))
                        }
                    }
                }
                hr.divider;
                section id="technical" {
                    h2 { (t.t(NS, "technical.title")) }
                    div.prose { (markdown(&t.t(NS, "technical.text"))) }
                    (content_card(CardVariant::White, Some("card--highlight icon-card"), html! {
                        div.icon-badge.emphasis { (icon(Icon::Code, "icon-md")) }
                        div {
                            ul.feature-list {
                                @for feature in &features {
                                    li { (markdown(feature)) }
                                }
                            }
                            div.button-row {
                                (button(
                                    ButtonVariant::Primary,
                                    ButtonSize::Sm,
                                    ButtonKind::Anchor(&ctx.config.links.github),
                                    html! { (icon(Icon::Github, "icon-sm")) (t.t(NS, "technical.githubButton")) },
                                ))
                                (button(
                                    ButtonVariant::Outline,
                                    ButtonSize::Sm,
                                    ButtonKind::Anchor(&guide),
                                    html! { (t.t(NS, "technical.guideButton")) },
                                ))
                            }
                        }
                    }))
                }
            }
        }
        (cta_section(
            Icon::Hands,
            &t.t(NS, "cta.title"),
            html! { (t.t(NS, "cta.text")) },
            button(
                ButtonVariant::Secondary,
                ButtonSize::Lg,
                ButtonKind::Anchor(&ctx.config.contact.form_url),
                html! { (t.t(NS, "cta.button")) },
            ),
        ))
    })
}

// ============================================================================
// Shala directory
// ============================================================================

fn coming_soon(ctx: &PageContext<'_>) -> Markup {
    const NS: &str = "shalas";
    let t = &ctx.t;
    html! {
        (page_hero(&t.t(NS, "comingSoon.title"), Some(&t.t(NS, "comingSoon.subtitle")), html! {}))
        div.page-body {
            div.container.narrow.center {
                (content_card(CardVariant::Cream, Some("card--placeholder"), html! {
                    (icon(Icon::MapPin, "icon-lg accent"))
                    p { (tr(ctx, NS, "comingSoon.note")) }
                    (button(
                        ButtonVariant::Primary,
                        ButtonSize::Md,
                        ButtonKind::Anchor(&ctx.config.forms.shala_submission),
                        html! { (t.t(NS, "comingSoon.button")) },
                    ))
                }))
            }
        }
    }
}

fn shala_directory(ctx: &PageContext<'_>) -> Result<Markup, I18nError> {
    const NS: &str = "shalas";
    let t = &ctx.t;
    let shalas: Vec<ShalaData> = t.objects(NS, "shalas")?;
    let count = shalas.len().to_string();

    Ok(html! {
        (page_hero(
            &t.t(NS, "hero.title"),
            Some(&t.t(NS, "hero.subtitle")),
            search_input("shala-search", &t.t(NS, "search.placeholder"), "shala-list"),
        ))
        div.page-body {
            div.container {
                (shala_map(ctx, &shalas))
                p.result-count id="shala-count"
                    data-template-one=(t.t(NS, "results.count_one"))
                    data-template-other=(t.t(NS, "results.count_other"))
                    data-template-query=(t.t(NS, "results.forQuery")) {
                    (t.t_with(NS, "results.count", &[("count", count.as_str())]))
                }
                div.shala-list id="shala-list" data-distance-template=(t.t(NS, "results.distance")) {
                    @for shala in &shalas {
                        (shala_card(ctx, shala))
                    }
                }
                p.no-results id="shala-empty" role="status" hidden { (t.t(NS, "results.noResults")) }
            }
        }
        (cta_section(
            Icon::MapPin,
            &t.t(NS, "cta.title"),
            html! { (t.t(NS, "cta.text")) },
            button(
                ButtonVariant::Secondary,
                ButtonSize::Lg,
                ButtonKind::Anchor(&ctx.config.forms.shala_submission),
                html! { (t.t(NS, "cta.button")) },
            ),
        ))
    })
}

// ============================================================================
// Not found
// ============================================================================

fn not_found(ctx: &PageContext<'_>) -> Markup {
    let t = &ctx.t;
    html! {
        section.not-found {
            div.container.narrow.center {
                (icon(Icon::Om, "icon-xl accent"))
                p.not-found-code { "404" }
                h1 { (t.t("common", "notFound.title")) }
                p { (tr(ctx, "common", "notFound.text")) }
                (button(
                    ButtonVariant::Primary,
                    ButtonSize::Lg,
                    ButtonKind::Link(&ctx.href(Route::Home)),
                    html! { (icon(Icon::ArrowLeft, "icon-sm")) (t.t("common", "notFound.button")) },
                ))
            }
        }
    }
}

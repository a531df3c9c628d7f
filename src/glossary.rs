//! Glossary lookup and search.
//!
//! Terms are matched case-insensitively. Lookup is an exact match on the
//! term name and backs the inline tooltips; search is a substring match over
//! term, definition and Sanskrit and backs the glossary page filter and the
//! `glossary` CLI command.

use crate::types::GlossaryTerm;

/// Find a term by name, ignoring case.
pub fn lookup<'a>(terms: &'a [GlossaryTerm], name: &str) -> Option<&'a GlossaryTerm> {
    let needle = name.to_lowercase();
    terms.iter().find(|t| t.term.to_lowercase() == needle)
}

/// Filter terms by a free-text query.
///
/// A blank query returns every term in resource order.
pub fn search<'a>(terms: &'a [GlossaryTerm], query: &str) -> Vec<&'a GlossaryTerm> {
    let query = query.trim();
    if query.is_empty() {
        return terms.iter().collect();
    }
    let needle = query.to_lowercase();
    terms
        .iter()
        .filter(|t| {
            t.term.to_lowercase().contains(&needle)
                || t.definition.to_lowercase().contains(&needle)
                || t
                    .sanskrit
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Lowercased haystack the glossary page filter matches a query against.
///
/// Fields are joined with a newline, which a trimmed single-line query can
/// never contain, so a hit always lies inside one field as in [`search`].
pub fn search_text(term: &GlossaryTerm) -> String {
    let mut fields = vec![term.term.as_str()];
    fields.extend(term.sanskrit.as_deref());
    fields.push(term.definition.as_str());
    fields.join("\n").to_lowercase()
}

/// Shorten a definition to at most `max` characters, appending `...` when
/// anything was cut.
pub fn preview(definition: &str, max: usize) -> String {
    match definition.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &definition[..byte_idx]),
        None => definition.to_string(),
    }
}

/// Result count line shown under the glossary list.
///
/// ```text
/// 1 term
/// 12 terms matching "bandha"
/// ```
pub fn count_label(count: usize, query: &str) -> String {
    let noun = if count == 1 { "term" } else { "terms" };
    if query.is_empty() {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun} matching \"{query}\"")
    }
}

/// Message shown when a search matches nothing.
pub fn no_results_message(query: &str) -> String {
    format!("No terms found matching \"{query}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(term: &str, sanskrit: Option<&str>, definition: &str) -> GlossaryTerm {
        GlossaryTerm {
            term: term.to_string(),
            sanskrit: sanskrit.map(str::to_string),
            definition: definition.to_string(),
        }
    }

    fn fixture() -> Vec<GlossaryTerm> {
        vec![
            term("Asana", Some("āsana"), "A posture held with steady breath."),
            term("Drishti", Some("dṛṣṭi"), "The gazing point for each posture."),
            term("Mysore", None, "Self-paced practice in a group room."),
        ]
    }

    #[test]
    fn lookup_ignores_case() {
        let terms = fixture();
        assert_eq!(lookup(&terms, "mysore").unwrap().term, "Mysore");
        assert_eq!(lookup(&terms, "ASANA").unwrap().term, "Asana");
    }

    #[test]
    fn lookup_is_exact_not_substring() {
        let terms = fixture();
        assert!(lookup(&terms, "Mys").is_none());
        assert!(lookup(&terms, "Vinyasa").is_none());
    }

    #[test]
    fn blank_query_returns_everything() {
        let terms = fixture();
        assert_eq!(search(&terms, "").len(), 3);
        assert_eq!(search(&terms, "   ").len(), 3);
    }

    #[test]
    fn search_matches_term_and_definition() {
        let terms = fixture();
        let hits: Vec<_> = search(&terms, "POSTURE").iter().map(|t| t.term.as_str()).collect();
        assert_eq!(hits, vec!["Asana", "Drishti"]);
        assert_eq!(search(&terms, "mys").len(), 1);
    }

    #[test]
    fn search_matches_sanskrit() {
        let terms = fixture();
        let hits = search(&terms, "dṛṣ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term, "Drishti");
    }

    #[test]
    fn unmatched_query_yields_no_results_and_quotes_query() {
        let terms = fixture();
        for query in ["zzz", "kombucha", "12345"] {
            assert!(search(&terms, query).is_empty());
            let msg = no_results_message(query);
            assert!(msg.starts_with("No terms found"));
            assert!(msg.contains(&format!("\"{query}\"")));
        }
    }

    #[test]
    fn search_text_hits_agree_with_search() {
        let terms = fixture();
        for query in ["asana āsana", "mysore self", "posture", "dṛṣṭi", "breath.", "zzz"] {
            let page_hits: Vec<&str> = terms
                .iter()
                .filter(|t| search_text(t).contains(query))
                .map(|t| t.term.as_str())
                .collect();
            let hits: Vec<&str> = search(&terms, query).iter().map(|t| t.term.as_str()).collect();
            assert_eq!(page_hits, hits, "{query}");
        }
    }

    #[test]
    fn preview_keeps_short_definitions() {
        assert_eq!(preview("Short.", 150), "Short.");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "ś".repeat(200);
        let p = preview(&long, 150);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), 153);
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(1, ""), "1 term");
        assert_eq!(count_label(0, "x"), "0 terms matching \"x\"");
        assert_eq!(count_label(7, ""), "7 terms");
    }
}

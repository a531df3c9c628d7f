//! Content records shared by the scan and generate stages.
//!
//! All of these are deserialized from the translation resources (the
//! `returnObjects` lookups in [`crate::i18n::Translator::objects`]) and are
//! immutable once loaded.

use serde::{Deserialize, Serialize};

/// A glossary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanskrit: Option<String>,
    pub definition: String,
}

/// Lineage recognition of a teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeacherLevel {
    Certified,
    #[serde(rename = "authorized-2")]
    Authorized2,
    #[serde(rename = "authorized-1")]
    Authorized1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<TeacherLevel>,
}

/// Class formats a shala can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeOption {
    Mysore,
    LedPrimary,
    LedIntermediate,
    Pranayama,
    Chanting,
    Meditation,
    Conference,
    Philosophy,
    Online,
}

impl PracticeOption {
    /// Display label, plus the glossary term explaining it where one exists.
    pub fn label(self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::Mysore => ("Mysore", Some("Mysore style")),
            Self::LedPrimary => ("Led Primary", Some("Led Class")),
            Self::LedIntermediate => ("Led Intermediate", Some("Intermediate Series")),
            Self::Pranayama => ("Pranayama", Some("Pranayama")),
            Self::Chanting => ("Chanting", Some("Mantra")),
            Self::Meditation => ("Meditation", Some("Dhyana")),
            Self::Conference => ("Conference", Some("Conference")),
            Self::Philosophy => ("Philosophy", None),
            Self::Online => ("Online", None),
        }
    }
}

/// A studio in the shala directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShalaData {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub address: String,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub practices: Vec<PracticeOption>,
    pub website: String,
    pub lat: f64,
    pub lng: f64,
}

/// A single posture in the primary series reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub name: String,
    #[serde(default)]
    pub sanskrit: String,
    pub meaning: String,
    /// Practised on both sides.
    #[serde(default)]
    pub sides: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<String>,
    #[serde(default)]
    pub gatekeeper: bool,
    #[serde(default)]
    pub pranayama: bool,
}

/// One of the two sun salutation sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuryaGroup {
    pub name: String,
    pub sanskrit: String,
    pub repetitions: String,
    pub poses: Vec<Pose>,
}

/// Opening or closing chant, as three parallel columns. Empty lines are
/// stanza breaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mantra {
    #[serde(default)]
    pub sanskrit: Vec<String>,
    #[serde(default)]
    pub transliteration: Vec<String>,
    #[serde(default)]
    pub translation: Vec<String>,
}

/// An anchor link in a page's section navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLink {
    pub id: &'static str,
    pub label: String,
}

/// A titled card with a named icon, used by the about and contributing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconCard {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// A titled entry with an optional description (checklists, what-to-bring).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A question in the FAQ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

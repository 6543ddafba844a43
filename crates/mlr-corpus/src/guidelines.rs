//! # Guideline Table — Prohibited-Language Families
//!
//! Each guideline family pairs a compiled detection pattern set with the
//! description and suggestion that issues of that family carry, plus the
//! citation-registry key its reference URL resolves through. The builtin
//! table holds the three per-line prohibited-language families; the engine
//! walks the table in declaration order, so it is a list, not a map.

use once_cell::sync::Lazy;
use regex::Regex;

use mlr_core::IssueKind;

/// One detection pattern within a guideline family.
#[derive(Debug)]
pub struct GuidelinePattern {
    /// Compiled case-insensitive pattern.
    pub regex: Regex,
    /// Description attached to issues this pattern produces.
    pub description: &'static str,
}

/// A prohibited-language guideline family.
#[derive(Debug)]
pub struct Guideline {
    /// The issue kind emitted for matches of this family.
    pub kind: IssueKind,
    /// Detection patterns, each with its issue description.
    pub patterns: Vec<GuidelinePattern>,
    /// Suggestion attached to issues of this family.
    pub suggestion: &'static str,
    /// Citation-registry key for the reference URL. Unregistered keys
    /// resolve to an empty URL.
    pub reference: &'static str,
}

/// Ordered collection of guideline families.
#[derive(Debug)]
pub struct GuidelineTable {
    entries: Vec<Guideline>,
}

static BUILTIN: Lazy<GuidelineTable> = Lazy::new(|| GuidelineTable {
    entries: vec![
        Guideline {
            kind: IssueKind::Overpromising,
            patterns: vec![GuidelinePattern {
                regex: Regex::new(
                    r"(?i)\b(?:perfect|completely|totally|guaranteed|always|never|forever|eliminates?|cures?)\b|100%",
                )
                .expect("overpromising pattern"),
                description: "This claim uses absolute language that may not be substantiated",
            }],
            suggestion:
                "Use conditional language: 'may improve', 'can help', 'may reduce', 'designed to'",
            reference: "overpromising_outcomes",
        },
        Guideline {
            kind: IssueKind::UnsubstantiatedSuperlatives,
            patterns: vec![GuidelinePattern {
                regex: Regex::new(
                    r"(?i)\b(?:best|superior|top|leading|unmatched|ultimate|most effective|only)\b",
                )
                .expect("superlative pattern"),
                description:
                    "This claim uses a superlative (e.g., 'only', 'best', 'first') without supporting data",
            }],
            suggestion: "Replace superlative wording or provide supporting clinical data",
            reference: "unsubstantiated_superlatives",
        },
        Guideline {
            kind: IssueKind::VagueTestimonial,
            patterns: vec![GuidelinePattern {
                regex: Regex::new(
                    r"(?i)\b(?:amazing|wonderful|fantastic|incredible|changed my life|revolutionary)\b",
                )
                .expect("testimonial pattern"),
                description: "Vague testimonial language",
            }],
            suggestion: "Use specific, evidence-based claims instead of emotional language",
            reference: "vague_testimonial",
        },
    ],
});

impl GuidelineTable {
    /// The builtin prohibited-language guideline families.
    pub fn builtin() -> &'static GuidelineTable {
        &BUILTIN
    }

    /// Create a table from explicit families, kept in the given order.
    pub fn new(entries: Vec<Guideline>) -> Self {
        Self { entries }
    }

    /// Iterate families in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Guideline> {
        self.entries.iter()
    }

    /// Look up one family by the issue kind it emits.
    pub fn get(&self, kind: IssueKind) -> Option<&Guideline> {
        self.entries.iter().find(|g| g.kind == kind)
    }
}

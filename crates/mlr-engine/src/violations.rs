//! # Regulatory Language Detectors
//!
//! Independent lexicon/pattern detectors for prohibited language classes.
//! Each detector is a pure function over line-indexed text; detectors do
//! not see each other's output, and one phrase can legitimately trigger
//! several of them on the same line. Raw duplication is resolved at the
//! report layer, which groups by issue kind.

use once_cell::sync::Lazy;
use regex::Regex;

use mlr_core::{Issue, IssueKind, Location, Severity};
use mlr_corpus::references;
use mlr_corpus::GuidelineTable;

use crate::text::{has_reference_mark, truncate_chars};

/// Detector snippet limit, in characters.
const SNIPPET_LIMIT: usize = 200;

fn line_snippet(line: &str) -> String {
    truncate_chars(line.trim(), SNIPPET_LIMIT).to_string()
}

// ---------------------------------------------------------------------------
// Prohibited language (guideline-driven, per line, per match)
// ---------------------------------------------------------------------------

/// Scan every line against the guideline pattern families. One issue per
/// match, so a line that says "perfect" twice is flagged twice.
pub fn detect_prohibited_language(text: &str, guidelines: &GuidelineTable) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        for guideline in guidelines.entries() {
            for pattern in &guideline.patterns {
                for _ in pattern.regex.find_iter(line) {
                    issues.push(
                        Issue::new(
                            guideline.kind,
                            Severity::Critical,
                            Location::Line(line_idx + 1),
                            pattern.description,
                            guideline.suggestion,
                        )
                        .with_snippet(line_snippet(line))
                        .with_reference_url(references::url_for(guideline.reference)),
                    );
                }
            }
        }
    }

    issues
}

// ---------------------------------------------------------------------------
// Unsupported comparative (document level, at most one issue)
// ---------------------------------------------------------------------------

static COMPARATIVE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:vs\.?|versus|better than|superior to|more effective than)\b")
        .expect("comparative marker pattern")
});

static COMPARATIVE_EVIDENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:clinical trial|study|data|evidence|proven)").expect("evidence pattern")
});

static COMPARATIVE_SNIPPET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i).{0,50}(?:vs|versus|better than).{0,50}").expect("comparative snippet pattern")
});

/// Flag a comparison made anywhere in the document when no evidentiary
/// keyword appears anywhere either. Emits at most one issue, citing the
/// first comparative phrase.
pub fn detect_unsupported_comparative(text: &str) -> Vec<Issue> {
    if !COMPARATIVE_MARKER.is_match(text) || COMPARATIVE_EVIDENCE.is_match(text) {
        return Vec::new();
    }

    let snippet = COMPARATIVE_SNIPPET
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    vec![Issue::new(
        IssueKind::UnsupportedComparative,
        Severity::Critical,
        Location::DocumentWide,
        "This comparative claim (e.g., 'better than', 'superior to') is made without supporting clinical data",
        "Support comparative claims with head-to-head clinical trial data or remove the comparison",
    )
    .with_snippet(snippet)
    .with_reference_url(references::url_for("ftc_advertising_substantiation"))]
}

// ---------------------------------------------------------------------------
// Absolute negation statements (per line)
// ---------------------------------------------------------------------------

static NEGATION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(?i)\bno longer\s+\w+").expect("no longer pattern"),
            "Absolute negation claim: \"no longer\" suggests permanent elimination",
        ),
        (
            Regex::new(r"(?i)\bno\s+\w+\s+compromise").expect("no compromise pattern"),
            "Absolute claim about eliminating compromise",
        ),
        (
            Regex::new(r"(?i)\bno risk\b").expect("no risk pattern"),
            "Absolute claim about zero risk",
        ),
        (
            Regex::new(r"(?i)\bcompletely\s+(?:safe|effective|eliminat)")
                .expect("completely pattern"),
            "Absolute claim using \"completely\"",
        ),
    ]
});

/// Flag absolute negations ("no longer X", "no risk") on lines that carry
/// no reference mark.
pub fn detect_absolute_negations(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        for (pattern, description) in NEGATION_PATTERNS.iter() {
            if pattern.is_match(line) && !has_reference_mark(line) {
                issues.push(
                    Issue::new(
                        IssueKind::AbsoluteStatement,
                        Severity::Critical,
                        Location::Line(line_idx + 1),
                        format!("Absolute statement: {description}"),
                        "Use qualified language: 'may help', 'designed to', 'can reduce', 'for many patients'",
                    )
                    .with_snippet(line_snippet(line))
                    .with_reference_url(references::url_for("fda_labeling_requirements")),
                );
            }
        }
    }

    issues
}

// ---------------------------------------------------------------------------
// Comparative claims with weak references (per line)
// ---------------------------------------------------------------------------

static COMPARATIVE_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:better|superior|vs|versus|compared to|lagged|leading)")
        .expect("comparative word pattern")
});

static FOOTNOTE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:\d+\.|References?:|Internal|Based on)").expect("footnote line pattern")
});

static CLINICAL_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:clinical|study|trial|data on file|evidence)").expect("clinical cue pattern")
});

static WEAK_CUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Internal (?:Estimates|data)").expect("weak cue pattern"));

/// Flag comparative wording outside footnote-shaped lines unless the line
/// carries a clinical-grade evidentiary cue. A line whose only support is a
/// low-grade cue ("Internal Estimates") is flagged even when it also has a
/// reference mark.
pub fn detect_weak_comparatives(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        if !COMPARATIVE_WORD.is_match(line) {
            continue;
        }
        if FOOTNOTE_LINE.is_match(line) {
            continue;
        }

        let has_clinical_cue = CLINICAL_CUE.is_match(line);
        let has_any_mark = has_reference_mark(line);
        let has_weak_cue = WEAK_CUE.is_match(line);

        if !has_clinical_cue || (has_weak_cue && has_any_mark) {
            issues.push(
                Issue::new(
                    IssueKind::UnsupportedComparative,
                    Severity::Critical,
                    Location::Line(line_idx + 1),
                    "Comparative claim without adequate clinical support",
                    "Support with head-to-head clinical trial data or remove the comparison",
                )
                .with_snippet(line_snippet(line))
                .with_reference_url(references::url_for("ftc_advertising_substantiation")),
            );
        }
    }

    issues
}

// ---------------------------------------------------------------------------
// Unqualified percentage claims (per line)
// ---------------------------------------------------------------------------

static PERCENTAGE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(?i)(?:approaches?|up to|nearly)?\s*100%").expect("100% pattern"),
            "Absolute percentage claim",
        ),
        (
            Regex::new(r"(?i)\d{2,3}%\s+(?:effective|improvement|reduction|success|water)")
                .expect("percentage pattern"),
            "Unqualified percentage claim",
        ),
    ]
});

static REFERENCE_SHAPED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:\d+\.|References?:|In vitro|Surface)").expect("reference line pattern")
});

static METHODOLOGY_QUALIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:in vitro|clinical|study|studies|trial|data on file|analysis|test)")
        .expect("qualifier pattern")
});

/// Flag percentage claims outside reference-shaped lines unless the line
/// carries a methodology qualifier or a reference mark.
pub fn detect_unqualified_percentages(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        if REFERENCE_SHAPED_LINE.is_match(line) {
            continue;
        }

        for (pattern, description) in PERCENTAGE_PATTERNS.iter() {
            if !pattern.is_match(line) {
                continue;
            }
            if METHODOLOGY_QUALIFIER.is_match(line) || has_reference_mark(line) {
                continue;
            }
            issues.push(
                Issue::new(
                    IssueKind::UnqualifiedPercentage,
                    Severity::Critical,
                    Location::Line(line_idx + 1),
                    format!("Percentage claim without qualifying context: '{description}'"),
                    "Qualify with 'in vitro', 'clinical', or reference study data (e.g., 'approaches 100% water at the surface [7]')",
                )
                .with_snippet(line_snippet(line))
                .with_reference_url(references::url_for("ftc_advertising_substantiation")),
            );
        }
    }

    issues
}

// ---------------------------------------------------------------------------
// Weak-reference market claims (document-gated, per line)
// ---------------------------------------------------------------------------

static INTERNAL_ESTIMATES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Internal\s+Estimates").expect("internal estimates pattern"));

static REFERENCE_OR_BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:References?:|$)").expect("reference section pattern"));

static MARKET_CLAIM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:reusable|contact)\s+lens.*(?:market|segment|percentage|%)")
            .expect("market share pattern"),
        Regex::new(r"(?i)(?:contact\s+)?lens\s+wearers.*(?:choose|prefer|percentage)")
            .expect("wearer preference pattern"),
        Regex::new(r"(?i)\d+%\s+of.*(?:market|wearers)").expect("market percentage pattern"),
    ]
});

/// When the material leans on "Internal Estimates" anywhere, flag every
/// market-share or preference claim outside the reference section.
pub fn detect_weak_reference_claims(text: &str) -> Vec<Issue> {
    if !INTERNAL_ESTIMATES.is_match(text) {
        return Vec::new();
    }

    let mut issues = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        if REFERENCE_OR_BLANK_LINE.is_match(line) {
            continue;
        }

        for pattern in MARKET_CLAIM_PATTERNS.iter() {
            if pattern.is_match(line) {
                issues.push(
                    Issue::new(
                        IssueKind::WeakReference,
                        Severity::Critical,
                        Location::Line(line_idx + 1),
                        "Market/product claim may be supported by weak reference (Internal Estimates instead of clinical data)",
                        "Verify claim is supported by published industry data or clinical studies, not just internal estimates",
                    )
                    .with_snippet(line_snippet(line))
                    .with_reference_url(references::url_for("ftc_advertising_substantiation")),
                );
                break;
            }
        }
    }

    issues
}

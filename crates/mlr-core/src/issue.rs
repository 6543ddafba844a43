//! # Issue Taxonomy — Severity, Category, Kind, Location
//!
//! Defines the closed vocabulary for compliance findings. Every issue a
//! detector can emit is a variant of [`IssueKind`]; the five report
//! categories of [`IssueCategory`] are derived from the kind through an
//! exhaustive match, so the two can never drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MlrError;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity tier of a compliance finding.
///
/// Critical issues block release and drive the "Needs Revision" verdict;
/// warnings request cleanup; info is advisory only. The tier is assigned by
/// the detector that emits the issue and is never reclassified downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Must be fixed before the material can be released.
    Critical,
    /// Should be fixed; does not block on its own.
    Warning,
    /// Advisory note.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

// ---------------------------------------------------------------------------
// IssueCategory
// ---------------------------------------------------------------------------

/// The five review categories a finding is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Claim substantiation and approved-claim matching.
    Claims,
    /// Required qualifying language and its placement.
    Disclaimers,
    /// Prohibited or unsupported promotional language.
    RegulatoryLanguage,
    /// Trademark usage and internal contradictions.
    Consistency,
    /// Audience fit, tone, and misleading phrasing.
    ToneAudience,
}

impl IssueCategory {
    /// The heading used for this category in rendered reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Claims => "Claim Validation",
            Self::Disclaimers => "Disclaimers & Legal Text",
            Self::RegulatoryLanguage => "Regulatory & Compliance Language",
            Self::Consistency => "Consistency & Accuracy",
            Self::ToneAudience => "Tone, Clarity & Audience Appropriateness",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// IssueKind
// ---------------------------------------------------------------------------

/// Every finding the analysis pipeline can produce.
///
/// One variant per detector outcome. The snake_case tag returned by
/// [`IssueKind::as_str()`] matches the serde serialization format and is the
/// sort key for critical-issue grouping in rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A claim with no supporting reference in an unreferenced document,
    /// or a high-risk claim with no reference in a referenced one.
    UnsupportedClaim,
    /// A market/preference claim resting on internal estimates.
    WeakReference,
    /// Benefit language present but no qualifying disclaimer anywhere.
    MissingDisclaimer,
    /// A disclaimer family that never appears near the end of the piece.
    MisplacedDisclaimer,
    /// Absolute outcome language: guaranteed, perfect, always, cures.
    Overpromising,
    /// Superlative with no supporting data: best, superior, only.
    UnsubstantiatedSuperlatives,
    /// Emotional testimonial wording: amazing, incredible, revolutionary.
    VagueTestimonial,
    /// A comparison with no clinical-grade evidence behind it.
    UnsupportedComparative,
    /// Absolute negation: "no longer", "no risk", "completely safe".
    AbsoluteStatement,
    /// A percentage figure with no methodology qualifier or reference.
    UnqualifiedPercentage,
    /// Marked and unmarked product name forms mixed in one document.
    InconsistentTrademark,
    /// Positive and negative claim language colliding on one line.
    ContradictoryStatement,
    /// Emotional language in material classified as professional.
    InappropriateTone,
    /// Clinical terminology density in material classified as patient.
    OverlyTechnical,
    /// Miracle/guarantee/universal-outcome phrasing.
    MisleadingLanguage,
}

impl IssueKind {
    /// All issue kinds in canonical order.
    pub fn all() -> &'static [IssueKind] {
        &[
            Self::UnsupportedClaim,
            Self::WeakReference,
            Self::MissingDisclaimer,
            Self::MisplacedDisclaimer,
            Self::Overpromising,
            Self::UnsubstantiatedSuperlatives,
            Self::VagueTestimonial,
            Self::UnsupportedComparative,
            Self::AbsoluteStatement,
            Self::UnqualifiedPercentage,
            Self::InconsistentTrademark,
            Self::ContradictoryStatement,
            Self::InappropriateTone,
            Self::OverlyTechnical,
            Self::MisleadingLanguage,
        ]
    }

    /// The review category this kind is filed under.
    pub fn category(&self) -> IssueCategory {
        match self {
            Self::UnsupportedClaim | Self::WeakReference => IssueCategory::Claims,
            Self::MissingDisclaimer | Self::MisplacedDisclaimer => IssueCategory::Disclaimers,
            Self::Overpromising
            | Self::UnsubstantiatedSuperlatives
            | Self::VagueTestimonial
            | Self::UnsupportedComparative
            | Self::AbsoluteStatement
            | Self::UnqualifiedPercentage => IssueCategory::RegulatoryLanguage,
            Self::InconsistentTrademark | Self::ContradictoryStatement => {
                IssueCategory::Consistency
            }
            Self::InappropriateTone | Self::OverlyTechnical | Self::MisleadingLanguage => {
                IssueCategory::ToneAudience
            }
        }
    }

    /// Returns the snake_case tag for this kind.
    ///
    /// This must match the serde serialization format; reports sort critical
    /// issue groups by this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedClaim => "unsupported_claim",
            Self::WeakReference => "weak_reference",
            Self::MissingDisclaimer => "missing_disclaimer",
            Self::MisplacedDisclaimer => "misplaced_disclaimer",
            Self::Overpromising => "overpromising",
            Self::UnsubstantiatedSuperlatives => "unsubstantiated_superlatives",
            Self::VagueTestimonial => "vague_testimonial",
            Self::UnsupportedComparative => "unsupported_comparative",
            Self::AbsoluteStatement => "absolute_statement",
            Self::UnqualifiedPercentage => "unqualified_percentage",
            Self::InconsistentTrademark => "inconsistent_trademark",
            Self::ContradictoryStatement => "contradictory_statement",
            Self::InappropriateTone => "inappropriate_tone",
            Self::OverlyTechnical => "overly_technical",
            Self::MisleadingLanguage => "misleading_language",
        }
    }

    /// The tag rendered as a title-cased phrase: `"Misplaced Disclaimer"`.
    ///
    /// Used for warning bullets, where the report shows the raw tag rather
    /// than a curated heading.
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = MlrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| MlrError::UnknownIssueKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Where in the material an issue was found.
///
/// Line numbers are 1-based and refer to the raw input split on `'\n'`.
/// Document-level detectors (missing disclaimer, tone mismatch, the
/// comparative sweep) report [`Location::DocumentWide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// A specific line of the input.
    Line(usize),
    /// The finding applies to the document as a whole.
    DocumentWide,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(n) => write!(f, "Line {n}"),
            Self::DocumentWide => write!(f, "document-wide"),
        }
    }
}

// ---------------------------------------------------------------------------
// Issue
// ---------------------------------------------------------------------------

/// A single compliance finding.
///
/// Immutable once created: detectors build issues with [`Issue::new`] and
/// the builder-style setters, and nothing mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// What was found.
    pub kind: IssueKind,
    /// Human-readable description of the problem.
    pub description: String,
    /// Where it was found.
    pub location: Location,
    /// The offending text, truncated by the emitting detector.
    pub snippet: String,
    /// How to fix it.
    pub suggestion: String,
    /// Severity tier, fixed by the emitting detector.
    pub severity: Severity,
    /// Regulatory guidance URL, or empty when no guidance is registered.
    #[serde(default)]
    pub reference_url: String,
}

impl Issue {
    /// Create an issue with an empty snippet and reference URL.
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        location: Location,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            location,
            snippet: String::new(),
            suggestion: suggestion.into(),
            severity,
            reference_url: String::new(),
        }
    }

    /// Attach the offending text.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Attach a regulatory guidance URL.
    pub fn with_reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = url.into();
        self
    }

    /// The review category, derived from the kind.
    pub fn category(&self) -> IssueCategory {
        self.kind.category()
    }
}

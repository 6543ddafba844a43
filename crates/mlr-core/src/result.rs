//! # Analysis Result Envelope
//!
//! The value returned by one engine invocation: matched approved claims,
//! the ordered issue list, and the audience classification. Allocated fresh
//! per call and never mutated after the orchestrator returns it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::issue::{Issue, Severity};

// ---------------------------------------------------------------------------
// AudienceType
// ---------------------------------------------------------------------------

/// The audience a piece of material appears to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceType {
    /// Consumer-facing material.
    Patient,
    /// Clinical or professional material.
    Professional,
    /// No dominant orientation.
    Mixed,
    /// No audience signal at all (e.g. empty input).
    Unknown,
}

impl AudienceType {
    /// Returns the lowercase identifier for this audience.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Professional => "professional",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }

    /// Title-cased form used in the report metadata footer.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Professional => "Professional",
            Self::Mixed => "Mixed",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AudienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

/// Complete result of analyzing one piece of promotional material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Approved claims found in the material, in corpus order, with their
    /// substantiation text still attached.
    pub compliant_claims: Vec<String>,
    /// All findings, in pipeline order.
    pub issues: Vec<Issue>,
    /// Detected audience.
    #[serde(rename = "audience_type")]
    pub audience: AudienceType,
    /// Confidence of the audience classification, in `[0, 1]`.
    pub audience_confidence: f64,
    /// The product the material was matched against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_detected: Option<String>,
}

impl AnalysisResult {
    /// An empty result: no claims, no issues, audience unknown.
    pub fn empty() -> Self {
        Self {
            compliant_claims: Vec::new(),
            issues: Vec::new(),
            audience: AudienceType::Unknown,
            audience_confidence: 0.0,
            product_detected: None,
        }
    }

    /// Number of critical findings.
    pub fn critical_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .count()
    }

    /// Number of warning findings.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// True when no critical or warning findings exist.
    pub fn is_compliant(&self) -> bool {
        self.critical_count() == 0 && self.warning_count() == 0
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::empty()
    }
}

//! # Disclaimer Validation
//!
//! Checks presence and placement of required qualifying language. Benefit
//! claims with no disclaimer anywhere are critical; disclaimers that exist
//! but never appear in the closing window of the piece are warnings.

use once_cell::sync::Lazy;
use regex::Regex;

use mlr_core::{Issue, IssueKind, Location, Severity};
use mlr_corpus::references;

use crate::text::tail_window;

/// A required disclaimer family: detection pattern plus display name.
struct DisclaimerFamily {
    pattern: Regex,
    name: &'static str,
}

static FAMILIES: Lazy<Vec<DisclaimerFamily>> = Lazy::new(|| {
    vec![
        DisclaimerFamily {
            pattern: Regex::new(r"(?i)results?\s+may\s+vary").expect("results pattern"),
            name: "Results may vary",
        },
        DisclaimerFamily {
            pattern: Regex::new(r"(?i)consult.*(?:eye care|physician|doctor|professional)")
                .expect("consult pattern"),
            name: "Consult healthcare professional",
        },
        DisclaimerFamily {
            pattern: Regex::new(r"(?i)(?:based on|in vitro|clinical study|data on file)")
                .expect("data source pattern"),
            name: "Data source",
        },
        DisclaimerFamily {
            pattern: Regex::new(r"(?i)(?:individual\s+)?results.*may\s+vary")
                .expect("individual pattern"),
            name: "Individual variability",
        },
        DisclaimerFamily {
            pattern: Regex::new(r"(?i)not.*all.*patients").expect("suitability pattern"),
            name: "Patient suitability",
        },
    ]
});

/// Benefit vocabulary that makes a disclaimer mandatory.
static BENEFIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:improves|eliminates|corrects|solves|reduces|freedom)\b")
        .expect("benefit pattern")
});

/// Size of the closing window, in characters, where at least one occurrence
/// of each present disclaimer family is expected.
const DISCLAIMER_WINDOW: usize = 500;

/// Validate disclaimer presence and placement over the whole document.
pub fn validate_disclaimers(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    let found: Vec<&DisclaimerFamily> = FAMILIES
        .iter()
        .filter(|family| family.pattern.is_match(text))
        .collect();

    if BENEFIT.is_match(text) && found.is_empty() {
        issues.push(
            Issue::new(
                IssueKind::MissingDisclaimer,
                Severity::Critical,
                Location::DocumentWide,
                "Material contains benefit claims but is missing required disclaimers such as 'Results may vary'",
                "Add disclaimers: 'Results may vary', 'Consult your eye care professional', or similar appropriate statements",
            )
            .with_reference_url(references::url_for("fda_labeling_requirements")),
        );
    }

    if !found.is_empty() {
        let window = tail_window(text, DISCLAIMER_WINDOW);
        for family in &found {
            if !family.pattern.is_match(window) {
                issues.push(
                    Issue::new(
                        IssueKind::MisplacedDisclaimer,
                        Severity::Warning,
                        Location::DocumentWide,
                        format!("Disclaimer '{}' appears far from related claims", family.name),
                        "Move disclaimers closer to related claims for clarity",
                    )
                    .with_snippet(family.name),
                );
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benefit_claims_without_disclaimers_are_critical() {
        let issues = validate_disclaimers("This lens improves clarity dramatically.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingDisclaimer);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].location, Location::DocumentWide);
    }

    #[test]
    fn no_benefit_keywords_means_no_missing_disclaimer() {
        // Even with zero disclaimers present.
        let issues = validate_disclaimers("A short note about wear schedules.");
        assert!(issues.is_empty());
    }

    #[test]
    fn any_disclaimer_family_satisfies_presence() {
        let issues = validate_disclaimers("Reduces dryness. Results may vary.");
        assert!(issues
            .iter()
            .all(|issue| issue.kind != IssueKind::MissingDisclaimer));
    }

    #[test]
    fn disclaimer_far_from_the_end_is_misplaced() {
        let mut text = String::from("Results may vary for individual wearers.\n");
        // Push the disclaimer out of the 500-character closing window.
        for _ in 0..30 {
            text.push_str("Routine handling and cleaning guidance continues below here.\n");
        }
        let issues = validate_disclaimers(&text);
        let misplaced: Vec<_> = issues
            .iter()
            .filter(|issue| issue.kind == IssueKind::MisplacedDisclaimer)
            .collect();
        assert_eq!(misplaced.len(), 2); // "Results may vary" + "Individual variability"
        assert_eq!(misplaced[0].severity, Severity::Warning);
        assert_eq!(misplaced[0].snippet, "Results may vary");
    }

    #[test]
    fn disclaimer_in_closing_window_is_well_placed() {
        let issues = validate_disclaimers("Reduces halos. Consult your eye care professional.");
        assert!(issues.is_empty());
    }
}

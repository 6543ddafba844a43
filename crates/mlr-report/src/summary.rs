//! # Recommendations & Metadata Summary
//!
//! Maps each distinct issue kind present in a result to one canonical
//! recommendation sentence, deduplicates, and renders a numbered list
//! followed by the metadata footer.

use std::collections::BTreeSet;

use mlr_core::{AnalysisResult, IssueKind};

/// The canonical recommendation for each issue kind. One fixed sentence
/// per kind; kinds sharing a remedy share the sentence, which deduplicates
/// them in the rendered list.
fn recommendation_for(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::UnsupportedClaim => {
            "Add supporting data or clinical references to all unsupported claims"
        }
        IssueKind::UnsubstantiatedSuperlatives => "Remove superlatives or add clinical evidence",
        IssueKind::Overpromising | IssueKind::AbsoluteStatement => {
            "Use conditional language ('may', 'can', 'designed to')"
        }
        IssueKind::MissingDisclaimer => "Add required disclaimers",
        IssueKind::UnqualifiedPercentage => {
            "Qualify percentage claims with 'in vitro', 'clinical', or reference study data"
        }
        IssueKind::WeakReference => {
            "Support market claims with published industry data or clinical studies instead of internal estimates"
        }
        IssueKind::UnsupportedComparative => {
            "Support comparative claims with head-to-head clinical data or remove the comparison"
        }
        IssueKind::VagueTestimonial => {
            "Replace testimonial-style wording with specific, evidence-based claims"
        }
        IssueKind::MisleadingLanguage => {
            "Use more measured language with appropriate qualifiers and disclaimers"
        }
        IssueKind::MisplacedDisclaimer => "Move disclaimers closer to relevant claims",
        IssueKind::OverlyTechnical => "Simplify technical terminology for patient audience",
        IssueKind::InappropriateTone => {
            "Replace emotional language with objective, evidence-based terminology"
        }
        IssueKind::InconsistentTrademark => "Ensure consistent product naming and terminology",
        IssueKind::ContradictoryStatement => {
            "Resolve statements that mix positive and negative claims"
        }
    }
}

/// Render the next-steps list and metadata footer as markdown.
pub fn compliance_summary(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if !result.issues.is_empty() {
        out.push_str("## Next Steps\n\n");

        // BTreeSet: deduplicated and alphabetical in one pass.
        let recommendations: BTreeSet<&'static str> = result
            .issues
            .iter()
            .map(|issue| recommendation_for(issue.kind))
            .collect();

        for (idx, recommendation) in recommendations.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", idx + 1, recommendation));
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str(&format!(
        "**Product:** {}\n",
        result.product_detected.as_deref().unwrap_or("Not detected")
    ));
    out.push_str(&format!("**Audience:** {}\n\n", result.audience.title()));
    out.push_str("*Review by qualified regulatory professionals recommended.*\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlr_core::{AudienceType, Issue, Location, Severity};

    fn issue(kind: IssueKind) -> Issue {
        Issue::new(kind, Severity::Critical, Location::Line(1), "d", "s")
    }

    #[test]
    fn clean_result_has_footer_only() {
        let summary = compliance_summary(&AnalysisResult::empty());
        assert!(!summary.contains("## Next Steps"));
        assert!(summary.contains("**Product:** Not detected\n"));
        assert!(summary.contains("**Audience:** Unknown\n"));
        assert!(summary.ends_with("*Review by qualified regulatory professionals recommended.*\n"));
    }

    #[test]
    fn recommendations_are_deduplicated_and_sorted() {
        let result = AnalysisResult {
            issues: vec![
                issue(IssueKind::Overpromising),
                issue(IssueKind::AbsoluteStatement), // same remedy as overpromising
                issue(IssueKind::MissingDisclaimer),
            ],
            ..AnalysisResult::empty()
        };
        let summary = compliance_summary(&result);
        assert!(summary.contains("1. Add required disclaimers\n"));
        assert!(summary.contains("2. Use conditional language ('may', 'can', 'designed to')\n"));
        assert!(!summary.contains("3. "));
    }

    #[test]
    fn footer_reflects_detection() {
        let result = AnalysisResult {
            audience: AudienceType::Patient,
            audience_confidence: 0.8,
            product_detected: Some("Total 30 Contact Lens".to_string()),
            ..AnalysisResult::empty()
        };
        let summary = compliance_summary(&result);
        assert!(summary.contains("**Product:** Total 30 Contact Lens\n"));
        assert!(summary.contains("**Audience:** Patient\n"));
    }

    #[test]
    fn every_kind_maps_to_a_recommendation() {
        for kind in IssueKind::all() {
            assert!(!recommendation_for(*kind).is_empty());
        }
    }
}

//! Full-pipeline behavior over realistic materials.

use mlr_core::{AudienceType, IssueKind, Location, Severity};
use mlr_engine::analyze;

fn count_kind(result: &mlr_core::AnalysisResult, kind: IssueKind) -> usize {
    result.issues.iter().filter(|i| i.kind == kind).count()
}

#[test]
fn identical_input_is_byte_identical() {
    let text = "TOTAL30 lenses deliver superior comfort vs leading brands. Results are always guaranteed. 95% improvement overall.";
    let first = analyze(text, None);
    let second = analyze(text, None);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn no_benefit_keywords_means_no_missing_disclaimer() {
    // No disclaimers present either; the gate is on benefit vocabulary.
    let result = analyze("A plain descriptive paragraph about packaging sizes.", None);
    assert_eq!(count_kind(&result, IssueKind::MissingDisclaimer), 0);
}

#[test]
fn referenced_document_flags_exactly_one_unmarked_high_risk_sentence() {
    let text = "\
Our lens is built for comfort[1].
The design supports daily wear[2].
It provides stable hydration[3].
Comfort is guaranteed for every wearer.";
    let result = analyze(text, None);
    let unsupported: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::UnsupportedClaim)
        .collect();
    assert_eq!(unsupported.len(), 1);
    assert_eq!(unsupported[0].severity, Severity::Critical);
    assert_eq!(unsupported[0].location, Location::Line(4));
}

#[test]
fn approved_claim_with_high_token_overlap_is_compliant() {
    let text = "Patients report more comfortable intermediate vision after surgery. \
        Results may vary. Consult your eye care professional.";
    let result = analyze(text, Some("Clareon PanOptix IOL"));
    assert!(result
        .compliant_claims
        .iter()
        .any(|claim| claim.starts_with("More comfortable intermediate vision")));
}

#[test]
fn absolute_language_sentence_produces_overpromising_issues_and_revision_verdict() {
    let result = analyze(
        "This lens GUARANTEES perfect vision 100% of the time, always.",
        None,
    );
    assert!(count_kind(&result, IssueKind::Overpromising) >= 3);
    assert!(result.critical_count() > 0);
}

#[test]
fn total30_substring_autodetects_the_contact_lens_product() {
    let result = analyze("Ask about total30 availability at your next visit.", None);
    assert_eq!(
        result.product_detected.as_deref(),
        Some("Total 30 Contact Lens")
    );
}

#[test]
fn well_disclaimed_material_is_compliant() {
    let result = analyze(
        "Consult your eye care professional. Results may vary. Based on clinical studies[1].",
        None,
    );
    assert_eq!(result.critical_count(), 0);
    assert_eq!(result.warning_count(), 0);
}

#[test]
fn mixed_trademark_forms_produce_exactly_one_warning() {
    let text = "Total 30 Contact Lens® fits most wearers. Total 30 Contact Lens comes in a toric variant.";
    let result = analyze(text, None);
    let trademark: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::InconsistentTrademark)
        .collect();
    assert_eq!(trademark.len(), 1);
    assert_eq!(trademark[0].severity, Severity::Warning);
}

#[test]
fn empty_input_is_a_valid_empty_result() {
    let result = analyze("", None);
    assert!(result.issues.is_empty());
    assert!(result.compliant_claims.is_empty());
    assert_eq!(result.audience, AudienceType::Unknown);
    assert_eq!(result.audience_confidence, 0.0);
}

#[test]
fn unknown_product_hint_yields_no_matches_and_no_error() {
    let result = analyze("Generic copy with no product mentions.", Some("Unknown Device"));
    assert!(result.compliant_claims.is_empty());
    assert_eq!(result.product_detected.as_deref(), Some("Unknown Device"));
}

#[test]
fn severities_are_fixed_by_detector() {
    let text = "Comfort never improves with other brands. It is completely safe.";
    let result = analyze(text, None);
    for issue in &result.issues {
        match issue.kind {
            IssueKind::ContradictoryStatement | IssueKind::InconsistentTrademark => {
                assert_eq!(issue.severity, Severity::Warning)
            }
            IssueKind::AbsoluteStatement | IssueKind::Overpromising => {
                assert_eq!(issue.severity, Severity::Critical)
            }
            _ => {}
        }
    }
}

#[test]
fn overlapping_detectors_may_both_fire_on_one_line() {
    // "completely safe" is overpromising vocabulary and an absolute
    // negation shape at once; both detectors report it independently.
    let result = analyze("The procedure is completely safe for all patients.", None);
    assert!(count_kind(&result, IssueKind::Overpromising) >= 1);
    assert!(count_kind(&result, IssueKind::AbsoluteStatement) >= 1);
}

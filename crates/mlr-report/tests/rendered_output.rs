//! End-to-end rendering: engine output through both report sections.

use mlr_engine::analyze;
use mlr_report::{compliance_summary, format_report};

#[test]
fn clean_material_renders_compliant() {
    let result = analyze(
        "Consult your eye care professional. Results may vary. Based on clinical studies[1].",
        None,
    );
    assert_eq!(result.critical_count(), 0);
    assert_eq!(result.warning_count(), 0);

    let report = format_report(&result);
    assert!(report.starts_with("**Status:** [OK] Compliant\n\n"));

    let summary = compliance_summary(&result);
    assert!(!summary.contains("## Next Steps"));
    assert!(summary.contains("*Review by qualified regulatory professionals recommended.*"));
}

#[test]
fn problem_material_renders_needs_revision_with_grouped_issues() {
    let result = analyze(
        "This lens GUARANTEES perfect vision 100% of the time, always.",
        None,
    );
    assert!(result.critical_count() > 0);

    let report = format_report(&result);
    assert!(report.contains("[NEEDS REVISION]"));
    assert!(report.contains("**Overpromising Language (3)**"));
    assert!(report.contains("- Fix: "));

    let summary = compliance_summary(&result);
    assert!(summary.contains("## Next Steps"));
    assert!(summary.contains("Use conditional language"));
    assert!(summary.contains("**Product:** Not detected"));
}

#[test]
fn detected_product_reaches_the_footer() {
    let result = analyze(
        "total30 lenses are comfortable. Results may vary. Consult your doctor.",
        None,
    );
    let summary = compliance_summary(&result);
    assert!(summary.contains("**Product:** Total 30 Contact Lens"));
}

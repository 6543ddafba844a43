//! # Issue Report Rendering
//!
//! The scannable report body: status verdict, approved claims with their
//! substantiation stripped, one representative example per critical issue
//! kind, and one compact bullet per warning kind.

use std::collections::BTreeMap;

use mlr_core::{AnalysisResult, Issue, IssueKind, Severity};

/// Substantiation lead-ins stripped from approved claims before display.
/// The earliest occurrence wins.
const REFERENCE_KEYWORDS: &[&str] = &[
    ". 1. In",
    ". 1. Shi",
    ". 2. ",
    ". 3. ",
    ". In a clinical study",
    ". In a clinical",
    ". Based on",
    ". Surface property",
    ". In vitro",
    ". Alcon data",
    ". Shi X",
    ". Schnider",
    ". Ishihara",
    ". Laboratory",
    ". Lehmann",
    " 1. In a clinical",
    " 1. Based on",
    " 1. Surface property",
];

/// Snippet limit for issue examples, in characters.
const SNIPPET_LIMIT: usize = 150;

/// Minimum kept length when truncating back to a word boundary.
const SNIPPET_FLOOR: usize = 75;

/// Curated headings for critical issue groups; kinds without one fall back
/// to the title-cased tag.
fn heading(kind: IssueKind) -> String {
    match kind {
        IssueKind::UnsupportedClaim => "Missing Data Sources".to_string(),
        IssueKind::UnsubstantiatedSuperlatives => "Unsupported Superlatives".to_string(),
        IssueKind::Overpromising => "Overpromising Language".to_string(),
        IssueKind::AbsoluteStatement => "Absolute Language".to_string(),
        IssueKind::UnsupportedComparative => "Unsupported Claims".to_string(),
        IssueKind::MissingDisclaimer => "Missing Disclaimers".to_string(),
        IssueKind::VagueTestimonial => "Vague Language".to_string(),
        IssueKind::UnqualifiedPercentage => "Percentage Claims".to_string(),
        IssueKind::WeakReference => "Weak References".to_string(),
        other => other.title(),
    }
}

/// Strip substantiation text from an approved claim: cut at the earliest
/// reference keyword, then drop trailing periods.
fn strip_substantiation(claim: &str) -> String {
    let lower = claim.to_lowercase();
    let cut = REFERENCE_KEYWORDS
        .iter()
        .filter_map(|keyword| lower.find(&keyword.to_lowercase()))
        .min()
        .unwrap_or(claim.len());
    claim
        .get(..cut)
        .unwrap_or(claim)
        .trim()
        .trim_end_matches('.')
        .to_string()
}

/// Truncate a snippet at the last word boundary before the limit. Never
/// splits mid-word unless the boundary would leave less than the floor.
fn truncate_snippet(snippet: &str) -> String {
    let trimmed = snippet.trim();
    if trimmed.chars().count() <= SNIPPET_LIMIT {
        return trimmed.to_string();
    }

    let head: String = trimmed.chars().take(SNIPPET_LIMIT).collect();
    match head.rfind(' ') {
        Some(idx) if head[..idx].chars().count() > SNIPPET_FLOOR => {
            format!("{}...", &head[..idx])
        }
        _ => format!("{head}..."),
    }
}

/// Render the issue/claims report body as markdown.
pub fn format_report(result: &AnalysisResult) -> String {
    let critical_count = result.critical_count();
    let warning_count = result.warning_count();

    let mut out = String::new();

    // Verdict.
    if critical_count == 0 && warning_count == 0 {
        out.push_str("**Status:** [OK] Compliant\n\n");
    } else if critical_count > 0 {
        out.push_str(&format!(
            "**Status:** [NEEDS REVISION] {critical_count} critical, {warning_count} warning\n\n"
        ));
    } else {
        out.push_str(&format!(
            "**Status:** [MINOR REVISIONS] {warning_count} warning\n\n"
        ));
    }

    out.push_str(&format!(
        "**Summary:** {} approved | {} critical | {} warnings\n\n",
        result.compliant_claims.len(),
        critical_count,
        warning_count
    ));

    out.push_str("---\n\n");

    // Approved claims, substantiation stripped.
    if !result.compliant_claims.is_empty() {
        out.push_str("## Approved Claims\n\n");
        for (idx, claim) in result.compliant_claims.iter().enumerate() {
            out.push_str(&format!("{}. {}\n\n", idx + 1, strip_substantiation(claim)));
        }
    }

    // Critical issues, grouped by kind, sorted by tag, one example each.
    if critical_count > 0 {
        out.push_str("## Issues Found\n\n");

        let mut by_kind: BTreeMap<&'static str, Vec<&Issue>> = BTreeMap::new();
        for issue in &result.issues {
            if issue.severity == Severity::Critical {
                by_kind.entry(issue.kind.as_str()).or_default().push(issue);
            }
        }

        for issues in by_kind.values() {
            let first = issues[0];
            let count_suffix = if issues.len() > 1 {
                format!(" ({})", issues.len())
            } else {
                String::new()
            };
            out.push_str(&format!("**{}{}**\n", heading(first.kind), count_suffix));
            out.push_str(&format!(
                "- Example: \"{}\"\n",
                truncate_snippet(&first.snippet)
            ));
            out.push_str(&format!("- Fix: {}\n\n", first.suggestion));
        }
    }

    // Warnings, one compact bullet per kind, first-occurrence order.
    if warning_count > 0 {
        out.push_str("## Warnings\n\n");

        let mut order: Vec<IssueKind> = Vec::new();
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for issue in &result.issues {
            if issue.severity == Severity::Warning {
                if !order.contains(&issue.kind) {
                    order.push(issue.kind);
                }
                *counts.entry(issue.kind.as_str()).or_default() += 1;
            }
        }

        for kind in order {
            let count = counts.get(kind.as_str()).copied().unwrap_or(0);
            let count_suffix = if count > 1 {
                format!(" ({count})")
            } else {
                String::new()
            };
            let suggestion = result
                .issues
                .iter()
                .find(|i| i.severity == Severity::Warning && i.kind == kind)
                .map(|i| i.suggestion.as_str())
                .unwrap_or_default();
            out.push_str(&format!(
                "- **{}{}**: {}\n",
                kind.title(),
                count_suffix,
                suggestion
            ));
        }

        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlr_core::{Location, Severity};

    fn critical(kind: IssueKind, snippet: &str, suggestion: &str) -> Issue {
        Issue::new(kind, Severity::Critical, Location::Line(1), "d", suggestion)
            .with_snippet(snippet)
    }

    fn warning(kind: IssueKind, suggestion: &str) -> Issue {
        Issue::new(kind, Severity::Warning, Location::DocumentWide, "d", suggestion)
    }

    #[test]
    fn compliant_verdict() {
        let report = format_report(&AnalysisResult::empty());
        assert!(report.starts_with("**Status:** [OK] Compliant\n\n"));
        assert!(report.contains("**Summary:** 0 approved | 0 critical | 0 warnings"));
        assert!(!report.contains("## Issues Found"));
        assert!(!report.contains("## Warnings"));
    }

    #[test]
    fn critical_verdict_shows_both_counts() {
        let result = AnalysisResult {
            issues: vec![
                critical(IssueKind::Overpromising, "always perfect", "fix"),
                warning(IssueKind::MisplacedDisclaimer, "move it"),
            ],
            ..AnalysisResult::empty()
        };
        let report = format_report(&result);
        assert!(report.starts_with("**Status:** [NEEDS REVISION] 1 critical, 1 warning\n\n"));
    }

    #[test]
    fn warnings_only_verdict() {
        let result = AnalysisResult {
            issues: vec![warning(IssueKind::InconsistentTrademark, "standardize")],
            ..AnalysisResult::empty()
        };
        let report = format_report(&result);
        assert!(report.starts_with("**Status:** [MINOR REVISIONS] 1 warning\n\n"));
        assert!(report.contains("- **Inconsistent Trademark**: standardize\n"));
    }

    #[test]
    fn critical_groups_show_one_example_with_count() {
        let result = AnalysisResult {
            issues: vec![
                critical(IssueKind::Overpromising, "first example", "use conditional language"),
                critical(IssueKind::Overpromising, "second example", "use conditional language"),
            ],
            ..AnalysisResult::empty()
        };
        let report = format_report(&result);
        assert!(report.contains("**Overpromising Language (2)**\n"));
        assert!(report.contains("- Example: \"first example\"\n"));
        assert!(!report.contains("second example"));
    }

    #[test]
    fn critical_groups_sort_by_tag() {
        let result = AnalysisResult {
            issues: vec![
                critical(IssueKind::VagueTestimonial, "s", "f"),
                critical(IssueKind::AbsoluteStatement, "s", "f"),
            ],
            ..AnalysisResult::empty()
        };
        let report = format_report(&result);
        let absolute = report.find("**Absolute Language**").unwrap();
        let vague = report.find("**Vague Language**").unwrap();
        assert!(absolute < vague); // absolute_statement < vague_testimonial
    }

    #[test]
    fn approved_claims_are_stripped_and_numbered() {
        let result = AnalysisResult {
            compliant_claims: vec![
                "Feels like nothing, even at day 30. In a clinical study wherein patients (n=66); data on file.".to_string(),
            ],
            ..AnalysisResult::empty()
        };
        let report = format_report(&result);
        assert!(report.contains("1. Feels like nothing, even at day 30\n\n"));
        assert!(!report.contains("clinical study wherein"));
    }

    #[test]
    fn earliest_reference_keyword_wins() {
        // ". 2. " appears before ". Based on"; the earlier cut applies.
        let claim = "Core claim. 2. Footnote. Based on data.";
        assert_eq!(strip_substantiation(claim), "Core claim");
    }

    #[test]
    fn truncation_prefers_word_boundaries() {
        let long = "word ".repeat(40); // 200 chars
        let truncated = truncate_snippet(&long);
        assert!(truncated.ends_with("..."));
        assert!(!truncated.contains("wor...")); // never mid-word
        assert!(truncated.chars().count() <= SNIPPET_LIMIT + 3);
    }

    #[test]
    fn short_snippets_are_untouched() {
        assert_eq!(truncate_snippet("  short  "), "short");
    }
}

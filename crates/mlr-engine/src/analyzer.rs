//! # Orchestrator
//!
//! Sequences the pipeline over one document and one optional product hint.
//! The orchestrator resolves the product, runs every component in a fixed
//! order, and assembles a fresh [`AnalysisResult`]. It never reclassifies
//! severities and holds no state between invocations; concurrent calls
//! against the same configuration are safe.

use mlr_core::AnalysisResult;
use mlr_corpus::{ClaimCorpus, GuidelineTable};

use crate::{audience, consistency, disclaimers, extract, matcher, substantiation, violations};

/// The compliance analysis engine, bound to injected configuration.
///
/// Borrows its corpus and guideline table; construction is free and the
/// analyzer can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    corpus: &'a ClaimCorpus,
    guidelines: &'a GuidelineTable,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer over the given configuration.
    pub fn new(corpus: &'a ClaimCorpus, guidelines: &'a GuidelineTable) -> Self {
        Self { corpus, guidelines }
    }

    /// Analyze one piece of promotional material.
    ///
    /// When `product` is `None` the corpus alias table is consulted; a
    /// product that cannot be resolved simply yields no approved-claim
    /// matches. Identical input always yields an identical result.
    pub fn analyze(&self, text: &str, product: Option<&str>) -> AnalysisResult {
        let mut result = AnalysisResult::empty();

        let product: Option<String> = match product {
            Some(name) => Some(name.to_string()),
            None => self.corpus.detect_product(text).map(str::to_string),
        };
        tracing::debug!(product = ?product, "resolved product for analysis");
        result.product_detected = product.clone();

        // Claim validation.
        let candidates = extract::extract_claims(text);
        result
            .issues
            .extend(substantiation::validate_references(text, &candidates));
        if let Some(name) = product.as_deref() {
            result.compliant_claims = matcher::match_approved_claims(text, name, self.corpus);
        }

        // Disclaimer validation.
        result.issues.extend(disclaimers::validate_disclaimers(text));

        // Regulatory language detection.
        result
            .issues
            .extend(violations::detect_prohibited_language(text, self.guidelines));
        result
            .issues
            .extend(violations::detect_unsupported_comparative(text));
        result
            .issues
            .extend(violations::detect_absolute_negations(text));
        result
            .issues
            .extend(violations::detect_weak_comparatives(text));
        result
            .issues
            .extend(violations::detect_unqualified_percentages(text));
        result
            .issues
            .extend(violations::detect_weak_reference_claims(text));

        // Consistency.
        result
            .issues
            .extend(consistency::check_consistency(text, self.corpus));

        // Tone & audience.
        let (audience, confidence, tone_issues) = audience::analyze_audience(text);
        result.audience = audience;
        result.audience_confidence = confidence;
        result.issues.extend(tone_issues);

        tracing::debug!(
            issues = result.issues.len(),
            compliant_claims = result.compliant_claims.len(),
            audience = %result.audience,
            "analysis complete"
        );
        result
    }
}

impl Default for Analyzer<'static> {
    /// An analyzer over the builtin corpus and guideline table.
    fn default() -> Self {
        Self::new(ClaimCorpus::builtin(), GuidelineTable::builtin())
    }
}

/// Analyze with the builtin configuration.
///
/// Convenience entry point for callers that do not substitute corpora.
pub fn analyze(text: &str, product: Option<&str>) -> AnalysisResult {
    Analyzer::default().analyze(text, product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlr_core::AudienceType;

    #[test]
    fn empty_input_yields_empty_result() {
        let result = analyze("", None);
        assert!(result.issues.is_empty());
        assert!(result.compliant_claims.is_empty());
        assert_eq!(result.audience, AudienceType::Unknown);
        assert_eq!(result.audience_confidence, 0.0);
        assert!(result.product_detected.is_none());
    }

    #[test]
    fn explicit_product_hint_is_echoed_even_when_unknown() {
        let result = analyze("Nothing product-specific here at all.", Some("Mystery Device"));
        assert_eq!(result.product_detected.as_deref(), Some("Mystery Device"));
        assert!(result.compliant_claims.is_empty());
    }

    #[test]
    fn miniature_corpus_substitution() {
        let corpus = ClaimCorpus::from_json(
            r#"{
                "products": {
                    "Lens Q": {
                        "description": "d",
                        "approved_claims": ["Lens Q keeps eyes hydrated during extended wear."]
                    }
                },
                "aliases": [["lensq", "Lens Q"]]
            }"#,
        )
        .unwrap();
        let analyzer = Analyzer::new(&corpus, GuidelineTable::builtin());
        let result = analyzer.analyze(
            "LensQ keeps eyes hydrated during extended wear. Results may vary.",
            None,
        );
        assert_eq!(result.product_detected.as_deref(), Some("Lens Q"));
        assert_eq!(result.compliant_claims.len(), 1);
    }
}

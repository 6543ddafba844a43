//! # Approved-Claim Matching
//!
//! Fuzzy-matches the whole document against a product's approved claims.
//! Each stored claim is truncated at its substantiation delimiter to
//! isolate the core marketing sentence, then matched as a bag of words:
//! a claim is compliant when at least 70% of its significant tokens appear
//! in the document, or when the normalized core sentence appears verbatim.
//!
//! Token matching is order-insensitive by design; see the corpus notes on
//! accepted imprecision before changing the threshold.

use mlr_corpus::ClaimCorpus;

/// Delimiters separating a core claim from its substantiation footnote,
/// checked in order; the first one present wins.
const CLAIM_DELIMITERS: &[&str] = &[
    ". In a clinical",
    ". Based on",
    ". 1.",
    ". Surface property",
    ". In vitro",
];

/// Minimum share of significant tokens that must appear in the document.
const MATCH_THRESHOLD: f64 = 0.70;

/// Tokens this short carry no signal and are ignored.
const MIN_TOKEN_LENGTH: usize = 3;

/// The core marketing sentence of an approved claim, with any
/// substantiation footnote stripped.
pub fn core_claim(claim: &str) -> &str {
    let lower = claim.to_lowercase();
    for delimiter in CLAIM_DELIMITERS {
        if let Some(idx) = lower.find(&delimiter.to_lowercase()) {
            if let Some(main) = claim.get(..idx) {
                return main;
            }
        }
    }
    claim
}

/// Approved claims of `product` found in the material, in corpus order,
/// returned verbatim (substantiation attached).
///
/// Unknown products yield an empty list, not an error.
pub fn match_approved_claims(text: &str, product: &str, corpus: &ClaimCorpus) -> Vec<String> {
    let profile = match corpus.get(product) {
        Some(profile) => profile,
        None => return Vec::new(),
    };

    let text_lower = text.to_lowercase();
    let mut compliant = Vec::new();

    for claim in &profile.approved_claims {
        let normalized = core_claim(claim).to_lowercase().trim().to_string();

        let tokens: Vec<&str> = normalized
            .split_whitespace()
            .filter(|token| token.chars().count() > MIN_TOKEN_LENGTH)
            .collect();
        if tokens.is_empty() {
            continue;
        }

        let matched = tokens
            .iter()
            .filter(|token| text_lower.contains(**token))
            .count();
        let ratio = matched as f64 / tokens.len() as f64;

        if ratio >= MATCH_THRESHOLD || text_lower.contains(&normalized) {
            compliant.push(claim.clone());
        }
    }

    compliant
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> ClaimCorpus {
        ClaimCorpus::from_json(
            r#"{
                "products": {
                    "Lens X": {
                        "description": "Test lens.",
                        "approved_claims": [
                            "Lens X delivers lasting hydration across thirty days. In a clinical study of daily wearers; data on file, 2021.",
                            "Unrelated wording about peripheral optics and haloes."
                        ]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn core_claim_truncates_at_first_delimiter() {
        let claim = "Feels like nothing, even at day 30. In a clinical study wherein patients (n=66); data on file.";
        assert_eq!(core_claim(claim), "Feels like nothing, even at day 30");
    }

    #[test]
    fn core_claim_without_delimiter_is_unchanged() {
        assert_eq!(core_claim("A plain claim."), "A plain claim.");
    }

    #[test]
    fn delimiter_precedence_is_positional_in_the_list() {
        // ". 1." appears earlier in the string, but ". Based on" is checked
        // first and wins.
        let claim = "Claim body. Based on internal review. 1. Footnote.";
        assert_eq!(core_claim(claim), "Claim body");
    }

    #[test]
    fn token_overlap_match() {
        let text = "Wearers report that Lens X delivers lasting hydration over thirty days of use.";
        let matched = match_approved_claims(text, "Lens X", &corpus());
        assert_eq!(matched.len(), 1);
        assert!(matched[0].starts_with("Lens X delivers lasting hydration"));
    }

    #[test]
    fn unrelated_text_does_not_match() {
        let matched = match_approved_claims("A completely different leaflet.", "Lens X", &corpus());
        assert!(matched.is_empty());
    }

    #[test]
    fn unknown_product_yields_empty_list() {
        let matched = match_approved_claims("any text", "Nope", &corpus());
        assert!(matched.is_empty());
    }

    #[test]
    fn threshold_is_seventy_percent_of_tokens() {
        let corpus = ClaimCorpus::from_json(
            r#"{
                "products": {
                    "P": {
                        "description": "d",
                        "approved_claims": ["Advanced optics deliver crisp evening clarity for commuters"]
                    }
                }
            }"#,
        )
        .unwrap();
        // 4 of 7 significant tokens present: below threshold.
        let below = match_approved_claims("Crisp evening clarity for commuters.", "P", &corpus);
        assert!(below.is_empty());
        // 6 of 7 significant tokens present: above threshold.
        let above = match_approved_claims(
            "Our optics deliver crisp evening clarity for commuters.",
            "P",
            &corpus,
        );
        assert_eq!(above.len(), 1);
    }
}

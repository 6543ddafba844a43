//! # Claim Corpus — Per-Product Approved Claims
//!
//! The corpus maps product names to their pre-vetted marketing claims.
//! Each claim string carries its substantiation text inline (the footnote
//! that follows the core marketing sentence); stripping happens at the
//! consumer, not here, so the stored strings stay verbatim.
//!
//! Product detection walks product keys first (direct case-insensitive
//! substring match), then the alias table in declaration order — alias
//! precedence is positional, so the table is a list, not a map.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use mlr_core::MlrError;

use crate::products;

/// One product and its approved promotional claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    /// One-paragraph description of the product.
    pub description: String,
    /// Pre-vetted claims, safe to reuse verbatim, in corpus order.
    /// Substantiation footnotes are embedded after the core sentence.
    pub approved_claims: Vec<String>,
}

/// Immutable mapping from product name to approved claims, plus the alias
/// table used for product auto-detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimCorpus {
    products: BTreeMap<String, ProductProfile>,
    /// `(alias, product key)` pairs, all-lowercase aliases, checked in order.
    #[serde(default)]
    aliases: Vec<(String, String)>,
}

static BUILTIN: Lazy<ClaimCorpus> = Lazy::new(products::builtin_corpus);

impl ClaimCorpus {
    /// Create a corpus from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns [`MlrError::CorpusInvalid`] for empty product names, empty
    /// aliases, or aliases that point at a product the corpus does not hold.
    pub fn new(
        products: BTreeMap<String, ProductProfile>,
        aliases: Vec<(String, String)>,
    ) -> Result<Self, MlrError> {
        let corpus = Self { products, aliases };
        corpus.validate()?;
        Ok(corpus)
    }

    /// The builtin corpus shipped with the stack.
    pub fn builtin() -> &'static ClaimCorpus {
        &BUILTIN
    }

    /// Parse a corpus from a JSON document.
    ///
    /// The document shape matches the serde form of this type:
    /// `{"products": {name: {description, approved_claims}}, "aliases": [[a, p]]}`.
    ///
    /// # Errors
    ///
    /// Returns [`MlrError::CorpusParse`] on malformed JSON and
    /// [`MlrError::CorpusInvalid`] on structural violations.
    pub fn from_json(json: &str) -> Result<Self, MlrError> {
        let corpus: Self = serde_json::from_str(json)?;
        corpus.validate()?;
        Ok(corpus)
    }

    fn validate(&self) -> Result<(), MlrError> {
        for name in self.products.keys() {
            if name.trim().is_empty() {
                return Err(MlrError::CorpusInvalid("product name is empty".to_string()));
            }
        }
        for (alias, target) in &self.aliases {
            if alias.trim().is_empty() {
                return Err(MlrError::CorpusInvalid("alias is empty".to_string()));
            }
            if !self.products.contains_key(target) {
                return Err(MlrError::CorpusInvalid(format!(
                    "alias {alias:?} points at unknown product {target:?}"
                )));
            }
        }
        Ok(())
    }

    /// Look up a product by exact name.
    pub fn get(&self, product: &str) -> Option<&ProductProfile> {
        self.products.get(product)
    }

    /// Iterate products in name order.
    pub fn products(&self) -> impl Iterator<Item = (&str, &ProductProfile)> {
        self.products.iter().map(|(name, p)| (name.as_str(), p))
    }

    /// Number of products in the corpus.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the corpus holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Detect which product a piece of material is about.
    ///
    /// Product keys are tried first as case-insensitive substrings of the
    /// text, in name order; the alias table is consulted after, in
    /// declaration order. Returns the canonical product key.
    pub fn detect_product(&self, text: &str) -> Option<&str> {
        let text_lower = text.to_lowercase();

        for name in self.products.keys() {
            if text_lower.contains(&name.to_lowercase()) {
                return Some(name.as_str());
            }
        }

        for (alias, target) in &self.aliases {
            if text_lower.contains(alias.as_str()) {
                return Some(target.as_str());
            }
        }

        None
    }
}

//! # mlr-engine — Deterministic Compliance Analysis
//!
//! A rule-based, multi-pass text-classification pipeline that scans
//! promotional copy for regulatory issues, cross-references the approved
//! claim corpus, and emits severity-tagged findings:
//!
//! 1. **Extraction** (`extract`): candidate promotional sentences.
//! 2. **Approved-claim matching** (`matcher`): fuzzy bag-of-words match
//!    against the per-product corpus.
//! 3. **Reference validation** (`substantiation`): referenced-document
//!    classification and unsupported-claim flagging.
//! 4. **Disclaimer validation** (`disclaimers`): presence and placement.
//! 5. **Regulatory language** (`violations`): seven independent
//!    lexicon/pattern detectors.
//! 6. **Consistency** (`consistency`): trademark usage and contradictions.
//! 7. **Tone & audience** (`audience`): classification, tone mismatch, and
//!    misleading-language families.
//! 8. **Orchestration** (`analyzer`): fixed-order sequencing into one
//!    [`AnalysisResult`](mlr_core::AnalysisResult).
//!
//! ## Determinism Invariant
//!
//! The engine is pure and synchronous: no I/O, no clock, no randomness,
//! no mutable shared state. Identical `(text, product)` input yields a
//! byte-identical issue list and ordering. Cost is bounded by
//! O(document length × pattern-table size).

pub mod analyzer;
pub mod audience;
pub mod consistency;
pub mod disclaimers;
pub mod extract;
pub mod matcher;
pub mod substantiation;
pub mod violations;

mod text;

pub use analyzer::{analyze, Analyzer};
pub use extract::ClaimCandidate;

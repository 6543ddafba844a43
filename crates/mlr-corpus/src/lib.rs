//! # mlr-corpus — Approved Claims, Guidelines & Citations
//!
//! Read-only configuration consumed by the analysis engine:
//!
//! - [`ClaimCorpus`]: product → approved-claim mapping with alias-based
//!   product detection. A builtin corpus covers the two ophthalmic launch
//!   products; callers and tests substitute miniature corpora via
//!   [`ClaimCorpus::from_json`].
//!
//! - [`GuidelineTable`]: prohibited-language guideline families, each with
//!   compiled detection patterns, a suggestion, and a citation-registry key.
//!
//! - [`references`]: the FDA/FTC guidance registry and the per-issue-kind
//!   citation sets. Lookups are total — an unregistered key resolves to an
//!   empty URL rather than an error.
//!
//! Everything in this crate is immutable after construction. The engine
//! borrows these tables; it never copies or mutates them.

pub mod corpus;
pub mod guidelines;
pub mod products;
pub mod references;

pub use corpus::{ClaimCorpus, ProductProfile};
pub use guidelines::{Guideline, GuidelinePattern, GuidelineTable};
pub use references::{citations_for_kind, url_for, Citation};

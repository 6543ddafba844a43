//! # mlr-core — Foundational Types for the MLR Stack
//!
//! This crate is the bedrock of the MLR pre-screening stack. It defines the
//! issue taxonomy and result envelope shared by every other crate in the
//! workspace; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed issue taxonomy.** [`IssueKind`] is a single enum with one
//!    variant per detector outcome. Every `match` on it is exhaustive —
//!    adding a detector forces the report tables to be updated at compile
//!    time, and a typo in an issue tag is a compile error, not a silent
//!    unrecognized category.
//!
//! 2. **Category is derived, never stored.** [`IssueKind::category()`] is
//!    the one mapping from issue kind to report category. An [`Issue`]
//!    cannot carry a category that disagrees with its kind.
//!
//! 3. **Severity is fixed at the source.** Each detector assigns the
//!    severity of the issues it emits; nothing downstream reclassifies.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mlr-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod issue;
pub mod result;

// Re-export primary types for ergonomic imports.
pub use error::MlrError;
pub use issue::{Issue, IssueCategory, IssueKind, Location, Severity};
pub use result::{AnalysisResult, AudienceType};

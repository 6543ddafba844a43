//! # mlr-report — Report Aggregation & Rendering
//!
//! Turns an [`AnalysisResult`](mlr_core::AnalysisResult) into the two
//! markdown sections callers present to reviewers:
//!
//! - [`format_report`]: verdict, approved-claims listing, critical issues
//!   grouped and deduplicated by kind, and compact warning bullets.
//! - [`compliance_summary`]: canonical next-step recommendations plus the
//!   metadata footer.
//!
//! Severities and issue ordering come in fixed from the engine; this crate
//! only counts, groups, and renders.

pub mod render;
pub mod summary;

pub use render::format_report;
pub use summary::compliance_summary;

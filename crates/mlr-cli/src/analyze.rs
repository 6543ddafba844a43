//! # `mlr analyze` — Run the Compliance Pipeline on a File
//!
//! Reads the material, runs the engine, and prints the report and summary
//! sections (or a JSON envelope mirroring what the chat/web glue consumes).

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use mlr_core::{AnalysisResult, IssueKind};
use mlr_corpus::{references, GuidelineTable};
use mlr_engine::Analyzer;
use mlr_report::{compliance_summary, format_report};

/// Arguments for `mlr analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the material to analyze; use '-' for stdin.
    pub input: PathBuf,

    /// Product to validate against (auto-detected when omitted).
    #[arg(long)]
    pub product: Option<String>,

    /// Path to a JSON claim corpus replacing the builtin one.
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Emit the full result envelope as JSON instead of markdown.
    #[arg(long)]
    pub json: bool,

    /// Append regulatory citations for the issue kinds found.
    #[arg(long)]
    pub citations: bool,
}

/// Run the analyze subcommand.
pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;
    let corpus = crate::load_corpus(args.corpus.as_deref())?;
    tracing::debug!(chars = text.chars().count(), "material loaded");

    let analyzer = Analyzer::new(&corpus, GuidelineTable::builtin());
    let result = analyzer.analyze(&text, args.product.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&envelope(&result))?);
    } else {
        print!("{}", format_report(&result));
        print!("{}", compliance_summary(&result));
        if args.citations {
            print!("{}", citation_section(&result));
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading material from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading material file {}", path.display()))
    }
}

/// The JSON envelope consumed by the surrounding glue: the raw result,
/// derived counts, and both rendered sections.
fn envelope(result: &AnalysisResult) -> serde_json::Value {
    serde_json::json!({
        "result": result,
        "compliant_count": result.compliant_claims.len(),
        "critical_count": result.critical_count(),
        "warning_count": result.warning_count(),
        "report": format_report(result),
        "summary": compliance_summary(result),
    })
}

/// Regulatory citations for the distinct issue kinds found, numbered, in
/// first-occurrence order, deduplicated across kinds.
fn citation_section(result: &AnalysisResult) -> String {
    let mut kinds: Vec<IssueKind> = Vec::new();
    for issue in &result.issues {
        if !kinds.contains(&issue.kind) {
            kinds.push(issue.kind);
        }
    }
    if kinds.is_empty() {
        return String::new();
    }

    let mut seen = Vec::new();
    let mut out = String::from("\n## Regulatory References\n\n");
    for kind in kinds {
        for citation in references::citations_for_kind(kind) {
            if seen.contains(&citation.key) {
                continue;
            }
            seen.push(citation.key);
            out.push_str(&format!(
                "[{}] {}: {}\n",
                seen.len(),
                citation.short_citation,
                citation.url
            ));
        }
    }
    out
}

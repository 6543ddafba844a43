//! # mlr CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// MLR pre-screening CLI.
///
/// Scans promotional material for regulatory issues, cross-references the
/// approved-claim corpus, and renders a severity-tagged compliance report.
#[derive(Parser, Debug)]
#[command(name = "mlr", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze promotional material for compliance issues.
    Analyze(mlr_cli::analyze::AnalyzeArgs),
    /// List the products and approved claims in the corpus.
    Products(mlr_cli::products::ProductsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => mlr_cli::analyze::run(args),
        Commands::Products(args) => mlr_cli::products::run(args),
    }
}

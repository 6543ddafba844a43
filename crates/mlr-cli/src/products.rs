//! # `mlr products` — Inspect the Claim Corpus
//!
//! Lists each product with its description and approved-claim count.

use std::path::PathBuf;

use clap::Args;

use mlr_corpus::ClaimCorpus;

/// Arguments for `mlr products`.
#[derive(Args, Debug)]
pub struct ProductsArgs {
    /// Path to a JSON claim corpus replacing the builtin one.
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}

/// Run the products subcommand.
pub fn run(args: ProductsArgs) -> anyhow::Result<()> {
    let corpus = crate::load_corpus(args.corpus.as_deref())?;
    print!("{}", listing(&corpus));
    Ok(())
}

fn listing(corpus: &ClaimCorpus) -> String {
    let mut out = String::new();
    for (name, profile) in corpus.products() {
        out.push_str(&format!(
            "{} ({} approved claims)\n    {}\n",
            name,
            profile.approved_claims.len(),
            profile.description
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_names_every_product() {
        let listing = listing(ClaimCorpus::builtin());
        assert!(listing.contains("Total 30 Contact Lens (10 approved claims)"));
        assert!(listing.contains("Clareon PanOptix IOL (10 approved claims)"));
    }
}

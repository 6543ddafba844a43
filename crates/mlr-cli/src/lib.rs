//! # mlr-cli — Command-Line Caller for the MLR Stack
//!
//! Thin glue over the engine: reads material from a file or stdin, loads
//! an optional substitute corpus, runs the analysis, and prints the
//! rendered report or a JSON envelope. All file I/O lives here; the engine
//! itself never touches the filesystem.

use std::borrow::Cow;
use std::path::Path;

use anyhow::Context;

use mlr_corpus::ClaimCorpus;

pub mod analyze;
pub mod products;

/// Load the claim corpus: a JSON file when given, the builtin otherwise.
pub(crate) fn load_corpus(path: Option<&Path>) -> anyhow::Result<Cow<'static, ClaimCorpus>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading corpus file {}", path.display()))?;
            let corpus = ClaimCorpus::from_json(&json)
                .with_context(|| format!("parsing corpus file {}", path.display()))?;
            Ok(Cow::Owned(corpus))
        }
        None => Ok(Cow::Borrowed(ClaimCorpus::builtin())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_corpus_is_builtin() {
        let corpus = load_corpus(None).unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn corpus_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products": {{"P": {{"description": "d", "approved_claims": []}}}}}}"#
        )
        .unwrap();
        let corpus = load_corpus(Some(file.path())).unwrap();
        assert_eq!(corpus.len(), 1);
        assert!(corpus.get("P").is_some());
    }

    #[test]
    fn missing_corpus_file_is_an_error() {
        let err = load_corpus(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("reading corpus file"));
    }
}

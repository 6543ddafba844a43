//! Builtin product corpus — real approved-claim content.
//!
//! One module per launch product. Claims are stored verbatim as vetted,
//! including their substantiation footnotes; consumers strip the footnote
//! text at the delimiter set they care about.

use std::collections::BTreeMap;

use crate::corpus::{ClaimCorpus, ProductProfile};

mod contact_lens;
mod iol;

/// Assemble the builtin corpus: both launch products plus the alias table
/// used for product auto-detection. Aliases are checked in declaration
/// order, so the specific spellings come before the generic category terms.
pub(crate) fn builtin_corpus() -> ClaimCorpus {
    let mut products = BTreeMap::new();
    products.insert(iol::PRODUCT_NAME.to_string(), iol::profile());
    products.insert(
        contact_lens::PRODUCT_NAME.to_string(),
        contact_lens::profile(),
    );

    let aliases = vec![
        ("total30".to_string(), contact_lens::PRODUCT_NAME.to_string()),
        ("total 30".to_string(), contact_lens::PRODUCT_NAME.to_string()),
        ("clareon".to_string(), iol::PRODUCT_NAME.to_string()),
        ("panoptix".to_string(), iol::PRODUCT_NAME.to_string()),
        ("iol".to_string(), iol::PRODUCT_NAME.to_string()),
        ("intraocular".to_string(), iol::PRODUCT_NAME.to_string()),
    ];

    ClaimCorpus::new(products, aliases)
        .expect("builtin corpus is statically valid")
}

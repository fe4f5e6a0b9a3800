use flexstr::ToSharedStr;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::AccessionSet;

static ACCESSION_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("invalid accession separator regex"));

// Wrap the accession from a request path so that single and batch
// requests are handled the same way
pub fn accession_set_from_path(acc: &str) -> AccessionSet {
    let mut accs = AccessionSet::with_capacity(1);
    accs.insert(acc.to_shared_str());
    accs
}

// Split a request body like "P12345, Q9Y6K9,O14920" into a set of
// accessions.  Duplicates and empty entries are dropped.  The format of
// the accessions isn't checked.
pub fn accession_set_from_body(body: &str) -> AccessionSet {
    ACCESSION_SEPARATOR_RE.split(body.trim())
        .filter(|acc| !acc.is_empty())
        .map(|acc| acc.to_shared_str())
        .collect()
}

use std::collections::HashSet;

use flexstr::SharedStr as FlexStr;

pub type Accession = FlexStr;
pub type Alias = FlexStr;
pub type InteractionAccession = FlexStr;
pub type ResourceName = FlexStr;

pub type Score = f64;

// batch requests are deduplicated, so accessions are always passed
// around as a set
pub type AccessionSet = HashSet<Accession>;

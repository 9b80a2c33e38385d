//! Keyword dictionary: the set of tokens kept verbatim by the normalizer.
//!
//! ## Key Components
//!
//! - `dictionary`: immutable set used for read-only lookups at vectorization time
//! - `builder`: offline corpus statistics that select the most representative tokens
//!
//! The dictionary is built once from a labelled corpus, shipped inside the
//! feature artifact, and loaded read-only. It is passed explicitly to the
//! pipeline; there is no process-global instance.

mod builder;
mod dictionary;

pub use builder::KeywordStatistics;
pub use dictionary::KeywordDictionary;

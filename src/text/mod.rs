//! Text normalization for the search index.
//!
//! This module turns raw file content into the extra token streams stored alongside
//! it: camel-case decompositions, version keywords, operator characters and the
//! multi-pass cleaned code.

pub(crate) mod clean;
pub(crate) mod tokenize;

pub use clean::{code_clean_pipeline, count_filtered_lines, language_cost_ignore};
pub use tokenize::{
    add_to_spelling_corrector, find_interesting_characters, find_interesting_keywords,
    split_keywords,
};

pub(crate) use clean::trim_blank;

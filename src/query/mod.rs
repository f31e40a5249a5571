//! Search-time query processing: escaping, boolean formatting and fallback queries.

pub(crate) mod alt;
pub(crate) mod escape;
pub(crate) mod format;

pub use escape::{LuceneEscaper, TermEscaper};
pub use format::QueryFormatter;

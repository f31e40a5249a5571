//! Text normalization and query processing for a source-code search engine.
//!
//! - [`text`]: extra index tokens derived from file content
//! - [`classify`]: binary and minified file detection
//! - [`query`]: boolean query formatting and fallback queries
//! - [`ownership`]: time-decayed code ownership and project summaries
//!
//! All operations are synchronous and read only their arguments and an immutable
//! [`Config`]. The one piece of shared mutable state, the [`SpellingCorrector`], is
//! always passed in explicitly.

pub mod classify;
pub mod config;
pub mod error;
pub mod ownership;
pub mod query;
pub mod spelling;
pub mod text;
pub mod tracing;

pub use classify::{BinaryFinding, BuiltinLanguages, FileClassificationPolicy, FileClassifier};
pub use config::Config;
pub use error::ConfigError;
pub use ownership::{CodeOwner, ProjectStats, code_owner, generate_bus_blurb};
pub use query::{LuceneEscaper, QueryFormatter, TermEscaper};
pub use spelling::{DictionaryCorrector, SpellingCorrector};

//! File eligibility checks run before content reaches the index.

pub(crate) mod languages;
pub(crate) mod policy;

pub use languages::{BuiltinLanguages, FileClassifier, FileClassifierResult};
pub use policy::{BinaryFinding, FileClassificationPolicy};

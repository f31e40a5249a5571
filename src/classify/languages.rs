//! Known file types, used to vouch for extensions before any content heuristic runs.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One known file type and the extensions (lowercase, no leading dot) that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileClassifierResult {
    pub language: String,
    pub extensions: Vec<String>,
}

/// A database of recognised file types.
pub trait FileClassifier: Send + Sync {
    fn database(&self) -> &[FileClassifierResult];
}

static BUILTIN_DATABASE: LazyLock<Vec<FileClassifierResult>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../data/languages.json"))
        .expect("embedded language database is valid JSON")
});

/// The language database shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLanguages;

impl FileClassifier for BuiltinLanguages {
    fn database(&self) -> &[FileClassifierResult] {
        &BUILTIN_DATABASE
    }
}

impl FileClassifier for Vec<FileClassifierResult> {
    fn database(&self) -> &[FileClassifierResult] {
        self
    }
}

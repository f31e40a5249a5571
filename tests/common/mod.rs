//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `config`: default configuration with a small whitelist and blacklist
//! - `policy`: a [`FileClassificationPolicy`] over the built-in language database
//! - `formatter`: a [`QueryFormatter`] in AND-default mode
//! - `trained_corrector`: a [`DictionaryCorrector`] fed from [`SAMPLE_SOURCE`]
//!
//! [`TempConfig`] writes configuration documents to a temporary directory for tests
//! that exercise file loading.

use rstest::fixture;
use searchcode_text::text::add_to_spelling_corrector;
use searchcode_text::{
    BuiltinLanguages, Config, DictionaryCorrector, FileClassificationPolicy, QueryFormatter,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small Java source file used as indexing input.
#[allow(dead_code)] // Used across different integration test crates
pub const SAMPLE_SOURCE: &str = r#"package com.searchcode.app;

// Indexes repositories
public class RegexIndexer {
    private static final String VERSION = "linux2.7.4";

    public int countMatches(String input) {
        int total = 0;
        for(int i=0;i<input.length();i++){
            total++;
        }
        return total;
    }
}
"#;

/// A temporary directory holding configuration files.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempConfig {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempConfig {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `content` to `name` and returns the full path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(name);
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write config '{}': {}", name, e));
        full_path
    }
}

#[fixture]
pub fn config() -> Config {
    searchcode_text::tracing::init();
    Config {
        binary_whitelist: vec!["min.js".to_string()],
        binary_blacklist: vec!["png".to_string(), "jar".to_string()],
        ..Config::default()
    }
}

#[fixture]
#[allow(dead_code)]
pub fn policy(config: Config) -> FileClassificationPolicy {
    FileClassificationPolicy::new(&config, &BuiltinLanguages)
}

#[fixture]
#[allow(dead_code)]
pub fn formatter(config: Config) -> QueryFormatter {
    QueryFormatter::new(&Config {
        and_match_default: true,
        ..config
    })
}

#[fixture]
#[allow(dead_code)]
pub fn trained_corrector(config: Config) -> DictionaryCorrector {
    let corrector = DictionaryCorrector::new();
    add_to_spelling_corrector(SAMPLE_SOURCE, config.max_split_length, &corrector);
    corrector
}

/// Splits content into lines the way the indexer hands them over.
#[allow(dead_code)]
pub fn lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

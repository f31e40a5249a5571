//! Binary and minified file detection.
//!
//! Files flagged here are kept out of the index. Configured extension lists always win
//! over the built-in language database, which in turn wins over the content heuristics.

use super::languages::FileClassifier;
use crate::config::{Config, normalize_extension};
use crate::text::trim_blank;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Lines sampled by the ASCII-ratio heuristic.
const MAX_SAMPLED_LINES: usize = 10_000;

/// Below this share of ASCII characters a file is considered binary.
const MIN_ASCII_RATIO: f64 = 0.30;

/// Highest UTF-16 code unit counted as ASCII.
const ASCII_LIMIT: u16 = 128;

/// Outcome of a binary check together with the reason for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryFinding {
    pub is_binary: bool,
    /// Short human-readable cause; empty when no particular reason applies.
    pub reason: String,
}

impl BinaryFinding {
    fn binary(reason: &str) -> Self {
        Self {
            is_binary: true,
            reason: reason.to_string(),
        }
    }

    fn text(reason: &str) -> Self {
        Self {
            is_binary: false,
            reason: reason.to_string(),
        }
    }
}

/// Every suffix of `lower_name` that follows a dot, longest first.
///
/// `lib.min.js` yields `min.js` then `js`, so an extension matches exactly when the
/// filename ends with `.` followed by it.
fn dotted_suffixes(lower_name: &str) -> impl Iterator<Item = &str> {
    lower_name
        .match_indices('.')
        .map(move |(index, _)| &lower_name[index + 1..])
}

/// Normalizes a configured list the same way parsed lists are.
fn normalized_set(extensions: &[String]) -> AHashSet<String> {
    extensions
        .iter()
        .map(|extension| normalize_extension(extension))
        .filter(|extension| !extension.is_empty())
        .collect()
}

/// Decides which files are indexable, from configuration and a language database.
#[derive(Debug, Clone)]
pub struct FileClassificationPolicy {
    whitelist: AHashSet<String>,
    blacklist: AHashSet<String>,
    known_extensions: AHashSet<String>,
    guess_binary: bool,
    minified_length: usize,
}

impl FileClassificationPolicy {
    pub fn new(config: &Config, classifier: &dyn FileClassifier) -> Self {
        let known_extensions = classifier
            .database()
            .iter()
            .flat_map(|entry| entry.extensions.iter())
            .map(|extension| normalize_extension(extension))
            .filter(|extension| !extension.is_empty())
            .collect();

        Self {
            whitelist: normalized_set(&config.binary_whitelist),
            blacklist: normalized_set(&config.binary_blacklist),
            known_extensions,
            guess_binary: config.guess_binary,
            minified_length: config.minified_length,
        }
    }

    fn is_whitelisted(&self, lower_name: &str) -> bool {
        dotted_suffixes(lower_name).any(|suffix| self.whitelist.contains(suffix))
    }

    /// Whether the file looks minified, using the configured length threshold.
    pub fn is_minified<S: AsRef<str>>(&self, lines: &[S], file_name: &str) -> bool {
        self.is_minified_with_length(lines, file_name, self.minified_length)
    }

    /// Whether the average line length, ignoring surrounding blanks and inner spaces,
    /// exceeds `minified_length`. Whitelisted files and empty files are never minified.
    pub fn is_minified_with_length<S: AsRef<str>>(
        &self,
        lines: &[S],
        file_name: &str,
        minified_length: usize,
    ) -> bool {
        if lines.is_empty() || self.is_whitelisted(&file_name.to_lowercase()) {
            return false;
        }

        let total: usize = lines
            .iter()
            .map(|line| {
                trim_blank(line.as_ref())
                    .chars()
                    .filter(|c| *c != ' ')
                    .count()
            })
            .sum();
        let average = total as f64 / lines.len() as f64;

        let minified = average > minified_length as f64;
        if minified {
            tracing::debug!(
                "{} looks minified: average line length {:.1} exceeds {}",
                file_name,
                average,
                minified_length
            );
        }
        minified
    }

    /// Classify a file as binary or text.
    ///
    /// The first matching rule wins: empty content, configured whitelist, configured
    /// blacklist, known language extension, then (if enabled) the share of ASCII
    /// characters in the first 10,000 lines.
    pub fn is_binary<S: AsRef<str>>(&self, lines: &[S], file_name: &str) -> BinaryFinding {
        let finding = self.classify(lines, file_name);
        tracing::debug!(
            "{}: binary={} ({})",
            file_name,
            finding.is_binary,
            if finding.reason.is_empty() {
                "no reason"
            } else {
                finding.reason.as_str()
            }
        );
        finding
    }

    fn classify<S: AsRef<str>>(&self, lines: &[S], file_name: &str) -> BinaryFinding {
        if lines.is_empty() {
            return BinaryFinding::binary("file is empty");
        }

        let lower_name = file_name.to_lowercase();

        if self.is_whitelisted(&lower_name) {
            return BinaryFinding::text("appears in extension whitelist");
        }

        if dotted_suffixes(&lower_name).any(|suffix| self.blacklist.contains(suffix)) {
            return BinaryFinding::binary("appears in extension blacklist");
        }

        if dotted_suffixes(&lower_name).any(|suffix| self.known_extensions.contains(suffix)) {
            return BinaryFinding::text("appears in internal extension whitelist");
        }

        if !self.guess_binary {
            return BinaryFinding::text("");
        }

        let mut ascii_count: u64 = 0;
        let mut non_ascii_count: u64 = 0;

        for line in lines.iter().take(MAX_SAMPLED_LINES) {
            for unit in line.as_ref().encode_utf16() {
                if unit <= ASCII_LIMIT {
                    ascii_count += 1;
                } else {
                    non_ascii_count += 1;
                }
            }
        }

        if non_ascii_count == 0 {
            return BinaryFinding::text("");
        }

        if ascii_count == 0 {
            return BinaryFinding::binary("all characters found non-ascii");
        }

        let ratio = ascii_count as f64 / (ascii_count + non_ascii_count) as f64;
        if ratio < MIN_ASCII_RATIO {
            return BinaryFinding::binary("only 30% of characters are non-ascii");
        }

        BinaryFinding::text("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::languages::{BuiltinLanguages, FileClassifierResult};
    use assert2::check;
    use rstest::{fixture, rstest};

    fn config_with(whitelist: &[&str], blacklist: &[&str], guess_binary: bool) -> Config {
        Config {
            binary_whitelist: whitelist.iter().map(|s| s.to_string()).collect(),
            binary_blacklist: blacklist.iter().map(|s| s.to_string()).collect(),
            guess_binary,
            minified_length: 20,
            ..Config::default()
        }
    }

    #[fixture]
    fn policy() -> FileClassificationPolicy {
        FileClassificationPolicy::new(
            &config_with(&["js", "dat"], &["png", "js"], true),
            &BuiltinLanguages,
        )
    }

    #[rstest]
    fn test_empty_file_is_binary(policy: FileClassificationPolicy) {
        let lines: &[&str] = &[];
        let finding = policy.is_binary(lines, "x.txt");
        check!(finding.is_binary);
        check!(finding.reason == "file is empty");
    }

    #[rstest]
    fn test_whitelist_beats_blacklist_and_content(policy: FileClassificationPolicy) {
        let finding = policy.is_binary(&["ÿÿÿÿÿÿÿÿ"], "app.JS");
        check!(!finding.is_binary);
        check!(finding.reason == "appears in extension whitelist");
    }

    #[rstest]
    fn test_blacklist(policy: FileClassificationPolicy) {
        let finding = policy.is_binary(&["plain ascii"], "logo.png");
        check!(finding.is_binary);
        check!(finding.reason == "appears in extension blacklist");
    }

    #[rstest]
    fn test_known_language_extension(policy: FileClassificationPolicy) {
        let finding = policy.is_binary(&["ÿÿÿÿÿÿÿÿ"], "main.rs");
        check!(!finding.is_binary);
        check!(finding.reason == "appears in internal extension whitelist");
    }

    #[rstest]
    #[case(&["just ascii"], false, "")]
    #[case(&["ÿÿÿÿ"], true, "all characters found non-ascii")]
    #[case(&["aÿÿÿ"], true, "only 30% of characters are non-ascii")]
    #[case(&["aaÿÿÿ"], false, "")]
    #[case(&["abc\u{80}"], false, "")]
    fn test_ascii_ratio_heuristic(
        policy: FileClassificationPolicy,
        #[case] lines: &[&str],
        #[case] is_binary: bool,
        #[case] reason: &str,
    ) {
        let finding = policy.is_binary(lines, "blob.unknownext");
        check!(finding.is_binary == is_binary);
        check!(finding.reason == reason);
    }

    #[test]
    fn test_astral_characters_count_twice() {
        let policy = FileClassificationPolicy::new(&config_with(&[], &[], true), &BuiltinLanguages);
        // 1 ASCII unit against 2 surrogate units: 33% ASCII, not binary.
        check!(!policy.is_binary(&["a🦀"], "blob").is_binary);
        // 1 against 4: 20% ASCII, binary.
        check!(policy.is_binary(&["a🦀🦀"], "blob").is_binary);
    }

    #[test]
    fn test_guessing_disabled() {
        let policy =
            FileClassificationPolicy::new(&config_with(&[], &[], false), &BuiltinLanguages);
        let finding = policy.is_binary(&["ÿÿÿÿ"], "blob.unknownext");
        check!(!finding.is_binary);
        check!(finding.reason.is_empty());
    }

    #[test]
    fn test_only_first_lines_are_sampled() {
        let policy = FileClassificationPolicy::new(&config_with(&[], &[], true), &BuiltinLanguages);
        let mut lines = vec!["ascii".to_string(); MAX_SAMPLED_LINES];
        lines.extend(std::iter::repeat_n("ÿÿÿÿÿÿÿÿÿÿÿÿ".to_string(), 50_000));
        check!(!policy.is_binary(&lines, "blob").is_binary);
    }

    #[test]
    fn test_custom_classifier_database() {
        let database = vec![FileClassifierResult {
            language: "Widget".to_string(),
            extensions: vec!["wdg".to_string()],
        }];
        let policy = FileClassificationPolicy::new(&config_with(&[], &[], true), &database);
        check!(!policy.is_binary(&["ÿÿÿÿ"], "thing.wdg").is_binary);
        check!(policy.is_binary(&["ÿÿÿÿ"], "thing.rs").is_binary);
    }

    #[rstest]
    #[case(&["aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"], "bundle.css", true)]
    #[case(&["aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"], "bundle.js", false)]
    #[case(&["aaaaaaaaaaaaaaaaaaaa"], "bundle.css", false)]
    #[case(&["a b c d e f g h i j k l m n o p q r s t u v"], "bundle.css", true)]
    #[case(&["  aaaaaaaaaa  ", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"], "bundle.css", true)]
    fn test_is_minified(
        policy: FileClassificationPolicy,
        #[case] lines: &[&str],
        #[case] file_name: &str,
        #[case] expected: bool,
    ) {
        check!(policy.is_minified(lines, file_name) == expected);
    }

    #[rstest]
    fn test_is_minified_empty_and_override(policy: FileClassificationPolicy) {
        let empty: &[&str] = &[];
        check!(!policy.is_minified(empty, "bundle.css"));
        check!(policy.is_minified_with_length(&["aaaaaa"], "bundle.css", 5));
        check!(!policy.is_minified_with_length(&["aaaaaa"], "bundle.css", 6));
    }

    #[test]
    fn test_hand_built_lists_are_normalized() {
        let policy = FileClassificationPolicy::new(
            &config_with(&[" .Min.JS"], &["PNG", ".jar", ""], true),
            &BuiltinLanguages,
        );
        for file_name in ["logo.png", "app.jar"] {
            let finding = policy.is_binary(&["plain ascii"], file_name);
            check!(finding.reason == "appears in extension blacklist");
        }
        check!(!policy.is_binary(&["ÿÿÿÿ"], "lib.min.js").is_binary);
        check!(!policy.is_minified(&["a".repeat(300)], "lib.min.js"));
        // An empty entry must not match names ending in a dot.
        check!(policy.is_binary(&["ÿÿÿÿ"], "blob.").is_binary);
    }

    #[test]
    fn test_dotted_suffixes() {
        let suffixes: Vec<_> = dotted_suffixes("lib.min.js").collect();
        check!(suffixes == vec!["min.js", "js"]);
        check!(dotted_suffixes("makefile").next().is_none());
    }
}

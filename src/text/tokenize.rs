//! Keyword extraction for search indexing.
//!
//! Each function returns extra text that is appended to a file's indexed content so
//! that compound identifiers, version strings and operator runs become searchable on
//! their own.

use crate::spelling::SpellingCorrector;
use regex::Regex;
use std::sync::LazyLock;

/// Appended after truncation so the cut-off word can never pass as a real identifier.
pub(crate) const TRUNCATION_SENTINEL: &str = "AAA";

/// Shortest word considered for camel-case splitting.
const MIN_SPLIT_WORD_LENGTH: usize = 7;

/// Words fed into the spelling corrector per call.
const MAX_SPELLING_TOKENS: usize = 10_000;

/// Shortest word fed into the spelling corrector.
const MIN_SPELLING_TOKEN_LENGTH: usize = 3;

/// Two or more capitals in a row mark an acronym, which is never split.
static MULTIPLE_UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]{2,}").expect("valid acronym pattern"));

/// Lowercase word followed by up to two `N.` groups and a final number or `*`,
/// e.g. `linux2.7.4`, `php7`, `v*`.
static VERSIONED_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z]+([0-9]+\.)?([0-9]+\.)?(\*|[0-9]+)").expect("valid version pattern")
});

/// Returns at most the first `max_chars` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Replaces everything outside `[A-Za-z0-9]` with a space.
fn alphanumeric_only(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Truncates oversized input and marks the cut with [`TRUNCATION_SENTINEL`].
fn bounded(text: &str, max_split_length: usize) -> std::borrow::Cow<'_, str> {
    let truncated = truncate_chars(text, max_split_length);
    if truncated.len() == text.len() {
        return std::borrow::Cow::Borrowed(text);
    }

    tracing::debug!(
        "Truncating {} bytes of content to {} characters before keyword extraction",
        text.len(),
        max_split_length
    );
    std::borrow::Cow::Owned(format!("{}{}", truncated, TRUNCATION_SENTINEL))
}

/// Splits `word` immediately before every uppercase letter after the first character.
fn split_before_uppercase(word: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, c) in word.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            pieces.push(&word[start..i]);
            start = i;
        }
    }
    pieces.push(&word[start..]);

    pieces
}

/// Decomposes camel-case identifiers into their sub-words.
///
/// `RegexIndexer` contributes ` Regex Indexer`. Only words of at least seven
/// alphanumeric characters without an acronym run (`HTTPServer`) are split, and only
/// words that actually break into more than one piece contribute output.
pub fn split_keywords(content: &str, max_split_length: usize) -> String {
    let mut output = String::new();
    let cleaned = alphanumeric_only(content);
    let cleaned = bounded(&cleaned, max_split_length);

    for word in cleaned.split(' ') {
        if word.len() < MIN_SPLIT_WORD_LENGTH || MULTIPLE_UPPERCASE.is_match(word) {
            continue;
        }

        let pieces = split_before_uppercase(word);
        if pieces.len() > 1 {
            output.push(' ');
            output.push_str(&pieces.join(" "));
        }
    }

    output
}

/// Extracts version-like tokens such as `linux2.7.4`, each preceded by a space.
pub fn find_interesting_keywords(content: &str, max_split_length: usize) -> String {
    let text = bounded(content, max_split_length);

    VERSIONED_WORD
        .find_iter(&text)
        .fold(String::new(), |mut output, found| {
            output.push(' ');
            output.push_str(found.as_str());
            output
        })
}

/// Keeps every character that is not an ASCII word character, each followed by a space.
///
/// `(i++)` becomes `( + + ) `, which makes operator searches like `i++` possible.
pub fn find_interesting_characters(content: &str) -> String {
    let mut output = String::new();

    for c in content
        .chars()
        .filter(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        output.push(c);
        output.push(' ');
    }

    output
}

/// Teaches the spelling corrector the words found in `content`.
///
/// The content is capped at `max_split_length` characters and only the first 10,000
/// space-separated pieces are examined; pieces shorter than three characters are skipped.
pub fn add_to_spelling_corrector(
    content: &str,
    max_split_length: usize,
    corrector: &dyn SpellingCorrector,
) {
    let cleaned = alphanumeric_only(truncate_chars(content, max_split_length)).to_lowercase();

    let mut learned = 0usize;
    for word in cleaned
        .split(' ')
        .take(MAX_SPELLING_TOKENS)
        .filter(|word| word.len() >= MIN_SPELLING_TOKEN_LENGTH)
    {
        corrector.put_word(word);
        learned += 1;
    }

    tracing::trace!("Added {} words to the spelling corrector", learned);
}

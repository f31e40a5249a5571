//! Alternate query generation.
//!
//! When a query finds little or nothing, callers retry with the alternatives produced
//! here, in order. Each is looser than the last: punctuation stripped, camel case
//! split, spelling corrected, then `AND` and `NOT` relaxed.

use super::escape::TermEscaper;
use super::format::{Operator, QueryFormatter};
use crate::spelling::SpellingCorrector;
use crate::text::{split_keywords, trim_blank};
use regex::Regex;
use std::sync::LazyLock;

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" +").expect("valid space pattern"));

static NOT_ALPHANUMERIC_OR_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Za-z0-9 ]").expect("valid punctuation pattern"));

/// Collects alternatives, skipping blanks, duplicates and the original query.
struct Alternatives<'q> {
    query: &'q str,
    found: Vec<String>,
}

impl<'q> Alternatives<'q> {
    const fn new(query: &'q str) -> Self {
        Self {
            query,
            found: Vec::new(),
        }
    }

    fn push(&mut self, candidate: String, ignore_case: bool) {
        let same_as_query = if ignore_case {
            candidate.to_lowercase() == self.query.to_lowercase()
        } else {
            candidate == self.query
        };

        if candidate.is_empty() || same_as_query || self.found.contains(&candidate) {
            return;
        }
        self.found.push(candidate);
    }
}

impl<E: TermEscaper> QueryFormatter<E> {
    /// Generate looser variants of `query`, most specific first.
    ///
    /// The result never contains the query itself, an empty string or a duplicate.
    /// Output depends only on the query and the corrector's current dictionary.
    pub fn alt_queries(&self, query: &str, corrector: &dyn SpellingCorrector) -> Vec<String> {
        let query = SPACE_RUNS.replace_all(trim_blank(query), " ");
        let query = query.as_ref();
        let mut alternatives = Alternatives::new(query);

        let stripped = NOT_ALPHANUMERIC_OR_SPACE.replace_all(query, " ");
        alternatives.push(
            SPACE_RUNS.replace_all(stripped.trim(), " ").into_owned(),
            false,
        );

        alternatives.push(
            split_keywords(query, self.max_split_length)
                .trim()
                .to_string(),
            false,
        );

        let corrected: Vec<String> = query
            .split(' ')
            .filter(|word| Operator::parse(word.trim()).is_none())
            .map(|word| corrector.correct(word))
            .collect();
        alternatives.push(corrected.join(" ").trim().to_string(), true);

        alternatives.push(query.replace(" AND ", " OR "), true);
        alternatives.push(query.replace(" AND ", " "), true);
        alternatives.push(query.replace(" NOT ", " "), true);

        tracing::trace!(
            "Generated {} alternate queries for '{}'",
            alternatives.found.len(),
            query
        );

        alternatives.found
    }
}

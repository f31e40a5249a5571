//! Spelling correction seam used by indexing and alternate-query generation.

use ahash::AHashMap;
use rapidfuzz::distance::levenshtein;
use std::sync::{PoisonError, RwLock};

/// Largest edit distance at which a dictionary word is offered as a correction.
const MAX_EDIT_DISTANCE: usize = 2;

/// A dictionary that learns words from indexed content and proposes corrections.
///
/// Implementations own their locking: both methods take `&self` so a single corrector
/// can be shared between indexing threads and query handlers.
pub trait SpellingCorrector: Send + Sync {
    /// Record one occurrence of `word`.
    fn put_word(&self, word: &str);

    /// Propose a correction for `word`, or return it unchanged if nothing better is known.
    fn correct(&self, word: &str) -> String;
}

/// In-memory frequency dictionary.
///
/// Known words correct to themselves. Unknown words correct to the known word with the
/// smallest edit distance (at most two), then the highest frequency, then the
/// lexicographically smallest spelling.
#[derive(Debug, Default)]
pub struct DictionaryCorrector {
    words: RwLock<AHashMap<String, usize>>,
}

impl DictionaryCorrector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words learned so far.
    pub fn len(&self) -> usize {
        self.words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times `word` has been recorded.
    pub fn frequency(&self, word: &str) -> usize {
        self.words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word)
            .copied()
            .unwrap_or(0)
    }
}

impl SpellingCorrector for DictionaryCorrector {
    fn put_word(&self, word: &str) {
        let mut words = self.words.write().unwrap_or_else(PoisonError::into_inner);
        *words.entry(word.to_string()).or_insert(0) += 1;
    }

    fn correct(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        let words = self.words.read().unwrap_or_else(PoisonError::into_inner);
        if words.contains_key(word) {
            return word.to_string();
        }

        let best = words
            .iter()
            .filter_map(|(candidate, &count)| {
                let distance = levenshtein::distance(word.chars(), candidate.chars());
                (distance <= MAX_EDIT_DISTANCE).then_some((distance, count, candidate))
            })
            .min_by(|(da, ca, wa), (db, cb, wb)| {
                da.cmp(db).then_with(|| cb.cmp(ca)).then_with(|| wa.cmp(wb))
            })
            .map(|(_, _, candidate)| candidate.clone());
        drop(words);

        best.unwrap_or_else(|| word.to_string())
    }
}

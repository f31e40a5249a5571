//! Term escaping for the search backend's query grammar.

/// Characters the classic Lucene query parser treats as syntax.
const RESERVED: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|', '&',
    '/',
];

/// Escapes a single user-supplied term for a query backend.
///
/// Implementations must leave grouping parentheses and `*` wildcards usable, since users
/// type them on purpose.
pub trait TermEscaper: Send + Sync {
    fn escape_term(&self, term: &str) -> String;
}

/// Escaping for the classic Lucene query parser grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuceneEscaper;

impl LuceneEscaper {
    /// Backslash-escapes every reserved character.
    pub fn escape(term: &str) -> String {
        let mut escaped = String::with_capacity(term.len());
        for c in term.chars() {
            if RESERVED.contains(&c) {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    /// Reads an escaped term back the way the query parser does: a backslash makes the
    /// following character literal.
    pub fn unescape(term: &str) -> String {
        let mut unescaped = String::with_capacity(term.len());
        let mut chars = term.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    unescaped.push(next);
                }
            } else {
                unescaped.push(c);
            }
        }
        unescaped
    }
}

impl TermEscaper for LuceneEscaper {
    fn escape_term(&self, term: &str) -> String {
        Self::escape(term)
            .replace("\\(", "(")
            .replace("\\)", ")")
            .replace("\\*", "*")
    }
}

//! Formats free-form user queries into boolean query strings.
//!
//! Queries are split on ASCII whitespace. The literal tokens `AND`, `OR` and `NOT` are kept as
//! operators; every other token is lowercased and escaped. In OR-default mode adjacent
//! terms are left for the backend to OR together; in AND-default mode an explicit `AND`
//! is inserted between them.

use super::escape::{LuceneEscaper, TermEscaper};
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            _ => None,
        }
    }

    const fn padded(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
            Self::Not => " NOT ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Operator(Operator),
    /// An escaped term; `implicit_and` marks an AND inserted before it.
    Term { text: String, implicit_and: bool },
}

impl Piece {
    fn render(&self) -> String {
        match self {
            Self::Operator(operator) => operator.padded().to_string(),
            Self::Term {
                text,
                implicit_and: true,
            } => format!("{}{} ", Operator::And.padded(), text),
            Self::Term {
                text,
                implicit_and: false,
            } => format!(" {} ", text),
        }
    }
}

/// Splits on the ASCII whitespace set (space, tab, newline, vertical tab, form feed,
/// carriage return). Other whitespace such as U+00A0 stays inside the term.
fn query_tokens(query: &str) -> impl Iterator<Item = &str> {
    query
        .split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
        .filter(|token| !token.is_empty())
}

/// Drops operators that have nothing to apply to at the end of the query.
fn trim_trailing_operators(pieces: &mut Vec<Piece>) {
    while matches!(pieces.last(), Some(Piece::Operator(_))) {
        pieces.pop();
    }
}

/// Turns user queries into backend query strings and generates looser fallbacks.
#[derive(Debug, Clone)]
pub struct QueryFormatter<E = LuceneEscaper> {
    escaper: E,
    pub(crate) and_match_default: bool,
    pub(crate) max_split_length: usize,
}

impl QueryFormatter<LuceneEscaper> {
    pub const fn new(config: &Config) -> Self {
        Self::with_escaper(config, LuceneEscaper)
    }
}

impl<E: TermEscaper> QueryFormatter<E> {
    pub const fn with_escaper(config: &Config, escaper: E) -> Self {
        Self {
            escaper,
            and_match_default: config.and_match_default,
            max_split_length: config.max_split_length,
        }
    }

    fn escape(&self, token: &str) -> String {
        self.escaper.escape_term(&token.to_lowercase())
    }

    /// Format with the grammar selected by `and_match_default`.
    pub fn format_query_string(&self, query: &str) -> String {
        if self.and_match_default {
            self.format_and_default(query)
        } else {
            self.format_or_default(query)
        }
    }

    /// Format leaving adjacent terms to the backend's implicit OR.
    ///
    /// Operators are passed through as written, except that trailing operators and
    /// a leading `AND` or `OR` are dropped. A leading `NOT` is a negation and stays.
    pub fn format_or_default(&self, query: &str) -> String {
        let mut pieces: Vec<Piece> = query_tokens(query)
            .map(|token| match Operator::parse(token) {
                Some(operator) => Piece::Operator(operator),
                None => Piece::Term {
                    text: self.escape(token),
                    implicit_and: false,
                },
            })
            .skip_while(|piece| matches!(piece, Piece::Operator(Operator::And | Operator::Or)))
            .collect();
        trim_trailing_operators(&mut pieces);

        pieces
            .iter()
            .map(Piece::render)
            .collect::<String>()
            .trim_matches(' ')
            .to_string()
    }

    /// Format joining adjacent terms with AND.
    ///
    /// A repeated operator (`AND AND`) collapses into one, and leading and trailing
    /// operators are dropped. Explicit `OR` and `NOT` are kept as written.
    pub fn format_and_default(&self, query: &str) -> String {
        let mut pieces: Vec<Piece> = Vec::new();

        for token in query_tokens(query) {
            match Operator::parse(token) {
                Some(operator) => {
                    if let Some(last) = pieces.last()
                        && *last != Piece::Operator(operator)
                    {
                        pieces.push(Piece::Operator(operator));
                    }
                }
                None => {
                    let implicit_and = matches!(pieces.last(), Some(Piece::Term { .. }));
                    pieces.push(Piece::Term {
                        text: self.escape(token),
                        implicit_and,
                    });
                }
            }
        }
        trim_trailing_operators(&mut pieces);

        pieces
            .iter()
            .map(Piece::render)
            .collect::<Vec<_>>()
            .join(" ")
            .trim_matches(' ')
            .to_string()
    }
}

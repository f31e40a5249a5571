//! Code cleaning and line statistics.

/// Characters replaced by spaces in each cleaning pass. Replacements are cumulative:
/// every pass starts from the output of the previous one.
const CLEANING_PASSES: [&[char]; 6] = [
    &['<', '>', ')', '(', '[', ']', '|', '=', ',', ':'],
    &['.'],
    &[';', '{', '}', '/'],
    &['"', '\''],
    &['\'', '"', '.', ';', '=', '(', ')', '[', ']', '_', ';', '@', '#'],
    &['-'],
];

/// Prefixes marking a line as comment or markup rather than code.
const COMMENT_PREFIXES: &[&str] = &["//", "#", "<!--", "!*", "--", "%", ";", "*", "/*"];

/// Languages whose estimated development cost is not worth displaying.
const COST_IGNORED_LANGUAGES: &[&str] = &[
    "Unknown",
    "Text",
    "JSON",
    "Markdown",
    "INI File",
    "ReStructuredText",
    "Configuration",
];

/// Builds the indexable form of source code.
///
/// The content is passed through six increasingly aggressive punctuation-to-space
/// passes and every intermediate state is kept, each preceded by a space. A fragment
/// such as `i++` inside `for(int i=0;i<100;i++){` therefore survives in at least one
/// variant regardless of which punctuation surrounds it.
pub fn code_clean_pipeline(content: &str) -> String {
    let mut output = String::with_capacity((content.len() + 1) * CLEANING_PASSES.len());
    let mut current = content.to_string();

    for replaced in CLEANING_PASSES {
        current = current.replace(replaced, " ");
        output.push(' ');
        output.push_str(&current);
    }

    output
}

/// Trims the characters at or below U+0020 from both ends of a line.
pub(crate) fn trim_blank(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Counts lines that look like code: non-empty after trimming and not starting with
/// a comment or markup marker.
///
/// This is a crude estimate that avoids language-aware parsing.
pub fn count_filtered_lines<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| trim_blank(line.as_ref()))
        .filter(|line| {
            !line.is_empty() && !COMMENT_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        })
        .count()
}

/// Whether the cost estimate should be hidden for `language_name`.
pub fn language_cost_ignore(language_name: &str) -> bool {
    COST_IGNORED_LANGUAGES.contains(&language_name)
}

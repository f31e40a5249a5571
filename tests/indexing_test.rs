mod common;

use assert2::check;
use common::{SAMPLE_SOURCE, config, lines, policy};
use rstest::rstest;
use searchcode_text::text::{
    code_clean_pipeline, count_filtered_lines, find_interesting_characters,
    find_interesting_keywords, split_keywords,
};
use searchcode_text::{Config, FileClassificationPolicy};

/// Builds the full indexed text for a file the way the indexer concatenates it.
fn indexed_text(content: &str, config: &Config) -> String {
    [
        code_clean_pipeline(content),
        split_keywords(content, config.max_split_length),
        find_interesting_keywords(content, config.max_split_length),
        find_interesting_characters(content),
    ]
    .concat()
}

#[rstest]
fn source_file_is_indexable(policy: FileClassificationPolicy) {
    let file = lines(SAMPLE_SOURCE);

    let finding = policy.is_binary(&file, "RegexIndexer.java");
    check!(!finding.is_binary);
    check!(finding.reason == "appears in internal extension whitelist");
    check!(!policy.is_minified(&file, "RegexIndexer.java"));
}

#[rstest]
fn source_file_line_count() {
    check!(count_filtered_lines(&lines(SAMPLE_SOURCE)) == 11);
}

#[rstest]
fn indexed_text_supports_fragment_searches(config: Config) {
    let text = indexed_text(SAMPLE_SOURCE, &config);

    check!(text.contains(" Regex Indexer"));
    check!(text.contains(" count Matches"));
    check!(text.contains(" linux2.7.4"));
    check!(text.contains(" i++ "));
    check!(text.contains("+ + "));
    check!(text.contains(" com searchcode app "));
}

#[rstest]
#[case("vendor/lib.jar", true, "appears in extension blacklist")]
#[case("assets/Logo.PNG", true, "appears in extension blacklist")]
#[case("dist/app.min.js", false, "appears in extension whitelist")]
#[case("src/main.rs", false, "appears in internal extension whitelist")]
fn extension_rules_dominate_content(
    policy: FileClassificationPolicy,
    #[case] file_name: &str,
    #[case] is_binary: bool,
    #[case] reason: &str,
) {
    let binary_looking = vec!["\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}".to_string(); 10];

    let finding = policy.is_binary(&binary_looking, file_name);
    check!(finding.is_binary == is_binary);
    check!(finding.reason == reason);
}

#[rstest]
fn unknown_extension_uses_content(policy: FileClassificationPolicy) {
    let text = lines("plain words\nmore plain words\n");
    let garbage = vec!["\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}a".to_string(); 10];

    check!(!policy.is_binary(&text, "README.unknown").is_binary);
    check!(policy.is_binary(&garbage, "blob.unknown").is_binary);
}

#[rstest]
fn empty_file_is_skipped(policy: FileClassificationPolicy) {
    let finding = policy.is_binary(&Vec::<String>::new(), "x.txt");
    check!(finding.is_binary);
    check!(finding.reason == "file is empty");
}

#[rstest]
fn minified_bundle_detected(policy: FileClassificationPolicy) {
    let bundle = vec!["var a=1;".repeat(40); 3];

    check!(policy.is_minified(&bundle, "dist/bundle.js"));
    check!(!policy.is_minified(&bundle, "dist/bundle.min.js"));
}

#[rstest]
fn oversized_content_is_bounded(config: Config) {
    let small = Config {
        max_split_length: 32,
        ..config
    };
    let content = format!("{} {}", "RegexIndexer ".repeat(2), "LateCamelCase ".repeat(1000));

    let split = split_keywords(&content, small.max_split_length);
    check!(split == " Regex Indexer Regex Indexer");
}

#![allow(dead_code)]

pub mod constants;

use std::fs;
use std::path::Path;
use word_ranker::{
    rank_words_from_text_with_custom_config, RankedEntry, TokenRule, WordRankerConfig,
    DEFAULT_WORD_RANKER_CONFIG,
};

const EXPECTED_PREFIX: &str = "EXPECTED:";
const COMMENT_PREFIX: &str = "COMMENT:";
const RULE_PREFIX: &str = "RULE:";

/// Renders ranked entries the way the primary report prints them.
pub fn render_lines(entries: &[RankedEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.count, entry.token))
        .collect()
}

/// Asserts the count-descending, token-ascending invariant over adjacent entries.
pub fn assert_ranked_order(entries: &[RankedEntry]) {
    for pair in entries.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.count > b.count || (a.count == b.count && a.token <= b.token),
            "Entries out of order: {:?} before {:?}",
            a,
            b
        );
    }
}

// Helper function to get the expected report lines from the text file
pub fn get_expected_lines(file_path: &Path) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(EXPECTED_PREFIX)
                .map(|expected| expected.trim().to_string())
        })
        .collect()
}

// Helper function to pick the token rule requested by a `RULE:` line
pub fn get_token_rule(file_path: &Path) -> TokenRule {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .find_map(|line| line.trim().strip_prefix(RULE_PREFIX))
        .map_or(TokenRule::Alphabetic, |rule| match rule.trim() {
            "extended" => TokenRule::Extended,
            "alphabetic" => TokenRule::Alphabetic,
            other => panic!("Unknown rule in {:?}: {}", file_path, other),
        })
}

// Strips the `EXPECTED:`, `COMMENT:` and `RULE:` lines, leaving the document body
pub fn get_document_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(EXPECTED_PREFIX)
                && !line.starts_with(COMMENT_PREFIX)
                && !line.starts_with(RULE_PREFIX)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(test_file_path: &Path) -> Vec<String> {
    let config = WordRankerConfig {
        token_rule: get_token_rule(test_file_path),
        ..*DEFAULT_WORD_RANKER_CONFIG
    };

    let text = get_document_text(test_file_path);
    let report = rank_words_from_text_with_custom_config(&config, &text)
        .expect("Failed to rank words");

    assert_ranked_order(report.entries());

    let actual = render_lines(report.entries());
    let expected = get_expected_lines(test_file_path);

    assert_eq!(
        actual, expected,
        "Report mismatch for {:?}",
        test_file_path
    );

    actual
}

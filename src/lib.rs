mod config;
pub use config::DEFAULT_WORD_RANKER_CONFIG;
pub mod models;
pub use models::{
    DiagnosticReporter, Error, FrequencyCounter, GroupedRanker, InputSource, Ranking,
    ReportFormat, Reporter, TierStats, TokenRule, TokenStream, Tokenizer, WordRankerConfig,
};
pub mod types;
mod utils;
pub use types::{
    DistinctCountSet, Frequency, FrequencyMap, RankedEntry, RankedList, Token, TokenRef,
};
pub use utils::{normalize_token, sorted_vocabulary};

use log::info;
use models::tokenizer::TOKEN_MULTISET_INITIAL_CAPACITY;
use std::io::{BufRead, Cursor, Write};

/// Everything produced by one pass over a text stream.
#[derive(Debug, Clone, Default)]
pub struct WordReport {
    pub ranking: Ranking,
    /// Number of accepted tokens, duplicates included.
    pub token_count: usize,
}

impl WordReport {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.ranking.entries
    }

    /// Distinct tokens, sorted ascending.
    pub fn vocabulary(&self) -> Vec<Token> {
        sorted_vocabulary(
            self.ranking
                .entries
                .iter()
                .map(|entry| entry.token.as_str()),
        )
    }

    pub fn write_report<W: Write>(&self, writer: W, format: ReportFormat) -> Result<(), Error> {
        Reporter::new(writer, format).write_ranked_list(&self.ranking.entries)
    }

    pub fn write_diagnostics<W: Write>(&self, writer: W) -> Result<(), Error> {
        DiagnosticReporter::new(writer).write_diagnostics(&self.ranking, &self.vocabulary())
    }
}

/// Counts and ranks the words of `text`.
///
/// ```
/// let report = word_ranker::rank_words_from_text("the cat sat on the mat the cat").unwrap();
///
/// let lines: Vec<String> = report
///     .entries()
///     .iter()
///     .map(|entry| format!("{}: {}", entry.count, entry.token))
///     .collect();
///
/// assert_eq!(lines, vec!["3: the", "2: cat", "1: mat", "1: on", "1: sat"]);
/// ```
pub fn rank_words_from_text(text: &str) -> Result<WordReport, Error> {
    rank_words_from_text_with_custom_config(DEFAULT_WORD_RANKER_CONFIG, text)
}

pub fn rank_words_from_text_with_custom_config(
    config: &WordRankerConfig,
    text: &str,
) -> Result<WordReport, Error> {
    rank_words_from_reader_with_custom_config(config, Cursor::new(text.as_bytes()))
}

pub fn rank_words_from_reader<R: BufRead>(reader: R) -> Result<WordReport, Error> {
    rank_words_from_reader_with_custom_config(DEFAULT_WORD_RANKER_CONFIG, reader)
}

pub fn rank_words_from_reader_with_custom_config<R: BufRead>(
    config: &WordRankerConfig,
    reader: R,
) -> Result<WordReport, Error> {
    info!("Tokenizing...");
    let tokenizer = Tokenizer::new(config.token_rule);
    let mut tokens: Vec<Token> = Vec::with_capacity(TOKEN_MULTISET_INITIAL_CAPACITY);
    for token in tokenizer.tokens(reader) {
        tokens.push(token?);
    }

    info!("Counting token frequencies...");
    let frequencies = FrequencyCounter::count(&tokens);

    let ranking = GroupedRanker::rank(frequencies)?;

    Ok(WordReport {
        ranking,
        token_count: tokens.len(),
    })
}

/// Runs the whole pipeline, writing the report to `results` and, when enabled by `config`,
/// the diagnostic dump to `diagnostics`.
pub fn run_with_custom_config<R: BufRead, W: Write, D: Write>(
    config: &WordRankerConfig,
    reader: R,
    results: W,
    diagnostics: D,
) -> Result<WordReport, Error> {
    let report = rank_words_from_reader_with_custom_config(config, reader)?;

    report.write_report(results, config.report_format)?;

    if config.emit_diagnostics {
        report.write_diagnostics(diagnostics)?;
    }

    Ok(report)
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

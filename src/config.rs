use crate::models::{ReportFormat, TokenRule, WordRankerConfig};

pub const DEFAULT_WORD_RANKER_CONFIG: &WordRankerConfig = &WordRankerConfig {
    token_rule: TokenRule::Alphabetic,
    report_format: ReportFormat::Lines,
    emit_diagnostics: false,
};

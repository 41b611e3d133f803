use crate::models::{ReportFormat, TokenRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRankerConfig {
    pub token_rule: TokenRule,
    pub report_format: ReportFormat,
    /// Emit distinct counts, tier counters and the vocabulary to the diagnostic sink.
    pub emit_diagnostics: bool,
}

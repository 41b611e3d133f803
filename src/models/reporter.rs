use crate::models::grouped_ranker::Ranking;
use crate::types::{RankedEntry, Token};
use crate::Error;
use log::info;
use std::io::Write;

/// Layout of the primary report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// One `<count>: <token>` line per entry.
    Lines,
    /// CSV with a `count,token` header row.
    Csv,
}

/// Writes the ranked list to the results sink.
pub struct Reporter<W: Write> {
    writer: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_ranked_list(&mut self, entries: &[RankedEntry]) -> Result<(), Error> {
        info!("Writing report...");

        match self.format {
            ReportFormat::Lines => {
                for entry in entries {
                    writeln!(self.writer, "{}: {}", entry.count, entry.token)?;
                }
            }
            ReportFormat::Csv => {
                let mut csv_writer = csv::Writer::from_writer(&mut self.writer);
                csv_writer.write_record(["count", "token"])?;
                for entry in entries {
                    let count = entry.count.to_string();
                    csv_writer.write_record([count.as_str(), entry.token.as_str()])?;
                }
                csv_writer.flush()?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Writes the observability-only dump: distinct counts, tier counters and vocabulary.
///
/// Meant for a sink separate from the one given to `Reporter`.
pub struct DiagnosticReporter<W: Write> {
    writer: W,
}

impl<W: Write> DiagnosticReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_diagnostics(
        &mut self,
        ranking: &Ranking,
        vocabulary: &[Token],
    ) -> Result<(), Error> {
        writeln!(self.writer, "DEBUG: distinct counts")?;
        for count in &ranking.distinct_counts {
            writeln!(self.writer, "{}", count)?;
        }

        let stats = &ranking.stats;
        writeln!(
            self.writer,
            "DEBUG: set count: {}, check count: {}, sub range count: {}",
            stats.distinct_counts, stats.tier_lookups, stats.tiers_found
        )?;

        writeln!(self.writer, "DEBUG: vocabulary")?;
        for token in vocabulary {
            writeln!(self.writer, "{}", token)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

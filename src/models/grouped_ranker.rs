use crate::types::{DistinctCountSet, Frequency, FrequencyMap, RankedEntry, RankedList};
use crate::Error;
use log::{debug, info};
use std::cmp::Reverse;

/// Counters describing how the per-tier sort went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierStats {
    /// Number of distinct counts, i.e. the number of tiers expected.
    pub distinct_counts: usize,
    /// Number of tier lookups attempted.
    pub tier_lookups: usize,
    /// Number of tiers located and sorted.
    pub tiers_found: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Ranking {
    pub entries: RankedList,
    /// Distinct counts, highest first.
    pub distinct_counts: Vec<Frequency>,
    pub stats: TierStats,
}

/// Orders a `FrequencyMap` by count (descending) and, within each count tier, by token
/// (ascending).
pub struct GroupedRanker;

impl GroupedRanker {
    pub fn rank(frequencies: FrequencyMap) -> Result<Ranking, Error> {
        info!("Ranking frequency tiers...");

        let mut entries = Self::flip_entries(frequencies);
        let distinct_counts = Self::collect_distinct_counts(&entries);

        // Coarse sort; tokens inside each tier are still unordered afterwards
        entries.sort_by_key(|entry| Reverse(entry.count));

        let stats = Self::sort_tiers(&mut entries, &distinct_counts)?;

        debug!(
            "Ranked {} entries across {} tiers",
            entries.len(),
            stats.tiers_found
        );

        Ok(Ranking {
            entries,
            distinct_counts: distinct_counts.iter().rev().copied().collect(),
            stats,
        })
    }

    /// Turns every `(token, count)` pair into a `(count, token)` entry.
    pub fn flip_entries(frequencies: FrequencyMap) -> RankedList {
        frequencies
            .into_iter()
            .map(|(token, count)| RankedEntry::new(count, token))
            .collect()
    }

    pub fn collect_distinct_counts(entries: &[RankedEntry]) -> DistinctCountSet {
        entries.iter().map(|entry| entry.count).collect()
    }

    /// Sorts each tier of a count-descending slice by token, one tier per distinct count.
    ///
    /// `entries` must already be sorted by count (descending). Tiers are visited from the
    /// highest count down, and each lookup resumes where the previous tier ended.
    ///
    /// Fails with `Error::InternalConsistency` when `distinct_counts` and `entries` disagree.
    pub fn sort_tiers(
        entries: &mut [RankedEntry],
        distinct_counts: &DistinctCountSet,
    ) -> Result<TierStats, Error> {
        let mut stats = TierStats {
            distinct_counts: distinct_counts.len(),
            ..TierStats::default()
        };
        let mut cursor = 0;

        for &count in distinct_counts.iter().rev() {
            stats.tier_lookups += 1;

            let start = entries[cursor..]
                .iter()
                .position(|entry| entry.count == count)
                .map(|offset| cursor + offset)
                .ok_or_else(|| {
                    Error::InternalConsistency(format!(
                        "no entries for count {} (found {} of {} tiers)",
                        count, stats.tiers_found, stats.distinct_counts
                    ))
                })?;

            if start != cursor {
                return Err(Error::InternalConsistency(format!(
                    "entries with count {} precede the tier for count {}",
                    entries[cursor].count, count
                )));
            }

            let end = entries[start..]
                .iter()
                .position(|entry| entry.count != count)
                .map_or(entries.len(), |offset| start + offset);

            debug!("Tier {}: positions {}..{}", count, start, end);

            entries[start..end].sort_unstable_by(|a, b| a.token.cmp(&b.token));
            stats.tiers_found += 1;
            cursor = end;
        }

        if cursor != entries.len() {
            return Err(Error::InternalConsistency(format!(
                "{} entries left outside any tier",
                entries.len() - cursor
            )));
        }

        Ok(stats)
    }
}

use std::collections::{BTreeSet, HashMap};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lowercased words which passed the
/// active `TokenRule`.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a text stream.
pub type Frequency = usize;

/// Represents a map of tokens to their frequency counts within a text stream.
/// The key is the `Token`, and the value is the `Frequency`.
pub type FrequencyMap = HashMap<Token, Frequency>;

/// The distinct frequency values present in a `FrequencyMap`, in ascending order.
pub type DistinctCountSet = BTreeSet<Frequency>;

/// A single `(count, token)` pair produced by flipping a `FrequencyMap` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub count: Frequency,
    pub token: Token,
}

impl RankedEntry {
    pub fn new(count: Frequency, token: Token) -> Self {
        Self { count, token }
    }
}

/// Entries ordered by count (descending), then by token (ascending) within each count.
pub type RankedList = Vec<RankedEntry>;

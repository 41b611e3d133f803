use crate::types::{Frequency, FrequencyMap, Token, TokenRef};

/// Accumulates token occurrences into a `FrequencyMap`.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    frequencies: FrequencyMap,
    total: usize,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the map for roughly `token_count` tokens (`n * 5 / 3` buckets).
    pub fn with_expected_tokens(token_count: usize) -> Self {
        Self {
            frequencies: FrequencyMap::with_capacity(token_count * 5 / 3),
            total: 0,
        }
    }

    /// Counts the frequency of tokens in the given list.
    ///
    /// # Arguments
    /// * `tokens` - A slice of tokens to analyze.
    ///
    /// # Returns
    /// * A `FrequencyMap` where the keys are the distinct tokens and the values are their
    ///   respective frequencies.
    pub fn count(tokens: &[Token]) -> FrequencyMap {
        let mut counter = Self::with_expected_tokens(tokens.len());
        for token in tokens {
            counter.add(token);
        }
        counter.finish()
    }

    pub fn add(&mut self, token: &TokenRef) {
        // Avoid allocating a key for tokens already seen
        if let Some(frequency) = self.frequencies.get_mut(token) {
            *frequency += 1;
        } else {
            self.frequencies.insert(token.to_owned(), 1);
        }
        self.total += 1;
    }

    pub fn frequency_of(&self, token: &TokenRef) -> Frequency {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    pub fn distinct_tokens(&self) -> usize {
        self.frequencies.len()
    }

    pub fn total_tokens(&self) -> usize {
        self.total
    }

    pub fn finish(self) -> FrequencyMap {
        self.frequencies
    }
}

impl Extend<Token> for FrequencyCounter {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(&token);
        }
    }
}

use crate::types::{Token, TokenRef};

/// Deduplicates tokens and sorts them ascending.
///
/// # Arguments
/// * `tokens` - The tokens in any order, duplicates allowed.
///
/// # Returns
/// A new vector holding each distinct token exactly once.
pub fn sorted_vocabulary<'a, I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = &'a TokenRef>,
{
    let mut vocabulary: Vec<Token> = tokens.into_iter().map(str::to_owned).collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();
    vocabulary
}

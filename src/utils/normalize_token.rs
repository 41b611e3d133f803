use crate::types::Token;

/// Lowercases an accepted word using an ASCII-only fold.
///
/// Bytes outside `A-Z` pass through unchanged, so normalizing an already
/// normalized token is a no-op.
pub fn normalize_token(word: &[u8]) -> Token {
    String::from_utf8_lossy(word).to_ascii_lowercase()
}

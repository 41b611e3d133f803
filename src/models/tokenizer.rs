use crate::types::{Token, TokenRef};
use crate::utils::normalize_token;
use crate::Error;
use std::io::{BufRead, Cursor};

/// Initial capacity of the materialized token multiset.
pub const TOKEN_MULTISET_INITIAL_CAPACITY: usize = 64 * 1024;

/// Word separators: ASCII whitespace plus vertical tab, matching C's `isspace`.
fn is_word_separator(c: &u8) -> bool {
    c.is_ascii_whitespace() || *c == b'\x0b'
}

/// Selects which words are accepted as tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenRule {
    /// Every character must be an ASCII letter.
    Alphabetic,
    /// The first character may be a letter, `_` or `#`; the rest may be letters, `-` or `_`.
    ///
    /// A leading `#` is only accepted when it is the entire word.
    Extended,
}

#[derive(Copy, Clone, Debug)]
pub struct Tokenizer {
    token_rule: TokenRule,
}

impl Tokenizer {
    pub fn new(token_rule: TokenRule) -> Self {
        Self { token_rule }
    }

    /// Configuration accepting purely alphabetic words
    pub fn alphabetic_parser() -> Self {
        Self::new(TokenRule::Alphabetic)
    }

    /// Configuration accepting directive-style and hyphenated words
    pub fn extended_parser() -> Self {
        Self::new(TokenRule::Extended)
    }

    pub fn token_rule(&self) -> TokenRule {
        self.token_rule
    }

    /// Whether a single whitespace-delimited word passes the active rule.
    ///
    /// Acceptance is all-or-nothing: one disallowed character rejects the whole word.
    pub fn is_accepted(&self, word: &TokenRef) -> bool {
        self.accepts_bytes(word.as_bytes())
    }

    fn accepts_bytes(&self, word: &[u8]) -> bool {
        match self.token_rule {
            TokenRule::Alphabetic => !word.is_empty() && word.iter().all(u8::is_ascii_alphabetic),
            TokenRule::Extended => match word.split_first() {
                None => false,
                Some((b'#', rest)) => rest.is_empty(),
                Some((first, rest)) => {
                    (first.is_ascii_alphabetic() || *first == b'_')
                        && rest
                            .iter()
                            .all(|c| c.is_ascii_alphabetic() || *c == b'-' || *c == b'_')
                }
            },
        }
    }

    /// Lazily tokenizes `reader`, reading one line at a time.
    pub fn tokens<R: BufRead>(&self, reader: R) -> TokenStream<R> {
        TokenStream {
            tokenizer: *self,
            reader,
            line: Vec::new(),
            pending: Vec::new().into_iter(),
            exhausted: false,
        }
    }

    /// Tokenizer function to split the text into accepted, lowercased tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        // A cursor over an in-memory string cannot fail to read
        self.tokens(Cursor::new(text.as_bytes()))
            .filter_map(Result::ok)
            .collect()
    }
}

/// Lazy sequence of tokens over a buffered reader.
///
/// Rejected words are skipped; only a failure of the underlying reader is yielded as an error,
/// after which the stream ends.
pub struct TokenStream<R> {
    tokenizer: Tokenizer,
    reader: R,
    line: Vec<u8>,
    pending: std::vec::IntoIter<Token>,
    exhausted: bool,
}

impl<R: BufRead> Iterator for TokenStream<R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }

            if self.exhausted {
                return None;
            }

            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => {
                    self.exhausted = true;
                    return None;
                }
                Ok(_) => {
                    let tokens: Vec<Token> = self
                        .line
                        .split(is_word_separator)
                        .filter(|word| self.tokenizer.accepts_bytes(word))
                        .map(normalize_token)
                        .collect();

                    self.pending = tokens.into_iter();
                }
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err.into()));
                }
            }
        }
    }
}

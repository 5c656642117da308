//! Tokenizer: splits free text into lowercase word tokens
//!
//! A token is a run of [a-z], optionally joined to a second run by one
//! hyphen (`thank-you`). Everything else separates tokens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Word tokens inside lowercased text
    static ref RE_TOKEN: Regex = Regex::new(r"[a-z]+(?:-[a-z]+)?").unwrap();

    /// A complete word token (anchored), used to filter classifier output
    static ref RE_WORD: Regex = Regex::new(r"^[a-z]+(?:-[a-z]+)?$").unwrap();

    /// Characters `sanitize_word` strips
    static ref RE_NOT_WORD_CHAR: Regex = Regex::new(r"[^a-z-]").unwrap();
}

/// Lazy token sequence over an owned, lowercased copy of the input.
///
/// Cloning yields an independent cursor, so the sequence can be restarted.
#[derive(Debug, Clone)]
pub struct Tokens {
    text: String,
    pos: usize,
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let m = RE_TOKEN.find_at(&self.text, self.pos)?;
        self.pos = m.end();
        Some(m.as_str().to_string())
    }
}

/// Tokenize text in document order
pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        text: text.to_lowercase(),
        pos: 0,
    }
}

/// Does `token` have the shape of a word token (already lowercase)?
pub fn is_word_token(token: &str) -> bool {
    RE_WORD.is_match(token)
}

/// Is `token` exactly one char in [a-z]?
pub fn is_letter_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

/// Lowercase and drop every char outside [a-z-]; `None` if nothing remains
pub fn sanitize_word(input: &str) -> Option<String> {
    let cleaned = RE_NOT_WORD_CHAR.replace_all(&input.to_lowercase(), "").into_owned();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

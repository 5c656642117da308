//! Translation Engine: text → signs, and "what is missing" scans
//!
//! Resolution per word:
//! - whole-word sign in the catalog → that one sign
//! - otherwise → one letter sign per [a-z] char (unknown letters skipped)
//! - a separator between consecutive words, never at the ends

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::content::{ContentWordSource, FixedSet};
use crate::core::tokenizer::{tokenize, Tokens};
use crate::types::{Sign, SignKind, TranslationOutput};

/// Read-only translator over a shared catalog
#[derive(Clone)]
pub struct TranslationEngine {
    catalog: Catalog,
    words: Arc<dyn ContentWordSource>,
}

impl std::fmt::Debug for TranslationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationEngine")
            .field("catalog_size", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl TranslationEngine {
    /// Create engine with an explicit content-word source
    pub fn new(catalog: Catalog, words: impl ContentWordSource + 'static) -> Self {
        Self {
            catalog,
            words: Arc::new(words),
        }
    }

    /// Create engine using the curated word set
    pub fn with_fixed_set(catalog: Catalog) -> Self {
        Self::new(catalog, FixedSet::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Lowercase word tokens in document order
    pub fn tokenize(&self, text: &str) -> Tokens {
        tokenize(text)
    }

    pub fn is_content_word(&self, token: &str, context: Option<&str>) -> bool {
        self.words.is_content_word(token, context)
    }

    /// Content word with no catalog entry yet
    pub fn is_missing(&self, word: &str, context: Option<&str>) -> bool {
        self.is_content_word(word, context) && !self.catalog.has(word)
    }

    /// First missing word of `text`, in document order
    pub fn find_first_missing(&self, text: &str) -> Option<String> {
        let content = self.words.content_words(Some(text));
        let entries = self.catalog.read();
        tokenize(text).find(|token| content.contains(token) && !entries.contains_key(token))
    }

    /// Every distinct missing word of `text`, first occurrence first
    pub fn find_all_missing(&self, text: &str) -> Vec<String> {
        let content = self.words.content_words(Some(text));
        let entries = self.catalog.read();
        let mut seen = HashSet::new();

        tokenize(text)
            .filter(|token| content.contains(token) && !entries.contains_key(token))
            .filter(|token| seen.insert(token.clone()))
            .collect()
    }

    /// Resolve text into signs against one consistent catalog view
    pub fn resolve(&self, text: &str) -> Vec<Sign> {
        let entries = self.catalog.read();
        let words: Vec<String> = tokenize(text).collect();
        let last = words.len().saturating_sub(1);
        let mut signs = Vec::new();

        for (i, word) in words.iter().enumerate() {
            match entries.get(word) {
                Some(sign) if sign.kind == SignKind::Word => signs.push(sign.clone()),
                _ => {
                    // Fingerspell; hyphens and anything outside [a-z] drop out
                    signs.extend(
                        word.chars()
                            .filter(char::is_ascii_lowercase)
                            .filter_map(|c| entries.get(&c.to_string()))
                            .cloned(),
                    );
                }
            }

            if i < last {
                signs.push(Sign::separator());
            }
        }

        signs
    }

    /// Direct lookup of a single character (or any token), case-insensitive
    pub fn resolve_char(&self, ch: &str) -> Option<Sign> {
        self.catalog.lookup(ch)
    }

    /// Resolve and scan in one go
    pub fn translate(&self, text: &str) -> TranslationOutput {
        let signs = self.resolve(text);
        let missing = self.find_all_missing(text);
        TranslationOutput::new(text, signs, missing)
    }
}

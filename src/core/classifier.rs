//! Part-of-speech classification
//!
//! The engine only needs "which words in this text act as nouns, verbs,
//! adjectives or adverbs". A real tagger can be plugged in through
//! `PosClassifier`; `LexiconClassifier` answers from a word list.

use std::collections::HashMap;
use std::path::Path;

use crate::core::tokenizer::tokenize;
use crate::types::{PosTags, SignResult};

/// Tags the content-bearing words of a text
pub trait PosClassifier: Send + Sync {
    fn classify(&self, text: &str) -> PosTags;
}

impl<F> PosClassifier for F
where
    F: Fn(&str) -> PosTags + Send + Sync,
{
    fn classify(&self, text: &str) -> PosTags {
        self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Dictionary-backed tagger.
///
/// A word listed under several parts of speech keeps the first one in the
/// order nouns, verbs, adjectives, adverbs.
#[derive(Debug, Clone, Default)]
pub struct LexiconClassifier {
    lexicon: HashMap<String, Pos>,
}

impl LexiconClassifier {
    pub fn new(lexicon: PosTags) -> Self {
        let mut map = HashMap::new();
        let groups = [
            (lexicon.nouns, Pos::Noun),
            (lexicon.verbs, Pos::Verb),
            (lexicon.adjectives, Pos::Adjective),
            (lexicon.adverbs, Pos::Adverb),
        ];
        for (words, pos) in groups {
            for word in words {
                map.entry(word.to_lowercase()).or_insert(pos);
            }
        }
        Self { lexicon: map }
    }

    /// Parse a JSON lexicon: `{"nouns": [..], "verbs": [..], ...}`
    pub fn from_json(json: &str) -> SignResult<Self> {
        let tags: PosTags = serde_json::from_str(json)?;
        Ok(Self::new(tags))
    }

    /// Load a JSON lexicon from disk
    pub fn load(path: &Path) -> SignResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl PosClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> PosTags {
        let mut tags = PosTags::default();
        for token in tokenize(text) {
            let bucket = match self.lexicon.get(&token) {
                Some(Pos::Noun) => &mut tags.nouns,
                Some(Pos::Verb) => &mut tags.verbs,
                Some(Pos::Adjective) => &mut tags.adjectives,
                Some(Pos::Adverb) => &mut tags.adverbs,
                None => continue,
            };
            if !bucket.contains(&token) {
                bucket.push(token);
            }
        }
        tags
    }
}

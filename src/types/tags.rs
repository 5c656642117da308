//! Part-of-speech tags produced by a classifier

use serde::{Deserialize, Serialize};

/// Surface forms a classifier found in a text, grouped by part of speech.
///
/// Also the on-disk lexicon format of `LexiconClassifier`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosTags {
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub adverbs: Vec<String>,
}

impl PosTags {
    /// All tagged forms, nouns first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nouns
            .iter()
            .chain(&self.verbs)
            .chain(&self.adjectives)
            .chain(&self.adverbs)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
            && self.verbs.is_empty()
            && self.adjectives.is_empty()
            && self.adverbs.is_empty()
    }
}

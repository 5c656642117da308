//! Content words: tokens that deserve their own sign
//!
//! Two sources:
//! - `FixedSet`: a curated word list
//! - `ClassifierAugmented`: the curated list plus every noun, verb,
//!   adjective and adverb a classifier finds in the context text

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use crate::core::classifier::PosClassifier;
use crate::core::tokenizer::is_word_token;
use crate::DEFAULT_CONTENT_WORDS;

/// Membership test for content words, optionally informed by context text
pub trait ContentWordSource: Send + Sync {
    /// Effective content-word set for `context`
    fn content_words(&self, context: Option<&str>) -> Cow<'_, HashSet<String>>;

    /// Case-insensitive membership
    fn is_content_word(&self, token: &str, context: Option<&str>) -> bool {
        self.content_words(context).contains(&token.to_lowercase())
    }
}

/// Curated, context-independent word set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSet {
    words: HashSet<String>,
}

impl FixedSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    /// Words in a stable order
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}

impl Default for FixedSet {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_WORDS)
    }
}

impl ContentWordSource for FixedSet {
    fn content_words(&self, _context: Option<&str>) -> Cow<'_, HashSet<String>> {
        Cow::Borrowed(&self.words)
    }
}

/// Fixed set unioned with classifier output for the context text
pub struct ClassifierAugmented {
    base: FixedSet,
    classifier: Box<dyn PosClassifier>,
}

impl ClassifierAugmented {
    pub fn new(base: FixedSet, classifier: impl PosClassifier + 'static) -> Self {
        Self {
            base,
            classifier: Box::new(classifier),
        }
    }
}

impl fmt::Debug for ClassifierAugmented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierAugmented")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl ContentWordSource for ClassifierAugmented {
    fn content_words(&self, context: Option<&str>) -> Cow<'_, HashSet<String>> {
        let Some(text) = context else {
            return Cow::Borrowed(&self.base.words);
        };

        let tags = self.classifier.classify(text);
        if tags.is_empty() {
            return Cow::Borrowed(&self.base.words);
        }

        // Taggers may return phrases or punctuated forms; keep word tokens only
        let mut words = self.base.words.clone();
        words.extend(
            tags.iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| is_word_token(w)),
        );
        Cow::Owned(words)
    }
}

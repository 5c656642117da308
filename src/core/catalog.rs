//! Sign catalog: token → Sign
//!
//! Seeded once with all 26 letters plus whichever content words have an
//! image. `upsert_word` is the only way to change it afterwards; there is
//! no removal.
//!
//! Cloning a `Catalog` clones the handle, not the entries. Every clone sees
//! the same map, so the engine and the registrar share one catalog.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, info};

use crate::core::assets::{placeholder_path, AssetSource};
use crate::core::tokenizer::{is_letter_token, is_word_token};
use crate::types::{Sign, SignError, SignKind, SignResult};

/// Shared handle to the sign map
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Arc<RwLock<HashMap<String, Sign>>>,
}

impl Catalog {
    /// Build the startup catalog.
    ///
    /// Letters always exist (placeholder path when `assets` has none).
    /// Content words are only added when `assets` has an image for them.
    pub fn initialize<I, S>(assets: &dyn AssetSource, content_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();

        for letter in 'a'..='z' {
            let token = letter.to_string();
            let path = assets
                .locate(&token)
                .unwrap_or_else(|| placeholder_path(&token));
            entries.insert(token, Sign::letter(letter, path));
        }

        let mut words = 0;
        for word in content_words {
            let word = word.as_ref().to_lowercase();
            if !is_word_token(&word) {
                debug!(word = %word, "skipping content word that is not a token");
                continue;
            }
            if let Some(path) = assets.locate(&word) {
                entries.insert(word.clone(), Sign::word(word, path));
                words += 1;
            }
        }

        info!(letters = 26, words, "sign catalog initialized");

        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Case-insensitive exact lookup
    pub fn lookup(&self, token: &str) -> Option<Sign> {
        self.read().get(&token.to_lowercase()).cloned()
    }

    pub fn has(&self, token: &str) -> bool {
        self.read().contains_key(&token.to_lowercase())
    }

    /// Insert or replace one sign.
    ///
    /// One char in [a-z] becomes a letter, anything else of word shape a
    /// word. Other tokens are rejected and the catalog is left as it was.
    pub fn upsert_word(&self, token: &str, image_path: &str) -> SignResult<Sign> {
        let token = token.to_lowercase();

        let kind = if is_letter_token(&token) {
            SignKind::Letter
        } else if is_word_token(&token) {
            SignKind::Word
        } else {
            return Err(SignError::InvalidToken { token });
        };
        let sign = Sign::registered(token.as_str(), image_path, kind);

        let previous = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), sign.clone());

        debug!(
            token = %token,
            kind = %sign.kind,
            replaced = previous.is_some(),
            "sign registered"
        );
        Ok(sign)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All tokens, sorted
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.read().keys().cloned().collect();
        tokens.sort();
        tokens
    }

    /// Copy of every sign, sorted by token
    pub fn entries(&self) -> Vec<Sign> {
        let mut signs: Vec<Sign> = self.read().values().cloned().collect();
        signs.sort_by(|a, b| a.token.cmp(&b.token));
        signs
    }

    /// Consistent read view for multi-lookup operations
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Sign>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::NoAssets;
    use crate::DEFAULT_CONTENT_WORDS;

    fn with_assets(tokens: &'static [&'static str]) -> impl Fn(&str) -> Option<String> {
        move |token: &str| {
            tokens
                .iter()
                .any(|t| *t == token)
                .then(|| format!("/assets/{}.png", token))
        }
    }

    #[test]
    fn test_all_letters_present() {
        let catalog = Catalog::initialize(&NoAssets, DEFAULT_CONTENT_WORDS);
        for letter in 'a'..='z' {
            let sign = catalog.lookup(&letter.to_string()).expect("letter missing");
            assert_eq!(sign.token, letter.to_string());
            assert_eq!(sign.kind, SignKind::Letter);
            assert_eq!(sign.image_path, format!("/signs/{}.png", letter));
        }
        assert_eq!(catalog.len(), 26);
    }

    #[test]
    fn test_words_only_when_asset_exists() {
        let catalog = Catalog::initialize(&with_assets(&["a", "love"]), DEFAULT_CONTENT_WORDS);
        assert_eq!(catalog.lookup("a").unwrap().image_path, "/assets/a.png");
        assert_eq!(catalog.lookup("love").unwrap().kind, SignKind::Word);
        assert!(!catalog.has("hello"));
        assert_eq!(catalog.len(), 27);
    }

    #[test]
    fn test_initialize_skips_non_token_words() {
        let assets = with_assets(&["two words", "love!", "love"]);
        let catalog = Catalog::initialize(&assets, ["two words", "Love!", "love"]);
        assert!(!catalog.has("two words"));
        assert!(!catalog.has("love!"));
        assert_eq!(catalog.lookup("love").unwrap().kind, SignKind::Word);
        assert_eq!(catalog.len(), 27);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::initialize(&NoAssets, DEFAULT_CONTENT_WORDS);
        assert_eq!(catalog.lookup("A"), catalog.lookup("a"));
        assert!(catalog.has("Z"));
    }

    #[test]
    fn test_upsert_classifies_kind() {
        let catalog = Catalog::initialize(&NoAssets, DEFAULT_CONTENT_WORDS);

        let word = catalog.upsert_word("Love", "/signs/love.png").unwrap();
        assert_eq!(word.token, "love");
        assert_eq!(word.kind, SignKind::Word);
        assert_eq!(word.alt_text.as_deref(), Some("ASL sign for love"));

        let letter = catalog.upsert_word("B", "/new/b.png").unwrap();
        assert_eq!(letter.kind, SignKind::Letter);
        assert_eq!(catalog.lookup("b").unwrap().image_path, "/new/b.png");
        assert_eq!(catalog.len(), 27);
    }

    #[test]
    fn test_upsert_rejects_malformed_tokens() {
        let catalog = Catalog::initialize(&NoAssets, DEFAULT_CONTENT_WORDS);
        for bad in ["", "two words", "x1", "a-b-c", "-"] {
            let err = catalog.upsert_word(bad, "/x.png").unwrap_err();
            assert!(matches!(err, SignError::InvalidToken { .. }), "{:?}", bad);
        }
        assert_eq!(catalog.len(), 26);
    }

    #[test]
    fn test_clones_share_entries() {
        let catalog = Catalog::initialize(&NoAssets, DEFAULT_CONTENT_WORDS);
        let handle = catalog.clone();
        handle.upsert_word("help", "/signs/help.png").unwrap();
        assert!(catalog.has("help"));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let assets = with_assets(&["love", "you", "c"]);
        let a = Catalog::initialize(&assets, DEFAULT_CONTENT_WORDS);
        let b = Catalog::initialize(&assets, DEFAULT_CONTENT_WORDS);
        assert_eq!(a.entries(), b.entries());
    }
}

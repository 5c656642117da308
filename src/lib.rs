//! Signglyph: text to sign-language glyph translation
//!
//! Catalog → TranslationEngine → Sign sequence, with a registrar that
//! backfills missing word signs and an HTTP API on top.

pub mod core;
pub mod types;

// =============================================================================
// ASSETS
// =============================================================================

/// URL prefix used for letter placeholders when no asset was found
pub const PLACEHOLDER_PREFIX: &str = "/signs";

/// File extension of every sign image
pub const ASSET_EXTENSION: &str = "png";

/// Alt text of the synthetic separator between two words
pub const SEPARATOR_ALT: &str = "word separator";

// =============================================================================
// CONTENT WORDS
// =============================================================================

/// Curated words that deserve a dedicated sign instead of fingerspelling
pub const DEFAULT_CONTENT_WORDS: [&str; 22] = [
    "hello",
    "goodbye",
    "please",
    "thank-you",
    "thanks",
    "yes",
    "no",
    "help",
    "sorry",
    "welcome",
    "love",
    "friend",
    "family",
    "good",
    "bad",
    "happy",
    "sad",
    "nice",
    "meet",
    "you",
    "me",
    "we",
];

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

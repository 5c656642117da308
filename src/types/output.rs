//! Output structures for terminal display and the API

use colored::Colorize;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{Sign, SignKind};

/// Result of translating one piece of text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Input text as given
    pub text: String,
    /// Resolved signs, separators included
    pub signs: Vec<Sign>,
    /// Content words with no sign yet, first-occurrence order
    pub missing: Vec<String>,
}

impl TranslationOutput {
    /// Create new output
    pub fn new(text: impl Into<String>, signs: Vec<Sign>, missing: Vec<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            text: text.into(),
            signs,
            missing,
        }
    }

    /// Number of whole-word signs
    pub fn word_count(&self) -> usize {
        self.signs.iter().filter(|s| s.kind == SignKind::Word).count()
    }

    /// Number of fingerspelled letters (separators excluded)
    pub fn letter_count(&self) -> usize {
        self.signs
            .iter()
            .filter(|s| s.kind == SignKind::Letter && !s.is_separator())
            .count()
    }

    /// Glyph line for terminals: words in green, letters in cyan, ` / ` between words
    pub fn to_terminal_string(&self) -> String {
        let mut out = String::new();
        for sign in &self.signs {
            if sign.is_separator() {
                out.push_str(&" / ".dimmed().to_string());
            } else if sign.is_word() {
                out.push_str(&format!("[{}]", sign.token.to_uppercase()).green().bold().to_string());
            } else {
                out.push_str(&sign.token.to_uppercase().cyan().to_string());
            }
        }
        if !self.missing.is_empty() {
            out.push_str(&format!("  missing: {}", self.missing.join(", ")).yellow().to_string());
        }
        out
    }

    /// Same line without colors
    pub fn to_parseable_string(&self) -> String {
        let glyphs: Vec<String> = self
            .signs
            .iter()
            .map(|sign| {
                if sign.is_separator() {
                    "/".to_string()
                } else if sign.is_word() {
                    format!("[{}]", sign.token)
                } else {
                    sign.token.clone()
                }
            })
            .collect();
        format!(
            "signs={} | words={} | letters={} | missing={}",
            glyphs.join(" "),
            self.word_count(),
            self.letter_count(),
            self.missing.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parseable_string() {
        let output = TranslationOutput::new(
            "hi you",
            vec![
                Sign::letter('h', "/signs/h.png"),
                Sign::letter('i', "/signs/i.png"),
                Sign::separator(),
                Sign::word("you", "/signs/you.png"),
            ],
            vec!["help".to_string()],
        );
        assert_eq!(
            output.to_parseable_string(),
            "signs=h i / [you] | words=1 | letters=2 | missing=help"
        );
    }
}

//! Sign records

use serde::{Deserialize, Serialize};
use crate::SEPARATOR_ALT;

/// Whether a sign spells a single letter or stands for a whole word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignKind {
    /// Fingerspelling unit, token is one char in [a-z]
    Letter,
    /// Whole-word sign, token matches [a-z]+(-[a-z]+)?
    Word,
}

impl std::fmt::Display for SignKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SignKind::Letter => "letter",
            SignKind::Word => "word",
        };
        write!(f, "{}", name)
    }
}

/// A single glyph: token plus the image that shows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sign {
    /// Normalized lookup key
    pub token: String,
    /// Asset reference, empty for separators
    pub image_path: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    pub kind: SignKind,
}

impl Sign {
    /// Letter sign; alt text names the letter in uppercase
    pub fn letter(letter: char, image_path: impl Into<String>) -> Self {
        Self {
            token: letter.to_string(),
            image_path: image_path.into(),
            alt_text: Some(format!("ASL sign for {}", letter.to_ascii_uppercase())),
            kind: SignKind::Letter,
        }
    }

    /// Whole-word sign
    pub fn word(token: impl Into<String>, image_path: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            alt_text: Some(format!("ASL sign for {}", token)),
            token,
            image_path: image_path.into(),
            kind: SignKind::Word,
        }
    }

    /// Sign pushed in at runtime; alt text uses the token as given
    pub fn registered(token: impl Into<String>, image_path: impl Into<String>, kind: SignKind) -> Self {
        Self {
            kind,
            ..Self::word(token, image_path)
        }
    }

    /// Imageless marker placed between two resolved words
    pub fn separator() -> Self {
        Self {
            token: " ".to_string(),
            image_path: String::new(),
            alt_text: Some(SEPARATOR_ALT.to_string()),
            kind: SignKind::Letter,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.token == " " && self.image_path.is_empty()
    }

    pub fn is_word(&self) -> bool {
        self.kind == SignKind::Word
    }
}

//! Errors raised at the asset boundary
//!
//! The translation engine itself never fails; everything here comes from
//! registering, locating or recognizing sign images.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignError {
    /// Token is neither a letter nor a (hyphenated) word
    #[error("invalid sign token: '{token}'")]
    InvalidToken { token: String },

    /// Input had no usable characters after sanitizing
    #[error("invalid word format: '{input}'")]
    InvalidWord { input: String },

    /// Collaborator could not supply an image for the token
    #[error("no sign asset available for '{token}': {reason}")]
    AssetUnavailable { token: String, reason: String },

    /// Uploaded image did not match any known sign
    #[error("could not recognize the sign in the uploaded image")]
    Unrecognized,

    #[error("invalid image upload: {reason}")]
    InvalidImage { reason: String },

    #[error("asset io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("lexicon could not be parsed: {0}")]
    Lexicon(#[from] serde_json::Error),
}

impl SignError {
    /// Short machine-readable kind (for API payloads and logs)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "invalid_token",
            Self::InvalidWord { .. } => "invalid_word",
            Self::AssetUnavailable { .. } => "asset_unavailable",
            Self::Unrecognized => "unrecognized",
            Self::InvalidImage { .. } => "invalid_image",
            Self::Io(_) => "io",
            Self::Lexicon(_) => "lexicon",
        }
    }

    /// Whether the caller supplied bad input, as opposed to a collaborator failing
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. } | Self::InvalidWord { .. } | Self::InvalidImage { .. } | Self::Unrecognized
        )
    }
}

/// Result type for asset operations
pub type SignResult<T> = Result<T, SignError>;

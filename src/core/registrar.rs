//! Registrar: backfills the catalog with newly produced sign images
//!
//! A `SignStudio` turns a word into an image reference, or an image into a
//! recognized word. The registrar sanitizes input, awaits the studio and
//! publishes successful results with `Catalog::upsert_word`. Failures are
//! returned as-is; nothing is retried and the catalog is not touched.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::core::assets::{AssetSource, DirectoryAssets};
use crate::core::catalog::Catalog;
use crate::core::tokenizer::{is_letter_token, is_word_token, sanitize_word};
use crate::types::{Sign, SignError, SignResult};
use crate::ASSET_EXTENSION;

/// Word recognized from an uploaded image, with the asset now backing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedSign {
    pub word: String,
    pub image_path: String,
}

/// Collaborator that produces or recognizes sign images
pub trait SignStudio: Send + Sync {
    /// Produce an image for a sanitized word, returning its reference
    fn generate<'a>(&'a self, word: &'a str) -> BoxFuture<'a, SignResult<String>>;

    /// Recognize the word or letter an image shows
    fn recognize<'a>(&'a self, image: &'a [u8], mime: &'a str) -> BoxFuture<'a, SignResult<RecognizedSign>>;
}

/// Studio backed by a directory of `{token}.png` files.
///
/// Generation succeeds once an image for the word exists in the directory.
/// Recognition matches the upload byte-for-byte (SHA-256) against the images
/// already there.
#[derive(Debug, Clone)]
pub struct DirectoryStudio {
    assets: DirectoryAssets,
}

impl DirectoryStudio {
    pub fn new(assets: DirectoryAssets) -> Self {
        Self { assets }
    }

    async fn existing_asset(&self, word: &str) -> SignResult<String> {
        let file = self.assets.file_for(word);
        let is_file = match tokio::fs::metadata(&file).await {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };
        if is_file {
            Ok(self.assets.reference_for(word))
        } else {
            Err(SignError::AssetUnavailable {
                token: word.to_string(),
                reason: format!("{} is not a file", file.display()),
            })
        }
    }

    async fn match_upload(&self, image: &[u8], mime: &str) -> SignResult<RecognizedSign> {
        check_image(image, mime)?;
        let word = self
            .find_by_digest(sha256(image))
            .await?
            .ok_or(SignError::Unrecognized)?;
        Ok(RecognizedSign {
            image_path: self.assets.reference_for(&word),
            word,
        })
    }

    async fn find_by_digest(&self, digest: [u8; 32]) -> SignResult<Option<String>> {
        let mut dir = tokio::fs::read_dir(self.assets.dir()).await?;
        let mut candidates: Vec<PathBuf> = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(ASSET_EXTENSION) {
                candidates.push(path);
            }
        }
        // Deterministic winner when several files share content
        candidates.sort();

        for path in candidates {
            let bytes = tokio::fs::read(&path).await?;
            if sha256(&bytes) == digest {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    return Ok(Some(stem.to_string()));
                }
            }
        }
        Ok(None)
    }
}

impl SignStudio for DirectoryStudio {
    fn generate<'a>(&'a self, word: &'a str) -> BoxFuture<'a, SignResult<String>> {
        self.existing_asset(word).boxed()
    }

    fn recognize<'a>(&'a self, image: &'a [u8], mime: &'a str) -> BoxFuture<'a, SignResult<RecognizedSign>> {
        self.match_upload(image, mime).boxed()
    }
}

/// Publishes studio results into a shared catalog
#[derive(Clone)]
pub struct SignRegistrar {
    catalog: Catalog,
    studio: Arc<dyn SignStudio>,
}

impl std::fmt::Debug for SignRegistrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignRegistrar")
            .field("catalog_size", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl SignRegistrar {
    pub fn new(catalog: Catalog, studio: impl SignStudio + 'static) -> Self {
        Self {
            catalog,
            studio: Arc::new(studio),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ask the studio for a word's image and register it
    pub async fn generate(&self, word: &str) -> SignResult<Sign> {
        let word = sanitize(word)?;
        info!(word = %word, "generating sign");

        match self.studio.generate(&word).await {
            Ok(path) => self.publish(&word, &path),
            Err(e) => {
                warn!(word = %word, error = %e, "sign generation failed");
                Err(e)
            }
        }
    }

    /// Recognize an uploaded image and register it under the recognized word
    pub async fn recognize(&self, image: &[u8], mime: &str) -> SignResult<Sign> {
        let recognized = match self.studio.recognize(image, mime).await {
            Ok(r) => r,
            Err(e) => {
                warn!(bytes = image.len(), mime, error = %e, "sign recognition failed");
                return Err(e);
            }
        };

        // Recognizers may answer with stray punctuation or casing
        let word = sanitize(&recognized.word)?;
        info!(word = %word, "sign recognized");
        self.publish(&word, &recognized.image_path)
    }

    /// Re-read a word's image from an asset source (after an out-of-band upload)
    pub fn reload(&self, word: &str, assets: &dyn AssetSource) -> SignResult<Sign> {
        let word = sanitize(word)?;
        match assets.locate(&word) {
            Some(path) => self.publish(&word, &path),
            None => {
                warn!(word = %word, "no asset to reload");
                Err(SignError::AssetUnavailable {
                    token: word,
                    reason: "asset source has no image".to_string(),
                })
            }
        }
    }

    fn publish(&self, word: &str, path: &str) -> SignResult<Sign> {
        let sign = self.catalog.upsert_word(word, path)?;
        info!(token = %sign.token, path = %sign.image_path, "sign published");
        Ok(sign)
    }
}

/// Cleaned word, only if it can become a catalog token
fn sanitize(input: &str) -> SignResult<String> {
    sanitize_word(input)
        .filter(|w| is_letter_token(w) || is_word_token(w))
        .ok_or_else(|| SignError::InvalidWord {
            input: input.to_string(),
        })
}

fn check_image(image: &[u8], mime: &str) -> SignResult<()> {
    if !mime.starts_with("image/") {
        return Err(SignError::InvalidImage {
            reason: format!("content type '{}' is not an image", mime),
        });
    }
    if image.is_empty() {
        return Err(SignError::InvalidImage {
            reason: "empty upload".to_string(),
        });
    }
    Ok(())
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

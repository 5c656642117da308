//! Asset lookup: token → optional image reference
//!
//! The catalog and the registrar only ever ask "is there an image for this
//! token?". How the image is stored or served is up to the implementation.

use std::path::{Path, PathBuf};
use crate::{ASSET_EXTENSION, PLACEHOLDER_PREFIX};

/// Source of pre-existing sign images
pub trait AssetSource {
    /// Reference to the image for a normalized token, if one exists
    fn locate(&self, token: &str) -> Option<String>;
}

impl<F> AssetSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn locate(&self, token: &str) -> Option<String> {
        self(token)
    }
}

/// No images at all: letters get placeholders, words stay absent
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    fn locate(&self, _token: &str) -> Option<String> {
        None
    }
}

/// Images stored as `{dir}/{token}.png`, served under `{url_prefix}/{token}.png`
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    dir: PathBuf,
    url_prefix: String,
}

impl DirectoryAssets {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix: String = url_prefix.into();
        let url_prefix = url_prefix.trim_end_matches('/').to_string();
        Self {
            dir: dir.into(),
            url_prefix,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a token's image would live in
    pub fn file_for(&self, token: &str) -> PathBuf {
        self.dir.join(asset_file_name(token))
    }

    /// Public reference for a token's image
    pub fn reference_for(&self, token: &str) -> String {
        format!("{}/{}", self.url_prefix, asset_file_name(token))
    }
}

impl AssetSource for DirectoryAssets {
    fn locate(&self, token: &str) -> Option<String> {
        if self.file_for(token).is_file() {
            Some(self.reference_for(token))
        } else {
            None
        }
    }
}

/// `{token}.png`
pub fn asset_file_name(token: &str) -> String {
    format!("{}.{}", token, ASSET_EXTENSION)
}

/// Conventional path used when a letter has no image
pub fn placeholder_path(token: &str) -> String {
    format!("{}/{}", PLACEHOLDER_PREFIX, asset_file_name(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_path() {
        assert_eq!(placeholder_path("a"), "/signs/a.png");
    }

    #[test]
    fn test_closure_source() {
        let source = |token: &str| (token == "love").then(|| "/img/love.png".to_string());
        assert_eq!(source.locate("love").as_deref(), Some("/img/love.png"));
        assert_eq!(source.locate("hate"), None);
    }

    #[test]
    fn test_directory_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("love.png"), b"png").unwrap();

        let assets = DirectoryAssets::new(dir.path(), "/static/signs/");
        assert_eq!(assets.locate("love").as_deref(), Some("/static/signs/love.png"));
        assert_eq!(assets.locate("hello"), None);
    }
}

//! Core modules for Signglyph

pub mod tokenizer;
pub mod assets;
pub mod catalog;
pub mod classifier;
pub mod content;
pub mod engine;
pub mod registrar;
pub mod api;

pub use tokenizer::{tokenize, sanitize_word, Tokens};
pub use assets::{AssetSource, DirectoryAssets, NoAssets, placeholder_path};
pub use catalog::Catalog;
pub use classifier::{PosClassifier, LexiconClassifier};
pub use content::{ContentWordSource, FixedSet, ClassifierAugmented};
pub use engine::TranslationEngine;
pub use registrar::{SignStudio, DirectoryStudio, SignRegistrar, RecognizedSign};
pub use api::{create_router, run_server, AppState};

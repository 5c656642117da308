//! Core types for Signglyph

mod sign;
mod error;
mod tags;
mod output;

pub use sign::{Sign, SignKind};
pub use error::{SignError, SignResult};
pub use tags::PosTags;
pub use output::TranslationOutput;

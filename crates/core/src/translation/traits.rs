use async_trait::async_trait;

use crate::config::LanguageTag;

use super::{Dictionary, Result};

/// Source of remote translation dictionaries.
///
/// Implementations fetch one dictionary per language; the fallback
/// chain around failures lives in the caller.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Fetches the dictionary for a language.
    async fn fetch(&self, lang: &LanguageTag) -> Result<Dictionary>;
}

//! Translation loading.
//!
//! Loads dictionaries through a fallback chain (requested language,
//! configured fallback, builtin default) and never fails: errors along
//! the chain are folded into the outcome's `error` field. A generation
//! counter lets callers discard fetches that were superseded by a newer
//! language change.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use kyc_sdk_core::config::LanguageTag;
use kyc_sdk_core::translation::{
    builtin_dictionary, default_dictionary, Dictionary, Result, TranslationError,
    TranslationOutcome, TranslationProvider, TranslationSettings,
};

/// Remote dictionary endpoint speaking `GET {endpoint}/{lang}` with a
/// JSON dictionary response.
#[derive(Debug, Clone)]
pub struct HttpTranslationEndpoint {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTranslationEndpoint {
    /// Creates an endpoint client.
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl TranslationProvider for HttpTranslationEndpoint {
    async fn fetch(&self, lang: &LanguageTag) -> Result<Dictionary> {
        let url = format!(
            "{}/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            lang.as_str()
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TranslationError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslationError::NotAvailable(format!(
                "{}: HTTP {}",
                lang,
                response.status().as_u16()
            )));
        }

        response
            .json::<Dictionary>()
            .await
            .map_err(|e| TranslationError::FetchFailed(e.to_string()))
    }
}

/// Dictionary loader with fallback chain and staleness tracking.
pub struct TranslationFetcher {
    settings: TranslationSettings,
    provider: Option<Arc<dyn TranslationProvider>>,
    generation: AtomicU64,
}

impl TranslationFetcher {
    /// Creates a fetcher; an endpoint in the settings gets an HTTP
    /// provider, otherwise only builtin dictionaries are used.
    pub fn new(settings: TranslationSettings) -> Self {
        let provider: Option<Arc<dyn TranslationProvider>> = settings
            .endpoint
            .clone()
            .map(|endpoint| {
                Arc::new(HttpTranslationEndpoint::new(endpoint)) as Arc<dyn TranslationProvider>
            });
        Self {
            settings,
            provider,
            generation: AtomicU64::new(0),
        }
    }

    /// Creates a fetcher with an explicit provider (used by tests).
    pub fn with_provider(
        settings: TranslationSettings,
        provider: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self {
            settings,
            provider: Some(provider),
            generation: AtomicU64::new(0),
        }
    }

    /// True when a remote provider is configured.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// True when `lang` can be resolved without the fallback chain.
    pub fn supports(&self, lang: &LanguageTag) -> bool {
        self.has_provider() || builtin_dictionary(lang).is_some()
    }

    /// Starts a new load generation, invalidating in-flight loads.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while `generation` is still the newest one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Loads the dictionary for `lang` through the fallback chain.
    ///
    /// Always resolves. The `error` field is non-empty whenever any
    /// step of the chain failed, even if a later step succeeded.
    pub async fn load(&self, lang: &LanguageTag) -> TranslationOutcome {
        let mut errors: Vec<String> = Vec::new();

        match self.resolve(lang).await {
            Ok(dictionary) => {
                return TranslationOutcome {
                    language: lang.clone(),
                    dictionary,
                    error: None,
                };
            }
            Err(e) => errors.push(e.to_string()),
        }

        if let Some(fallback) = self
            .settings
            .fallback_language
            .as_ref()
            .filter(|fallback| *fallback != lang)
        {
            match self.resolve(fallback).await {
                Ok(dictionary) => {
                    tracing::debug!(
                        requested = %lang,
                        fallback = %fallback,
                        "translation fell back to configured language"
                    );
                    return TranslationOutcome {
                        language: fallback.clone(),
                        dictionary,
                        error: Some(errors.join("; ")),
                    };
                }
                Err(e) => errors.push(e.to_string()),
            }
        }

        let default = &self.settings.default_language;
        let dictionary = builtin_dictionary(default).unwrap_or_else(default_dictionary);
        tracing::debug!(requested = %lang, "translation fell back to builtin default");
        TranslationOutcome {
            language: default.clone(),
            dictionary,
            error: Some(errors.join("; ")),
        }
    }

    async fn resolve(&self, lang: &LanguageTag) -> Result<Dictionary> {
        match &self.provider {
            Some(provider) => provider.fetch(lang).await,
            None => builtin_dictionary(lang)
                .ok_or_else(|| TranslationError::NotAvailable(lang.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    #[async_trait]
    impl TranslationProvider for FailingProvider {
        async fn fetch(&self, lang: &LanguageTag) -> Result<Dictionary> {
            Err(TranslationError::FetchFailed(format!(
                "unreachable endpoint for {lang}"
            )))
        }
    }

    #[tokio::test]
    async fn test_builtin_load_has_no_error() {
        let fetcher = TranslationFetcher::new(TranslationSettings::new());
        let outcome = fetcher.load(&LanguageTag::de()).await;

        assert_eq!(outcome.language, LanguageTag::de());
        assert_eq!(outcome.dictionary.get("actions.submit"), Some("Absenden"));
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_unregistered_language_falls_back_to_builtin_english() {
        let fetcher = TranslationFetcher::new(TranslationSettings::new());
        let outcome = fetcher.load(&LanguageTag::new("fr").unwrap()).await;

        assert_eq!(outcome.language, LanguageTag::en());
        assert_eq!(outcome.dictionary.get("title"), Some("KYC Verification"));
        assert!(outcome.error.as_deref().unwrap_or("").contains("fr"));
    }

    #[tokio::test]
    async fn test_fallback_language_is_tried_before_default() {
        let settings =
            TranslationSettings::new().with_fallback_language(LanguageTag::de());
        let fetcher = TranslationFetcher::new(settings);
        let outcome = fetcher.load(&LanguageTag::new("fr").unwrap()).await;

        assert_eq!(outcome.language, LanguageTag::de());
        assert_eq!(outcome.dictionary.get("actions.submit"), Some("Absenden"));
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    async fn test_provider_failure_collects_all_errors() {
        let settings =
            TranslationSettings::new().with_fallback_language(LanguageTag::de());
        let fetcher =
            TranslationFetcher::with_provider(settings, Arc::new(FailingProvider));
        let outcome = fetcher.load(&LanguageTag::new("fr").unwrap()).await;

        // Requested and fallback both failed through the provider, so
        // the builtin default ends the chain.
        assert_eq!(outcome.language, LanguageTag::en());
        let error = outcome.error.unwrap();
        assert!(error.contains("fr"));
        assert!(error.contains("de"));
    }

    #[tokio::test]
    async fn test_generation_counter_marks_stale_loads() {
        let fetcher = TranslationFetcher::new(TranslationSettings::new());
        let first = fetcher.begin();
        let second = fetcher.begin();

        assert!(!fetcher.is_current(first));
        assert!(fetcher.is_current(second));
    }

    #[test]
    fn test_supports_builtin_without_provider() {
        let fetcher = TranslationFetcher::new(TranslationSettings::new());
        assert!(fetcher.supports(&LanguageTag::en()));
        assert!(fetcher.supports(&LanguageTag::de()));
        assert!(!fetcher.supports(&LanguageTag::new("fr").unwrap()));
    }
}

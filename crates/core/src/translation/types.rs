use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::config::LanguageTag;

use super::{Result, TranslationError};

/// A nested translation dictionary.
///
/// Leaves are strings; inner nodes are objects addressed with
/// dot-separated keys (`fields.firstName.label`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: serde_json::Map<String, Value>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-parsed JSON object.
    pub fn from_map(entries: serde_json::Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Returns true when the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a dot-separated key to its string leaf, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut current: &Value = &Value::Null;
        for (index, part) in key.split('.').enumerate() {
            current = if index == 0 {
                self.entries.get(part)?
            } else {
                current.as_object()?.get(part)?
            };
        }
        current.as_str()
    }

    /// Resolves a key and interpolates `{placeholder}` parameters.
    ///
    /// Missing keys fall back to the key itself; placeholders without a
    /// matching parameter are left untouched.
    pub fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut text = self.get(key).unwrap_or(key).to_string();
        for (name, value) in params {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }
}

/// Settings for loading translation dictionaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationSettings {
    /// Remote dictionary endpoint; builtin dictionaries are used when
    /// absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Url>,
    pub default_language: LanguageTag,
    /// Tried when the requested language cannot be loaded, before the
    /// builtin default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_language: Option<LanguageTag>,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            default_language: LanguageTag::en(),
            fallback_language: None,
        }
    }
}

impl TranslationSettings {
    /// Creates settings with builtin dictionaries only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets and validates the remote endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(endpoint.as_ref())
            .map_err(|e| TranslationError::InvalidEndpoint(e.to_string()))?;
        self.endpoint = Some(url);
        Ok(self)
    }

    /// Sets the default language.
    pub fn with_default_language(mut self, lang: LanguageTag) -> Self {
        self.default_language = lang;
        self
    }

    /// Sets the fallback language.
    pub fn with_fallback_language(mut self, lang: LanguageTag) -> Self {
        self.fallback_language = Some(lang);
        self
    }
}

/// Outcome of a dictionary load.
///
/// Loads always resolve: failures along the fallback chain are folded
/// into `error` while `dictionary` carries whatever was ultimately
/// loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    /// Language whose dictionary was actually loaded (may differ from
    /// the requested language when a fallback was used).
    pub language: LanguageTag,
    pub dictionary: Dictionary,
    pub error: Option<String>,
}

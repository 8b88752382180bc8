use serde::{Deserialize, Serialize};

use kyc_sdk_core::config::{ConfigError, LanguageTag, StyleOverrides, Theme};
use kyc_sdk_core::translation::TranslationSettings;

/// Options for constructing a [`KycSdk`](crate::KycSdk) instance.
///
/// `api_key` and `tenant_id` are required; everything else has a
/// sensible default. Validation happens at construction, not at first
/// use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SdkOptions {
    pub api_key: String,
    pub tenant_id: String,
    pub debug: bool,
    /// Initial theme; detected from the host environment when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Initial language; the translation default language when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<TranslationSettings>,
    /// When disabled, host-side theme/language changes are ignored and
    /// explicit API calls are the only path to a configuration change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_sync_theme: Option<bool>,
}

impl SdkOptions {
    /// Creates options with the required credentials.
    pub fn new(api_key: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            tenant_id: tenant_id.into(),
            ..Self::default()
        }
    }

    /// Enables debug logging events.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets the initial language.
    pub fn with_language(mut self, language: LanguageTag) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets initial style overrides.
    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Sets an initial raw custom stylesheet.
    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    /// Sets translation settings.
    pub fn with_translation(mut self, settings: TranslationSettings) -> Self {
        self.translation = Some(settings);
        self
    }

    /// Toggles host theme/language auto-synchronization (on by
    /// default).
    pub fn with_auto_sync_theme(mut self, enabled: bool) -> Self {
        self.auto_sync_theme = Some(enabled);
        self
    }

    /// True unless auto-synchronization was explicitly disabled.
    pub fn auto_sync_enabled(&self) -> bool {
        self.auto_sync_theme.unwrap_or(true)
    }

    pub(crate) fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingOption("apiKey"));
        }
        if self.tenant_id.trim().is_empty() {
            return Err(ConfigError::MissingOption("tenantId"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_api_key() {
        let options = SdkOptions::new("", "tenant-1");
        assert_eq!(
            options.validate(),
            Err(ConfigError::MissingOption("apiKey"))
        );
    }

    #[test]
    fn test_validate_requires_tenant_id() {
        let options = SdkOptions::new("key-1", "  ");
        assert_eq!(
            options.validate(),
            Err(ConfigError::MissingOption("tenantId"))
        );
    }

    #[test]
    fn test_auto_sync_defaults_on() {
        assert!(SdkOptions::new("key-1", "tenant-1").auto_sync_enabled());
        assert!(!SdkOptions::new("key-1", "tenant-1")
            .with_auto_sync_theme(false)
            .auto_sync_enabled());
    }

    #[test]
    fn test_deserializes_from_camel_case() {
        let options: SdkOptions = serde_json::from_value(serde_json::json!({
            "apiKey": "key-1",
            "tenantId": "tenant-1",
            "theme": "dark",
            "styles": { "primary": "#ff0000" }
        }))
        .unwrap();
        assert_eq!(options.theme, Some(Theme::Dark));
        assert_eq!(
            options.styles.unwrap().primary.as_deref(),
            Some("#ff0000")
        );
    }
}

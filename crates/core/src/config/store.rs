use crate::translation::{builtin_dictionary, default_dictionary, Dictionary};

use super::{ConfigSnapshot, LanguageTag, StyleOverrides, Theme};

/// In-memory record of the widget's current configuration.
///
/// Exactly one store exists per widget instantiation. Theme, language,
/// custom CSS, and the debug flag are replaced wholesale; style
/// overrides are shallow-merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    theme: Theme,
    language: LanguageTag,
    style_overrides: StyleOverrides,
    custom_css: Option<String>,
    debug: bool,
    dictionary: Dictionary,
}

impl ConfigStore {
    /// Creates a store seeded with the initial theme and language.
    ///
    /// The dictionary starts as the builtin one for `language`, falling
    /// back to English for languages without a builtin dictionary.
    pub fn new(theme: Theme, language: LanguageTag, debug: bool) -> Self {
        let dictionary =
            builtin_dictionary(&language).unwrap_or_else(default_dictionary);
        Self {
            theme,
            language,
            style_overrides: StyleOverrides::default(),
            custom_css: None,
            debug,
            dictionary,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    pub fn style_overrides(&self) -> &StyleOverrides {
        &self.style_overrides
    }

    pub fn custom_css(&self) -> Option<&str> {
        self.custom_css.as_deref()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Replaces the current theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replaces the current language and its loaded dictionary.
    pub fn set_language(&mut self, language: LanguageTag, dictionary: Dictionary) {
        self.language = language;
        self.dictionary = dictionary;
    }

    /// Shallow-merges style overrides and returns the merged result.
    pub fn merge_styles(&mut self, overrides: &StyleOverrides) -> StyleOverrides {
        self.style_overrides.merge(overrides);
        self.style_overrides.clone()
    }

    /// Replaces the custom stylesheet wholesale.
    pub fn set_custom_css(&mut self, css: impl Into<String>) {
        self.custom_css = Some(css.into());
    }

    /// Replaces the debug flag.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Synchronous snapshot of the externally visible configuration.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            theme: self.theme,
            lang: self.language.clone(),
            dir: self.language.direction(),
            debug: self.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_builtin_dictionary() {
        let store = ConfigStore::new(Theme::Light, LanguageTag::de(), false);
        assert_eq!(store.dictionary().get("actions.submit"), Some("Absenden"));
    }

    #[test]
    fn test_new_falls_back_to_english_dictionary() {
        let store =
            ConfigStore::new(Theme::Light, LanguageTag::new("fr").unwrap(), false);
        assert_eq!(store.dictionary().get("title"), Some("KYC Verification"));
    }

    #[test]
    fn test_merge_styles_accumulates_left_to_right() {
        let mut store = ConfigStore::new(Theme::Light, LanguageTag::en(), false);
        store.merge_styles(&StyleOverrides::new().with_primary("#ff0000"));
        let merged = store.merge_styles(&StyleOverrides::new().with_radius("1rem"));

        assert_eq!(merged.primary.as_deref(), Some("#ff0000"));
        assert_eq!(merged.radius.as_deref(), Some("1rem"));
    }

    #[test]
    fn test_custom_css_replaced_wholesale() {
        let mut store = ConfigStore::new(Theme::Light, LanguageTag::en(), false);
        store.set_custom_css(".widget { color: red; }");
        store.set_custom_css(".widget { color: blue; }");
        assert_eq!(store.custom_css(), Some(".widget { color: blue; }"));
    }

    #[test]
    fn test_snapshot_reflects_current_state() {
        let mut store = ConfigStore::new(Theme::Light, LanguageTag::en(), false);
        store.set_theme(Theme::Dark);
        store.set_debug(true);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.theme, Theme::Dark);
        assert_eq!(snapshot.lang, LanguageTag::en());
        assert!(snapshot.debug);
    }

    #[test]
    fn test_snapshot_direction_follows_language() {
        let mut store = ConfigStore::new(Theme::Light, LanguageTag::en(), false);
        store.set_language(
            LanguageTag::new("he").unwrap(),
            Dictionary::new(),
        );
        assert_eq!(store.snapshot().dir, crate::config::Direction::Rtl);
    }
}

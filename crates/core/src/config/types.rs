use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// ISO 639-1 base codes for right-to-left languages.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "dv", "fa", "ha", "he", "iw", "khw", "ks", "ku", "ps", "sd", "ur", "yi",
];

/// Widget color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Returns the lowercase string form used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns true for the dark theme.
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}

/// Text direction derived from the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Returns the lowercase string form used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            other => Err(ConfigError::InvalidDirection(other.to_string())),
        }
    }
}

/// A validated BCP-47-style language tag, e.g. `en`, `de`, `en-US`.
///
/// The set of accepted tags is open: builtin dictionaries exist for
/// `en` and `de`, other tags resolve through the translation fallback
/// chain. Validation only rejects malformed tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Validates and wraps a language tag.
    ///
    /// Accepts non-empty sequences of ASCII alphanumeric subtags joined
    /// by single hyphens.
    pub fn new(tag: impl AsRef<str>) -> Result<Self> {
        let tag = tag.as_ref();
        let well_formed = !tag.is_empty()
            && !tag.starts_with('-')
            && !tag.ends_with('-')
            && !tag.contains("--")
            && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if well_formed {
            Ok(Self(tag.to_string()))
        } else {
            Err(ConfigError::InvalidLanguageTag(tag.to_string()))
        }
    }

    /// English, the builtin default language.
    pub fn en() -> Self {
        Self("en".to_string())
    }

    /// German.
    pub fn de() -> Self {
        Self("de".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base language code with any region subtag stripped,
    /// e.g. `en-US` -> `en`, `fa-IR` -> `fa`.
    pub fn base(&self) -> String {
        self.0
            .split('-')
            .next()
            .unwrap_or(&self.0)
            .to_ascii_lowercase()
    }

    /// Text direction for this language, looked up by base code.
    pub fn direction(&self) -> Direction {
        if RTL_LANGUAGES.contains(&self.base().as_str()) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Returns true if this language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

/// Partial overrides for the fixed style-variable vocabulary.
///
/// Each `Some` field maps to one CSS custom property. Updates are
/// shallow-merged: new keys win, absent keys keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destructive: Option<String>,
}

impl StyleOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary color override.
    pub fn with_primary(mut self, value: impl Into<String>) -> Self {
        self.primary = Some(value.into());
        self
    }

    /// Sets the corner radius override.
    pub fn with_radius(mut self, value: impl Into<String>) -> Self {
        self.radius = Some(value.into());
        self
    }

    /// Sets the background color override.
    pub fn with_background(mut self, value: impl Into<String>) -> Self {
        self.background = Some(value.into());
        self
    }

    /// Sets the foreground color override.
    pub fn with_foreground(mut self, value: impl Into<String>) -> Self {
        self.foreground = Some(value.into());
        self
    }

    /// Sets the border color override.
    pub fn with_border(mut self, value: impl Into<String>) -> Self {
        self.border = Some(value.into());
        self
    }

    /// Sets the secondary color override.
    pub fn with_secondary(mut self, value: impl Into<String>) -> Self {
        self.secondary = Some(value.into());
        self
    }

    /// Sets the muted color override.
    pub fn with_muted(mut self, value: impl Into<String>) -> Self {
        self.muted = Some(value.into());
        self
    }

    /// Sets the destructive color override.
    pub fn with_destructive(mut self, value: impl Into<String>) -> Self {
        self.destructive = Some(value.into());
        self
    }

    /// Shallow-merges `other` over `self`: set keys win, unset keys
    /// keep their current value. Re-applying the same overrides is a
    /// no-op.
    pub fn merge(&mut self, other: &StyleOverrides) {
        let fields = [
            (&mut self.primary, &other.primary),
            (&mut self.radius, &other.radius),
            (&mut self.background, &other.background),
            (&mut self.foreground, &other.foreground),
            (&mut self.border, &other.border),
            (&mut self.secondary, &other.secondary),
            (&mut self.muted, &other.muted),
            (&mut self.destructive, &other.destructive),
        ];
        for (target, source) in fields {
            if source.is_some() {
                *target = source.clone();
            }
        }
    }

    /// Returns true when no override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applicant data forwarded to the embedded widget as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
    pub user_ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Any additional fields the host wants to pass through.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserData {
    /// Creates user data with the required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        user_ref_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            user_ref_id: user_ref_id.into(),
            email: None,
            phone: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

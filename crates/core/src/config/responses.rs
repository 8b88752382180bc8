use serde::{Deserialize, Serialize};

use super::{Direction, LanguageTag, StyleOverrides, Theme, UserData};

/// Result of a successful `init` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitResponse {
    pub ok: bool,
}

/// Result of a `change_theme` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChangeResponse {
    pub success: bool,
    pub theme: Theme,
}

/// Result of a `change_language` call.
///
/// `error` carries translation fallback details; the call itself still
/// resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageChangeResponse {
    pub success: bool,
    pub lang: LanguageTag,
    pub dir: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a `change_styles` call, carrying the merged override set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleChangeResponse {
    pub success: bool,
    pub styles: StyleOverrides,
}

/// Result of a `change_custom_css` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCssResponse {
    pub success: bool,
    pub css: String,
}

/// Result of a `set_debug` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugChangeResponse {
    pub success: bool,
    pub debug: bool,
}

/// Result of a `send_user_data` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataResponse {
    pub success: bool,
    pub user_data: UserData,
}

/// Point-in-time view of the widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub theme: Theme,
    pub lang: LanguageTag,
    pub dir: Direction,
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_response_omits_absent_error() {
        let response = LanguageChangeResponse {
            success: true,
            lang: LanguageTag::de(),
            dir: Direction::Ltr,
            error: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["lang"], "de");
        assert_eq!(json["dir"], "ltr");
    }

    #[test]
    fn test_config_snapshot_serialization() {
        let snapshot = ConfigSnapshot {
            theme: Theme::Dark,
            lang: LanguageTag::en(),
            dir: Direction::Ltr,
            debug: false,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["debug"], false);
    }
}

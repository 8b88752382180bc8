use serde::{Deserialize, Serialize};

use crate::config::{Direction, LanguageTag, StyleOverrides, Theme, UserData};

/// A configuration-change event bridged from the host context into the
/// embedded rendering context.
///
/// The serde tag strings are the wire contract across the boundary;
/// payload shape is fixed by the tag. Delivery is fire-and-forget,
/// host to embedded only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum WidgetEvent {
    #[serde(rename = "widget-theme-change")]
    ThemeChange { theme: Theme },
    #[serde(rename = "widget-language-change")]
    LanguageChange { lang: LanguageTag, dir: Direction },
    #[serde(rename = "widget-style-change")]
    StyleChange { styles: StyleOverrides },
    #[serde(rename = "widget-custom-css-change")]
    CustomCssChange { css: String },
    #[serde(rename = "widget-debug-change")]
    DebugChange { debug: bool },
    #[serde(rename = "widget-user-data")]
    UserData {
        #[serde(rename = "userData")]
        user_data: UserData,
    },
}

impl WidgetEvent {
    /// Returns the event's tag.
    pub fn tag(&self) -> EventTag {
        match self {
            WidgetEvent::ThemeChange { .. } => EventTag::ThemeChange,
            WidgetEvent::LanguageChange { .. } => EventTag::LanguageChange,
            WidgetEvent::StyleChange { .. } => EventTag::StyleChange,
            WidgetEvent::CustomCssChange { .. } => EventTag::CustomCssChange,
            WidgetEvent::DebugChange { .. } => EventTag::DebugChange,
            WidgetEvent::UserData { .. } => EventTag::UserData,
        }
    }
}

/// The closed vocabulary of bridged event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTag {
    ThemeChange,
    LanguageChange,
    StyleChange,
    CustomCssChange,
    DebugChange,
    UserData,
}

impl EventTag {
    /// Every bridged tag, in a stable order.
    pub const ALL: [EventTag; 6] = [
        EventTag::ThemeChange,
        EventTag::LanguageChange,
        EventTag::StyleChange,
        EventTag::CustomCssChange,
        EventTag::DebugChange,
        EventTag::UserData,
    ];

    /// The event name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventTag::ThemeChange => "widget-theme-change",
            EventTag::LanguageChange => "widget-language-change",
            EventTag::StyleChange => "widget-style-change",
            EventTag::CustomCssChange => "widget-custom-css-change",
            EventTag::DebugChange => "widget-debug-change",
            EventTag::UserData => "widget-user-data",
        }
    }
}

use crate::config::{LanguageTag, Theme};

use super::{ColorScheme, HostEnvironment};

/// Detects the current theme from the host environment.
///
/// Sources are checked in priority order, first match wins:
/// 1. `dark`/`light` class on the document root
/// 2. `data-theme` attribute
/// 3. `data-mode` attribute
/// 4. `dark`/`light` class on the body
/// 5. computed `color-scheme` style
/// 6. OS-level color-scheme preference
pub fn detect_host_theme(env: &dyn HostEnvironment) -> Theme {
    if let Some(theme) = theme_from_classes(&env.root_classes()) {
        return theme;
    }
    for attribute in ["data-theme", "data-mode"] {
        match env.root_attribute(attribute).as_deref() {
            Some("dark") => return Theme::Dark,
            Some("light") => return Theme::Light,
            _ => {}
        }
    }
    if let Some(theme) = theme_from_classes(&env.body_classes()) {
        return theme;
    }
    match env.color_scheme() {
        Some(ColorScheme::Dark) => return Theme::Dark,
        Some(ColorScheme::Light) => return Theme::Light,
        None => {}
    }
    system_theme(env)
}

/// The OS-level color-scheme preference.
pub fn system_theme(env: &dyn HostEnvironment) -> Theme {
    if env.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Reads the language from the `lang` attribute on the document root.
///
/// Malformed tags are treated as absent.
pub fn resolve_host_language(env: &dyn HostEnvironment) -> Option<LanguageTag> {
    env.root_attribute("lang")
        .and_then(|value| LanguageTag::new(value).ok())
}

fn theme_from_classes(classes: &[String]) -> Option<Theme> {
    if classes.iter().any(|c| c == "dark") {
        Some(Theme::Dark)
    } else if classes.iter().any(|c| c == "light") {
        Some(Theme::Light)
    } else {
        None
    }
}

use crate::config::{StyleOverrides, Theme};

/// Stylesheet id for the per-theme variable block.
pub const FALLBACK_STYLESHEET_ID: &str = "kyc-sdk-fallback-styles";
/// Stylesheet id for caller style overrides.
pub const OVERRIDES_STYLESHEET_ID: &str = "kyc-sdk-custom-styles";
/// Stylesheet id for the raw caller stylesheet.
pub const CUSTOM_CSS_STYLESHEET_ID: &str = "kyc-sdk-custom-css";

const LIGHT_THEME_CSS: &str = "\
:host, :root {
  --background: oklch(100% 0 0);
  --foreground: oklch(20% 0 0);
  --primary: oklch(55% 0.22 264);
  --primary-foreground: oklch(100% 0 0);
  --secondary: oklch(50% 0.02 264);
  --secondary-foreground: oklch(100% 0 0);
  --muted: oklch(97% 0 0);
  --muted-foreground: oklch(50% 0.02 264);
  --destructive: oklch(57.7% 0.245 27.325);
  --destructive-foreground: oklch(100% 0 0);
  --border: oklch(90% 0 0);
  --ring: oklch(55% 0.22 264);
  --radius: 0.625rem;
}
";

const DARK_THEME_CSS: &str = "\
:host, :root {
  --background: oklch(20% 0 0);
  --foreground: oklch(97% 0 0);
  --primary: oklch(55% 0.22 264);
  --primary-foreground: oklch(100% 0 0);
  --secondary: oklch(30% 0 0);
  --secondary-foreground: oklch(97% 0 0);
  --muted: oklch(30% 0 0);
  --muted-foreground: oklch(65% 0.02 264);
  --destructive: oklch(57.7% 0.245 27.325);
  --destructive-foreground: oklch(97% 0 0);
  --border: oklch(32% 0 0);
  --ring: oklch(55% 0.22 264);
  --radius: 0.625rem;
}
";

/// The CSS variable block for a theme.
pub fn fallback_css(theme: Theme) -> String {
    match theme {
        Theme::Light => LIGHT_THEME_CSS.to_string(),
        Theme::Dark => DARK_THEME_CSS.to_string(),
    }
}

/// Renders style overrides as a CSS variable block.
///
/// Only set keys are rendered; rendering the same overrides twice
/// yields the same CSS. Returns an empty string when nothing is set.
pub fn overrides_css(styles: &StyleOverrides) -> String {
    let vars: Vec<String> = [
        ("--primary", &styles.primary),
        ("--radius", &styles.radius),
        ("--background", &styles.background),
        ("--foreground", &styles.foreground),
        ("--border", &styles.border),
        ("--secondary", &styles.secondary),
        ("--muted", &styles.muted),
        ("--destructive", &styles.destructive),
    ]
    .iter()
    .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}: {v};")))
    .collect();

    if vars.is_empty() {
        return String::new();
    }
    format!(":host, :root {{ {} }}", vars.join(" "))
}

mod css;

pub use css::{
    fallback_css, overrides_css, CUSTOM_CSS_STYLESHEET_ID, FALLBACK_STYLESHEET_ID,
    OVERRIDES_STYLESHEET_ID,
};

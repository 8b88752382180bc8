mod error;
mod responses;
mod store;
mod types;

pub use error::{ConfigError, Result};
pub use responses::{
    ConfigSnapshot, CustomCssResponse, DebugChangeResponse, InitResponse, LanguageChangeResponse,
    StyleChangeResponse, ThemeChangeResponse, UserDataResponse,
};
pub use store::ConfigStore;
pub use types::{Direction, LanguageTag, StyleOverrides, Theme, UserData};

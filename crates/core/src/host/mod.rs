mod detect;
mod error;
mod traits;

pub use detect::{detect_host_theme, resolve_host_language, system_theme};
pub use error::{HostError, Result};
pub use traits::{ColorScheme, HostEnvironment, HostSignal};

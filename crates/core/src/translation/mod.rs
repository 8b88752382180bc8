mod builtin;
mod error;
mod traits;
mod types;

pub use builtin::{builtin_dictionary, default_dictionary};
pub use error::{Result, TranslationError};
pub use traits::TranslationProvider;
pub use types::{Dictionary, TranslationOutcome, TranslationSettings};

mod traits;

pub use traits::{keys, CredentialStore};

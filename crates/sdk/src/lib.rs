//! kyc_sdk - Embeddable KYC widget SDK.
//!
//! The SDK mounts a widget into a host page (inline container or
//! full-viewport frame) and keeps the embedded context synchronized
//! with the host: theme, language, style overrides, and custom CSS
//! changes flow one way, host to embedded, as typed bridge events.
//! Browser specifics are abstracted behind the `HostEnvironment` and
//! `EmbeddedContext` traits from `kyc_sdk_core`; the `memory` feature
//! ships in-memory implementations for tests and non-browser hosts.

pub mod bridge;
pub mod bus;
pub mod error;
#[cfg(feature = "memory")]
pub mod memory;
pub mod options;
pub mod sdk;
pub mod translation;

mod watcher;

pub use error::{Result, SdkError};
#[cfg(feature = "memory")]
pub use memory::{MemoryCredentialStore, MemoryEmbeddedContext, MemoryHost};
pub use options::SdkOptions;
pub use sdk::{KycSdk, DEFAULT_FRAME_ID};
pub use translation::{HttpTranslationEndpoint, TranslationFetcher};

// Re-export core types for use at the API boundary.
pub use kyc_sdk_core::config::{
    ConfigSnapshot, Direction, LanguageTag, StyleOverrides, Theme, UserData,
};
pub use kyc_sdk_core::embed::EmbeddedContext;
pub use kyc_sdk_core::events::{EventTag, WidgetEvent};
pub use kyc_sdk_core::host::{ColorScheme, HostEnvironment, HostError, HostSignal};
pub use kyc_sdk_core::lifecycle::{MountRegistry, MountTarget};
pub use kyc_sdk_core::storage::CredentialStore;
pub use kyc_sdk_core::translation::{
    Dictionary, TranslationProvider, TranslationSettings,
};

//! In-memory host environment.
//!
//! Implements the host-side traits without a browser: mutable host
//! state with broadcastable change signals, recording embedded
//! contexts, and a map-backed credential store. Used by the test suite
//! and by non-browser embeddings that drive the host state themselves.

mod context;
mod credentials;
mod host;

pub use context::MemoryEmbeddedContext;
pub use credentials::MemoryCredentialStore;
pub use host::MemoryHost;

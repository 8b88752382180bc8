//! kyc_sdk_core - Core types and traits for the KYC widget SDK.
//!
//! This crate holds the pure, I/O-free building blocks of the widget:
//! configuration values and the config store, the typed bridge events,
//! the host environment and embedded context abstractions, stylesheet
//! generation, translation dictionaries, and the mount lifecycle
//! registry. Runtime concerns (event bus, bridge task, watcher,
//! translation fetching) live in the `kyc_sdk` crate.

pub mod config;
pub mod embed;
pub mod events;
pub mod host;
pub mod lifecycle;
pub mod storage;
pub mod style;
pub mod translation;

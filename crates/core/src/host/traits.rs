use std::sync::Arc;

use tokio::sync::broadcast;

use crate::embed::EmbeddedContext;

use super::Result;

/// Computed `color-scheme` value on the host document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// A change notification from the host environment.
///
/// Signals carry no payload: receivers re-read the current host state,
/// so rapid mutations within one tick may coalesce into a single
/// observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    /// A watched attribute (`class`, `data-theme`, `data-mode`, `style`,
    /// `lang`) changed on the document root.
    RootChanged,
    /// The `class` attribute changed on the document body.
    BodyChanged,
    /// The OS-level color-scheme preference flipped.
    PreferenceChanged,
}

/// The host page embedding the widget.
///
/// Abstracts the browser signal sources (DOM attributes, media queries)
/// and mount points so that a non-browser embedding can implement the
/// same interface against its own signal source.
pub trait HostEnvironment: Send + Sync {
    /// Classes on the document root element.
    fn root_classes(&self) -> Vec<String>;

    /// Value of an attribute on the document root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Classes on the document body.
    fn body_classes(&self) -> Vec<String>;

    /// Computed `color-scheme` on the document root, if any.
    fn color_scheme(&self) -> Option<ColorScheme>;

    /// OS-level `prefers-color-scheme: dark` state.
    fn prefers_dark(&self) -> bool;

    /// Subscribes to host change notifications.
    fn signals(&self) -> broadcast::Receiver<HostSignal>;

    /// Mounts an embedded context inline into the element matching
    /// `selector`. Fails when the element does not exist.
    fn mount_inline(&self, selector: &str) -> Result<Arc<dyn EmbeddedContext>>;

    /// Mounts an embedded context inside a full-viewport frame,
    /// reusing an existing attached frame with the same id.
    fn mount_frame(&self, frame_id: &str) -> Result<Arc<dyn EmbeddedContext>>;
}

use crate::events::WidgetEvent;

/// The embedded rendering context the widget tree lives in: an iframe
/// document, a shadow-rooted inline container, or an in-memory stand-in.
///
/// Every method is a silent no-op once the context has been detached;
/// the bridge must never observe an error from a torn-down context.
pub trait EmbeddedContext: Send + Sync {
    /// True while the context's document is still reachable.
    fn is_attached(&self) -> bool;

    /// Delivers a bridged event into the context, verbatim.
    fn deliver(&self, event: &WidgetEvent);

    /// Injects a stylesheet into the context's head, replacing any
    /// previously injected sheet with the same id.
    fn inject_stylesheet(&self, id: &str, css: &str);

    /// Toggles the `dark` class on the context's root element.
    fn set_dark(&self, dark: bool);

    /// Tears the context down, removing its node from the host. After
    /// this, `is_attached` returns false and all other methods no-op.
    fn detach(&self);
}

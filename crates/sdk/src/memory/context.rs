use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use kyc_sdk_core::embed::EmbeddedContext;
use kyc_sdk_core::events::{EventTag, WidgetEvent};

#[derive(Debug, Default)]
struct ContextState {
    stylesheets: HashMap<String, String>,
    dark: bool,
    delivered: Vec<WidgetEvent>,
}

/// Recording embedded context.
///
/// Stores everything delivered to it so tests can assert on the exact
/// stylesheets, dark-class state, and event sequence an embedding
/// observed. Detaching freezes the recorded state rather than clearing
/// it.
#[derive(Debug)]
pub struct MemoryEmbeddedContext {
    attached: AtomicBool,
    state: RwLock<ContextState>,
}

impl MemoryEmbeddedContext {
    pub(crate) fn new() -> Self {
        Self {
            attached: AtomicBool::new(true),
            state: RwLock::new(ContextState::default()),
        }
    }

    /// Contents of the injected stylesheet with `id`, if any.
    pub fn stylesheet(&self, id: &str) -> Option<String> {
        self.state
            .read()
            .expect("Lock poisoned")
            .stylesheets
            .get(id)
            .cloned()
    }

    /// Current dark-class state of the context root.
    pub fn is_dark(&self) -> bool {
        self.state.read().expect("Lock poisoned").dark
    }

    /// Every event delivered so far, in delivery order.
    pub fn delivered(&self) -> Vec<WidgetEvent> {
        self.state.read().expect("Lock poisoned").delivered.clone()
    }

    /// Number of delivered events carrying `tag`.
    pub fn delivered_count(&self, tag: EventTag) -> usize {
        self.state
            .read()
            .expect("Lock poisoned")
            .delivered
            .iter()
            .filter(|event| event.tag() == tag)
            .count()
    }
}

impl EmbeddedContext for MemoryEmbeddedContext {
    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    fn deliver(&self, event: &WidgetEvent) {
        if !self.is_attached() {
            return;
        }
        self.state
            .write()
            .expect("Lock poisoned")
            .delivered
            .push(event.clone());
    }

    fn inject_stylesheet(&self, id: &str, css: &str) {
        if !self.is_attached() {
            return;
        }
        self.state
            .write()
            .expect("Lock poisoned")
            .stylesheets
            .insert(id.to_string(), css.to_string());
    }

    fn set_dark(&self, dark: bool) {
        if !self.is_attached() {
            return;
        }
        self.state.write().expect("Lock poisoned").dark = dark;
    }

    fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }
}

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

use kyc_sdk_core::embed::EmbeddedContext;
use kyc_sdk_core::host::{ColorScheme, HostEnvironment, HostError, HostSignal, Result};

use super::MemoryEmbeddedContext;

const SIGNAL_CAPACITY: usize = 16;

#[derive(Debug, Default)]
struct HostState {
    root_classes: Vec<String>,
    root_attributes: HashMap<String, String>,
    body_classes: Vec<String>,
    color_scheme: Option<ColorScheme>,
    prefers_dark: bool,
    containers: HashSet<String>,
    inline_contexts: HashMap<String, Arc<MemoryEmbeddedContext>>,
    frames: HashMap<String, Arc<MemoryEmbeddedContext>>,
}

/// Scriptable host page.
///
/// Mutators mirror what a browser host would do (toggle classes, set
/// attributes, flip the OS preference) and publish the matching change
/// signal, so a watcher subscribed through [`HostEnvironment::signals`]
/// reacts exactly as it would to DOM mutations.
#[derive(Debug)]
pub struct MemoryHost {
    state: RwLock<HostState>,
    signals: broadcast::Sender<HostSignal>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        let (signals, _) = broadcast::channel(SIGNAL_CAPACITY);
        Self {
            state: RwLock::new(HostState::default()),
            signals,
        }
    }

    /// Registers a container element that inline mounts can resolve.
    pub fn register_container(&self, selector: impl Into<String>) {
        self.state
            .write()
            .expect("Lock poisoned")
            .containers
            .insert(selector.into());
    }

    pub fn add_root_class(&self, class: impl Into<String>) {
        let class = class.into();
        {
            let mut state = self.state.write().expect("Lock poisoned");
            if !state.root_classes.contains(&class) {
                state.root_classes.push(class);
            }
        }
        self.signal(HostSignal::RootChanged);
    }

    pub fn remove_root_class(&self, class: &str) {
        self.state
            .write()
            .expect("Lock poisoned")
            .root_classes
            .retain(|c| c != class);
        self.signal(HostSignal::RootChanged);
    }

    pub fn set_root_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.state
            .write()
            .expect("Lock poisoned")
            .root_attributes
            .insert(name.into(), value.into());
        self.signal(HostSignal::RootChanged);
    }

    pub fn remove_root_attribute(&self, name: &str) {
        self.state
            .write()
            .expect("Lock poisoned")
            .root_attributes
            .remove(name);
        self.signal(HostSignal::RootChanged);
    }

    pub fn add_body_class(&self, class: impl Into<String>) {
        let class = class.into();
        {
            let mut state = self.state.write().expect("Lock poisoned");
            if !state.body_classes.contains(&class) {
                state.body_classes.push(class);
            }
        }
        self.signal(HostSignal::BodyChanged);
    }

    pub fn remove_body_class(&self, class: &str) {
        self.state
            .write()
            .expect("Lock poisoned")
            .body_classes
            .retain(|c| c != class);
        self.signal(HostSignal::BodyChanged);
    }

    pub fn set_color_scheme(&self, scheme: Option<ColorScheme>) {
        self.state.write().expect("Lock poisoned").color_scheme = scheme;
        self.signal(HostSignal::RootChanged);
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.state.write().expect("Lock poisoned").prefers_dark = dark;
        self.signal(HostSignal::PreferenceChanged);
    }

    /// The context mounted inline into `selector`, if any.
    pub fn inline(&self, selector: &str) -> Option<Arc<MemoryEmbeddedContext>> {
        self.state
            .read()
            .expect("Lock poisoned")
            .inline_contexts
            .get(selector)
            .cloned()
    }

    /// The frame context with `frame_id`, if any.
    pub fn frame(&self, frame_id: &str) -> Option<Arc<MemoryEmbeddedContext>> {
        self.state
            .read()
            .expect("Lock poisoned")
            .frames
            .get(frame_id)
            .cloned()
    }

    /// Number of frames ever created on this host.
    pub fn frame_count(&self) -> usize {
        self.state.read().expect("Lock poisoned").frames.len()
    }

    fn signal(&self, signal: HostSignal) {
        let _ = self.signals.send(signal);
    }
}

impl HostEnvironment for MemoryHost {
    fn root_classes(&self) -> Vec<String> {
        self.state
            .read()
            .expect("Lock poisoned")
            .root_classes
            .clone()
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.state
            .read()
            .expect("Lock poisoned")
            .root_attributes
            .get(name)
            .cloned()
    }

    fn body_classes(&self) -> Vec<String> {
        self.state
            .read()
            .expect("Lock poisoned")
            .body_classes
            .clone()
    }

    fn color_scheme(&self) -> Option<ColorScheme> {
        self.state.read().expect("Lock poisoned").color_scheme
    }

    fn prefers_dark(&self) -> bool {
        self.state.read().expect("Lock poisoned").prefers_dark
    }

    fn signals(&self) -> broadcast::Receiver<HostSignal> {
        self.signals.subscribe()
    }

    fn mount_inline(&self, selector: &str) -> Result<Arc<dyn EmbeddedContext>> {
        let mut state = self.state.write().expect("Lock poisoned");
        if !state.containers.contains(selector) {
            return Err(HostError::ContainerNotFound {
                selector: selector.to_string(),
            });
        }
        let context = Arc::new(MemoryEmbeddedContext::new());
        state
            .inline_contexts
            .insert(selector.to_string(), Arc::clone(&context));
        Ok(context)
    }

    fn mount_frame(&self, frame_id: &str) -> Result<Arc<dyn EmbeddedContext>> {
        let mut state = self.state.write().expect("Lock poisoned");
        if let Some(existing) = state.frames.get(frame_id) {
            if existing.is_attached() {
                return Ok(Arc::clone(existing) as Arc<dyn EmbeddedContext>);
            }
        }
        let context = Arc::new(MemoryEmbeddedContext::new());
        state
            .frames
            .insert(frame_id.to_string(), Arc::clone(&context));
        Ok(context)
    }
}

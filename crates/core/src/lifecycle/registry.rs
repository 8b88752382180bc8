use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

/// Where a widget instance mounts in the host page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MountTarget {
    /// Inline into the element matching a CSS selector.
    Inline(String),
    /// Inside a full-viewport frame with the given element id.
    Frame(String),
}

impl MountTarget {
    pub fn inline(selector: impl Into<String>) -> Self {
        MountTarget::Inline(selector.into())
    }

    pub fn frame(frame_id: impl Into<String>) -> Self {
        MountTarget::Frame(frame_id.into())
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountTarget::Inline(selector) => write!(f, "inline:{selector}"),
            MountTarget::Frame(frame_id) => write!(f, "frame:{frame_id}"),
        }
    }
}

/// Registry of live widget mounts, keyed by mount target.
///
/// This replaces a process-wide "initialized" boolean: each target can
/// hold at most one live mount, and independent widget instances only
/// contend when the host passes them the same registry.
#[derive(Debug, Default)]
pub struct MountRegistry {
    live: Mutex<HashSet<MountTarget>>,
}

impl MountRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mount. Returns false when the target is already
    /// held by a live mount.
    pub fn acquire(&self, target: &MountTarget) -> bool {
        self.live
            .lock()
            .expect("Lock poisoned")
            .insert(target.clone())
    }

    /// Releases a mount. Returns false when the target was not held.
    pub fn release(&self, target: &MountTarget) -> bool {
        self.live.lock().expect("Lock poisoned").remove(target)
    }

    /// True while the target is held by a live mount.
    pub fn is_live(&self, target: &MountTarget) -> bool {
        self.live.lock().expect("Lock poisoned").contains(target)
    }

    /// Number of live mounts across all targets.
    pub fn live_count(&self) -> usize {
        self.live.lock().expect("Lock poisoned").len()
    }
}

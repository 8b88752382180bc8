use std::collections::HashMap;
use std::sync::RwLock;

use kyc_sdk_core::storage::CredentialStore;

/// Map-backed credential store with write-once semantics.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .expect("Lock poisoned")
            .get(key)
            .cloned()
    }

    fn set_if_absent(&self, key: &str, value: &str) -> bool {
        let mut entries = self.entries.write().expect("Lock poisoned");
        if entries.contains_key(key) {
            return false;
        }
        entries.insert(key.to_string(), value.to_string());
        true
    }
}

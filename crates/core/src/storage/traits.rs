/// Well-known credential keys.
pub mod keys {
    pub const API_KEY: &str = "apiKey";
    pub const TENANT_ID: &str = "tenantId";
}

/// Write-once credential cache in the host context.
///
/// Backed by `localStorage`/`sessionStorage` in a browser embedding.
/// Values are written on first init only and never refreshed by
/// configuration changes.
pub trait CredentialStore: Send + Sync {
    /// Reads a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value only when the key is absent. Returns true when
    /// the write happened.
    fn set_if_absent(&self, key: &str, value: &str) -> bool;
}

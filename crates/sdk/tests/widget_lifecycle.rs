//! Widget mount and teardown behavior.

use std::sync::Arc;

use kyc_sdk::memory::{MemoryCredentialStore, MemoryHost};
use kyc_sdk::{
    EmbeddedContext, KycSdk, MountRegistry, MountTarget, SdkError, SdkOptions, Theme,
    DEFAULT_FRAME_ID,
};

fn sdk_with_host(options: SdkOptions, host: &Arc<MemoryHost>) -> KycSdk {
    KycSdk::new(
        options,
        host.clone(),
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(MountRegistry::new()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_init_without_selector_creates_default_frame() {
    let host = Arc::new(MemoryHost::new());
    let sdk = sdk_with_host(SdkOptions::new("key-1", "tenant-1"), &host);

    let response = sdk.init(None).await.unwrap();
    assert!(response.ok);
    assert!(host.frame(DEFAULT_FRAME_ID).is_some());
}

#[tokio::test]
async fn test_init_with_unknown_selector_fails() {
    let host = Arc::new(MemoryHost::new());
    let sdk = sdk_with_host(SdkOptions::new("key-1", "tenant-1"), &host);

    let error = sdk.init(Some("#missing")).await.unwrap_err();
    assert!(matches!(error, SdkError::Host(_)));
}

#[tokio::test]
async fn test_failed_init_releases_the_mount_target() {
    let host = Arc::new(MemoryHost::new());
    let registry = Arc::new(MountRegistry::new());
    let sdk = KycSdk::new(
        SdkOptions::new("key-1", "tenant-1"),
        host.clone(),
        Arc::new(MemoryCredentialStore::new()),
        registry.clone(),
    )
    .unwrap();

    assert!(sdk.init(Some("#missing")).await.is_err());
    assert!(!registry.is_live(&MountTarget::inline("#missing")));

    // The same instance can still mount once the container exists.
    host.register_container("#missing");
    assert!(sdk.init(Some("#missing")).await.is_ok());
}

#[tokio::test]
async fn test_double_init_mounts_exactly_once() {
    let host = Arc::new(MemoryHost::new());
    let sdk = sdk_with_host(SdkOptions::new("key-1", "tenant-1"), &host);

    assert!(sdk.init(None).await.unwrap().ok);
    assert!(sdk.init(None).await.unwrap().ok);
    assert_eq!(host.frame_count(), 1);
}

#[tokio::test]
async fn test_shared_registry_blocks_second_instance_on_same_target() {
    let host = Arc::new(MemoryHost::new());
    let registry = Arc::new(MountRegistry::new());
    let credentials = Arc::new(MemoryCredentialStore::new());

    let first = KycSdk::new(
        SdkOptions::new("key-1", "tenant-1"),
        host.clone(),
        credentials.clone(),
        registry.clone(),
    )
    .unwrap();
    let second = KycSdk::new(
        SdkOptions::new("key-2", "tenant-2"),
        host.clone(),
        credentials.clone(),
        registry.clone(),
    )
    .unwrap();

    assert!(first.init(None).await.unwrap().ok);
    // Resolves ok but does not mount a second widget on the target.
    assert!(second.init(None).await.unwrap().ok);
    assert_eq!(registry.live_count(), 1);
    assert_eq!(host.frame_count(), 1);
}

#[tokio::test]
async fn test_destroy_then_init_recreates_the_widget() {
    let host = Arc::new(MemoryHost::new());
    host.register_container("#kyc");
    let sdk = sdk_with_host(SdkOptions::new("key-1", "tenant-1"), &host);

    sdk.init(Some("#kyc")).await.unwrap();
    let first = host.inline("#kyc").unwrap();
    sdk.destroy().await;
    assert!(!first.is_attached());

    sdk.init(Some("#kyc")).await.unwrap();
    let second = host.inline("#kyc").unwrap();
    assert!(second.is_attached());
}

#[tokio::test]
async fn test_destroy_without_init_is_a_noop() {
    let host = Arc::new(MemoryHost::new());
    let sdk = sdk_with_host(SdkOptions::new("key-1", "tenant-1"), &host);
    sdk.destroy().await;
    sdk.destroy().await;
}

#[tokio::test]
async fn test_credentials_are_written_once() {
    use kyc_sdk::CredentialStore;

    let host = Arc::new(MemoryHost::new());
    let credentials = Arc::new(MemoryCredentialStore::new());
    credentials.set_if_absent("apiKey", "preexisting");

    let sdk = KycSdk::new(
        SdkOptions::new("key-1", "tenant-1"),
        host.clone(),
        credentials.clone(),
        Arc::new(MountRegistry::new()),
    )
    .unwrap();
    sdk.init(None).await.unwrap();

    assert_eq!(credentials.get("apiKey").as_deref(), Some("preexisting"));
    assert_eq!(credentials.get("tenantId").as_deref(), Some("tenant-1"));
}

#[tokio::test]
async fn test_construction_rejects_blank_credentials() {
    let host = Arc::new(MemoryHost::new());
    let result = KycSdk::new(
        SdkOptions::new("   ", "tenant-1"),
        host,
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(MountRegistry::new()),
    );
    assert!(matches!(result, Err(SdkError::Config(_))));
}

#[tokio::test]
async fn test_theme_defaults_to_host_detection() {
    let host = Arc::new(MemoryHost::new());
    host.add_root_class("dark");
    let sdk = sdk_with_host(SdkOptions::new("key-1", "tenant-1"), &host);

    assert_eq!(sdk.config().await.theme, Theme::Dark);
}

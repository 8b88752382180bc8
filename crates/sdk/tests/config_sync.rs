//! Configuration changes and their propagation into the embedded
//! context.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::error::TryRecvError;

use kyc_sdk::memory::{MemoryCredentialStore, MemoryEmbeddedContext, MemoryHost};
use kyc_sdk::{
    EventTag, KycSdk, MountRegistry, SdkOptions, StyleOverrides, Theme, UserData,
    WidgetEvent,
};

const SETTLE: Duration = Duration::from_millis(50);

async fn mounted_sdk(options: SdkOptions) -> (KycSdk, Arc<MemoryEmbeddedContext>) {
    let host = Arc::new(MemoryHost::new());
    host.register_container("#kyc");
    let sdk = KycSdk::new(
        options,
        host.clone(),
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(MountRegistry::new()),
    )
    .unwrap();
    sdk.init(Some("#kyc")).await.unwrap();
    let context = host.inline("#kyc").unwrap();
    (sdk, context)
}

#[tokio::test]
async fn test_theme_change_reaches_the_embedded_context() {
    let (sdk, context) =
        mounted_sdk(SdkOptions::new("key-1", "tenant-1").with_theme(Theme::Light)).await;
    assert!(!context.is_dark());

    let response = sdk.change_theme(Theme::Dark).await.unwrap();
    assert!(response.success);

    tokio::time::sleep(SETTLE).await;
    assert!(context.is_dark());
    assert_eq!(context.delivered_count(EventTag::ThemeChange), 1);
    let fallback = context.stylesheet("kyc-sdk-fallback-styles").unwrap();
    assert!(fallback.contains("--background: oklch(20% 0 0);"));
    assert_eq!(sdk.config().await.theme, Theme::Dark);
}

#[tokio::test]
async fn test_unchanged_theme_emits_nothing() {
    let (sdk, _context) =
        mounted_sdk(SdkOptions::new("key-1", "tenant-1").with_theme(Theme::Dark)).await;
    let mut events = sdk.subscribe();

    let response = sdk.change_theme(Theme::Dark).await.unwrap();
    assert!(response.success);

    tokio::time::sleep(SETTLE).await;
    assert_eq!(events.try_recv().unwrap_err(), TryRecvError::Empty);
}

#[tokio::test]
async fn test_style_changes_merge_and_always_emit() {
    let (sdk, context) = mounted_sdk(
        SdkOptions::new("key-1", "tenant-1")
            .with_styles(StyleOverrides::new().with_primary("#ff0000")),
    )
    .await;

    let response = sdk
        .change_styles(StyleOverrides::new().with_radius("1rem"))
        .await
        .unwrap();
    assert_eq!(response.styles.primary.as_deref(), Some("#ff0000"));
    assert_eq!(response.styles.radius.as_deref(), Some("1rem"));

    // Same payload again: the merge result is identical but the event
    // still fires.
    sdk.change_styles(StyleOverrides::new().with_radius("1rem"))
        .await
        .unwrap();

    tokio::time::sleep(SETTLE).await;
    assert_eq!(context.delivered_count(EventTag::StyleChange), 2);
    let sheet = context.stylesheet("kyc-sdk-custom-styles").unwrap();
    assert!(sheet.contains("--primary: #ff0000;"));
    assert!(sheet.contains("--radius: 1rem;"));
}

#[tokio::test]
async fn test_custom_css_is_replaced_wholesale() {
    let (sdk, context) = mounted_sdk(SdkOptions::new("key-1", "tenant-1")).await;

    sdk.change_custom_css(".widget { color: red; }").await.unwrap();
    sdk.change_custom_css(".widget { color: blue; }").await.unwrap();

    tokio::time::sleep(SETTLE).await;
    assert_eq!(
        context.stylesheet("kyc-sdk-custom-css").as_deref(),
        Some(".widget { color: blue; }")
    );
}

#[tokio::test]
async fn test_user_data_is_forwarded_verbatim() {
    let (sdk, context) = mounted_sdk(SdkOptions::new("key-1", "tenant-1")).await;

    let user = UserData::new("Ada", "Lovelace", "ref-7").with_email("ada@example.com");
    let response = sdk.send_user_data(user.clone()).await.unwrap();
    assert!(response.success);

    tokio::time::sleep(SETTLE).await;
    let delivered = context.delivered();
    assert!(delivered.contains(&WidgetEvent::UserData { user_data: user }));
}

#[tokio::test]
async fn test_debug_change_is_bridged_and_recorded() {
    let (sdk, context) = mounted_sdk(SdkOptions::new("key-1", "tenant-1")).await;

    let response = sdk.set_debug(true).await.unwrap();
    assert!(response.debug);

    tokio::time::sleep(SETTLE).await;
    assert_eq!(context.delivered_count(EventTag::DebugChange), 1);
    assert!(sdk.config().await.debug);
}

#[tokio::test]
async fn test_initial_options_seed_the_context() {
    let (_sdk, context) = mounted_sdk(
        SdkOptions::new("key-1", "tenant-1")
            .with_theme(Theme::Dark)
            .with_styles(StyleOverrides::new().with_background("#000000"))
            .with_custom_css(".widget { border: none; }"),
    )
    .await;

    assert!(context.is_dark());
    assert!(context.stylesheet("kyc-sdk-fallback-styles").is_some());
    assert!(context
        .stylesheet("kyc-sdk-custom-styles")
        .unwrap()
        .contains("--background: #000000;"));
    assert_eq!(
        context.stylesheet("kyc-sdk-custom-css").as_deref(),
        Some(".widget { border: none; }")
    );
}

#[tokio::test]
async fn test_events_stop_after_destroy() {
    let (sdk, context) = mounted_sdk(SdkOptions::new("key-1", "tenant-1")).await;
    sdk.destroy().await;

    sdk.set_debug(true).await.unwrap();
    tokio::time::sleep(SETTLE).await;
    assert_eq!(context.delivered_count(EventTag::DebugChange), 0);
}

//! Drives the SDK against an in-memory host page.
//!
//! Run with `cargo run --example host_page -p kyc_sdk`.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kyc_sdk::memory::{MemoryCredentialStore, MemoryHost};
use kyc_sdk::{KycSdk, MountRegistry, SdkOptions, StyleOverrides, Theme};

#[tokio::main]
async fn main() -> kyc_sdk::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kyc_sdk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = Arc::new(MemoryHost::new());
    host.register_container("#kyc-widget");

    let options = SdkOptions::new("demo-key", "tenant-42")
        .with_theme(Theme::Light)
        .with_styles(StyleOverrides::default().with_primary("#ff0000"));
    let sdk = KycSdk::new(
        options,
        host.clone(),
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(MountRegistry::new()),
    )?;

    sdk.init(Some("#kyc-widget")).await?;

    sdk.change_styles(StyleOverrides::default().with_radius("1rem"))
        .await?;

    // Simulate the host page flipping to dark mode; the watcher picks
    // the class change up and re-themes the widget.
    host.add_root_class("dark");
    tokio::time::sleep(Duration::from_millis(50)).await;

    let snapshot = sdk.config().await;
    tracing::info!(theme = %snapshot.theme, "final widget configuration");

    let context = host.inline("#kyc-widget").expect("widget is mounted");
    tracing::info!(
        dark = context.is_dark(),
        events = context.delivered().len(),
        "embedded context state"
    );

    sdk.destroy().await;
    Ok(())
}

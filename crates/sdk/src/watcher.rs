//! Host environment watcher.
//!
//! Observes host-side signals (attribute mutations, preference
//! changes), re-derives the theme and language, and feeds changes back
//! into the SDK. Re-resolution is cheap, so every signal triggers one;
//! the de-duplication against the last resolved value is what keeps
//! redundant re-renders out of the embedded context.

use std::sync::Arc;

use tokio::sync::broadcast;

use kyc_sdk_core::host::{detect_host_theme, resolve_host_language, HostEnvironment};

use crate::sdk::SdkInner;

/// Handle to a running watcher. Stopping is idempotent.
#[derive(Debug, Clone)]
pub(crate) struct WatcherHandle {
    shutdown_tx: broadcast::Sender<()>,
}

impl WatcherHandle {
    pub(crate) fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Spawns the watch loop against the SDK's host environment.
pub(crate) fn spawn(env: Arc<dyn HostEnvironment>, inner: Arc<SdkInner>) -> WatcherHandle {
    let mut signals = env.signals();
    let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

    tokio::spawn(async move {
        let mut last_theme = detect_host_theme(env.as_ref());
        let mut last_language = resolve_host_language(env.as_ref());

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::debug!("host watcher received shutdown signal");
                    break;
                }
                signal = signals.recv() => match signal {
                    Ok(_) => {
                        let theme = detect_host_theme(env.as_ref());
                        if theme != last_theme {
                            last_theme = theme;
                            tracing::debug!(theme = %theme, "host theme change detected");
                            inner.apply_theme(theme).await;
                        }

                        if let Some(lang) = resolve_host_language(env.as_ref()) {
                            let changed = last_language.as_ref() != Some(&lang);
                            if changed && inner.supports_language(&lang) {
                                last_language = Some(lang.clone());
                                tracing::debug!(lang = %lang, "host language change detected");
                                inner.apply_language(lang).await;
                            }
                        }
                    }
                    // Coalesced signals are fine: the next resolution
                    // reads the latest host state anyway.
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                },
            }
        }
    });

    WatcherHandle { shutdown_tx }
}

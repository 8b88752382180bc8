//! Cross-context bridge.
//!
//! Forwards events from the host-side bus into an embedded rendering
//! context, applying the context-local side effects (stylesheet
//! re-injection, dark-class toggling) along the way. Strictly one
//! directional, host to embedded.

use std::sync::Arc;

use tokio::sync::broadcast;

use kyc_sdk_core::embed::EmbeddedContext;
use kyc_sdk_core::events::WidgetEvent;
use kyc_sdk_core::style::{
    fallback_css, overrides_css, CUSTOM_CSS_STYLESHEET_ID, FALLBACK_STYLESHEET_ID,
    OVERRIDES_STYLESHEET_ID,
};

use crate::bus::EventBus;

/// Handle to a running bridge.
///
/// Detaching is idempotent: the first call stops the forwarding task,
/// later calls are no-ops.
#[derive(Debug, Clone)]
pub struct BridgeHandle {
    shutdown_tx: broadcast::Sender<()>,
}

impl BridgeHandle {
    /// Stops forwarding and releases the bus subscription.
    pub fn detach(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Starts forwarding every event on `bus` into `context`.
pub fn attach(bus: &EventBus, context: Arc<dyn EmbeddedContext>) -> BridgeHandle {
    let mut events = bus.subscribe();
    let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::debug!("bridge received shutdown signal");
                    break;
                }
                event = events.recv() => match event {
                    Ok(event) => forward(context.as_ref(), &event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "bridge lagged behind the event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
            }
        }
    });

    BridgeHandle { shutdown_tx }
}

/// Delivers one event into the embedded context, with side effects.
///
/// A detached context is skipped silently; the bridge never errors on
/// a torn-down target.
pub(crate) fn forward(context: &dyn EmbeddedContext, event: &WidgetEvent) {
    if !context.is_attached() {
        tracing::debug!(
            tag = event.tag().as_str(),
            "embedded context detached, skipping event"
        );
        return;
    }

    context.deliver(event);

    match event {
        WidgetEvent::ThemeChange { theme } => {
            context.inject_stylesheet(FALLBACK_STYLESHEET_ID, &fallback_css(*theme));
            context.set_dark(theme.is_dark());
        }
        WidgetEvent::StyleChange { styles } => {
            context.inject_stylesheet(OVERRIDES_STYLESHEET_ID, &overrides_css(styles));
        }
        WidgetEvent::CustomCssChange { css } => {
            context.inject_stylesheet(CUSTOM_CSS_STYLESHEET_ID, css);
        }
        _ => {}
    }
}

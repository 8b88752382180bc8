//! Configuration-change event bus.
//!
//! Broadcasts typed widget events to every subscriber using tokio
//! broadcast channels. Delivery is fire-and-forget; per-origin ordering
//! comes from the channel.

use tokio::sync::broadcast;

use kyc_sdk_core::events::WidgetEvent;

/// Channel capacity for bridged events.
const CHANNEL_CAPACITY: usize = 64;

/// The host-side event bus configuration changes are published on.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<WidgetEvent>,
}

impl EventBus {
    /// Creates a new bus with no subscribers.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Having no subscribers is fine - it just means nothing is
    /// listening yet.
    pub fn emit(&self, event: WidgetEvent) {
        tracing::debug!(tag = event.tag().as_str(), "dispatching widget event");
        let _ = self.sender.send(event);
    }

    /// Subscribes to all events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyc_sdk_core::config::Theme;

    #[tokio::test]
    async fn test_emit_and_subscribe() {
        let bus = EventBus::new();
        let mut receiver = bus.subscribe();

        bus.emit(WidgetEvent::ThemeChange { theme: Theme::Dark });

        let event = receiver.recv().await.unwrap();
        assert_eq!(event, WidgetEvent::ThemeChange { theme: Theme::Dark });
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_does_not_panic() {
        let bus = EventBus::new();
        bus.emit(WidgetEvent::DebugChange { debug: true });
    }

    #[tokio::test]
    async fn test_all_subscribers_receive_every_event() {
        let bus = EventBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.emit(WidgetEvent::CustomCssChange {
            css: ".a { color: red; }".to_string(),
        });

        assert!(matches!(
            first.recv().await.unwrap(),
            WidgetEvent::CustomCssChange { .. }
        ));
        assert!(matches!(
            second.recv().await.unwrap(),
            WidgetEvent::CustomCssChange { .. }
        ));
    }

    #[tokio::test]
    async fn test_events_arrive_in_emit_order() {
        let bus = EventBus::new();
        let mut receiver = bus.subscribe();

        bus.emit(WidgetEvent::ThemeChange { theme: Theme::Dark });
        bus.emit(WidgetEvent::ThemeChange {
            theme: Theme::Light,
        });

        assert_eq!(
            receiver.recv().await.unwrap(),
            WidgetEvent::ThemeChange { theme: Theme::Dark }
        );
        assert_eq!(
            receiver.recv().await.unwrap(),
            WidgetEvent::ThemeChange {
                theme: Theme::Light
            }
        );
    }
}

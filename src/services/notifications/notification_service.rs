//! Notification service for message dispatch.
//!
//! The thin forwarding layer between a caller's request and the provider it
//! was constructed with. The provider is supplied by the caller, never
//! self-selected; that seam is the point of the design.

use super::provider::{NotificationMessage, NotificationProvider, NotificationResult};
use crate::error::AppResult;
use std::sync::Arc;

/// Notification service holding exactly one provider for its lifetime
///
/// Constructed once, after the channel choice is known; never mutated
/// afterwards. The factory in `channel.rs` is total over `ChannelKind`, so a
/// service can never exist without a valid provider.
#[derive(Clone)]
pub struct NotificationService {
    provider: Arc<dyn NotificationProvider>,
}

impl NotificationService {
    /// Creates a new NotificationService around the given provider
    pub fn new(provider: Arc<dyn NotificationProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider, for logging
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Sends a notification through the held provider
    ///
    /// Forwards the message unchanged — no validation, no transformation,
    /// no state change. The only side effect is the provider's.
    pub async fn notify(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
        let result = self.provider.send(message).await?;
        tracing::debug!(
            provider = self.provider.name(),
            duration_ms = result.duration_ms,
            "notification dispatched"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::testing::MemorySink;
    use crate::services::notifications::{ChannelKind, create_provider};

    #[tokio::test]
    async fn test_notify_forwards_message_unchanged() {
        let sink = Arc::new(MemorySink::new());
        let provider = create_provider(ChannelKind::Sms, sink.clone());
        let service = NotificationService::new(provider);

        let result = service
            .notify(&NotificationMessage::new("Test"))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(sink.lines(), vec!["SMS sent: Test"]);
    }

    #[tokio::test]
    async fn test_notify_matches_direct_provider_send() {
        for kind in [ChannelKind::Email, ChannelKind::Sms, ChannelKind::Telegram] {
            let direct_sink = Arc::new(MemorySink::new());
            let direct = create_provider(kind, direct_sink.clone());
            direct
                .send(&NotificationMessage::new("same"))
                .await
                .unwrap();

            let service_sink = Arc::new(MemorySink::new());
            let service = NotificationService::new(create_provider(kind, service_sink.clone()));
            service
                .notify(&NotificationMessage::new("same"))
                .await
                .unwrap();

            assert_eq!(direct_sink.lines(), service_sink.lines());
        }
    }

    #[tokio::test]
    async fn test_notify_is_repeatable() {
        // Not idempotent in side effect: every call re-emits the line.
        let sink = Arc::new(MemorySink::new());
        let service =
            NotificationService::new(create_provider(ChannelKind::Email, sink.clone()));

        let message = NotificationMessage::new("again");
        service.notify(&message).await.unwrap();
        service.notify(&message).await.unwrap();

        assert_eq!(sink.lines(), vec!["Email sent: again", "Email sent: again"]);
    }

    #[test]
    fn test_provider_name() {
        let sink = Arc::new(MemorySink::new());
        let service = NotificationService::new(create_provider(ChannelKind::Telegram, sink));
        assert_eq!(service.provider_name(), "telegram");
    }
}

//! Email notification provider implementation.
//!
//! Renders the delivery line to the configured output sink. This is the
//! channel the menu falls back to when no valid selection is entered.

use super::provider::{NotificationMessage, NotificationProvider, NotificationResult};
use super::sink::MessageSink;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

/// Prefix rendered before the message body
const PREFIX: &str = "Email sent: ";

/// Email notification provider
///
/// # Example
/// ```ignore
/// let provider = EmailProvider::new(Arc::new(StdoutSink));
/// let result = provider.send(&NotificationMessage::new("Hello")).await?;
/// assert_eq!(result.rendered, "Email sent: Hello");
/// ```
pub struct EmailProvider {
    sink: Arc<dyn MessageSink>,
}

impl EmailProvider {
    /// Creates a new email provider writing to the given sink
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl NotificationProvider for EmailProvider {
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
        let start = Instant::now();

        let rendered = format!("{}{}", PREFIX, message.body);
        self.sink.write_line(&rendered)?;

        Ok(NotificationResult {
            success: true,
            rendered,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::notifications::testing::{FailingSink, MemorySink};
    use proptest::prelude::*;

    #[tokio::test]
    async fn test_send_renders_prefixed_line() {
        let sink = Arc::new(MemorySink::new());
        let provider = EmailProvider::new(sink.clone());

        let result = provider
            .send(&NotificationMessage::new("Hello"))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.rendered, "Email sent: Hello");
        assert_eq!(sink.lines(), vec!["Email sent: Hello"]);
    }

    #[tokio::test]
    async fn test_send_propagates_sink_failure() {
        let provider = EmailProvider::new(Arc::new(FailingSink));
        let err = provider
            .send(&NotificationMessage::new("Hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn test_name() {
        let provider = EmailProvider::new(Arc::new(MemorySink::new()));
        assert_eq!(provider.name(), "email");
    }

    proptest! {
        /// For all message bodies, send renders exactly "Email sent: " + body.
        #[test]
        fn prop_send_prepends_exact_prefix(body in "\\PC{0,64}") {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let sink = Arc::new(MemorySink::new());
            let provider = EmailProvider::new(sink.clone());

            let result = rt
                .block_on(provider.send(&NotificationMessage::new(body.clone())))
                .unwrap();

            prop_assert_eq!(result.rendered, format!("Email sent: {}", body));
            prop_assert_eq!(sink.lines(), vec![format!("Email sent: {}", body)]);
        }
    }
}

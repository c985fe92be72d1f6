//! SMS notification provider implementation.

use super::provider::{NotificationMessage, NotificationProvider, NotificationResult};
use super::sink::MessageSink;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

const PREFIX: &str = "SMS sent: ";

/// SMS notification provider
pub struct SmsProvider {
    sink: Arc<dyn MessageSink>,
}

impl SmsProvider {
    /// Creates a new SMS provider writing to the given sink
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl NotificationProvider for SmsProvider {
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
        "sms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::testing::MemorySink;

    #[tokio::test]
    async fn test_send_renders_prefixed_line() {
        let sink = Arc::new(MemorySink::new());
        let provider = SmsProvider::new(sink.clone());

        let result = provider
            .send(&NotificationMessage::new("Test"))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.rendered, "SMS sent: Test");
        assert_eq!(sink.lines(), vec!["SMS sent: Test"]);
    }

    #[test]
    fn test_name() {
        let provider = SmsProvider::new(Arc::new(MemorySink::new()));
        assert_eq!(provider.name(), "sms");
    }
}

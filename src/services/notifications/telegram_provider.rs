//! Telegram notification provider implementation.

use super::provider::{NotificationMessage, NotificationProvider, NotificationResult};
use super::sink::MessageSink;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

// Longer label than the other channels, matching the wording users see.
const PREFIX: &str = "Telegram message sent: ";

/// Telegram notification provider
pub struct TelegramProvider {
    sink: Arc<dyn MessageSink>,
}

impl TelegramProvider {
    /// Creates a new Telegram provider writing to the given sink
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl NotificationProvider for TelegramProvider {
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
        "telegram"
    }
}

//! Core notification provider trait and types.
//!
//! This module provides the abstraction the notification service depends on.
//! The provider set is closed: email, SMS, and Telegram, selected via
//! `ChannelKind`.

use crate::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message to be sent via notification provider
///
/// An immutable text body read from input; it flows through the service to
/// the provider unchanged and is not stored anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message body/content
    pub body: String,
}

impl NotificationMessage {
    /// Creates a message from any string-like body
    pub fn new<S: Into<String>>(body: S) -> Self {
        Self { body: body.into() }
    }
}

/// Result of a notification send attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Whether send was successful
    pub success: bool,
    /// The exact line rendered to the output sink
    pub rendered: String,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
}

/// Trait for notification providers (email, SMS, Telegram)
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Sends a notification message
    ///
    /// Renders exactly one line, `"<channel prefix><message body>"`, to the
    /// provider's output sink.
    ///
    /// # Errors
    /// `AppError::Io` if the output sink is unavailable. No other failure
    /// modes exist for the console providers.
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}

//! Notification channel selection.
//!
//! `ChannelKind` is the closed set of supported channels plus the menu-choice
//! parsing rules: empty or non-numeric input falls back to Email, while a
//! number outside the menu is rejected before any provider is constructed.

use super::email_provider::EmailProvider;
use super::provider::NotificationProvider;
use super::sink::MessageSink;
use super::sms_provider::SmsProvider;
use super::telegram_provider::TelegramProvider;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Supported notification channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Email channel (menu entry 1, and the fallback)
    Email,
    /// SMS channel (menu entry 2)
    Sms,
    /// Telegram channel (menu entry 3)
    Telegram,
}

impl ChannelKind {
    /// Parses a raw menu selection line into a channel.
    ///
    /// Rules:
    /// - empty (after trimming) or non-integer input falls back to `Email`
    /// - integers 1, 2, 3 map to Email, Sms, Telegram
    /// - any other integer is rejected with `AppError::InvalidSelection`
    ///
    /// The fallback mirrors the behavior of selecting "1" when nothing is
    /// entered; only a deliberate out-of-range number is treated as an error.
    pub fn from_menu_choice(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(ChannelKind::Email);
        }

        match trimmed.parse::<i64>() {
            Ok(1) => Ok(ChannelKind::Email),
            Ok(2) => Ok(ChannelKind::Sms),
            Ok(3) => Ok(ChannelKind::Telegram),
            Ok(choice) => Err(AppError::InvalidSelection { choice }),
            Err(_) => Ok(ChannelKind::Email),
        }
    }

    /// Convert the channel to a string slice for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::Sms => "sms",
            ChannelKind::Telegram => "telegram",
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Creates a provider instance for the selected channel
///
/// Factory method pattern - returns Arc<dyn NotificationProvider> for
/// dynamic dispatch. Total over `ChannelKind`, so a constructed service can
/// never be left without a provider.
pub fn create_provider(
    kind: ChannelKind,
    sink: Arc<dyn MessageSink>,
) -> Arc<dyn NotificationProvider> {
    match kind {
        ChannelKind::Email => Arc::new(EmailProvider::new(sink)),
        ChannelKind::Sms => Arc::new(SmsProvider::new(sink)),
        ChannelKind::Telegram => Arc::new(TelegramProvider::new(sink)),
    }
}

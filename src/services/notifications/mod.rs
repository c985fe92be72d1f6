//! Notification system with pluggable providers.
//!
//! This module provides the notification abstraction and implementations.
//! The core trait `NotificationProvider` has exactly three implementations
//! (email, SMS, Telegram); the set is closed by design and selected through
//! `ChannelKind`.

mod channel;
mod email_provider;
mod provider;
mod sink;
mod sms_provider;
mod telegram_provider;

pub mod notification_service;

pub use channel::{ChannelKind, create_provider};
pub use email_provider::EmailProvider;
pub use notification_service::NotificationService;
pub use provider::{NotificationMessage, NotificationProvider, NotificationResult};
pub use sink::{MessageSink, StdoutSink};
pub use sms_provider::SmsProvider;
pub use telegram_provider::TelegramProvider;

#[cfg(test)]
pub(crate) use sink::testing;

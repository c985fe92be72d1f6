//! Business services module

pub mod notifications;

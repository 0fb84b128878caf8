//! Notification service and emission rules.

pub mod rules;
pub mod service;

pub use rules::content_notification;
pub use service::NotificationService;

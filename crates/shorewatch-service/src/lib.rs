//! # shorewatch-service
//!
//! Business logic service layer for Shorewatch. Each service orchestrates
//! repositories and auth primitives to implement application-level use
//! cases: one service per entity, plus authentication and system stats.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod faq;
pub mod notification;
pub mod reading;
pub mod stats;
pub mod update;
pub mod user;

pub use context::RequestContext;
pub use faq::FaqService;
pub use notification::NotificationService;
pub use reading::ReadingService;
pub use stats::{StatsService, SystemStats};
pub use update::UpdateService;
pub use user::{AdminUserService, AuthService};

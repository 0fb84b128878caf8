//! Concrete repository implementations, one per entity.

pub mod faq;
pub mod notification;
pub mod reading;
pub mod update;
pub mod user;

pub use faq::FaqRepository;
pub use notification::NotificationRepository;
pub use reading::ReadingRepository;
pub use update::UpdateRepository;
pub use user::UserRepository;

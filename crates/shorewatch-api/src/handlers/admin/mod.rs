//! Admin-only handlers.

pub mod faqs;
pub mod readings;
pub mod stats;
pub mod updates;
pub mod users;

//! System-wide statistics for the admin dashboard.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shorewatch_core::error::AppError;
use shorewatch_database::repositories::faq::FaqRepository;
use shorewatch_database::repositories::notification::NotificationRepository;
use shorewatch_database::repositories::reading::ReadingRepository;
use shorewatch_database::repositories::update::UpdateRepository;
use shorewatch_database::repositories::user::UserRepository;
use shorewatch_entity::user::UserStatus;

/// Aggregate counts across all collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStats {
    /// Total registered users.
    pub total_users: u64,
    /// Users with an active account.
    pub active_users: u64,
    /// Total FAQ entries.
    pub total_faqs: u64,
    /// Total updates.
    pub total_updates: u64,
    /// Total readings.
    pub total_readings: u64,
    /// Total notifications.
    pub total_notifications: u64,
}

/// Computes [`SystemStats`] from the live datastore.
#[derive(Debug, Clone)]
pub struct StatsService {
    user_repo: Arc<UserRepository>,
    faq_repo: Arc<FaqRepository>,
    update_repo: Arc<UpdateRepository>,
    reading_repo: Arc<ReadingRepository>,
    notif_repo: Arc<NotificationRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        faq_repo: Arc<FaqRepository>,
        update_repo: Arc<UpdateRepository>,
        reading_repo: Arc<ReadingRepository>,
        notif_repo: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            user_repo,
            faq_repo,
            update_repo,
            reading_repo,
            notif_repo,
        }
    }

    /// Gathers current counts. The six queries run concurrently.
    pub async fn gather(&self) -> Result<SystemStats, AppError> {
        let (total_users, active_users, total_faqs, total_updates, total_readings, total_notifications) =
            tokio::try_join!(
                self.user_repo.count(),
                self.user_repo.count_by_status(UserStatus::Active),
                self.faq_repo.count(),
                self.update_repo.count(),
                self.reading_repo.count(),
                self.notif_repo.count(),
            )?;

        Ok(SystemStats {
            total_users,
            active_users,
            total_faqs,
            total_updates,
            total_readings,
            total_notifications,
        })
    }
}

//! Built-in demo dataset served when the backend is unreachable.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use shorewatch_core::result::AppResult;
use shorewatch_entity::faq::{CreateFaq, Faq, FaqStatus, UpdateFaq};
use shorewatch_entity::level::{Importance, Priority};
use shorewatch_entity::notification::{Notification, NotificationKind};
use shorewatch_entity::update::{CreateUpdate, Update, UpdateChanges, UpdateKind, UpdateStatus};
use shorewatch_entity::user::UserStats;

use shorewatch_core::error::AppError;

use crate::model::SyncUser;
use crate::source::DataSource;

/// In-memory demo dataset.
///
/// Fetches always succeed, so a dashboard in degraded mode still has
/// something to show. Mutations are applied to the in-memory copy only
/// and are lost when the process exits.
#[derive(Debug)]
pub struct FixtureSource {
    state: Mutex<FixtureState>,
}

#[derive(Debug, Clone)]
struct FixtureState {
    faqs: Vec<Faq>,
    updates: Vec<Update>,
    users: Vec<SyncUser>,
    notifications: Vec<Notification>,
}

impl FixtureSource {
    /// Builds the demo dataset.
    pub fn new() -> Self {
        let now = Utc::now();

        let faqs = vec![
            demo_faq(
                1,
                "sampling",
                "How do I calibrate the pH strips?",
                "Dip the strip for two seconds, then compare against the printed scale in shade.",
                Priority::High,
                Importance::High,
            ),
            demo_faq(
                2,
                "sampling",
                "When is the best time to measure salinity?",
                "At slack tide, before the afternoon wind picks up.",
                Priority::Medium,
                Importance::Normal,
            ),
            demo_faq(
                3,
                "equipment",
                "My turbidity tube is cracked. Can I still use it?",
                "No. Ask your team coordinator for a replacement at the next meetup.",
                Priority::Low,
                Importance::Normal,
            ),
        ];

        let updates = vec![
            Update {
                id: Uuid::from_u128(101),
                title: "Spring sampling campaign starts Monday".into(),
                content: "All teams: the spring campaign runs for three weeks. Check your kit.".into(),
                kind: UpdateKind::Announcement,
                priority: Priority::High,
                tags: vec!["campaign".into()],
                scheduled_date: None,
                expiration_date: None,
                auto_expire: false,
                status: UpdateStatus::Published,
                created_at: now - Duration::days(2),
                updated_at: now - Duration::days(2),
            },
            Update {
                id: Uuid::from_u128(102),
                title: "Harbour outfall advisory".into(),
                content: "Avoid sampling within 200m of the harbour outfall until further notice.".into(),
                kind: UpdateKind::Alert,
                priority: Priority::High,
                tags: vec!["safety".into()],
                scheduled_date: None,
                expiration_date: Some(now + Duration::days(14)),
                auto_expire: true,
                status: UpdateStatus::Published,
                created_at: now - Duration::days(1),
                updated_at: now - Duration::days(1),
            },
        ];

        let users = vec![
            demo_user(201, "Ana Reyes", "ana@shorewatch.demo", "ana_r", "admin", now),
            demo_user(202, "Ben Toulson", "ben@shorewatch.demo", "ben_t", "citizen", now),
            demo_user(203, "Carla Mespil", "carla@shorewatch.demo", "carla_m", "citizen", now),
        ];

        let notifications = vec![Notification {
            id: Uuid::from_u128(301),
            user_id: None,
            kind: NotificationKind::System,
            title: "Demo mode".into(),
            message: "Showing built-in demo data; the backend is unreachable.".into(),
            read: false,
            read_at: None,
            created_at: now,
            updated_at: now,
        }];

        Self {
            state: Mutex::new(FixtureState {
                faqs,
                updates,
                users,
                notifications,
            }),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, FixtureState>> {
        self.state
            .lock()
            .map_err(|_| AppError::internal("Fixture state poisoned"))
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_faq(
    n: u128,
    category: &str,
    question: &str,
    answer: &str,
    priority: Priority,
    importance: Importance,
) -> Faq {
    let now = Utc::now();
    Faq {
        id: Uuid::from_u128(n),
        category: category.into(),
        subcategory: None,
        question: question.into(),
        answer: answer.into(),
        priority,
        importance,
        tags: vec![],
        view_count: 0,
        display_order: n as i32,
        status: FaqStatus::Active,
        created_at: now - Duration::days(30),
        updated_at: now - Duration::days(30),
    }
}

fn demo_user(
    n: u128,
    name: &str,
    email: &str,
    username: &str,
    role: &str,
    now: chrono::DateTime<Utc>,
) -> SyncUser {
    SyncUser {
        id: Uuid::from_u128(n),
        name: name.into(),
        email: email.into(),
        username: username.into(),
        role: role.into(),
        team: Some("demo".into()),
        status: "active".into(),
        last_active: Some(now - Duration::hours(3)),
        stats: UserStats::default(),
        created_at: now - Duration::days(60),
        updated_at: now - Duration::days(60),
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn fetch_faqs(&self) -> AppResult<Vec<Faq>> {
        Ok(self.lock()?.faqs.clone())
    }

    async fn fetch_updates(&self) -> AppResult<Vec<Update>> {
        let now = Utc::now();
        Ok(self
            .lock()?
            .updates
            .iter()
            .filter(|u| u.is_visible_at(now))
            .cloned()
            .collect())
    }

    async fn fetch_users(&self) -> AppResult<Vec<SyncUser>> {
        Ok(self.lock()?.users.clone())
    }

    async fn fetch_notifications(&self) -> AppResult<Vec<Notification>> {
        Ok(self.lock()?.notifications.clone())
    }

    async fn create_faq(&self, data: CreateFaq) -> AppResult<Faq> {
        let now = Utc::now();
        let faq = Faq {
            id: Uuid::new_v4(),
            category: data.category,
            subcategory: data.subcategory,
            question: data.question,
            answer: data.answer,
            priority: data.priority,
            importance: data.importance,
            tags: data.tags,
            view_count: 0,
            display_order: data.display_order,
            status: FaqStatus::Active,
            created_at: now,
            updated_at: now,
        };
        self.lock()?.faqs.push(faq.clone());
        Ok(faq)
    }

    async fn update_faq(&self, id: Uuid, changes: UpdateFaq) -> AppResult<Faq> {
        let mut state = self.lock()?;
        let faq = state
            .faqs
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::not_found(format!("FAQ {id} not found")))?;

        if let Some(category) = changes.category {
            faq.category = category;
        }
        if let Some(subcategory) = changes.subcategory {
            faq.subcategory = Some(subcategory);
        }
        if let Some(question) = changes.question {
            faq.question = question;
        }
        if let Some(answer) = changes.answer {
            faq.answer = answer;
        }
        if let Some(priority) = changes.priority {
            faq.priority = priority;
        }
        if let Some(importance) = changes.importance {
            faq.importance = importance;
        }
        if let Some(tags) = changes.tags {
            faq.tags = tags;
        }
        if let Some(display_order) = changes.display_order {
            faq.display_order = display_order;
        }
        if let Some(status) = changes.status {
            faq.status = status;
        }
        faq.updated_at = Utc::now();

        Ok(faq.clone())
    }

    async fn delete_faq(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.lock()?;
        let before = state.faqs.len();
        state.faqs.retain(|f| f.id != id);
        if state.faqs.len() == before {
            return Err(AppError::not_found(format!("FAQ {id} not found")));
        }
        Ok(())
    }

    async fn create_update(&self, data: CreateUpdate) -> AppResult<Update> {
        let now = Utc::now();
        let update = Update {
            id: Uuid::new_v4(),
            title: data.title,
            content: data.content,
            kind: data.kind,
            priority: data.priority,
            tags: data.tags,
            scheduled_date: data.scheduled_date,
            expiration_date: data.expiration_date,
            auto_expire: data.auto_expire,
            status: data.status,
            created_at: now,
            updated_at: now,
        };
        self.lock()?.updates.push(update.clone());
        Ok(update)
    }

    async fn update_update(&self, id: Uuid, changes: UpdateChanges) -> AppResult<Update> {
        let mut state = self.lock()?;
        let update = state
            .updates
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found(format!("Update {id} not found")))?;

        if let Some(title) = changes.title {
            update.title = title;
        }
        if let Some(content) = changes.content {
            update.content = content;
        }
        if let Some(kind) = changes.kind {
            update.kind = kind;
        }
        if let Some(priority) = changes.priority {
            update.priority = priority;
        }
        if let Some(tags) = changes.tags {
            update.tags = tags;
        }
        if let Some(scheduled_date) = changes.scheduled_date {
            update.scheduled_date = Some(scheduled_date);
        }
        if let Some(expiration_date) = changes.expiration_date {
            update.expiration_date = Some(expiration_date);
        }
        if let Some(auto_expire) = changes.auto_expire {
            update.auto_expire = auto_expire;
        }
        if let Some(status) = changes.status {
            update.status = status;
        }
        update.updated_at = Utc::now();

        Ok(update.clone())
    }

    async fn delete_update(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.lock()?;
        let before = state.updates.len();
        state.updates.retain(|u| u.id != id);
        if state.updates.len() == before {
            return Err(AppError::not_found(format!("Update {id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixtures_are_populated() {
        let source = FixtureSource::new();
        assert!(!source.fetch_faqs().await.unwrap().is_empty());
        assert!(!source.fetch_updates().await.unwrap().is_empty());
        assert!(!source.fetch_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fixture_ids_are_deterministic() {
        let a = FixtureSource::new();
        let b = FixtureSource::new();
        let ids_a: Vec<_> = a.fetch_faqs().await.unwrap().iter().map(|f| f.id).collect();
        let ids_b: Vec<_> = b.fetch_faqs().await.unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[tokio::test]
    async fn test_fixture_mutations() {
        let source = FixtureSource::new();
        let faq = source
            .create_faq(CreateFaq {
                category: "sampling".into(),
                subcategory: None,
                question: "New?".into(),
                answer: "Yes.".into(),
                priority: Priority::Medium,
                importance: Importance::Normal,
                tags: vec![],
                display_order: 0,
            })
            .await
            .unwrap();

        let updated = source
            .update_faq(
                faq.id,
                UpdateFaq {
                    answer: Some("Changed.".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.answer, "Changed.");

        source.delete_faq(faq.id).await.unwrap();
        assert!(source.delete_faq(faq.id).await.is_err());
    }
}

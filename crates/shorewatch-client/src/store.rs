//! The sync store — single source of truth for client-side collections.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use shorewatch_core::error::AppError;
use shorewatch_core::result::AppResult;
use shorewatch_entity::faq::{CreateFaq, Faq, UpdateFaq};
use shorewatch_entity::notification::{Notification, NotificationKind};
use shorewatch_entity::update::{CreateUpdate, Update, UpdateChanges};

use crate::model::SyncUser;
use crate::source::DataSource;

/// Derived dashboard statistics, recomputed on every load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStats {
    /// Total users in the roster.
    pub total_users: usize,
    /// Users with active accounts.
    pub active_users: usize,
    /// Loaded FAQ count.
    pub total_faqs: usize,
    /// Loaded update count.
    pub total_updates: usize,
    /// Loaded notification count.
    pub total_notifications: usize,
}

/// Serializable snapshot of the whole cache, for export/import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// FAQ collection.
    pub faqs: Vec<Faq>,
    /// Update collection.
    pub updates: Vec<Update>,
    /// User roster.
    pub users: Vec<SyncUser>,
    /// Notification feed.
    pub notifications: Vec<Notification>,
    /// When the snapshot was last synced from the server.
    pub last_sync: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct CacheState {
    faqs: Vec<Faq>,
    updates: Vec<Update>,
    users: Vec<SyncUser>,
    notifications: Vec<Notification>,
    stats: ClientStats,
    degraded: bool,
    last_sync: Option<DateTime<Utc>>,
}

/// Client-side cache of every collection, fed by a [`DataSource`].
///
/// All mutations flow through [`SyncStore`] methods; readers take cheap
/// snapshots. The store is the single writer, so no further locking is
/// needed on the UI side.
pub struct SyncStore {
    primary: Arc<dyn DataSource>,
    fallback: Option<Arc<dyn DataSource>>,
    state: tokio::sync::RwLock<CacheState>,
    syncing: AtomicBool,
}

impl SyncStore {
    /// Creates a store over a primary source with no fallback.
    pub fn new(primary: Arc<dyn DataSource>) -> Self {
        Self {
            primary,
            fallback: None,
            state: tokio::sync::RwLock::new(CacheState::default()),
            syncing: AtomicBool::new(false),
        }
    }

    /// Creates a store that falls back to `fallback` (typically the
    /// demo fixtures) when the primary source fails.
    pub fn with_fallback(primary: Arc<dyn DataSource>, fallback: Arc<dyn DataSource>) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
            state: tokio::sync::RwLock::new(CacheState::default()),
            syncing: AtomicBool::new(false),
        }
    }

    /// Loads every collection from the source in parallel and replaces
    /// the cache.
    ///
    /// On any primary failure the configured fallback is used instead
    /// and the cache is flagged degraded, so the dashboard stays
    /// populated rather than going blank.
    pub async fn load_all(&self) -> AppResult<ClientStats> {
        self.syncing.store(true, Ordering::SeqCst);
        let result = self.load_all_inner().await;
        self.syncing.store(false, Ordering::SeqCst);
        result
    }

    async fn load_all_inner(&self) -> AppResult<ClientStats> {
        let loaded = match self.fetch_collections(self.primary.as_ref()).await {
            Ok(loaded) => (loaded, false),
            Err(e) => match &self.fallback {
                Some(fallback) => {
                    warn!(error = %e, "Primary source failed; serving demo data");
                    (self.fetch_collections(fallback.as_ref()).await?, true)
                }
                None => return Err(e),
            },
        };

        let ((faqs, updates, users, notifications), degraded) = loaded;

        let stats = compute_stats(&faqs, &updates, &users, &notifications);

        let mut state = self.state.write().await;
        state.faqs = faqs;
        state.updates = updates;
        state.users = users;
        state.notifications = notifications;
        state.stats = stats.clone();
        state.degraded = degraded;
        state.last_sync = Some(Utc::now());

        info!(degraded, total_faqs = stats.total_faqs, "Sync complete");

        Ok(stats)
    }

    async fn fetch_collections(
        &self,
        source: &dyn DataSource,
    ) -> AppResult<(Vec<Faq>, Vec<Update>, Vec<SyncUser>, Vec<Notification>)> {
        tokio::try_join!(
            source.fetch_faqs(),
            source.fetch_updates(),
            source.fetch_users(),
            source.fetch_notifications(),
        )
    }

    /// Re-runs the full load on demand.
    pub async fn force_sync(&self) -> AppResult<ClientStats> {
        self.load_all().await
    }

    /// Whether a sync is currently in flight.
    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::SeqCst)
    }

    /// Whether the cache is currently serving demo data.
    pub async fn is_degraded(&self) -> bool {
        self.state.read().await.degraded
    }

    /// When the cache last completed a sync.
    pub async fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_sync
    }

    /// Current derived stats.
    pub async fn stats(&self) -> ClientStats {
        self.state.read().await.stats.clone()
    }

    /// Snapshot of the FAQ collection.
    pub async fn faqs(&self) -> Vec<Faq> {
        self.state.read().await.faqs.clone()
    }

    /// Snapshot of the update collection.
    pub async fn updates(&self) -> Vec<Update> {
        self.state.read().await.updates.clone()
    }

    /// Snapshot of the user roster.
    pub async fn users(&self) -> Vec<SyncUser> {
        self.state.read().await.users.clone()
    }

    /// Snapshot of the notification feed.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.read().await.notifications.clone()
    }

    // ── Mutations ────────────────────────────────────────────
    //
    // Each mutation calls the source first and then stores the record
    // the server returned, never a locally guessed value.

    /// Creates a FAQ through the source and caches the stored record.
    pub async fn create_faq(&self, data: CreateFaq) -> AppResult<Faq> {
        let faq = self.primary.create_faq(data).await?;

        let mut state = self.state.write().await;
        state.faqs.push(faq.clone());
        push_change_log(
            &mut state.notifications,
            NotificationKind::ContentCreated,
            &format!("FAQ '{}' created", faq.question),
        );
        state.stats = compute_stats(&state.faqs, &state.updates, &state.users, &state.notifications);

        Ok(faq)
    }

    /// Edits a FAQ through the source and caches the stored record.
    pub async fn update_faq(&self, id: Uuid, changes: UpdateFaq) -> AppResult<Faq> {
        let faq = self.primary.update_faq(id, changes).await?;

        let mut state = self.state.write().await;
        if let Some(slot) = state.faqs.iter_mut().find(|f| f.id == id) {
            *slot = faq.clone();
        }
        push_change_log(
            &mut state.notifications,
            NotificationKind::ContentUpdated,
            &format!("FAQ '{}' updated", faq.question),
        );

        Ok(faq)
    }

    /// Deletes a FAQ through the source and drops it from the cache.
    pub async fn delete_faq(&self, id: Uuid) -> AppResult<()> {
        self.primary.delete_faq(id).await?;

        let mut state = self.state.write().await;
        state.faqs.retain(|f| f.id != id);
        push_change_log(
            &mut state.notifications,
            NotificationKind::ContentDeleted,
            "FAQ deleted",
        );
        state.stats = compute_stats(&state.faqs, &state.updates, &state.users, &state.notifications);

        Ok(())
    }

    /// Creates an update through the source and caches the stored record.
    pub async fn create_update(&self, data: CreateUpdate) -> AppResult<Update> {
        let update = self.primary.create_update(data).await?;

        let mut state = self.state.write().await;
        state.updates.insert(0, update.clone());
        push_change_log(
            &mut state.notifications,
            NotificationKind::ContentCreated,
            &format!("Update '{}' created", update.title),
        );
        state.stats = compute_stats(&state.faqs, &state.updates, &state.users, &state.notifications);

        Ok(update)
    }

    /// Edits an update through the source and caches the stored record.
    pub async fn update_update(&self, id: Uuid, changes: UpdateChanges) -> AppResult<Update> {
        let update = self.primary.update_update(id, changes).await?;

        let mut state = self.state.write().await;
        if let Some(slot) = state.updates.iter_mut().find(|u| u.id == id) {
            *slot = update.clone();
        }
        push_change_log(
            &mut state.notifications,
            NotificationKind::ContentUpdated,
            &format!("Update '{}' edited", update.title),
        );

        Ok(update)
    }

    /// Deletes an update through the source and drops it from the cache.
    pub async fn delete_update(&self, id: Uuid) -> AppResult<()> {
        self.primary.delete_update(id).await?;

        let mut state = self.state.write().await;
        state.updates.retain(|u| u.id != id);
        push_change_log(
            &mut state.notifications,
            NotificationKind::ContentDeleted,
            "Update deleted",
        );
        state.stats = compute_stats(&state.faqs, &state.updates, &state.users, &state.notifications);

        Ok(())
    }

    // ── Export / import ──────────────────────────────────────

    /// Serializes the entire cache to a JSON document.
    pub async fn export_all(&self) -> AppResult<String> {
        let state = self.state.read().await;
        let snapshot = CacheSnapshot {
            faqs: state.faqs.clone(),
            updates: state.updates.clone(),
            users: state.users.clone(),
            notifications: state.notifications.clone(),
            last_sync: state.last_sync,
        };
        serde_json::to_string_pretty(&snapshot).map_err(AppError::from)
    }

    /// Replaces the local cache from an exported JSON document.
    ///
    /// Import is one-shot and local-only: nothing is written back to
    /// the server.
    pub async fn import_all(&self, json: &str) -> AppResult<ClientStats> {
        let snapshot: CacheSnapshot = serde_json::from_str(json)?;

        let stats = compute_stats(
            &snapshot.faqs,
            &snapshot.updates,
            &snapshot.users,
            &snapshot.notifications,
        );

        let mut state = self.state.write().await;
        state.faqs = snapshot.faqs;
        state.updates = snapshot.updates;
        state.users = snapshot.users;
        state.notifications = snapshot.notifications;
        state.last_sync = snapshot.last_sync;
        state.stats = stats.clone();

        info!(total_faqs = stats.total_faqs, "Cache imported");

        Ok(stats)
    }
}

fn compute_stats(
    faqs: &[Faq],
    updates: &[Update],
    users: &[SyncUser],
    notifications: &[Notification],
) -> ClientStats {
    ClientStats {
        total_users: users.len(),
        active_users: users.iter().filter(|u| u.is_active()).count(),
        total_faqs: faqs.len(),
        total_updates: updates.len(),
        total_notifications: notifications.len(),
    }
}

/// Appends a local change-log entry to the notification feed.
fn push_change_log(notifications: &mut Vec<Notification>, kind: NotificationKind, message: &str) {
    let now = Utc::now();
    notifications.insert(
        0,
        Notification {
            id: Uuid::new_v4(),
            user_id: None,
            kind,
            title: "Local change".to_string(),
            message: message.to_string(),
            read: false,
            read_at: None,
            created_at: now,
            updated_at: now,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSource;

    fn fixture_store() -> SyncStore {
        SyncStore::new(Arc::new(FixtureSource::new()))
    }

    /// A source that always fails, to exercise the degraded path.
    struct DeadSource;

    #[async_trait::async_trait]
    impl DataSource for DeadSource {
        async fn fetch_faqs(&self) -> AppResult<Vec<Faq>> {
            Err(AppError::upstream("connection refused"))
        }
        async fn fetch_updates(&self) -> AppResult<Vec<Update>> {
            Err(AppError::upstream("connection refused"))
        }
        async fn fetch_users(&self) -> AppResult<Vec<SyncUser>> {
            Err(AppError::upstream("connection refused"))
        }
        async fn fetch_notifications(&self) -> AppResult<Vec<Notification>> {
            Err(AppError::upstream("connection refused"))
        }
        async fn create_faq(&self, _: CreateFaq) -> AppResult<Faq> {
            Err(AppError::upstream("connection refused"))
        }
        async fn update_faq(&self, _: Uuid, _: UpdateFaq) -> AppResult<Faq> {
            Err(AppError::upstream("connection refused"))
        }
        async fn delete_faq(&self, _: Uuid) -> AppResult<()> {
            Err(AppError::upstream("connection refused"))
        }
        async fn create_update(&self, _: CreateUpdate) -> AppResult<Update> {
            Err(AppError::upstream("connection refused"))
        }
        async fn update_update(&self, _: Uuid, _: UpdateChanges) -> AppResult<Update> {
            Err(AppError::upstream("connection refused"))
        }
        async fn delete_update(&self, _: Uuid) -> AppResult<()> {
            Err(AppError::upstream("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_load_all_populates_cache() {
        let store = fixture_store();
        let stats = store.load_all().await.unwrap();
        assert!(stats.total_faqs > 0);
        assert!(stats.active_users > 0);
        assert!(!store.is_degraded().await);
        assert!(store.last_sync().await.is_some());
    }

    #[tokio::test]
    async fn test_dead_primary_falls_back_to_fixtures() {
        let store =
            SyncStore::with_fallback(Arc::new(DeadSource), Arc::new(FixtureSource::new()));
        let stats = store.load_all().await.unwrap();
        assert!(stats.total_faqs > 0);
        assert!(store.is_degraded().await);
    }

    #[tokio::test]
    async fn test_dead_primary_without_fallback_errors() {
        let store = SyncStore::new(Arc::new(DeadSource));
        assert!(store.load_all().await.is_err());
    }

    #[tokio::test]
    async fn test_mutation_updates_cache_and_change_log() {
        let store = fixture_store();
        store.load_all().await.unwrap();
        let before = store.notifications().await.len();

        let faq = store
            .create_faq(CreateFaq {
                category: "sampling".into(),
                subcategory: None,
                question: "Cached?".into(),
                answer: "Yes.".into(),
                priority: Default::default(),
                importance: Default::default(),
                tags: vec![],
                display_order: 9,
            })
            .await
            .unwrap();

        assert!(store.faqs().await.iter().any(|f| f.id == faq.id));
        assert_eq!(store.notifications().await.len(), before + 1);

        store.delete_faq(faq.id).await.unwrap();
        assert!(!store.faqs().await.iter().any(|f| f.id == faq.id));
    }

    #[tokio::test]
    async fn test_export_import_round_trip() {
        let store = fixture_store();
        store.load_all().await.unwrap();
        let exported = store.export_all().await.unwrap();

        let other = SyncStore::new(Arc::new(FixtureSource::new()));
        let stats = other.import_all(&exported).await.unwrap();

        assert_eq!(stats, store.stats().await);
        assert_eq!(other.faqs().await.len(), store.faqs().await.len());
    }
}

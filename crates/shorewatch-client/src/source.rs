//! Data sources the sync store loads from and mutates through.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use shorewatch_core::config::SyncConfig;
use shorewatch_core::error::{AppError, ErrorKind};
use shorewatch_core::result::AppResult;
use shorewatch_entity::faq::{CreateFaq, Faq, UpdateFaq};
use shorewatch_entity::notification::Notification;
use shorewatch_entity::update::{CreateUpdate, Update, UpdateChanges};

use crate::model::SyncUser;

/// A source of the four client collections, plus content mutations.
///
/// Two implementations exist: [`RemoteSource`](crate::RemoteSource)
/// talks to a live Shorewatch API; [`FixtureSource`](crate::FixtureSource)
/// serves the built-in demo dataset when the backend is unreachable.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches all FAQs visible to the client.
    async fn fetch_faqs(&self) -> AppResult<Vec<Faq>>;
    /// Fetches all visible updates.
    async fn fetch_updates(&self) -> AppResult<Vec<Update>>;
    /// Fetches the user roster.
    async fn fetch_users(&self) -> AppResult<Vec<SyncUser>>;
    /// Fetches the caller's notifications.
    async fn fetch_notifications(&self) -> AppResult<Vec<Notification>>;

    /// Creates a FAQ and returns the stored record.
    async fn create_faq(&self, data: CreateFaq) -> AppResult<Faq>;
    /// Applies a partial FAQ update and returns the stored record.
    async fn update_faq(&self, id: Uuid, changes: UpdateFaq) -> AppResult<Faq>;
    /// Deletes a FAQ.
    async fn delete_faq(&self, id: Uuid) -> AppResult<()>;

    /// Creates an update and returns the stored record.
    async fn create_update(&self, data: CreateUpdate) -> AppResult<Update>;
    /// Applies a partial update edit and returns the stored record.
    async fn update_update(&self, id: Uuid, changes: UpdateChanges) -> AppResult<Update>;
    /// Deletes an update.
    async fn delete_update(&self, id: Uuid) -> AppResult<()>;
}

/// Success envelope every API response is wrapped in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[allow(dead_code)]
    success: bool,
    data: T,
}

/// Error envelope for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Page wrapper used by admin list endpoints.
#[derive(Debug, Deserialize)]
struct Page<T> {
    items: Vec<T>,
}

/// Live HTTP implementation of [`DataSource`].
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteSource {
    /// Creates a remote source with an explicit per-request timeout.
    pub fn new(config: &SyncConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::with_source(ErrorKind::Upstream, "Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attaches a bearer token for authenticated endpoints.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Sends a request and unwraps the `{success, data}` envelope.
    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> AppResult<T> {
        let response = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Upstream, "Backend unreachable", e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(error_from_status(status.as_u16(), message));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Upstream, "Malformed API response", e))?;

        Ok(envelope.data)
    }
}

/// Maps an HTTP status back to the domain error taxonomy.
fn error_from_status(status: u16, message: String) -> AppError {
    let kind = match status {
        400 => ErrorKind::Validation,
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        _ => ErrorKind::Upstream,
    };
    AppError::new(kind, message)
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn fetch_faqs(&self) -> AppResult<Vec<Faq>> {
        self.send(self.client.get(self.url("/api/user/faqs"))).await
    }

    async fn fetch_updates(&self) -> AppResult<Vec<Update>> {
        self.send(self.client.get(self.url("/api/user/updates")))
            .await
    }

    async fn fetch_users(&self) -> AppResult<Vec<SyncUser>> {
        let page: Page<SyncUser> = self
            .send(self.client.get(self.url("/api/admin/users")))
            .await?;
        Ok(page.items)
    }

    async fn fetch_notifications(&self) -> AppResult<Vec<Notification>> {
        self.send(self.client.get(self.url("/api/notifications")))
            .await
    }

    async fn create_faq(&self, data: CreateFaq) -> AppResult<Faq> {
        self.send(self.client.post(self.url("/api/admin/faqs")).json(&data))
            .await
    }

    async fn update_faq(&self, id: Uuid, changes: UpdateFaq) -> AppResult<Faq> {
        self.send(
            self.client
                .put(self.url(&format!("/api/admin/faqs/{id}")))
                .json(&changes),
        )
        .await
    }

    async fn delete_faq(&self, id: Uuid) -> AppResult<()> {
        let _: serde_json::Value = self
            .send(self.client.delete(self.url(&format!("/api/admin/faqs/{id}"))))
            .await?;
        Ok(())
    }

    async fn create_update(&self, data: CreateUpdate) -> AppResult<Update> {
        self.send(self.client.post(self.url("/api/admin/updates")).json(&data))
            .await
    }

    async fn update_update(&self, id: Uuid, changes: UpdateChanges) -> AppResult<Update> {
        self.send(
            self.client
                .put(self.url(&format!("/api/admin/updates/{id}")))
                .json(&changes),
        )
        .await
    }

    async fn delete_update(&self, id: Uuid) -> AppResult<()> {
        let _: serde_json::Value = self
            .send(
                self.client
                    .delete(self.url(&format!("/api/admin/updates/{id}"))),
            )
            .await?;
        Ok(())
    }
}

//! Reading entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::location::GeoPoint;
use super::parameter::Parameter;

/// A single water-quality measurement submitted by a citizen scientist.
///
/// Readings are append-mostly: they can be deleted, but never edited,
/// and the submitting user never changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reading {
    /// Unique reading identifier.
    pub id: Uuid,
    /// The submitting user. Immutable after creation.
    pub user_id: Uuid,
    /// What was measured.
    pub parameter: Parameter,
    /// The measured value.
    pub value: f64,
    /// Unit the value is reported in.
    pub unit: String,
    /// Where the sample was taken.
    pub location: Json<GeoPoint>,
    /// When the sample was taken.
    pub timestamp: DateTime<Utc>,
    /// Self-reported measurement confidence (0-100).
    pub accuracy: i32,
    /// Free-form observations.
    pub notes: Option<String>,
    /// When the reading was recorded.
    pub created_at: DateTime<Utc>,
    /// When the reading row was last touched.
    pub updated_at: DateTime<Utc>,
}

/// Data required to submit a reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReading {
    /// What was measured.
    pub parameter: Parameter,
    /// The measured value.
    pub value: f64,
    /// Unit the value is reported in; defaults to the parameter's
    /// conventional unit when omitted.
    #[serde(default)]
    pub unit: Option<String>,
    /// Where the sample was taken.
    pub location: GeoPoint,
    /// When the sample was taken; defaults to submission time.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Self-reported measurement confidence (0-100).
    pub accuracy: i32,
    /// Free-form observations.
    #[serde(default)]
    pub notes: Option<String>,
}

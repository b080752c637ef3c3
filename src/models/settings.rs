use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

/// A single row of the remote `settings` table
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SettingsEntry {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: Value,
    pub updated_at: DateTime<Utc>,
}

impl SettingsEntry {
    /// Create an entry stamped with the current time, ready for upsert
    pub fn new(key: String, value: Value) -> Self {
        Self {
            key,
            value,
            updated_at: Utc::now(),
        }
    }
}

/// Raw database row; `value` holds the JSON-encoded setting
#[derive(Debug, sqlx::FromRow)]
pub struct SettingsRow {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<SettingsRow> for SettingsEntry {
    type Error = serde_json::Error;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            key: row.key,
            value: serde_json::from_str(&row.value)?,
            updated_at: row.updated_at,
        })
    }
}

/// Observable state of the settings cache
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    #[schema(value_type = Object)]
    pub settings: HashMap<String, Value>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingRequest {
    #[schema(value_type = Object)]
    pub value: Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SettingResponse {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: Value,
}

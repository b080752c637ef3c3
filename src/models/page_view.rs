use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Database entity representing a single tracked page view
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct PageViewRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub path: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub referrer: Option<String>,
}

/// Body of the visitor analytics function
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorAnalytics {
    pub total_views: usize,
    pub page_views: Vec<PageViewRecord>,
}

impl VisitorAnalytics {
    pub fn from_records(page_views: Vec<PageViewRecord>) -> Self {
        Self {
            total_views: page_views.len(),
            page_views,
        }
    }
}

use crate::models::{ServiceError, VisitorAnalytics};
use crate::repositories::PageViewRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Source of one analytics document. `Ok(None)` means the source had nothing to offer.
#[async_trait]
pub trait AnalyticsProducer: Send + Sync {
    async fn produce(&self) -> Result<Option<Value>, ServiceError>;
}

/// Visitor analytics computed from the `page_views` table
pub struct PageViewAnalytics {
    repository: Arc<dyn PageViewRepository>,
}

impl PageViewAnalytics {
    pub fn new(repository: Arc<dyn PageViewRepository>) -> Self {
        Self { repository }
    }

    pub async fn visitor_analytics(&self) -> Result<VisitorAnalytics, ServiceError> {
        let page_views = self.repository.find_all_recent_first().await?;
        Ok(VisitorAnalytics::from_records(page_views))
    }
}

#[async_trait]
impl AnalyticsProducer for PageViewAnalytics {
    async fn produce(&self) -> Result<Option<Value>, ServiceError> {
        let analytics = self.visitor_analytics().await?;
        Ok(Some(serde_json::to_value(analytics)?))
    }
}

/// Dashboard summary fetched from a hosted analytics function
pub struct RemoteAnalyticsProducer {
    client: reqwest::Client,
    url: Option<String>,
    api_key: Option<String>,
}

impl RemoteAnalyticsProducer {
    pub fn new(
        url: Option<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            api_key,
        })
    }
}

#[async_trait]
impl AnalyticsProducer for RemoteAnalyticsProducer {
    async fn produce(&self) -> Result<Option<Value>, ServiceError> {
        let Some(url) = self.url.as_deref() else {
            tracing::warn!("Dashboard analytics URL is not configured");
            return Ok(None);
        };

        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Dashboard analytics function responded with {}", status);
            return Ok(None);
        }

        Ok(Some(response.json::<Value>().await?))
    }
}

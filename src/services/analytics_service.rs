use crate::models::{AnalyticsOutcome, AnalyticsPayload, ServiceError};
use crate::services::AnalyticsProducer;
use serde_json::{Map, Value};
use std::sync::Arc;

pub const BOOKING_ANALYTICS_KEY: &str = "bookingAnalytics";

pub struct AnalyticsService {
    dashboard: Arc<dyn AnalyticsProducer>,
    visitor: Arc<dyn AnalyticsProducer>,
}

impl AnalyticsService {
    pub fn new(dashboard: Arc<dyn AnalyticsProducer>, visitor: Arc<dyn AnalyticsProducer>) -> Self {
        Self { dashboard, visitor }
    }

    /// Query both producers concurrently and combine them.
    ///
    /// The first producer error aborts the whole call. A falsy result from
    /// either side yields `Incomplete` without saying which side it was.
    pub async fn dashboard_analytics(&self) -> Result<AnalyticsOutcome, ServiceError> {
        let (dashboard, visitor) =
            tokio::try_join!(self.dashboard.produce(), self.visitor.produce())?;

        match (dashboard, visitor) {
            (Some(dashboard), Some(visitor)) if is_truthy(&dashboard) && is_truthy(&visitor) => {
                Ok(AnalyticsOutcome::Complete(AnalyticsPayload {
                    booking_analytics: flatten_booking_analytics(dashboard),
                    visitor_analytics: visitor,
                }))
            }
            _ => Ok(AnalyticsOutcome::Incomplete),
        }
    }
}

/// Lift the fields of the nested `bookingAnalytics` object into the summary.
/// Nested values win on collision and the nested key is dropped.
pub fn flatten_booking_analytics(dashboard: Value) -> Map<String, Value> {
    let mut summary = spread_fields(dashboard);

    if let Some(nested) = summary.remove(BOOKING_ANALYTICS_KEY) {
        summary.extend(spread_fields(nested));
        summary.remove(BOOKING_ANALYTICS_KEY);
    }

    summary
}

/// Own enumerable fields as an object spread sees them: arrays and strings
/// spread by index, every other scalar contributes nothing
fn spread_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    }
}

/// JavaScript-style truthiness: objects and arrays count even when empty
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Combined response of the dashboard analytics route
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPayload {
    /// Dashboard summary with its nested `bookingAnalytics` fields lifted to the top level
    #[schema(value_type = Object)]
    pub booking_analytics: Map<String, Value>,
    #[schema(value_type = Object)]
    pub visitor_analytics: Value,
}

/// Outcome of joining both analytics producers
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsOutcome {
    Complete(AnalyticsPayload),
    /// At least one producer returned nothing usable
    Incomplete,
}

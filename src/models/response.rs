use serde::Serialize;
use utoipa::ToSchema;

// Common response types
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// Error body of the dashboard analytics route
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body of the edge-style analytics function
#[derive(Serialize, ToSchema)]
pub struct FunctionErrorResponse {
    pub error: String,
}

use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Demo analysis response: a regular result plus a signup note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoAnalyzeResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub demo: bool,
    pub note: String,
}

impl DemoAnalyzeResponse {
    pub fn new(result: MatchResult) -> Self {
        Self {
            result,
            demo: true,
            note: "This is a demo. Sign up for full API access.".to_string(),
        }
    }
}

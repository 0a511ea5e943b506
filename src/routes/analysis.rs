use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{MatchPredictor, NumerologyError};
use crate::models::{
    AnalyzeMatchRequest, DemoAnalyzeResponse, ErrorResponse, HealthResponse, MatchResult,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: MatchPredictor,
}

/// Configure all analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/analyze-match", web::post().to(analyze_match))
        .route("/demo-analyze", web::post().to(demo_analyze));
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "sports-numerology-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Validate the request and run the predictor
fn run_analysis(
    state: &AppState,
    req: &AnalyzeMatchRequest,
) -> Result<MatchResult, HttpResponse> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze request: field_errors={:?}", errors);
        return Err(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    let result = req.parse().and_then(|parsed| {
        state.predictor.predict(
            &parsed.player1,
            &parsed.player2,
            parsed.match_date,
            parsed.sport,
        )
    });

    match result {
        Ok(result) => {
            tracing::info!(
                "Analyzed {} match on {}: winner={}, confidence={}, difference={}",
                result.sport,
                result.match_date,
                result.winner_name,
                result.confidence,
                result.score_difference
            );
            Ok(result)
        }
        Err(e @ NumerologyError::InvalidInput(_)) => {
            tracing::info!("Rejected analyze request: {}", e);
            Err(HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid input".to_string(),
                message: e.to_string(),
                status_code: 400,
            }))
        }
    }
}

/// Analyze match endpoint
///
/// POST /api/v1/analyze-match
///
/// Request body:
/// ```json
/// {
///   "player1_name": "string",
///   "player1_birthdate": "YYYY-MM-DD",
///   "player2_name": "string",
///   "player2_birthdate": "YYYY-MM-DD",
///   "match_date": "YYYY-MM-DD",
///   "sport": "tennis|table-tennis|boxing|mma|basketball|football"
/// }
/// ```
async fn analyze_match(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeMatchRequest>,
) -> impl Responder {
    match run_analysis(&state, &req) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(response) => response,
    }
}

/// Demo endpoint; same body as analyze-match, result flagged as a demo
async fn demo_analyze(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeMatchRequest>,
) -> impl Responder {
    match run_analysis(&state, &req) {
        Ok(result) => HttpResponse::Ok().json(DemoAnalyzeResponse::new(result)),
        Err(response) => response,
    }
}

use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ComparePairRequest, ErrorResponse, FindMatchesRequest, HealthResponse};
use crate::services::{MatchingService, ServiceError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MatchingService,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/compare", web::post().to(compare_pair))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.service.store().health_check().await;

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn service_error(err: ServiceError) -> HttpResponse {
    let status_code = err.status_code();
    if status_code >= 500 {
        tracing::error!("{}", err);
    } else {
        tracing::info!("{}", err);
    }

    HttpResponse::build(StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .json(ErrorResponse {
            error: err.kind().to_string(),
            message: err.to_string(),
            status_code,
        })
}

/// Compare two profiles
///
/// POST /api/v1/matches/compare
///
/// Request body:
/// ```json
/// {
///   "profileAId": "string",
///   "profileBId": "string"
/// }
/// ```
async fn compare_pair(
    state: web::Data<AppState>,
    req: web::Json<ComparePairRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    tracing::info!("Comparing profiles {} and {}", req.profile_a_id, req.profile_b_id);

    match state.service.compare_pair(&req.profile_a_id, &req.profile_b_id).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => service_error(e),
    }
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "profileId": "string"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    tracing::info!("Finding matches for profile: {}", req.profile_id);

    match state.service.find_matches_for(&req.profile_id).await {
        Ok(response) => {
            if !response.flagged_profile_ids.is_empty() {
                tracing::warn!(
                    "Skipped {} candidates with invalid data for {}",
                    response.flagged_profile_ids.len(),
                    req.profile_id
                );
            }
            tracing::info!(
                "Returning {} matches for profile {} (from {} candidates)",
                response.matches.len(),
                req.profile_id,
                response.total_candidates
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => service_error(e),
    }
}

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{
    CompatibilityRequest, CompatibilityResponse, DiscoveryFilters, DiscoveryQuery, HealthResponse,
    RankMatchesRequest, RankMatchesResponse,
};
use crate::routes::error::ApiError;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility", web::post().to(compatibility))
        .route("/matches/rank", web::post().to(rank_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single candidate for a subject
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", ... },
///   "candidate": { "id": "string", ... }
/// }
/// ```
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let score = state.matcher.calculate_compatibility(&req.subject, &req.candidate);

    tracing::debug!(
        "Compatibility {} -> {}: {}",
        req.subject.id,
        req.candidate.id,
        score.total_score
    );

    let CompatibilityRequest { subject, candidate } = req.into_inner();
    Ok(HttpResponse::Ok().json(CompatibilityResponse {
        subject_id: subject.id,
        candidate_id: candidate.id,
        compatibility_score: score,
    }))
}

/// Rank a candidate pool for a subject
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", ... },
///   "candidates": [{ "id": "string", ... }],
///   "minScore": 30,
///   "limit": 20,
///   "excludeUserIds": ["string"],
///   "filters": { "ageRange": [18, 65], "verifiedOnly": false, ... }
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let settings = &state.matching;
    if req.candidates.len() > settings.max_candidates {
        tracing::info!(
            "Rejecting ranking request for {}: {} candidates",
            req.subject.id,
            req.candidates.len()
        );
        return Err(ApiError::TooManyCandidates {
            count: req.candidates.len(),
            max: settings.max_candidates,
        });
    }

    let RankMatchesRequest {
        subject,
        candidates,
        min_score,
        limit,
        exclude_user_ids,
        filters,
    } = req.into_inner();

    // Cap limit to keep responses bounded
    let limit = limit.unwrap_or(settings.default_limit).min(settings.max_limit) as usize;
    let active_filters = filters.as_ref().map_or(0, DiscoveryFilters::active_filter_count);

    tracing::info!(
        "Ranking {} candidates for user: {}, limit: {}, active filters: {}",
        candidates.len(),
        subject.id,
        limit,
        active_filters
    );

    let query = DiscoveryQuery {
        filters,
        exclude_user_ids,
        min_score: min_score.unwrap_or(settings.min_compatibility_score),
        limit,
    };

    let result = state.matcher.find_matches(&subject, candidates, &query);

    let response = RankMatchesResponse {
        total_results: result.matches.len(),
        matches: result.matches,
        total_candidates: result.total_candidates,
        active_filters,
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.total_results,
        subject.id,
        response.total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}

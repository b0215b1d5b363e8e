use actix_web::{web, HttpResponse, Responder};
use crate::core::{Criterion, Matcher};
use crate::models::{Criteria, CriterionInfo, ErrorResponse, HealthResponse};
use crate::services::BreedCatalog;
use std::collections::HashMap;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn BreedCatalog>,
    pub matcher: Matcher,
}

/// Configure all breed matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/all", web::get().to(all_matching))
        .route("/match", web::post().to(match_breeds))
        .route("/criteria", web::get().to(list_criteria));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog_healthy = state.catalog.health_check().await.unwrap_or(false);

    let status = if catalog_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Matching breeds for criteria passed in the query string
///
/// GET /api/idealdog/all?size=2&active=4&childFriendly=2
async fn all_matching(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let criteria = Criteria::from_query(query.into_inner());
    find_matching(&state, criteria).await
}

/// Matching breeds for criteria passed as a JSON object
///
/// POST /api/idealdog/match
///
/// Request body:
/// ```json
/// {
///   "size": 2,
///   "active": 4,
///   "human_friendly": "3"
/// }
/// ```
async fn match_breeds(
    state: web::Data<AppState>,
    criteria: web::Json<Criteria>,
) -> impl Responder {
    find_matching(&state, criteria.into_inner()).await
}

/// List every supported criterion and what it does
async fn list_criteria() -> impl Responder {
    let criteria: Vec<CriterionInfo> = Criterion::ALL
        .iter()
        .map(|criterion| CriterionInfo {
            name: criterion.name().to_string(),
            filters: criterion.filter_fn().is_some(),
            scores: criterion.score_fn().is_some(),
        })
        .collect();

    HttpResponse::Ok().json(criteria)
}

async fn find_matching(state: &AppState, criteria: Criteria) -> HttpResponse {
    tracing::info!("Finding matching breeds for {} criteria", criteria.len());

    let breeds = match state.catalog.list_all_breeds().await {
        Ok(breeds) => breeds,
        Err(e) => {
            tracing::error!("Failed to load breed catalog: {}", e);
            return HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "Failed to load breed catalog".to_string(),
                message: e.to_string(),
                status_code: 503,
            });
        }
    };

    let outcome = state.matcher.find_matches(&criteria, breeds);

    tracing::info!(
        "Returning {} matches (from {} breeds, {} filtered out)",
        outcome.matches.len(),
        outcome.total_breeds,
        outcome.filtered_out
    );

    HttpResponse::Ok().json(outcome.matches)
}

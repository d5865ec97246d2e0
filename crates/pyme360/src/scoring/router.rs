use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CompanyId, CreditHistory};
use super::repository::{CreditHistoryStore, StoreError};
use super::service::{ScoreRequest, ScoringService, ScoringServiceError};
use super::trust::TrustComponents;

/// Router builder exposing credit-history intake and scoring endpoints.
pub fn scoring_router<S>(service: Arc<ScoringService<S>>) -> Router
where
    S: CreditHistoryStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/companies/:company_id/credit-history",
            put(record_history_handler::<S>),
        )
        .route(
            "/api/v1/companies/:company_id/credit-score",
            get(credit_score_handler::<S>),
        )
        .route(
            "/api/v1/companies/:company_id/trust-score",
            post(company_trust_handler::<S>),
        )
        .route("/api/v1/scores/credit", post(score_history_handler::<S>))
        .route("/api/v1/scores/trust", post(trust_handler::<S>))
        .with_state(service)
}

/// Body accepted by the stateless credit-score endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreditScoreBody {
    history: CreditHistory,
    #[serde(flatten)]
    request: ScoreRequest,
}

pub(crate) async fn record_history_handler<S>(
    State(service): State<Arc<ScoringService<S>>>,
    Path(company_id): Path<String>,
    axum::Json(history): axum::Json<CreditHistory>,
) -> Response
where
    S: CreditHistoryStore + 'static,
{
    match service.record_history(CompanyId(company_id), history) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

pub(crate) async fn credit_score_handler<S>(
    State(service): State<Arc<ScoringService<S>>>,
    Path(company_id): Path<String>,
    Query(request): Query<ScoreRequest>,
) -> Response
where
    S: CreditHistoryStore + 'static,
{
    let company = CompanyId(company_id);
    match service.credit_score(&company, request) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(ScoringServiceError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "error": "no credit history recorded for company",
                "companyId": company.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn company_trust_handler<S>(
    State(service): State<Arc<ScoringService<S>>>,
    Path(company_id): Path<String>,
    axum::Json(components): axum::Json<TrustComponents>,
) -> Response
where
    S: CreditHistoryStore + 'static,
{
    match service.company_trust_score(&CompanyId(company_id), &components) {
        Ok(card) => (StatusCode::OK, axum::Json(card)).into_response(),
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn score_history_handler<S>(
    State(service): State<Arc<ScoringService<S>>>,
    axum::Json(body): axum::Json<CreditScoreBody>,
) -> Response
where
    S: CreditHistoryStore + 'static,
{
    let result = service.score_history(&body.history, body.request);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn trust_handler<S>(
    State(service): State<Arc<ScoringService<S>>>,
    axum::Json(components): axum::Json<TrustComponents>,
) -> Response
where
    S: CreditHistoryStore + 'static,
{
    let card = service.trust_score(&components);
    (StatusCode::OK, axum::Json(card)).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (status, axum::Json(payload)).into_response()
}

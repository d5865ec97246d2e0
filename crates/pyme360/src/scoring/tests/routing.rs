use super::common::*;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::scoring::router::credit_score_handler;
use crate::scoring::{NewCreditVariant, ScoreRequest, ScoringService};

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn credit_score_handler_returns_not_found_without_snapshot() {
    let (service, _) = build_service();

    let response = credit_score_handler::<MemoryStore>(
        State(Arc::new(service)),
        Path("unknown".to_string()),
        Query(ScoreRequest::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["companyId"], "unknown");
}

#[tokio::test]
async fn credit_score_handler_returns_internal_error_on_store_failure() {
    let service = ScoringService::new(Arc::new(UnavailableStore), NewCreditVariant::Incidents);

    let response = credit_score_handler::<UnavailableStore>(
        State(Arc::new(service)),
        Path("textiles-andinos".to_string()),
        Query(ScoreRequest::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("database offline"));
}

#[tokio::test]
async fn recorded_history_is_scored_by_company_route() {
    let (service, _) = build_service();
    let router = scoring_router_with_service(service);

    let history = serde_json::to_value(textiles_andinos()).expect("history serializes");
    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/companies/textiles-andinos/credit-history",
            history,
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(
            Request::get(
                "/api/v1/companies/textiles-andinos/credit-score\
                 ?variant=new_applications&asOf=2025-04-01",
            )
            .body(Body::empty())
            .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["rescaledScore"], 781);
    assert_eq!(payload["compositeScore"], 87.5);
    assert_eq!(payload["creditLevel"], "Excellent");
    assert_eq!(payload["variant"], "new_applications");
    assert_eq!(payload["referenceDate"], "2025-04-01");
    assert_eq!(
        payload["factorScores"]["incidentsOrNewApplications"]["variant"],
        "new_applications"
    );
}

#[tokio::test]
async fn earliest_reference_date_still_scores() {
    let (service, _) = build_service();
    service
        .record_history(company(), textiles_andinos())
        .expect("history recorded");
    let router = scoring_router_with_service(service);

    let response = router
        .oneshot(
            Request::get(
                "/api/v1/companies/textiles-andinos/credit-score\
                 ?variant=new_applications&asOf=-262143-01-01",
            )
            .body(Body::empty())
            .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["referenceDate"], "-262143-01-01");
    assert_eq!(
        payload["factorScores"]["incidentsOrNewApplications"]["supportingMetrics"]["windowStart"],
        "-262143-01-01"
    );
}

#[tokio::test]
async fn stateless_credit_route_scores_inline_history() {
    let (service, store) = build_service();
    let router = scoring_router_with_service(service);

    let body = json!({
        "history": {
            "cuentas_credito": [{
                "tipo": "Línea de Crédito",
                "fecha_apertura": "2020-08-22",
                "saldo_actual": 65000000,
                "limite_credito": 150000000,
                "historial_pagos": [
                    {"fecha": "2023-12-22", "monto": 5200000, "estado": "A tiempo"}
                ]
            }]
        },
        "variant": "incidents",
        "asOf": "2025-04-01"
    });

    let response = router
        .oneshot(json_request("POST", "/api/v1/scores/credit", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["factorScores"]["paymentHistory"]["score"], 100);
    assert_eq!(payload["factorScores"]["creditUtilization"]["score"], 75);
    assert_eq!(payload["contributions"].as_array().map(Vec::len), Some(5));
    assert!(store.histories.lock().expect("store mutex poisoned").is_empty());
}

#[tokio::test]
async fn trust_route_returns_scorecard() {
    let (service, _) = build_service();
    let router = scoring_router_with_service(service);

    let body = json!({
        "sostenibilidad": 95,
        "cumplimiento_fiscal": 98,
        "practicas_laborales": 96,
        "estabilidad_financiera": 97,
        "puntualidad_pagos": 99,
        "innovacion": 90
    });

    let response = router
        .oneshot(json_request("POST", "/api/v1/scores/trust", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["tier"], "Platinum");
    assert_eq!(payload["benefits"].as_array().map(Vec::len), Some(7));
    assert_eq!(payload["benefits"][0]["name"], "Basic Visibility");
}

#[tokio::test]
async fn credit_score_route_rejects_unknown_variant() {
    let (service, _) = build_service();
    let router = scoring_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/companies/textiles-andinos/credit-score?variant=bureau")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

//! HTTP request handlers for the CTC engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_breakdown_audited;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{AuditTrace, CalculationResult, SalarySummary};
use crate::presentation::render_report;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, SchemeListResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .route("/schemes", get(schemes_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Returns the breakdown, annual summary and audit trace as JSON.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match read_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_calculation(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                scheme = %result.scheme,
                gross_salary = %result.breakdown.gross_salary,
                net_salary = %result.breakdown.net_salary,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /report.
///
/// Returns the plain-text salary report for the same body `/calculate` takes.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match read_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let preset = match state.config().resolve(request.scheme.as_deref()) {
        Ok(preset) => preset,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Report failed");
            return error_response(err.into());
        }
    };

    let input = request.into_input();
    let audited = compute_breakdown_audited(&input, &preset.scheme);
    let report = render_report(&input, &preset.scheme, &audited.breakdown);

    info!(
        correlation_id = %correlation_id,
        scheme = %preset.name,
        net_salary = %audited.breakdown.net_salary,
        "Report rendered"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report,
    )
        .into_response()
}

/// Handler for GET /schemes.
async fn schemes_handler(State(state): State<AppState>) -> Json<SchemeListResponse> {
    let config = state.config();
    Json(SchemeListResponse {
        default_scheme: config.default_preset().name.clone(),
        schemes: config.presets().to_vec(),
    })
}

/// Unwraps the JSON body or builds the 400 response for it.
fn read_request(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CalculationRequest, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(error_response(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)))
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Resolves the scheme and wraps the audited breakdown in a result envelope.
fn perform_calculation(
    request: CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();
    let preset = config.resolve(request.scheme.as_deref())?;
    let input = request.into_input();

    let audited = compute_breakdown_audited(&input, &preset.scheme);
    let summary = SalarySummary::new(&input, &audited.breakdown);
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scheme: preset.name.clone(),
        input,
        breakdown: audited.breakdown,
        summary,
        audit_trace: AuditTrace {
            steps: audited.steps,
            warnings: audited.warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::default())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_calculate_with_defaults_returns_200() {
        let response = create_test_router()
            .oneshot(post_json("/calculate", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: CalculationResult =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.scheme, "basic_40");
        assert_eq!(result.breakdown.net_salary, Decimal::from(91_881));
        assert_eq!(result.audit_trace.steps.len(), 9);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = create_test_router()
            .oneshot(post_json("/calculate", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_wrong_toggle_type_returns_400() {
        let response = create_test_router()
            .oneshot(post_json("/calculate", r#"{"pf_enabled": "yes"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_scheme_returns_404() {
        let response = create_test_router()
            .oneshot(post_json("/calculate", r#"{"scheme": "basic_60"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "SCHEME_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_report_is_plain_text() {
        let response = create_test_router()
            .oneshot(post_json("/report", r#"{"scheme": "basic_50"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "text/plain; charset=utf-8");

        let text = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.contains("Basic Salary + DA (50%)"));
    }

    #[tokio::test]
    async fn test_schemes_lists_builtin_presets() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .uri("/schemes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let list: SchemeListResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(list.default_scheme, "basic_40");
        let names: Vec<&str> = list.schemes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["basic_40", "basic_50"]);
    }

    #[test]
    fn test_perform_calculation_fills_envelope() {
        let config = ConfigLoader::builtin();
        let request = CalculationRequest {
            ctc_annual: Decimal::from(-120_000),
            ..CalculationRequest::default()
        };

        let result = perform_calculation(request, &config).unwrap();
        assert_eq!(result.input.ctc_annual, Decimal::from(-120_000));
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "NEGATIVE_NET")
        );
    }
}

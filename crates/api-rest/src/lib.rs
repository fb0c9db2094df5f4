//! # API REST
//!
//! REST API implementation for MedGuard.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON rejection, status codes, CORS)
//!
//! Uses `api-shared` for wire types, validation and the check service.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AlertRes, AlternativeRes, CheckDosageReq, CheckInteractionsReq, CheckService,
    DosageRecommendationRes, DosageReportRes, ErrorRes, HealthRes, HealthService,
    InteractionReportRes, InteractionRes, KnowledgeSummaryRes,
};
use medguard_core::EngineError;

/// Application state for the REST API server
///
/// Holds the check service, which owns the engine and its shared knowledge base.
#[derive(Clone)]
pub struct AppState {
    pub service: CheckService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, check_interactions, check_dosage, knowledge),
    components(schemas(
        HealthRes,
        ErrorRes,
        CheckInteractionsReq,
        CheckDosageReq,
        InteractionRes,
        AlertRes,
        InteractionReportRes,
        DosageRecommendationRes,
        AlternativeRes,
        DosageReportRes,
        KnowledgeSummaryRes,
    ))
)]
pub struct ApiDoc;

type ApiError = (StatusCode, Json<ErrorRes>);

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/check_interactions", post(check_interactions))
        .route("/check_dosage", post(check_dosage))
        .route("/knowledge", get(knowledge))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorRes { error: message }))
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::error!("Rejected request body: {}", rejection.body_text());
    bad_request(rejection.body_text())
}

fn engine_error(err: EngineError) -> ApiError {
    match err {
        EngineError::InvalidInput(msg) => {
            tracing::error!("Invalid request: {}", msg);
            bad_request(msg)
        }
        other => {
            tracing::error!("Check failed: {:?}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes {
                    error: "Internal error".into(),
                }),
            )
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/check_interactions",
    request_body = CheckInteractionsReq,
    responses(
        (status = 200, description = "Interaction report", body = InteractionReportRes),
        (status = 400, description = "Bad request", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Check a prescription for drug-drug interactions
///
/// # Arguments
/// * `payload` - Either `prescription_text` to run through the extractor, or an explicit
///   `medicines` list
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not valid JSON of the request shape,
/// - neither input is supplied, or
/// - a medicine name is empty.
#[axum::debug_handler]
async fn check_interactions(
    State(state): State<AppState>,
    payload: Result<Json<CheckInteractionsReq>, JsonRejection>,
) -> Result<Json<InteractionReportRes>, ApiError> {
    let Json(req) = payload.map_err(reject_body)?;
    state
        .service
        .check_interactions(&req)
        .map(Json)
        .map_err(engine_error)
}

#[utoipa::path(
    post,
    path = "/check_dosage",
    request_body = CheckDosageReq,
    responses(
        (status = 200, description = "Dosage report", body = DosageReportRes),
        (status = 400, description = "Bad request", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Age-banded dosage guidance and safer alternatives
///
/// # Errors
/// Returns `400 Bad Request` for a malformed body, missing input, an empty medicine name or an
/// age outside `0..=130`.
#[axum::debug_handler]
async fn check_dosage(
    State(state): State<AppState>,
    payload: Result<Json<CheckDosageReq>, JsonRejection>,
) -> Result<Json<DosageReportRes>, ApiError> {
    let Json(req) = payload.map_err(reject_body)?;
    state
        .service
        .check_dosage(&req)
        .map(Json)
        .map_err(engine_error)
}

#[utoipa::path(
    get,
    path = "/knowledge",
    responses(
        (status = 200, description = "Knowledge base summary", body = KnowledgeSummaryRes)
    )
)]
#[axum::debug_handler]
async fn knowledge(State(state): State<AppState>) -> Json<KnowledgeSummaryRes> {
    Json(state.service.knowledge_summary())
}

//! HTTP API for Signglyph
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /translate - Text to signs (plus missing words)
//! - POST /missing - Missing-word scan
//! - GET /signs - Whole catalog
//! - GET /signs/:token - One sign
//! - POST /api/generate-sign - Register a sign image for a word
//! - POST /api/recognize-sign - Register an uploaded sign image (multipart field `image`)

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

use crate::core::{SignRegistrar, TranslationEngine};
use crate::types::{Sign, SignError, TranslationOutput};

/// App state
#[derive(Debug)]
pub struct AppState {
    pub engine: TranslationEngine,
    pub registrar: SignRegistrar,
}

impl AppState {
    pub fn new(engine: TranslationEngine, registrar: SignRegistrar) -> Self {
        Self { engine, registrar }
    }
}

/// Text request
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Missing-word scan response
#[derive(Debug, Serialize)]
pub struct MissingResponse {
    pub first: Option<String>,
    pub all: Vec<String>,
}

/// Generate sign request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub word: Option<String>,
}

/// Registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub word: String,
    pub path: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub signs: usize,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// `SignError` rendered as an HTTP response
pub struct ApiError(SignError);

impl From<SignError> for ApiError {
    fn from(e: SignError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SignError::AssetUnavailable { .. } => StatusCode::NOT_FOUND,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        let body = ErrorResponse {
            error: self.0.kind().to_string(),
            details: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/translate", post(translate))
        .route("/missing", post(missing))
        .route("/signs", get(list_signs))
        .route("/signs/:token", get(get_sign))
        .route("/api/generate-sign", post(generate_sign))
        .route("/api/recognize-sign", post(recognize_sign))
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        signs: state.engine.catalog().len(),
    })
}

/// Translate text into signs
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<TranslationOutput> {
    let output = state.engine.translate(&req.text);
    debug!(signs = output.signs.len(), missing = output.missing.len(), "translated");
    Json(output)
}

/// Scan text for content words without a sign
async fn missing(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<MissingResponse> {
    Json(MissingResponse {
        first: state.engine.find_first_missing(&req.text),
        all: state.engine.find_all_missing(&req.text),
    })
}

/// Whole catalog, sorted by token
async fn list_signs(State(state): State<Arc<AppState>>) -> Json<Vec<Sign>> {
    Json(state.engine.catalog().entries())
}

/// One sign by token
async fn get_sign(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<Sign>, StatusCode> {
    state
        .engine
        .resolve_char(&token)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Produce and register a sign for a word
async fn generate_sign(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let word = req.word.unwrap_or_default();
    let sign = state.registrar.generate(&word).await?;
    Ok(Json(RegisterResponse {
        success: true,
        word: sign.token,
        path: sign.image_path,
    }))
}

/// Recognize an uploaded image and register it
async fn recognize_sign(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<RegisterResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(bad_upload)? {
        if field.name() != Some("image") {
            continue;
        }
        let mime = field.content_type().unwrap_or_default().to_string();
        let image = field.bytes().await.map_err(bad_upload)?;
        debug!(bytes = image.len(), mime = %mime, "image upload received");

        let sign = state.registrar.recognize(&image, &mime).await?;
        return Ok(Json(RegisterResponse {
            success: true,
            word: sign.token,
            path: sign.image_path,
        }));
    }

    Err(ApiError(SignError::InvalidImage {
        reason: "missing 'image' field".to_string(),
    }))
}

fn bad_upload(e: MultipartError) -> ApiError {
    ApiError(SignError::InvalidImage {
        reason: e.body_text(),
    })
}

/// Run the API server
pub async fn run_server(addr: &str, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "signglyph API listening");
    println!("  POST /translate           - Text to signs");
    println!("  POST /missing             - Missing words");
    println!("  GET  /signs[/:token]      - Catalog lookup");
    println!("  POST /api/generate-sign   - Register word sign");
    println!("  POST /api/recognize-sign  - Register uploaded sign");
    println!("  GET  /health              - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}

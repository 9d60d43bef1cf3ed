// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use clap::Parser;
use kmtrack_api::{
    AddKilometersRequest, AddMaintenanceTypeRequest, ApiError, DashboardResponse,
    HistoryResponse, RecordDueServicesRequest, RecordServiceBatchRequest, RecordServiceRequest,
    SetThemeRequest, ThemeResponse, Tracker, UpdateMaintenanceTypeRequest, UpdateOdometerRequest,
    WriteResponse,
};
use kmtrack_persistence::Persistence;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// kmtrack server - HTTP server for the kmtrack vehicle maintenance tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the JSON data files. If not provided, state is kept in memory.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The tracker sits behind a Mutex so one request mutates state at a time.
#[derive(Clone)]
struct AppState {
    /// The tracker owning the vehicle state and its persistence.
    tracker: Arc<Mutex<Tracker>>,
}

/// API error response.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/vehicle` endpoint.
///
/// Returns the dashboard: odometer, per-item status and the due summary.
async fn handle_get_vehicle(AxumState(app_state): AxumState<AppState>) -> Json<DashboardResponse> {
    let response: DashboardResponse = app_state.tracker.lock().await.dashboard();
    Json(response)
}

/// Handler for GET `/history` endpoint.
async fn handle_get_history(AxumState(app_state): AxumState<AppState>) -> Json<HistoryResponse> {
    let response: HistoryResponse = app_state.tracker.lock().await.history_response();
    Json(response)
}

/// Handler for POST `/odometer` endpoint.
async fn handle_update_odometer(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpdateOdometerRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(km = %req.km, "Handling update_odometer request");
    let response: WriteResponse = app_state.tracker.lock().await.update_odometer(&req)?;
    Ok(Json(response))
}

/// Handler for POST `/odometer/add` endpoint.
async fn handle_add_kilometers(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddKilometersRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(amount = req.amount, "Handling add_kilometers request");
    let response: WriteResponse = app_state.tracker.lock().await.add_kilometers(&req)?;
    Ok(Json(response))
}

/// Handler for POST `/services` endpoint.
async fn handle_record_service(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RecordServiceRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(
        maintenance_id = %req.maintenance_id,
        km = %req.km,
        "Handling record_service request"
    );
    let response: WriteResponse = app_state.tracker.lock().await.record_service(&req)?;
    Ok(Json(response))
}

/// Handler for POST `/services/batch` endpoint.
async fn handle_record_service_batch(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RecordServiceBatchRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(
        items = req.maintenance_ids.len(),
        km = %req.km,
        "Handling record_service_batch request"
    );
    let response: WriteResponse = app_state.tracker.lock().await.record_service_batch(&req)?;
    Ok(Json(response))
}

/// Handler for POST `/services/due` endpoint.
///
/// Confirms every item that is due at the submitted reading.
async fn handle_record_due_services(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RecordDueServicesRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(km = %req.km, "Handling record_due_services request");
    let response: WriteResponse = app_state.tracker.lock().await.record_due_services(&req)?;
    Ok(Json(response))
}

/// Handler for POST `/maintenance_types` endpoint.
async fn handle_add_maintenance_type(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddMaintenanceTypeRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(name = %req.name, "Handling add_maintenance_type request");
    let response: WriteResponse = app_state.tracker.lock().await.add_maintenance_type(&req)?;
    Ok(Json(response))
}

/// Handler for PATCH `/maintenance_types/{id}` endpoint.
async fn handle_update_maintenance_type(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMaintenanceTypeRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(id = %id, "Handling update_maintenance_type request");
    let response: WriteResponse = app_state
        .tracker
        .lock()
        .await
        .update_maintenance_type(&id, &req)?;
    Ok(Json(response))
}

/// Handler for DELETE `/maintenance_types/{id}` endpoint.
async fn handle_delete_maintenance_type(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(id = %id, "Handling delete_maintenance_type request");
    let response: WriteResponse = app_state.tracker.lock().await.delete_maintenance_type(&id)?;
    Ok(Json(response))
}

/// Handler for GET `/theme` endpoint.
async fn handle_get_theme(AxumState(app_state): AxumState<AppState>) -> Json<ThemeResponse> {
    let response: ThemeResponse = app_state.tracker.lock().await.theme_response();
    Json(response)
}

/// Handler for POST `/theme` endpoint.
async fn handle_set_theme(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetThemeRequest>,
) -> Json<WriteResponse> {
    let response: WriteResponse = app_state.tracker.lock().await.set_theme(req);
    Json(response)
}

/// Handler for POST `/theme/toggle` endpoint.
async fn handle_toggle_theme(AxumState(app_state): AxumState<AppState>) -> Json<WriteResponse> {
    let response: WriteResponse = app_state.tracker.lock().await.toggle_theme();
    Json(response)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/vehicle", get(handle_get_vehicle))
        .route("/history", get(handle_get_history))
        .route("/odometer", post(handle_update_odometer))
        .route("/odometer/add", post(handle_add_kilometers))
        .route("/services", post(handle_record_service))
        .route("/services/batch", post(handle_record_service_batch))
        .route("/services/due", post(handle_record_due_services))
        .route("/maintenance_types", post(handle_add_maintenance_type))
        .route(
            "/maintenance_types/{id}",
            patch(handle_update_maintenance_type).delete(handle_delete_maintenance_type),
        )
        .route("/theme", get(handle_get_theme).post(handle_set_theme))
        .route("/theme/toggle", post(handle_toggle_theme))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing kmtrack server");

    let persistence: Persistence = if let Some(dir) = &args.data_dir {
        info!("Using data directory at: {}", dir.display());
        Persistence::new_with_dir(dir)?
    } else {
        info!("Using in-memory store; nothing will be saved across restarts");
        Persistence::new_in_memory()
    };

    let tracker: Tracker = Tracker::open(persistence)?;

    let app_state: AppState = AppState {
        tracker: Arc::new(Mutex::new(tracker)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

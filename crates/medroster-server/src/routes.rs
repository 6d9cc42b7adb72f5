//! REST routes for the patient record service.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use medroster_core::models::{NewPatient, Patient, PatientUpdate};
use medroster_core::RecordService;

use crate::error::{ApiError, Message};

/// Build the application router around a record service.
///
/// CORS is wide open: the service fronts a browser UI served from a
/// different origin.
pub fn app(service: RecordService) -> Router {
    Router::new()
        .route("/patients", get(list_patients).post(create_patient))
        .route(
            "/patients/:admin_no",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .route("/health", get(health_check))
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn list_patients(
    Extension(service): Extension<RecordService>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(service.list_all()?))
}

async fn get_patient(
    Extension(service): Extension<RecordService>,
    Path(admin_no): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(service.read(&admin_no)?))
}

async fn create_patient(
    Extension(service): Extension<RecordService>,
    payload: Result<Json<NewPatient>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let Json(input) = payload?;
    let patient = service.create(input)?;
    tracing::info!("created patient {}", patient.admin_no);
    Ok((StatusCode::CREATED, Json(patient)))
}

async fn update_patient(
    Extension(service): Extension<RecordService>,
    Path(admin_no): Path<String>,
    payload: Result<Json<PatientUpdate>, JsonRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Json(update) = payload?;
    let patient = service.update(&admin_no, update)?;
    tracing::info!("updated patient {admin_no}");
    Ok(Json(patient))
}

async fn delete_patient(
    Extension(service): Extension<RecordService>,
    Path(admin_no): Path<String>,
) -> Result<Json<Message>, ApiError> {
    service.delete(&admin_no)?;
    tracing::info!("deleted patient {admin_no}");
    Ok(Json(Message::new("Patient deleted successfully")))
}

/// Liveness probe.
#[derive(Debug, Serialize)]
struct Health {
    message: String,
    timestamp: DateTime<Utc>,
}

async fn health_check() -> Json<Health> {
    Json(Health {
        message: "Medroster backend is running".into(),
        timestamp: Utc::now(),
    })
}

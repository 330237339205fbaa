use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::application::SubmitApplication;
use crate::store::SharedStore;
use crate::validation::{parse_id, validate_application};

pub async fn submit(
    State(store): State<SharedStore>,
    input: Result<Json<SubmitApplication>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(input) = input?;
    let new_application = validate_application(input)?;

    if store.find_job(new_application.job_id).await?.is_none() {
        return Err(AppError::NotFound("Job not found".to_string()));
    }

    let application = store.insert_application(new_application).await?;
    tracing::info!(
        application_id = %application.id,
        job_id = %application.job_id,
        "Application submitted"
    );
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Application submitted successfully",
            "applicationId": application.id,
        })),
    ))
}

pub async fn list(State(store): State<SharedStore>) -> Result<Json<Value>, AppError> {
    let applications = store.find_applications(None).await?;
    Ok(Json(json!({
        "total": applications.len(),
        "applications": applications,
    })))
}

pub async fn list_for_job(
    State(store): State<SharedStore>,
    Path(job_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let job_id = parse_id(&job_id, "job")?;
    let applications = store.find_applications(Some(job_id)).await?;
    Ok(Json(json!({
        "total": applications.len(),
        "applications": applications,
    })))
}

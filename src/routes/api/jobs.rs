use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::job::{CreateJob, Job};
use crate::query::{JobFilters, JobQuery};
use crate::store::SharedStore;
use crate::validation::{parse_id, validate_job};

pub async fn list(
    State(store): State<SharedStore>,
    filters: Result<Query<JobFilters>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(filters) = filters?;
    let query = JobQuery::from_filters(&filters);
    let jobs = store.find_jobs(&query).await?;
    Ok(Json(json!({ "total": jobs.len(), "jobs": jobs })))
}

pub async fn get(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let id = parse_id(&id, "job")?;
    let job = store
        .find_job(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(Json(job))
}

pub async fn create(
    State(store): State<SharedStore>,
    input: Result<Json<CreateJob>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(input) = input?;
    let new_job = validate_job(input)?;
    let job = store.insert_job(new_job).await?;
    tracing::info!(job_id = %job.id, "Created job '{}' at {}", job.title, job.company);
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Job created successfully",
            "jobId": job.id,
            "job": job,
        })),
    ))
}

pub async fn delete(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id, "job")?;
    if !store.delete_job(id).await? {
        return Err(AppError::NotFound("Job not found".to_string()));
    }
    tracing::info!(job_id = %id, "Deleted job");
    Ok(Json(json!({ "message": "Job deleted successfully" })))
}

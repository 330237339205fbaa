use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::seed::sample_jobs;
use crate::store::SharedStore;

/// POST /api/seed
///
/// Replaces every job with the sample dataset. Applications are untouched.
pub async fn seed(State(store): State<SharedStore>) -> Result<Json<Value>, AppError> {
    let removed = store.delete_all_jobs().await?;
    let count = store.insert_jobs(sample_jobs()).await?;
    tracing::info!("Seeded {count} jobs ({removed} removed)");
    Ok(Json(json!({
        "message": format!("Seeded {count} jobs"),
        "count": count,
    })))
}

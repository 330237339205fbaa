pub mod applications;
pub mod jobs;
pub mod seed;


use axum::Router;
use axum::routing::{get, post};

use crate::store::SharedStore;

pub fn router(store: SharedStore) -> Router {
    let api = Router::new()
        // Jobs
        .route("/jobs", get(jobs::list).post(jobs::create))
        .route("/jobs/{id}", get(jobs::get).delete(jobs::delete))
        // Applications
        .route(
            "/applications",
            get(applications::list).post(applications::submit),
        )
        .route("/applications/{job_id}", get(applications::list_for_job))
        // Sample data
        .route("/seed", post(seed::seed))
        .with_state(store);

    Router::new().nest("/api", api)
}

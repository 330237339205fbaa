//! Data store adapter.
//!
//! Handlers only see the [`Store`] trait; the process wires a [`PgStore`] in
//! at startup and closes it on shutdown.

#[cfg(test)]
pub mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};
use crate::query::JobQuery;

pub use postgres::PgStore;

/// Shared handle injected into the router.
pub type SharedStore = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_job(&self, job: NewJob) -> Result<Job, StoreError>;

    /// Returns the number of jobs written.
    async fn insert_jobs(&self, jobs: Vec<NewJob>) -> Result<u64, StoreError>;

    async fn find_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, StoreError>;

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>, StoreError>;

    /// Returns whether a job was removed.
    async fn delete_job(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Returns the number of jobs removed.
    async fn delete_all_jobs(&self) -> Result<u64, StoreError>;

    async fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, StoreError>;

    /// Newest first, optionally restricted to one job.
    async fn find_applications(
        &self,
        job_id: Option<Uuid>,
    ) -> Result<Vec<Application>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    async fn close(&self);
}

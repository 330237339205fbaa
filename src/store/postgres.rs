use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Store;
use crate::error::StoreError;
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};
use crate::query::JobQuery;

/// PostgreSQL-backed store. Pool sizing is left at the driver defaults.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_job(&self, job: NewJob) -> Result<Job, StoreError> {
        Job::create(&self.pool, job).await
    }

    async fn insert_jobs(&self, jobs: Vec<NewJob>) -> Result<u64, StoreError> {
        Job::create_many(&self.pool, jobs).await
    }

    async fn find_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, StoreError> {
        Job::find(&self.pool, query).await
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>, StoreError> {
        Job::get(&self.pool, id).await
    }

    async fn delete_job(&self, id: Uuid) -> Result<bool, StoreError> {
        Job::delete(&self.pool, id).await
    }

    async fn delete_all_jobs(&self) -> Result<u64, StoreError> {
        Job::delete_all(&self.pool).await
    }

    async fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, StoreError> {
        Application::create(&self.pool, application).await
    }

    async fn find_applications(
        &self,
        job_id: Option<Uuid>,
    ) -> Result<Vec<Application>, StoreError> {
        Application::list(&self.pool, job_id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let _: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::Store;
use crate::error::StoreError;
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};
use crate::query::{JobQuery, SortOrder};

/// In-memory store used to drive handlers in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    jobs: Mutex<Vec<Job>>,
    applications: Mutex<Vec<Application>>,
}

impl MemoryStore {
    pub fn application_count(&self) -> usize {
        self.applications.lock().expect("lock").len()
    }
}

/// Newest first; later insertions win ties.
fn newest_first<T>(items: &[T], created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T>
where
    T: Clone,
{
    let mut sorted: Vec<T> = items.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    sorted
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_job(&self, job: NewJob) -> Result<Job, StoreError> {
        let job = job.into_job();
        self.jobs.lock().expect("lock").push(job.clone());
        Ok(job)
    }

    async fn insert_jobs(&self, jobs: Vec<NewJob>) -> Result<u64, StoreError> {
        let mut stored = self.jobs.lock().expect("lock");
        let count = jobs.len() as u64;
        stored.extend(jobs.into_iter().map(NewJob::into_job));
        Ok(count)
    }

    async fn find_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, StoreError> {
        let stored = self.jobs.lock().expect("lock");
        let matching: Vec<Job> = stored.iter().filter(|j| query.matches(j)).cloned().collect();
        let mut jobs = match query.sort {
            SortOrder::NewestFirst => newest_first(&matching, |j| j.created_at),
        };
        if let Some(limit) = query.limit {
            jobs.truncate(limit as usize);
        }
        Ok(jobs)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>, StoreError> {
        let stored = self.jobs.lock().expect("lock");
        Ok(stored.iter().find(|j| j.id == id).cloned())
    }

    async fn delete_job(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut stored = self.jobs.lock().expect("lock");
        let before = stored.len();
        stored.retain(|j| j.id != id);
        Ok(stored.len() < before)
    }

    async fn delete_all_jobs(&self) -> Result<u64, StoreError> {
        let mut stored = self.jobs.lock().expect("lock");
        let count = stored.len() as u64;
        stored.clear();
        Ok(count)
    }

    async fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, StoreError> {
        let application = application.into_application();
        self.applications
            .lock()
            .expect("lock")
            .push(application.clone());
        Ok(application)
    }

    async fn find_applications(
        &self,
        job_id: Option<Uuid>,
    ) -> Result<Vec<Application>, StoreError> {
        let stored = self.applications.lock().expect("lock");
        let matching: Vec<Application> = stored
            .iter()
            .filter(|a| job_id.is_none_or(|id| a.job_id == id))
            .cloned()
            .collect();
        Ok(newest_first(&matching, |a| a.created_at))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}

/// A store whose every operation fails, for exercising 500 paths.
#[derive(Debug, Default)]
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl Store for UnavailableStore {
    async fn insert_job(&self, _job: NewJob) -> Result<Job, StoreError> {
        Err(unavailable())
    }

    async fn insert_jobs(&self, _jobs: Vec<NewJob>) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    async fn find_jobs(&self, _query: &JobQuery) -> Result<Vec<Job>, StoreError> {
        Err(unavailable())
    }

    async fn find_job(&self, _id: Uuid) -> Result<Option<Job>, StoreError> {
        Err(unavailable())
    }

    async fn delete_job(&self, _id: Uuid) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn delete_all_jobs(&self) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    async fn insert_application(
        &self,
        _application: NewApplication,
    ) -> Result<Application, StoreError> {
        Err(unavailable())
    }

    async fn find_applications(
        &self,
        _job_id: Option<Uuid>,
    ) -> Result<Vec<Application>, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn close(&self) {}
}

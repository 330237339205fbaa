use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_note: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/applications` before validation.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitApplication {
    pub job_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub resume_link: Option<String>,
    pub cover_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_note: String,
}

impl NewApplication {
    pub fn into_application(self) -> Application {
        Application {
            id: Uuid::new_v4(),
            job_id: self.job_id,
            name: self.name,
            email: self.email,
            resume_link: self.resume_link,
            cover_note: self.cover_note,
            created_at: Utc::now(),
        }
    }
}

impl Application {
    /// All applications, or those for one job, newest first.
    pub async fn list(pool: &PgPool, job_id: Option<Uuid>) -> Result<Vec<Application>, StoreError> {
        let apps = sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE ($1::uuid IS NULL OR job_id = $1) ORDER BY created_at DESC",
        )
        .bind(job_id)
        .fetch_all(pool)
        .await?;
        Ok(apps)
    }

    pub async fn create(pool: &PgPool, input: NewApplication) -> Result<Application, StoreError> {
        let app = input.into_application();
        let app = sqlx::query_as::<_, Application>(
            "INSERT INTO applications (id, job_id, name, email, resume_link, cover_note, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(app.id)
        .bind(app.job_id)
        .bind(&app.name)
        .bind(&app.email)
        .bind(&app.resume_link)
        .bind(&app.cover_note)
        .bind(app.created_at)
        .fetch_one(pool)
        .await?;
        Ok(app)
    }
}

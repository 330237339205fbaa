use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::StoreError;
use crate::query::{Condition, JobQuery, SortOrder, like_pattern};

pub const DEFAULT_EMPLOYMENT_TYPE: &str = "Full Time";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub categories: Vec<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub featured: bool,
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/jobs` before validation.
///
/// Accepts either a single `category` or a `categories` list (or both); they
/// are merged into one set when the job is validated.
#[derive(Debug, Default, Deserialize)]
pub struct CreateJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub categories: Option<Vec<String>>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub featured: Option<bool>,
    pub logo: Option<String>,
}

/// A validated job ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub categories: Vec<String>,
    pub description: String,
    pub employment_type: String,
    pub featured: bool,
    pub logo: Option<String>,
}

impl NewJob {
    /// Materialize the stored document with a fresh identifier and timestamp.
    pub fn into_job(self) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: self.title,
            company: self.company,
            location: self.location,
            categories: self.categories,
            description: self.description,
            employment_type: self.employment_type,
            featured: self.featured,
            logo: self.logo,
            created_at: Utc::now(),
        }
    }
}

impl Job {
    pub async fn find(pool: &PgPool, query: &JobQuery) -> Result<Vec<Job>, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM jobs");

        push_where(&mut builder, &query.conditions);

        match query.sort {
            SortOrder::NewestFirst => builder.push(" ORDER BY created_at DESC"),
        };

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        let jobs = builder.build_query_as::<Job>().fetch_all(pool).await?;
        Ok(jobs)
    }

    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Job>, StoreError> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(job)
    }

    pub async fn create(pool: &PgPool, input: NewJob) -> Result<Job, StoreError> {
        let job = input.into_job();
        let job = sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (id, title, company, location, categories, description, employment_type, featured, logo, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.categories)
        .bind(&job.description)
        .bind(&job.employment_type)
        .bind(job.featured)
        .bind(&job.logo)
        .bind(job.created_at)
        .fetch_one(pool)
        .await?;
        Ok(job)
    }

    /// Insert a batch in one statement, returning the number of rows written.
    pub async fn create_many(pool: &PgPool, inputs: Vec<NewJob>) -> Result<u64, StoreError> {
        if inputs.is_empty() {
            return Ok(0);
        }

        let jobs: Vec<Job> = inputs.into_iter().map(NewJob::into_job).collect();
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO jobs (id, title, company, location, categories, description, employment_type, featured, logo, created_at) ",
        );
        builder.push_values(jobs, |mut row, job| {
            row.push_bind(job.id)
                .push_bind(job.title)
                .push_bind(job.company)
                .push_bind(job.location)
                .push_bind(job.categories)
                .push_bind(job.description)
                .push_bind(job.employment_type)
                .push_bind(job.featured)
                .push_bind(job.logo)
                .push_bind(job.created_at);
        });

        let result = builder.build().execute(pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(pool: &PgPool) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM jobs").execute(pool).await?;
        Ok(result.rows_affected())
    }
}

fn push_where(builder: &mut QueryBuilder<'_, Postgres>, conditions: &[Condition]) {
    for (i, condition) in conditions.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        push_condition(builder, condition);
    }
}

fn push_condition(builder: &mut QueryBuilder<'_, Postgres>, condition: &Condition) {
    match condition {
        Condition::Keyword(term) => {
            let pattern = like_pattern(term);
            builder
                .push("(title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR company ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        Condition::Location(term) => {
            builder.push("location ILIKE ").push_bind(like_pattern(term));
        }
        Condition::Category(term) => {
            builder
                .push("EXISTS (SELECT 1 FROM unnest(categories) AS category WHERE category ILIKE ")
                .push_bind(like_pattern(term))
                .push(")");
        }
        Condition::Featured(flag) => {
            builder.push("featured = ").push_bind(*flag);
        }
    }
}

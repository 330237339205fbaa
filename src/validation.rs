//! Input checks applied before anything reaches the store.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::application::{NewApplication, SubmitApplication};
use crate::models::job::{CreateJob, DEFAULT_EMPLOYMENT_TYPE, NewJob};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s]+$").expect("valid email regex"));

pub fn parse_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::Validation(format!("Invalid {what} ID")))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Collects required fields, remembering which were blank.
struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    fn new() -> Self {
        Self {
            missing: Vec::new(),
        }
    }

    fn take(&mut self, name: &'static str, value: Option<String>) -> String {
        let value = trimmed(value).unwrap_or_default();
        if value.is_empty() {
            self.missing.push(name);
        }
        value
    }

    fn check(self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required fields: {}",
                self.missing.join(", ")
            )))
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Merge `category` and `categories` into one set, keeping first-seen
/// spelling and dropping case-insensitive duplicates.
fn normalize_categories(category: Option<String>, categories: Option<Vec<String>>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let candidates = category.into_iter().chain(categories.into_iter().flatten());
    for candidate in candidates {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }
        let lower = candidate.to_lowercase();
        if !merged.iter().any(|c| c.to_lowercase() == lower) {
            merged.push(candidate.to_string());
        }
    }
    merged
}

pub fn validate_job(input: CreateJob) -> Result<NewJob, AppError> {
    let mut required = Required::new();
    let title = required.take("title", input.title);
    let company = required.take("company", input.company);
    let location = required.take("location", input.location);
    let categories = normalize_categories(input.category, input.categories);
    if categories.is_empty() {
        required.missing.push("category");
    }
    let description = required.take("description", input.description);
    required.check()?;

    let logo = trimmed(input.logo);
    if let Some(logo) = &logo
        && !is_valid_url(logo)
    {
        return Err(AppError::Validation("Invalid logo URL".to_string()));
    }

    Ok(NewJob {
        title,
        company,
        location,
        categories,
        description,
        employment_type: trimmed(input.employment_type)
            .unwrap_or_else(|| DEFAULT_EMPLOYMENT_TYPE.to_string()),
        featured: input.featured.unwrap_or(false),
        logo,
    })
}

/// Checks presence and format; whether the job exists is the caller's concern.
pub fn validate_application(input: SubmitApplication) -> Result<NewApplication, AppError> {
    let mut required = Required::new();
    let job_id = required.take("job_id", input.job_id);
    let name = required.take("name", input.name);
    let email = required.take("email", input.email).to_lowercase();
    let resume_link = required.take("resume_link", input.resume_link);
    let cover_note = required.take("cover_note", input.cover_note);
    required.check()?;

    if !is_valid_email(&email) {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }
    if !is_valid_url(&resume_link) {
        return Err(AppError::Validation("Invalid resume link".to_string()));
    }

    Ok(NewApplication {
        job_id: parse_id(&job_id, "job")?,
        name,
        email,
        resume_link,
        cover_note,
    })
}

//! Translation of job listing parameters into a store-independent query.

use serde::Deserialize;

use crate::models::job::Job;

/// Raw query-string parameters accepted by `GET /api/jobs`.
///
/// Every field is kept as text so that malformed values degrade to "no
/// condition" instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct JobFilters {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub featured: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

/// A single predicate over a job. All conditions of a query must hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Case-insensitive substring of title, company or description.
    Keyword(String),
    /// Case-insensitive substring of location.
    Location(String),
    /// Case-insensitive substring of any category.
    Category(String),
    Featured(bool),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    NewestFirst,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub conditions: Vec<Condition>,
    pub sort: SortOrder,
    pub limit: Option<i64>,
}

impl JobQuery {
    pub fn from_filters(filters: &JobFilters) -> Self {
        let mut conditions = Vec::new();

        if let Some(term) = non_blank(&filters.keyword) {
            conditions.push(Condition::Keyword(term));
        }
        if let Some(term) = non_blank(&filters.location) {
            conditions.push(Condition::Location(term));
        }
        if let Some(term) = non_blank(&filters.category) {
            conditions.push(Condition::Category(term));
        }
        if filters.featured.as_deref() == Some("true") {
            conditions.push(Condition::Featured(true));
        }

        let limit = filters
            .limit
            .as_deref()
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l > 0);

        // Only newest-first ordering exists; any requested `sort` value lands here.
        let sort = SortOrder::NewestFirst;

        Self {
            conditions,
            sort,
            limit,
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.conditions.iter().all(|c| c.matches(job))
    }
}

impl Condition {
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            Condition::Keyword(term) => {
                contains_ignore_case(&job.title, term)
                    || contains_ignore_case(&job.company, term)
                    || contains_ignore_case(&job.description, term)
            }
            Condition::Location(term) => contains_ignore_case(&job.location, term),
            Condition::Category(term) => job
                .categories
                .iter()
                .any(|c| contains_ignore_case(c, term)),
            Condition::Featured(flag) => job.featured == *flag,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Wrap a literal term as an `ILIKE` substring pattern, escaping the
/// pattern metacharacters so user input is matched verbatim.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

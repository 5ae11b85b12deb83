//! Lead persistence boundary.
//!
//! The service talks to its collection through the [`LeadStore`] trait:
//! `list` with equality predicates (score-ordered, truncated) and single
//! record `create`. [`PgLeadStore`] is the production implementation;
//! [`MemoryLeadStore`] backs tests and local development with the same query
//! semantics.

use crate::errors::AppError;
use crate::models::Lead;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Mutex;

/// Store-side query: equality predicates plus a row limit.
///
/// Results are always ordered by lead score descending and truncated to
/// `limit` before any client-side filtering happens.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    /// Owning user; every query is scoped to one user.
    pub user_id: String,
    /// Equality predicate on industry.
    pub industry: Option<String>,
    /// Equality predicate on company-size bucket.
    pub company_size: Option<String>,
    /// Equality predicate on revenue bucket.
    pub revenue_range: Option<String>,
    /// Max rows returned.
    pub limit: i64,
}

impl LeadFilter {
    /// Filter matching all of a user's leads, truncated to `limit`.
    pub fn for_user(user_id: &str, limit: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            limit,
            ..Self::default()
        }
    }
}

/// Document-collection collaborator owning lead storage.
///
/// Implementations guarantee at-least-once durability per successful
/// `create`; there are no multi-record transactional guarantees.
#[async_trait::async_trait]
pub trait LeadStore: Send + Sync {
    /// List leads matching the filter's equality predicates, ordered by lead
    /// score descending, truncated to the filter's limit.
    async fn list(&self, filter: &LeadFilter) -> Result<Vec<Lead>, AppError>;

    /// Persist a single record.
    async fn create(&self, lead: &Lead) -> Result<(), AppError>;
}

// ============ Postgres ============

/// Production lead store over a Postgres pool.
pub struct PgLeadStore {
    pool: PgPool,
}

impl PgLeadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape. String fields are nullable at the storage layer; the
/// conversion to [`Lead`] coerces every missing value to a defined default so
/// callers never observe an undefined field.
#[derive(Debug, FromRow)]
struct LeadRow {
    id: String,
    user_id: String,
    company_name: Option<String>,
    industry: Option<String>,
    company_size: Option<String>,
    revenue_range: Option<String>,
    location: Option<String>,
    website: Option<String>,
    contact_name: Option<String>,
    contact_title: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    linkedin_url: Option<String>,
    lead_score: Option<i32>,
    data_source: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Lead {
            id: row.id,
            user_id: row.user_id,
            company_name: row.company_name.unwrap_or_default(),
            industry: row.industry.unwrap_or_default(),
            company_size: row.company_size.unwrap_or_default(),
            revenue_range: row.revenue_range.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            website: row.website.unwrap_or_default(),
            contact_name: row.contact_name.unwrap_or_default(),
            contact_title: row.contact_title.unwrap_or_default(),
            contact_email: row.contact_email.unwrap_or_default(),
            contact_phone: row.contact_phone.unwrap_or_default(),
            linkedin_url: row.linkedin_url.unwrap_or_default(),
            lead_score: row.lead_score.unwrap_or(0),
            data_source: row.data_source.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait::async_trait]
impl LeadStore for PgLeadStore {
    async fn list(&self, filter: &LeadFilter) -> Result<Vec<Lead>, AppError> {
        let rows = sqlx::query_as::<_, LeadRow>(
            r#"
            SELECT id, user_id, company_name, industry, company_size, revenue_range,
                   location, website, contact_name, contact_title, contact_email,
                   contact_phone, linkedin_url, lead_score, data_source,
                   created_at, updated_at
            FROM leads
            WHERE user_id = $1
              AND ($2::text IS NULL OR industry = $2)
              AND ($3::text IS NULL OR company_size = $3)
              AND ($4::text IS NULL OR revenue_range = $4)
            ORDER BY lead_score DESC
            LIMIT $5
            "#,
        )
        .bind(&filter.user_id)
        .bind(filter.industry.as_deref())
        .bind(filter.company_size.as_deref())
        .bind(filter.revenue_range.as_deref())
        .bind(filter.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Lead list query failed: {:?}", e);
            AppError::DatabaseError(e)
        })?;

        Ok(rows.into_iter().map(Lead::from).collect())
    }

    async fn create(&self, lead: &Lead) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO leads (
                id, user_id, company_name, industry, company_size, revenue_range,
                location, website, contact_name, contact_title, contact_email,
                contact_phone, linkedin_url, lead_score, data_source,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(&lead.id)
        .bind(&lead.user_id)
        .bind(&lead.company_name)
        .bind(&lead.industry)
        .bind(&lead.company_size)
        .bind(&lead.revenue_range)
        .bind(&lead.location)
        .bind(&lead.website)
        .bind(&lead.contact_name)
        .bind(&lead.contact_title)
        .bind(&lead.contact_email)
        .bind(&lead.contact_phone)
        .bind(&lead.linkedin_url)
        .bind(lead.lead_score)
        .bind(&lead.data_source)
        .bind(lead.created_at)
        .bind(lead.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Lead insert failed for {}: {:?}", lead.id, e);
            AppError::DatabaseError(e)
        })?;

        Ok(())
    }
}

// ============ In-Memory ============

/// In-memory lead store with the same query semantics as [`PgLeadStore`].
/// Used by tests and local development.
#[derive(Default)]
pub struct MemoryLeadStore {
    leads: Mutex<Vec<Lead>>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given leads.
    pub fn with_leads(leads: Vec<Lead>) -> Self {
        Self {
            leads: Mutex::new(leads),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.leads.lock().map(|leads| leads.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the stored records, in insertion order.
    pub fn snapshot(&self) -> Vec<Lead> {
        self.leads
            .lock()
            .map(|leads| leads.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LeadStore for MemoryLeadStore {
    async fn list(&self, filter: &LeadFilter) -> Result<Vec<Lead>, AppError> {
        let leads = self
            .leads
            .lock()
            .map_err(|_| AppError::InternalError("lead store mutex poisoned".to_string()))?;

        let mut matches: Vec<Lead> = leads
            .iter()
            .filter(|lead| {
                lead.user_id == filter.user_id
                    && filter
                        .industry
                        .as_deref()
                        .map_or(true, |v| lead.industry == v)
                    && filter
                        .company_size
                        .as_deref()
                        .map_or(true, |v| lead.company_size == v)
                    && filter
                        .revenue_range
                        .as_deref()
                        .map_or(true, |v| lead.revenue_range == v)
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.lead_score.cmp(&a.lead_score));
        matches.truncate(filter.limit.max(0) as usize);
        Ok(matches)
    }

    async fn create(&self, lead: &Lead) -> Result<(), AppError> {
        let mut leads = self
            .leads
            .lock()
            .map_err(|_| AppError::InternalError("lead store mutex poisoned".to_string()))?;
        leads.push(lead.clone());
        Ok(())
    }
}

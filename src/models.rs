use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============ Database Models ============

/// A business-contact record used as a sales-outreach target.
///
/// This is the central entity of the service. Each record is owned by exactly
/// one user (`user_id`) and is created once during database initialization;
/// it is never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier (UUID v4 string).
    pub id: String,
    /// Owning user. Every query is scoped to this value.
    pub user_id: String,
    /// Company name, e.g. "Apex Dynamics".
    pub company_name: String,
    /// Industry, one of the fixed set in `generator::INDUSTRIES`.
    pub industry: String,
    /// Head-count bucket, one of `generator::COMPANY_SIZES`.
    pub company_size: String,
    /// Annual-revenue bucket, one of `generator::REVENUE_RANGES`.
    pub revenue_range: String,
    /// Free-text "City, Region" location.
    pub location: String,
    /// Company website, derived from the company name.
    pub website: String,
    /// Contact full name.
    pub contact_name: String,
    /// Contact job title.
    pub contact_title: String,
    /// Contact email, derived from name + company.
    pub contact_email: String,
    /// Synthetic US-style phone number. Not validated as allocable.
    pub contact_phone: String,
    /// Professional-network profile URL, derived from the contact name.
    pub linkedin_url: String,
    /// Attractiveness score in [0, 100].
    pub lead_score: i32,
    /// Provenance tag: curated ("Fortune 500 Database") or generated
    /// ("AI Generated Database").
    pub data_source: String,
    /// Timestamp of creation.
    pub created_at: DateTime<Utc>,
    /// Set equal to `created_at` and never mutated afterwards.
    pub updated_at: DateTime<Utc>,
}

/// A lead before it is assigned an id, owner, and timestamps.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub revenue_range: String,
    pub location: String,
    pub website: String,
    pub contact_name: String,
    pub contact_title: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub linkedin_url: String,
    pub lead_score: i32,
    pub data_source: String,
}

impl NewLead {
    /// Assign ownership and identity, producing a persistable `Lead`.
    pub fn assign(self, user_id: &str, now: DateTime<Utc>) -> Lead {
        Lead {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            company_name: self.company_name,
            industry: self.industry,
            company_size: self.company_size,
            revenue_range: self.revenue_range,
            location: self.location,
            website: self.website,
            contact_name: self.contact_name,
            contact_title: self.contact_title,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            linkedin_url: self.linkedin_url,
            lead_score: self.lead_score,
            data_source: self.data_source,
            created_at: now,
            updated_at: now,
        }
    }
}

// ============ Search ============

/// Search criteria for `LeadDatabaseService::search_leads`.
///
/// All fields are optional. `industry`, `company_size` and `revenue_range`
/// become store-side equality predicates unless absent, empty, or the "any"
/// sentinel; the remaining fields are applied in memory after the store has
/// returned its score-ordered, truncated window.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    /// Equality filter on industry.
    pub industry: Option<String>,
    /// Equality filter on company-size bucket.
    pub company_size: Option<String>,
    /// Equality filter on revenue bucket.
    pub revenue_range: Option<String>,
    /// Case-insensitive substring match on location.
    pub location: Option<String>,
    /// Record matches if its title contains ANY of these, case-insensitive.
    #[serde(default)]
    pub job_titles: Vec<String>,
    /// Inclusive lead-score floor.
    pub lead_score_min: Option<i32>,
    /// Record matches if company name, industry, or title contains ANY of
    /// these, case-insensitive.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Max rows requested from the store (default 100).
    pub limit: Option<i64>,
}

/// Sentinel value meaning "no filter" for the equality criteria.
pub const ANY_SENTINEL: &str = "any";

impl SearchCriteria {
    /// Resolve an equality criterion: empty strings and the "any" sentinel
    /// count as absent.
    pub fn active(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ANY_SENTINEL))
    }
}

// ============ Aggregations ============

/// Per-industry aggregate over a user's leads.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryStats {
    /// Industry name.
    pub industry: String,
    /// Number of leads in this industry.
    pub count: usize,
    /// Mean lead score across the group.
    pub avg_lead_score: f64,
    /// Up to 5 distinct company names from the group.
    pub top_companies: Vec<String>,
}

// ============ API Request/Response Models ============

/// Request payload for database initialization.
#[derive(Debug, Deserialize)]
pub struct InitRequest {
    /// Owning user to seed a collection for.
    pub user_id: String,
}

/// Request payload for lead search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Owning user whose collection is searched.
    pub user_id: String,
    /// Filter criteria.
    #[serde(flatten)]
    pub criteria: SearchCriteria,
}

/// Query parameters for the list-style GET endpoints.
#[derive(Debug, Deserialize)]
pub struct LeadListParams {
    pub user_id: String,
    pub limit: Option<i64>,
}

/// Query parameters carrying only the owning user.
#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub user_id: String,
}

/// Request payload for export.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Owning user whose collection is searched.
    pub user_id: String,
    /// "json" or "csv". Anything else is rejected.
    pub format: String,
    /// Criteria selecting the rows to export.
    #[serde(default)]
    pub criteria: SearchCriteria,
}

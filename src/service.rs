//! Lead database operations: one-time seeding, filtered search, and derived
//! queries over a user's collection.

use crate::errors::{AppError, ResultExt};
use crate::generator::{premium_leads, LeadGenerator};
use crate::models::{IndustryStats, Lead, SearchCriteria};
use crate::store::{LeadFilter, LeadStore};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Nominal size of the full external lead universe. Display-only figure, not
/// derived from the persisted collection.
pub const NOMINAL_LEAD_UNIVERSE: u64 = 2_500_000;

/// Default store-side row limit for searches.
pub const DEFAULT_SEARCH_LIMIT: i64 = 100;

/// Max records fetched for the industry-stats fold.
const STATS_FETCH_LIMIT: i64 = 1000;

/// Score floor used by the high-value wrapper.
const HIGH_VALUE_SCORE_MIN: i32 = 80;

/// Revenue bucket used by the high-value wrapper.
const HIGH_VALUE_REVENUE: &str = "$500M+";

/// Distinct company names collected per industry group.
const TOP_COMPANIES_PER_INDUSTRY: usize = 5;

/// Sizing of the one-time seeding pass.
#[derive(Debug, Clone)]
pub struct SeedProfile {
    /// Generated records per user.
    pub target: usize,
    /// Records per write batch.
    pub batch_size: usize,
    /// Pause between batches so the store is not overwhelmed.
    pub batch_delay: Duration,
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            target: 1000,
            batch_size: 50,
            batch_delay: Duration::from_millis(100),
        }
    }
}

/// Lead database service over an injected store.
///
/// Holds no per-request state and no cache; every operation is a fresh round
/// trip to the store.
pub struct LeadDatabaseService {
    store: Arc<dyn LeadStore>,
    seed: SeedProfile,
}

impl LeadDatabaseService {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self::with_profile(store, SeedProfile::default())
    }

    pub fn with_profile(store: Arc<dyn LeadStore>, seed: SeedProfile) -> Self {
        Self { store, seed }
    }

    /// Ensure `user_id` owns a populated collection, seeding it on first call.
    ///
    /// The existence check is best-effort, not transactional: two concurrent
    /// calls for a brand-new user can both pass it and double-insert. A write
    /// failure mid-way propagates without rollback, leaving a partially
    /// populated collection that later calls treat as initialized.
    pub async fn initialize_database(&self, user_id: &str) -> Result<(), AppError> {
        let existing = self
            .store
            .list(&LeadFilter::for_user(user_id, 1))
            .await
            .context("checking for existing leads")?;
        if !existing.is_empty() {
            tracing::info!("Lead database already initialized for user {}", user_id);
            return Ok(());
        }

        let now = Utc::now();
        let premium = premium_leads();
        tracing::info!(
            "Seeding lead database for user {}: {} premium + {} generated",
            user_id,
            premium.len(),
            self.seed.target
        );

        for record in premium {
            let lead = record.assign(user_id, now);
            self.store
                .create(&lead)
                .await
                .context("persisting premium lead")?;
        }

        let mut generator = LeadGenerator::new();
        let generated = generator.generate_records(self.seed.target);
        let batch_size = self.seed.batch_size.max(1);
        let total_batches = generated.len().div_ceil(batch_size);

        for (index, batch) in generated.chunks(batch_size).enumerate() {
            if index > 0 && !self.seed.batch_delay.is_zero() {
                tokio::time::sleep(self.seed.batch_delay).await;
            }
            for record in batch {
                let lead = record.clone().assign(user_id, now);
                self.store
                    .create(&lead)
                    .await
                    .context("persisting generated lead")?;
            }
            tracing::debug!(
                "Seeded batch {}/{} for user {}",
                index + 1,
                total_batches,
                user_id
            );
        }

        tracing::info!("Lead database initialized for user {}", user_id);
        Ok(())
    }

    /// Filtered, score-ranked search over a user's leads.
    ///
    /// Equality criteria (industry, company size, revenue range) go to the
    /// store, which orders by score descending and truncates to `limit`
    /// (default 100). Location, job-title, score-floor and keyword predicates
    /// then narrow the already-truncated window in memory, so a search can
    /// return fewer rows than actually match across the whole collection.
    pub async fn search_leads(
        &self,
        criteria: &SearchCriteria,
        user_id: &str,
    ) -> Result<Vec<Lead>, AppError> {
        let filter = LeadFilter {
            user_id: user_id.to_string(),
            industry: SearchCriteria::active(&criteria.industry).map(str::to_string),
            company_size: SearchCriteria::active(&criteria.company_size).map(str::to_string),
            revenue_range: SearchCriteria::active(&criteria.revenue_range).map(str::to_string),
            limit: criteria.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        };

        let mut leads = self
            .store
            .list(&filter)
            .await
            .context("querying leads")?;

        if let Some(location) = criteria
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            let needle = location.to_lowercase();
            leads.retain(|lead| lead.location.to_lowercase().contains(&needle));
        }

        if !criteria.job_titles.is_empty() {
            let needles: Vec<String> = criteria
                .job_titles
                .iter()
                .map(|t| t.to_lowercase())
                .collect();
            leads.retain(|lead| {
                let title = lead.contact_title.to_lowercase();
                needles.iter().any(|needle| title.contains(needle))
            });
        }

        if let Some(min_score) = criteria.lead_score_min {
            leads.retain(|lead| lead.lead_score >= min_score);
        }

        if !criteria.keywords.is_empty() {
            let needles: Vec<String> = criteria.keywords.iter().map(|k| k.to_lowercase()).collect();
            leads.retain(|lead| {
                let haystack = format!(
                    "{} {} {}",
                    lead.company_name, lead.industry, lead.contact_title
                )
                .to_lowercase();
                needles.iter().any(|needle| haystack.contains(needle))
            });
        }

        Ok(leads)
    }

    /// Leads in a single industry, by score.
    pub async fn leads_by_industry(
        &self,
        industry: &str,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<Lead>, AppError> {
        let criteria = SearchCriteria {
            industry: Some(industry.to_string()),
            limit: Some(limit),
            ..SearchCriteria::default()
        };
        self.search_leads(&criteria, user_id).await
    }

    /// Top-bucket leads: score >= 80 in the largest revenue bucket.
    pub async fn high_value_leads(&self, user_id: &str, limit: i64) -> Result<Vec<Lead>, AppError> {
        let criteria = SearchCriteria {
            revenue_range: Some(HIGH_VALUE_REVENUE.to_string()),
            lead_score_min: Some(HIGH_VALUE_SCORE_MIN),
            limit: Some(limit),
            ..SearchCriteria::default()
        };
        self.search_leads(&criteria, user_id).await
    }

    /// Nominal size of the addressable lead universe. Display-only; NOT an
    /// aggregate over persisted records.
    pub fn total_leads_count(&self) -> u64 {
        NOMINAL_LEAD_UNIVERSE
    }

    /// Per-industry count, mean score and sample companies over up to 1000 of
    /// the user's records. In-memory fold; sized for small per-user
    /// collections.
    pub async fn industry_stats(&self, user_id: &str) -> Result<Vec<IndustryStats>, AppError> {
        let leads = self
            .store
            .list(&LeadFilter::for_user(user_id, STATS_FETCH_LIMIT))
            .await
            .context("fetching leads for industry stats")?;

        struct Group {
            count: usize,
            score_sum: i64,
            companies: Vec<String>,
        }

        let mut groups: HashMap<String, Group> = HashMap::new();
        for lead in &leads {
            let group = groups.entry(lead.industry.clone()).or_insert(Group {
                count: 0,
                score_sum: 0,
                companies: Vec::new(),
            });
            group.count += 1;
            group.score_sum += i64::from(lead.lead_score);
            if group.companies.len() < TOP_COMPANIES_PER_INDUSTRY
                && !group.companies.contains(&lead.company_name)
            {
                group.companies.push(lead.company_name.clone());
            }
        }

        let mut stats: Vec<IndustryStats> = groups
            .into_iter()
            .map(|(industry, group)| IndustryStats {
                industry,
                count: group.count,
                avg_lead_score: group.score_sum as f64 / group.count as f64,
                top_companies: group.companies,
            })
            .collect();
        stats.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(stats)
    }
}

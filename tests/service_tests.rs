/// Integration tests for the lead database service
/// Exercises seeding, search filtering, and aggregation over the in-memory store
use chrono::Utc;
use rust_leaddb_api::errors::AppError;
use rust_leaddb_api::models::{Lead, NewLead, SearchCriteria};
use rust_leaddb_api::service::{LeadDatabaseService, SeedProfile};
use rust_leaddb_api::store::{LeadFilter, LeadStore, MemoryLeadStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Small fast seed profile so tests do not write 1000 records.
fn test_profile() -> SeedProfile {
    SeedProfile {
        target: 40,
        batch_size: 10,
        batch_delay: Duration::ZERO,
    }
}

/// Helper to build a persisted lead with the interesting fields set.
fn lead(user: &str, company: &str, industry: &str, title: &str, location: &str, score: i32) -> Lead {
    NewLead {
        company_name: company.to_string(),
        industry: industry.to_string(),
        company_size: "51-200".to_string(),
        revenue_range: "$10M-50M".to_string(),
        location: location.to_string(),
        website: "https://example.com".to_string(),
        contact_name: "Test Contact".to_string(),
        contact_title: title.to_string(),
        contact_email: "test.contact@example.com".to_string(),
        contact_phone: "+1 (555) 555-0100".to_string(),
        linkedin_url: "https://linkedin.com/in/testcontact".to_string(),
        lead_score: score,
        data_source: "AI Generated Database".to_string(),
    }
    .assign(user, Utc::now())
}

#[tokio::test]
async fn initialization_is_idempotent() {
    let store = Arc::new(MemoryLeadStore::new());
    let service = LeadDatabaseService::with_profile(store.clone(), test_profile());

    service.initialize_database("user-1").await.unwrap();
    let after_first = store.len();
    assert_eq!(after_first, 10 + 40);

    service.initialize_database("user-1").await.unwrap();
    assert_eq!(store.len(), after_first, "second call must not write");
}

#[tokio::test]
async fn initialization_seeds_premium_before_generated() {
    let store = Arc::new(MemoryLeadStore::new());
    let service = LeadDatabaseService::with_profile(store.clone(), test_profile());

    service.initialize_database("user-1").await.unwrap();

    let snapshot = store.snapshot();
    assert!(snapshot[..10]
        .iter()
        .all(|l| l.data_source == "Fortune 500 Database"));
    assert!(snapshot[10..]
        .iter()
        .all(|l| l.data_source == "AI Generated Database"));
    assert!(snapshot.iter().all(|l| l.user_id == "user-1"));
    assert!(snapshot.iter().all(|l| l.created_at == l.updated_at));
}

#[tokio::test]
async fn initialization_is_partitioned_by_user() {
    let store = Arc::new(MemoryLeadStore::new());
    let service = LeadDatabaseService::with_profile(store.clone(), test_profile());

    service.initialize_database("user-1").await.unwrap();
    service.initialize_database("user-2").await.unwrap();

    // A populated collection for one user does not mark another as seeded
    assert_eq!(store.len(), 2 * (10 + 40));
}

#[tokio::test]
async fn search_composes_equality_and_score_filters() {
    let store = Arc::new(MemoryLeadStore::with_leads(vec![
        lead("u", "Alpha", "Technology", "CEO", "Austin, TX", 95),
        lead("u", "Beta", "Technology", "VP of Sales", "Denver, CO", 82),
        lead("u", "Gamma", "Technology", "Sales Manager", "Austin, TX", 70),
        lead("u", "Delta", "Finance", "CEO", "New York, NY", 90),
        lead("u", "Epsilon", "Retail", "Director of Operations", "Miami, FL", 88),
    ]));
    let service = LeadDatabaseService::new(store);

    let criteria = SearchCriteria {
        industry: Some("Technology".to_string()),
        lead_score_min: Some(80),
        ..SearchCriteria::default()
    };
    let results = service.search_leads(&criteria, "u").await.unwrap();

    let companies: Vec<&str> = results.iter().map(|l| l.company_name.as_str()).collect();
    assert_eq!(companies, ["Alpha", "Beta"]);
}

#[tokio::test]
async fn any_sentinel_disables_equality_filters() {
    let store = Arc::new(MemoryLeadStore::with_leads(vec![
        lead("u", "Alpha", "Technology", "CEO", "Austin, TX", 95),
        lead("u", "Delta", "Finance", "CEO", "New York, NY", 90),
    ]));
    let service = LeadDatabaseService::new(store);

    let criteria = SearchCriteria {
        industry: Some("any".to_string()),
        ..SearchCriteria::default()
    };
    let results = service.search_leads(&criteria, "u").await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn truncation_happens_before_client_side_filters() {
    // The two highest-scored leads are in Denver; the only Austin lead scores
    // lowest and falls outside the store window, so the search misses it even
    // though it matches the location predicate.
    let store = Arc::new(MemoryLeadStore::with_leads(vec![
        lead("u", "Alpha", "Technology", "CEO", "Denver, CO", 95),
        lead("u", "Beta", "Technology", "CEO", "Denver, CO", 90),
        lead("u", "Gamma", "Technology", "CEO", "Austin, TX", 70),
    ]));
    let service = LeadDatabaseService::new(store);

    let criteria = SearchCriteria {
        location: Some("Austin".to_string()),
        limit: Some(2),
        ..SearchCriteria::default()
    };
    let results = service.search_leads(&criteria, "u").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn job_title_and_keyword_filters_match_any_entry_case_insensitive() {
    let store = Arc::new(MemoryLeadStore::with_leads(vec![
        lead("u", "Alpha", "Technology", "VP of Sales", "Austin, TX", 95),
        lead("u", "Beta", "Technology", "Chief Technology Officer", "Denver, CO", 82),
        lead("u", "Gamma", "Retail", "Sales Manager", "Austin, TX", 70),
    ]));
    let service = LeadDatabaseService::new(store);

    let criteria = SearchCriteria {
        job_titles: vec!["vp".to_string(), "chief".to_string()],
        ..SearchCriteria::default()
    };
    let results = service.search_leads(&criteria, "u").await.unwrap();
    assert_eq!(results.len(), 2);

    let criteria = SearchCriteria {
        keywords: vec!["retail".to_string(), "alpha".to_string()],
        ..SearchCriteria::default()
    };
    let results = service.search_leads(&criteria, "u").await.unwrap();
    let companies: Vec<&str> = results.iter().map(|l| l.company_name.as_str()).collect();
    assert_eq!(companies, ["Alpha", "Gamma"]);
}

#[tokio::test]
async fn search_scopes_to_owning_user() {
    let store = Arc::new(MemoryLeadStore::with_leads(vec![
        lead("u1", "Alpha", "Technology", "CEO", "Austin, TX", 95),
        lead("u2", "Beta", "Technology", "CEO", "Denver, CO", 90),
    ]));
    let service = LeadDatabaseService::new(store);

    let results = service
        .search_leads(&SearchCriteria::default(), "u1")
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].company_name, "Alpha");
}

#[tokio::test]
async fn default_limit_is_one_hundred() {
    let leads: Vec<Lead> = (0..120)
        .map(|i| {
            lead(
                "u",
                &format!("Company {}", i),
                "Technology",
                "CEO",
                "Austin, TX",
                60,
            )
        })
        .collect();
    let service = LeadDatabaseService::new(Arc::new(MemoryLeadStore::with_leads(leads)));

    let results = service
        .search_leads(&SearchCriteria::default(), "u")
        .await
        .unwrap();
    assert_eq!(results.len(), 100);
}

#[tokio::test]
async fn high_value_wrapper_filters_revenue_and_score() {
    let mut rich = lead("u", "Alpha", "Technology", "CEO", "Austin, TX", 90);
    rich.revenue_range = "$500M+".to_string();
    let mut rich_low_score = lead("u", "Beta", "Technology", "CEO", "Denver, CO", 70);
    rich_low_score.revenue_range = "$500M+".to_string();
    let modest = lead("u", "Gamma", "Technology", "CEO", "Miami, FL", 95);

    let store = Arc::new(MemoryLeadStore::with_leads(vec![
        rich,
        rich_low_score,
        modest,
    ]));
    let service = LeadDatabaseService::new(store);

    let results = service.high_value_leads("u", 50).await.unwrap();
    let companies: Vec<&str> = results.iter().map(|l| l.company_name.as_str()).collect();
    assert_eq!(companies, ["Alpha"]);
}

#[tokio::test]
async fn industry_stats_groups_and_sorts_by_count() {
    let store = Arc::new(MemoryLeadStore::with_leads(vec![
        lead("u", "Alpha", "Technology", "CEO", "Austin, TX", 80),
        lead("u", "Beta", "Technology", "CEO", "Denver, CO", 60),
        lead("u", "Gamma", "Finance", "CEO", "New York, NY", 90),
    ]));
    let service = LeadDatabaseService::new(store);

    let stats = service.industry_stats("u").await.unwrap();
    assert_eq!(stats.len(), 2);

    assert_eq!(stats[0].industry, "Technology");
    assert_eq!(stats[0].count, 2);
    assert!((stats[0].avg_lead_score - 70.0).abs() < f64::EPSILON);

    assert_eq!(stats[1].industry, "Finance");
    assert_eq!(stats[1].count, 1);
    assert!((stats[1].avg_lead_score - 90.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn industry_stats_collects_at_most_five_distinct_companies() {
    let leads: Vec<Lead> = (0..7)
        .map(|i| {
            lead(
                "u",
                &format!("Company {}", i),
                "Technology",
                "CEO",
                "Austin, TX",
                80,
            )
        })
        .collect();
    let service = LeadDatabaseService::new(Arc::new(MemoryLeadStore::with_leads(leads)));

    let stats = service.industry_stats("u").await.unwrap();
    assert_eq!(stats[0].count, 7);
    assert_eq!(stats[0].top_companies.len(), 5);
}

/// Store wrapper that starts rejecting writes after a fixed number of
/// successful creates.
struct FailingStore {
    inner: MemoryLeadStore,
    allow: usize,
    writes: AtomicUsize,
}

#[async_trait::async_trait]
impl LeadStore for FailingStore {
    async fn list(&self, filter: &LeadFilter) -> Result<Vec<Lead>, AppError> {
        self.inner.list(filter).await
    }

    async fn create(&self, lead: &Lead) -> Result<(), AppError> {
        let n = self.writes.fetch_add(1, Ordering::SeqCst);
        if n >= self.allow {
            return Err(AppError::InternalError("write rejected".to_string()));
        }
        self.inner.create(lead).await
    }
}

#[tokio::test]
async fn partial_initialization_persists_and_later_calls_skip() {
    let store = Arc::new(FailingStore {
        inner: MemoryLeadStore::new(),
        allow: 25,
        writes: AtomicUsize::new(0),
    });
    let service = LeadDatabaseService::with_profile(store.clone(), test_profile());

    let err = service.initialize_database("user-1").await.unwrap_err();
    assert!(matches!(err, AppError::WithContext { .. }));
    assert_eq!(store.inner.len(), 25);

    // The partial collection now counts as initialized
    service.initialize_database("user-1").await.unwrap();
    assert_eq!(store.inner.len(), 25);
}

//! Synthetic lead pool generation.
//!
//! Produces plausible business-contact records by combining a fixed set of
//! curated entries with algorithmically generated ones. Company websites,
//! contact emails and profile URLs are pure functions of the chosen name and
//! company strings, so identical picks always derive identical strings.

use crate::models::NewLead;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============ Field Pools ============

/// Industry set. "Technology" carries a scoring bonus.
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Manufacturing",
    "Retail",
    "Real Estate",
    "Education",
    "Energy",
    "Transportation",
    "Hospitality",
];

/// Head-count buckets, ordered smallest to largest. The top two carry a
/// scoring bonus.
pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];

/// Annual-revenue buckets, ordered smallest to largest. The top three carry
/// a scoring bonus.
pub const REVENUE_RANGES: &[&str] = &[
    "$0-1M",
    "$1M-10M",
    "$10M-50M",
    "$50M-100M",
    "$100M-500M",
    "$500M+",
];

const FIRST_NAMES: &[&str] = &[
    "James", "Maria", "Robert", "Jennifer", "Michael", "Linda", "David", "Elizabeth", "William",
    "Susan", "Carlos", "Jessica", "Daniel", "Karen", "Kevin", "Nancy", "Brian", "Lisa", "Thomas",
    "Sandra",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee", "Thompson",
    "White", "Harris",
];

const COMPANY_PREFIXES: &[&str] = &[
    "Apex", "Summit", "Pinnacle", "Vertex", "Nova", "Stellar", "Quantum", "Fusion", "Catalyst",
    "Momentum", "Horizon", "Beacon", "Cascade", "Meridian", "Atlas", "Vanguard",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Dynamics",
    "Solutions",
    "Systems",
    "Industries",
    "Technologies",
    "Group",
    "Partners",
    "Ventures",
    "Enterprises",
    "Labs",
    "Holdings",
    "Logistics",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Boston, MA",
    "Chicago, IL",
    "Denver, CO",
    "Atlanta, GA",
    "Miami, FL",
    "Los Angeles, CA",
    "Portland, OR",
    "Nashville, TN",
    "Phoenix, AZ",
    "Dallas, TX",
    "Minneapolis, MN",
    "Charlotte, NC",
];

const JOB_TITLES: &[&str] = &[
    "CEO",
    "Chief Technology Officer",
    "VP of Sales",
    "VP of Marketing",
    "Director of Operations",
    "Head of Business Development",
    "Sales Manager",
    "Marketing Manager",
    "Account Executive",
    "Operations Manager",
    "Product Manager",
    "Founder",
    "President",
    "Chief Revenue Officer",
    "Director of Engineering",
];

/// Keywords marking an executive/seniority title.
pub const SENIORITY_KEYWORDS: &[&str] = &[
    "CEO", "CTO", "CFO", "COO", "Chief", "President", "Founder", "VP", "Vice President",
    "Director", "Head",
];

// ============ Scoring ============

/// Upper bound for every lead score.
pub const MAX_LEAD_SCORE: i32 = 100;

/// Bonus added per matching attribute.
const ATTRIBUTE_BONUS: i32 = 5;

/// Provenance tag for curated entries.
pub const PREMIUM_SOURCE: &str = "Fortune 500 Database";

/// Provenance tag for generated entries.
pub const GENERATED_SOURCE: &str = "AI Generated Database";

/// Whether the bucket is one of the two largest head-count buckets.
pub fn is_top_company_size(company_size: &str) -> bool {
    COMPANY_SIZES[COMPANY_SIZES.len() - 2..].contains(&company_size)
}

/// Whether the bucket is one of the three largest revenue buckets.
pub fn is_top_revenue_range(revenue_range: &str) -> bool {
    REVENUE_RANGES[REVENUE_RANGES.len() - 3..].contains(&revenue_range)
}

/// Whether the title contains a seniority keyword, case-insensitive.
pub fn has_seniority_keyword(title: &str) -> bool {
    let title = title.to_lowercase();
    SENIORITY_KEYWORDS
        .iter()
        .any(|keyword| title.contains(&keyword.to_lowercase()))
}

/// Compute a lead score from a base roll plus attribute bonuses.
///
/// Adds +5 each for: Technology industry, a top-two company-size bucket, a
/// top-three revenue bucket, and a seniority keyword in the title. The result
/// is clamped to [0, 100].
pub fn compute_lead_score(
    base: i32,
    industry: &str,
    company_size: &str,
    revenue_range: &str,
    contact_title: &str,
) -> i32 {
    let mut score = base;
    if industry == "Technology" {
        score += ATTRIBUTE_BONUS;
    }
    if is_top_company_size(company_size) {
        score += ATTRIBUTE_BONUS;
    }
    if is_top_revenue_range(revenue_range) {
        score += ATTRIBUTE_BONUS;
    }
    if has_seniority_keyword(contact_title) {
        score += ATTRIBUTE_BONUS;
    }
    score.clamp(0, MAX_LEAD_SCORE)
}

// ============ Derived Fields ============

/// Normalized company slug: lowercased, non-alphanumerics stripped.
pub fn company_slug(company_name: &str) -> String {
    company_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Company website derived from the slug.
pub fn derive_website(slug: &str) -> String {
    format!("https://{}.com", slug)
}

/// Contact email derived from the contact name and company slug.
pub fn derive_email(first_name: &str, last_name: &str, slug: &str) -> String {
    format!(
        "{}.{}@{}.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        slug
    )
}

/// Profile URL derived from the contact name.
pub fn derive_linkedin(first_name: &str, last_name: &str) -> String {
    format!(
        "https://linkedin.com/in/{}{}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}

// ============ Generator ============

/// Synthetic lead generator over a seedable random source.
///
/// Production callers use `new()` (entropy-seeded); tests use `with_seed` for
/// reproducible output.
pub struct LeadGenerator {
    rng: StdRng,
}

impl LeadGenerator {
    /// Entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` synthetic records. Every field is populated; output
    /// length equals `count`.
    pub fn generate_records(&mut self, count: usize) -> Vec<NewLead> {
        (0..count).map(|_| self.generate_one()).collect()
    }

    fn generate_one(&mut self) -> NewLead {
        let first_name = self.pick(FIRST_NAMES);
        let last_name = self.pick(LAST_NAMES);
        let prefix = self.pick(COMPANY_PREFIXES);
        let suffix = self.pick(COMPANY_SUFFIXES);
        let industry = self.pick(INDUSTRIES);
        let company_size = self.pick(COMPANY_SIZES);
        let revenue_range = self.pick(REVENUE_RANGES);
        let location = self.pick(LOCATIONS);
        let contact_title = self.pick(JOB_TITLES);

        let company_name = format!("{} {}", prefix, suffix);
        let slug = company_slug(&company_name);
        let base = self.rng.gen_range(50..90);

        NewLead {
            website: derive_website(&slug),
            contact_email: derive_email(first_name, last_name, &slug),
            linkedin_url: derive_linkedin(first_name, last_name),
            contact_name: format!("{} {}", first_name, last_name),
            contact_phone: self.synthetic_phone(),
            lead_score: compute_lead_score(
                base,
                industry,
                company_size,
                revenue_range,
                contact_title,
            ),
            company_name,
            industry: industry.to_string(),
            company_size: company_size.to_string(),
            revenue_range: revenue_range.to_string(),
            location: location.to_string(),
            contact_title: contact_title.to_string(),
            data_source: GENERATED_SOURCE.to_string(),
        }
    }

    /// US-style number with random digit groups. Not checked for
    /// allocability.
    fn synthetic_phone(&mut self) -> String {
        format!(
            "+1 ({}) {}-{}",
            self.rng.gen_range(200..1000),
            self.rng.gen_range(200..1000),
            self.rng.gen_range(1000..10000)
        )
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool[self.rng.gen_range(0..pool.len())]
    }
}

impl Default for LeadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============ Curated Entries ============

/// The fixed curated list, always seeded before generated records. Scores are
/// fixed in the 88-99 band.
pub fn premium_leads() -> Vec<NewLead> {
    vec![
        premium_entry(
            "Salesforce",
            "Technology",
            "San Francisco, CA",
            "Sarah",
            "Mitchell",
            "VP of Sales",
            "+1 (415) 555-0142",
            99,
        ),
        premium_entry(
            "Microsoft",
            "Technology",
            "Seattle, WA",
            "David",
            "Kowalski",
            "Director of Business Development",
            "+1 (425) 555-0187",
            98,
        ),
        premium_entry(
            "Oracle",
            "Technology",
            "Austin, TX",
            "Priya",
            "Raman",
            "VP of Marketing",
            "+1 (512) 555-0134",
            96,
        ),
        premium_entry(
            "Adobe",
            "Technology",
            "San Jose, CA",
            "Marcus",
            "Bennett",
            "Chief Revenue Officer",
            "+1 (408) 555-0176",
            95,
        ),
        premium_entry(
            "Goldman Sachs",
            "Finance",
            "New York, NY",
            "Elena",
            "Vasquez",
            "Managing Director",
            "+1 (212) 555-0158",
            94,
        ),
        premium_entry(
            "Pfizer",
            "Healthcare",
            "New York, NY",
            "Thomas",
            "Okafor",
            "VP of Commercial Operations",
            "+1 (212) 555-0129",
            93,
        ),
        premium_entry(
            "Walmart",
            "Retail",
            "Bentonville, AR",
            "Rachel",
            "Donovan",
            "Director of Procurement",
            "+1 (479) 555-0163",
            91,
        ),
        premium_entry(
            "Caterpillar",
            "Manufacturing",
            "Irving, TX",
            "James",
            "Whitfield",
            "VP of Operations",
            "+1 (972) 555-0117",
            90,
        ),
        premium_entry(
            "ExxonMobil",
            "Energy",
            "Houston, TX",
            "Angela",
            "Pierce",
            "Director of Strategy",
            "+1 (713) 555-0191",
            89,
        ),
        premium_entry(
            "FedEx",
            "Transportation",
            "Memphis, TN",
            "Victor",
            "Huang",
            "Head of Enterprise Sales",
            "+1 (901) 555-0148",
            88,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn premium_entry(
    company_name: &str,
    industry: &str,
    location: &str,
    first_name: &str,
    last_name: &str,
    contact_title: &str,
    contact_phone: &str,
    lead_score: i32,
) -> NewLead {
    let slug = company_slug(company_name);
    NewLead {
        company_name: company_name.to_string(),
        industry: industry.to_string(),
        company_size: "1000+".to_string(),
        revenue_range: "$500M+".to_string(),
        location: location.to_string(),
        website: derive_website(&slug),
        contact_name: format!("{} {}", first_name, last_name),
        contact_title: contact_title.to_string(),
        contact_email: derive_email(first_name, last_name, &slug),
        contact_phone: contact_phone.to_string(),
        linkedin_url: derive_linkedin(first_name, last_name),
        lead_score,
        data_source: PREMIUM_SOURCE.to_string(),
    }
}

/// Unit tests for synthetic lead generation
/// Tests score bounds, attribute bonuses, and derived-field determinism
use rust_leaddb_api::generator::{
    company_slug, compute_lead_score, derive_email, derive_linkedin, derive_website,
    has_seniority_keyword, is_top_company_size, is_top_revenue_range, premium_leads,
    LeadGenerator, GENERATED_SOURCE, PREMIUM_SOURCE,
};

#[cfg(test)]
mod score_tests {
    use super::*;

    #[test]
    fn generated_scores_stay_within_bounds() {
        let mut generator = LeadGenerator::with_seed(7);
        for lead in generator.generate_records(500) {
            assert!(
                (0..=100).contains(&lead.lead_score),
                "score out of range: {}",
                lead.lead_score
            );
        }
    }

    #[test]
    fn all_bonuses_cap_at_one_hundred() {
        // Base 90 with all four bonuses would be 110 uncapped
        let score = compute_lead_score(90, "Technology", "1000+", "$500M+", "CEO");
        assert_eq!(score, 100);
    }

    #[test]
    fn bonuses_add_five_each() {
        assert_eq!(
            compute_lead_score(50, "Retail", "1-10", "$0-1M", "Account Executive"),
            50
        );
        assert_eq!(
            compute_lead_score(50, "Technology", "1-10", "$0-1M", "Account Executive"),
            55
        );
        assert_eq!(
            compute_lead_score(50, "Technology", "501-1000", "$0-1M", "Account Executive"),
            60
        );
        assert_eq!(
            compute_lead_score(50, "Technology", "501-1000", "$50M-100M", "Account Executive"),
            65
        );
        assert_eq!(
            compute_lead_score(50, "Technology", "501-1000", "$50M-100M", "VP of Sales"),
            70
        );
    }

    #[test]
    fn top_bucket_membership() {
        assert!(is_top_company_size("501-1000"));
        assert!(is_top_company_size("1000+"));
        assert!(!is_top_company_size("201-500"));

        assert!(is_top_revenue_range("$50M-100M"));
        assert!(is_top_revenue_range("$100M-500M"));
        assert!(is_top_revenue_range("$500M+"));
        assert!(!is_top_revenue_range("$10M-50M"));
    }

    #[test]
    fn seniority_keyword_is_case_insensitive() {
        assert!(has_seniority_keyword("CEO"));
        assert!(has_seniority_keyword("vp of sales"));
        assert!(has_seniority_keyword("Head of Business Development"));
        assert!(!has_seniority_keyword("Account Executive"));
    }
}

#[cfg(test)]
mod derivation_tests {
    use super::*;

    #[test]
    fn derived_fields_are_deterministic() {
        let slug = company_slug("Apex Dynamics");
        assert_eq!(slug, "apexdynamics");
        assert_eq!(derive_website(&slug), "https://apexdynamics.com");
        assert_eq!(
            derive_email("James", "Smith", &slug),
            "james.smith@apexdynamics.com"
        );
        assert_eq!(
            derive_linkedin("James", "Smith"),
            "https://linkedin.com/in/jamessmith"
        );

        // Repeated derivation is byte-identical
        assert_eq!(derive_website(&slug), derive_website(&slug));
        assert_eq!(
            derive_email("James", "Smith", &slug),
            derive_email("James", "Smith", &slug)
        );
    }

    #[test]
    fn slug_strips_non_alphanumerics() {
        assert_eq!(company_slug("O'Brien & Sons, Inc."), "obriensonsinc");
        assert_eq!(company_slug("Vertex Labs"), "vertexlabs");
    }

    #[test]
    fn same_seed_produces_identical_records() {
        let a = LeadGenerator::with_seed(42).generate_records(25);
        let b = LeadGenerator::with_seed(42).generate_records(25);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.company_name, y.company_name);
            assert_eq!(x.contact_email, y.contact_email);
            assert_eq!(x.website, y.website);
            assert_eq!(x.linkedin_url, y.linkedin_url);
            assert_eq!(x.lead_score, y.lead_score);
        }
    }

    #[test]
    fn email_and_website_derive_from_name_and_company() {
        let mut generator = LeadGenerator::with_seed(11);
        for lead in generator.generate_records(50) {
            let slug = company_slug(&lead.company_name);
            assert_eq!(lead.website, derive_website(&slug));

            let (first, last) = lead
                .contact_name
                .split_once(' ')
                .expect("contact name has two parts");
            assert_eq!(lead.contact_email, derive_email(first, last, &slug));
            assert_eq!(lead.linkedin_url, derive_linkedin(first, last));
        }
    }
}

#[cfg(test)]
mod pool_tests {
    use super::*;

    #[test]
    fn every_field_populated_and_count_honored() {
        let mut generator = LeadGenerator::with_seed(3);
        let records = generator.generate_records(100);
        assert_eq!(records.len(), 100);

        for lead in &records {
            assert!(!lead.company_name.is_empty());
            assert!(!lead.industry.is_empty());
            assert!(!lead.company_size.is_empty());
            assert!(!lead.revenue_range.is_empty());
            assert!(!lead.location.is_empty());
            assert!(!lead.website.is_empty());
            assert!(!lead.contact_name.is_empty());
            assert!(!lead.contact_title.is_empty());
            assert!(!lead.contact_email.is_empty());
            assert!(!lead.contact_phone.is_empty());
            assert!(!lead.linkedin_url.is_empty());
            assert_eq!(lead.data_source, GENERATED_SOURCE);
        }
    }

    #[test]
    fn phone_numbers_are_us_style() {
        let mut generator = LeadGenerator::with_seed(5);
        for lead in generator.generate_records(50) {
            assert!(lead.contact_phone.starts_with("+1 ("));
            assert_eq!(lead.contact_phone.len(), "+1 (415) 555-0142".len());
        }
    }

    #[test]
    fn premium_list_is_fixed_and_high_scoring() {
        let premium = premium_leads();
        assert_eq!(premium.len(), 10);
        for lead in &premium {
            assert!(
                (88..=99).contains(&lead.lead_score),
                "unexpected premium score: {}",
                lead.lead_score
            );
            assert_eq!(lead.data_source, PREMIUM_SOURCE);
        }

        // Stable across calls
        let again = premium_leads();
        for (a, b) in premium.iter().zip(&again) {
            assert_eq!(a.company_name, b.company_name);
            assert_eq!(a.contact_email, b.contact_email);
            assert_eq!(a.lead_score, b.lead_score);
        }
    }
}

//! Closest-role matching — pluggable, trait-based matcher over the occupation
//! catalog.
//!
//! Default: `HybridLexicalMatcher` (pure-Rust, deterministic, fully testable):
//! a composite of trigram similarity, token overlap, and declarative intent
//! rules, with penalty/boost corrections that keep tech-flavored queries away
//! from service-occupation titles.
//!
//! `AppState` holds an `Arc<dyn RoleMatcher>`, swapped at construction.

use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::{IndexedRole, RoleCatalog};
use crate::matcher::rules::MatcherRules;
use crate::matcher::text::{normalize, token_overlap, tokenize, trigram_similarity};
use crate::models::role::Role;

// ────────────────────────────────────────────────────────────────────────────
// Scoring constants
// ────────────────────────────────────────────────────────────────────────────

const TRIGRAM_WEIGHT: f64 = 0.85;
const TOKEN_WEIGHT: f64 = 0.95;
/// Added once per matching intent-boost rule; rules accumulate.
const INTENT_BOOST_STEP: f64 = 1.2;
/// Subtracted from service-occupation titles under tech intent.
const SERVICE_PENALTY: f64 = 2.5;
/// Added to the affinity title under tech intent when ambiguity remains.
const TECH_AFFINITY_BONUS: f64 = 0.7;
/// Composite scores below this are reported as "no confident match".
const ACCEPT_THRESHOLD: f64 = 0.35;

// ────────────────────────────────────────────────────────────────────────────
// Result type and trait
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of one match query. An absent role is a normal result, not an
/// error; `confidence` reflects the best score found even on rejection.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub role: Option<Role>,
    pub confidence: f64,
}

impl MatchResult {
    fn none() -> Self {
        Self {
            role: None,
            confidence: 0.0,
        }
    }
}

/// The role matcher seam. Implement this to swap matching backends without
/// touching handlers or callers. Async so a future semantic backend can sit
/// behind the same trait.
#[async_trait]
pub trait RoleMatcher: Send + Sync {
    async fn closest_role(&self, query: &str, catalog: &RoleCatalog) -> MatchResult;
}

// ────────────────────────────────────────────────────────────────────────────
// HybridLexicalMatcher — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic lexical matcher.
///
/// Per query:
/// 1. normalize; empty → no match, confidence 0
/// 2. detect tech/analytics intent from the rule vocabulary
/// 3. under tech intent, restrict candidates to the curated allow-list
///    (falling back to the full catalog if the intersection is empty)
/// 4. score each candidate: `0.85·trigram + 0.95·token_overlap + boosts`,
///    minus the service penalty / plus the affinity nudge under tech intent
/// 5. strictly-greater selection (first seen wins ties), then
///    `confidence = clamp((best + 0.5) / 3, 0, 1)` and the 0.35 acceptance cut
pub struct HybridLexicalMatcher {
    rules: MatcherRules,
}

impl HybridLexicalMatcher {
    pub fn new(rules: MatcherRules) -> Self {
        Self { rules }
    }

    fn find_closest(&self, query: &str, catalog: &RoleCatalog) -> MatchResult {
        let query_norm = normalize(query);
        if query_norm.is_empty() || catalog.is_empty() {
            return MatchResult::none();
        }

        let query_tokens = tokenize(&query_norm);
        let tech = self.rules.is_tech_intent(&query_norm);

        let candidates: Vec<&IndexedRole> = if tech {
            let preferred: Vec<&IndexedRole> = catalog
                .iter()
                .filter(|e| self.rules.preferred_titles.contains(e.role.title.as_str()))
                .collect();
            if preferred.is_empty() {
                catalog.iter().collect()
            } else {
                preferred
            }
        } else {
            catalog.iter().collect()
        };

        let mut best: Option<&IndexedRole> = None;
        let mut best_score = f64::NEG_INFINITY;

        for entry in candidates {
            let tri = trigram_similarity(&query_norm, &entry.title_norm);
            let tok = token_overlap(&query_tokens, &entry.title_tokens);
            let boost = self.rules.matching_boost_rules(&query_norm, &entry.role.title) as f64
                * INTENT_BOOST_STEP;

            let mut score = TRIGRAM_WEIGHT * tri + TOKEN_WEIGHT * tok + boost;

            if tech && self.rules.is_service_title(&entry.role.title) {
                score -= SERVICE_PENALTY;
            }
            if tech && entry.role.title == self.rules.tech_affinity_title {
                score += TECH_AFFINITY_BONUS;
            }

            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }

        let confidence = ((best_score + 0.5) / 3.0).clamp(0.0, 1.0);
        match best {
            Some(entry) if best_score >= ACCEPT_THRESHOLD => MatchResult {
                role: Some(entry.role.clone()),
                confidence,
            },
            _ => MatchResult {
                role: None,
                confidence,
            },
        }
    }
}

#[async_trait]
impl RoleMatcher for HybridLexicalMatcher {
    async fn closest_role(&self, query: &str, catalog: &RoleCatalog) -> MatchResult {
        self.find_closest(query, catalog)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(roles: &[(&str, &str)]) -> RoleCatalog {
        RoleCatalog::index(
            roles
                .iter()
                .map(|(code, title)| Role {
                    soc_code: code.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        )
    }

    fn matcher() -> HybridLexicalMatcher {
        HybridLexicalMatcher::new(MatcherRules::default())
    }

    fn sample_catalog() -> RoleCatalog {
        catalog(&[
            ("35-2014", "Cooks, Restaurant"),
            ("35-3023", "Fast Food and Counter Workers"),
            ("35-9021", "Dishwashers"),
            ("11-9051", "Food Service Managers"),
            ("15-2051", "Data Scientists"),
            ("15-2031", "Operations Research Analysts"),
            ("15-2041", "Statisticians"),
            ("15-1221", "Computer and Information Research Scientists"),
            ("15-1212", "Information Security Analysts"),
            ("15-1252", "Software Developers"),
            ("15-1242", "Database Administrators"),
            ("15-1243", "Database Architects"),
            ("15-1211", "Computer Systems Analysts"),
            ("15-1299", "Computer Occupations, All Other"),
            ("13-2051", "Financial and Investment Analysts"),
            ("13-2054", "Financial Risk Specialists"),
            ("15-2011", "Actuaries"),
            ("13-1111", "Management Analysts"),
            ("53-3032", "Heavy and Tractor-Trailer Truck Drivers"),
        ])
    }

    #[test]
    fn test_empty_query_no_match_zero_confidence() {
        let result = matcher().find_closest("", &sample_catalog());
        assert!(result.role.is_none());
        assert_eq!(result.confidence, 0.0);

        let result = matcher().find_closest("   \t ", &sample_catalog());
        assert!(result.role.is_none());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_empty_catalog_no_match() {
        let result = matcher().find_closest("data engineer", &RoleCatalog::default());
        assert!(result.role.is_none());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_quant_analyst_resolves_to_quant_adjacent_title() {
        let result = matcher().find_closest("quant analyst", &sample_catalog());
        let role = result.role.expect("expected a confident match");
        let expected = [
            "Data Scientists",
            "Operations Research Analysts",
            "Statisticians",
            "Actuaries",
            "Financial Risk Specialists",
            "Financial and Investment Analysts",
        ];
        assert!(
            expected.contains(&role.title.as_str()),
            "matched {:?}",
            role.title
        );
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    }

    #[test]
    fn test_quant_never_matches_food_service() {
        for query in ["quant", "quantitative analyst", "quant researcher"] {
            let result = matcher().find_closest(query, &sample_catalog());
            if let Some(role) = &result.role {
                assert!(
                    !MatcherRules::default().is_service_title(&role.title),
                    "{query:?} matched service title {:?}",
                    role.title
                );
            }
        }
    }

    #[test]
    fn test_head_chef_favors_cooks_over_data_scientists() {
        // no tech keyword in "head chef": full pool, no penalty, lexical
        // similarity decides
        let result = matcher().find_closest("head chef", &catalog(&[
            ("15-2051", "Data Scientists"),
            ("35-2014", "Cooks, Restaurant"),
            ("35-1011", "Chefs and Head Cooks"),
        ]));
        let role = result.role.expect("expected a match");
        assert_eq!(role.title, "Chefs and Head Cooks");
    }

    #[test]
    fn test_service_query_without_tech_intent_is_not_penalized() {
        let result = matcher().find_closest("restaurant cook", &catalog(&[
            ("35-2014", "Cooks, Restaurant"),
            ("15-1252", "Software Developers"),
        ]));
        let role = result.role.expect("expected a match");
        assert_eq!(role.title, "Cooks, Restaurant");
    }

    #[test]
    fn test_data_engineer_prefers_tech_pool() {
        let result = matcher().find_closest("data engineer", &sample_catalog());
        let role = result.role.expect("expected a confident match");
        assert!(
            MatcherRules::default()
                .preferred_titles
                .contains(role.title.as_str()),
            "matched outside the tech pool: {:?}",
            role.title
        );
    }

    #[test]
    fn test_tech_pool_falls_back_when_allow_list_absent() {
        // tech intent ("ml") against a catalog with no allow-listed title:
        // the pool must fall back to the full catalog instead of going empty
        let result = matcher().find_closest("electrical engineer ml", &catalog(&[
            ("17-2071", "Electrical Engineers"),
            ("17-2141", "Mechanical Engineers"),
        ]));
        let role = result.role.expect("expected a fallback match");
        assert_eq!(role.title, "Electrical Engineers");
    }

    #[test]
    fn test_exact_title_match_is_confident() {
        let result = matcher().find_closest("Statisticians", &sample_catalog());
        let role = result.role.expect("expected a match");
        assert_eq!(role.title, "Statisticians");
        assert!(result.confidence > 0.35);
    }

    #[test]
    fn test_gibberish_is_rejected() {
        let result = matcher().find_closest("xqzv wkjy", &sample_catalog());
        assert!(result.role.is_none());
    }

    #[test]
    fn test_ties_break_to_first_catalog_entry() {
        // duplicate titles: strictly-greater comparison keeps the first
        let result = matcher().find_closest("truck driver", &catalog(&[
            ("53-3032", "Heavy and Tractor-Trailer Truck Drivers"),
            ("53-3033", "Heavy and Tractor-Trailer Truck Drivers"),
        ]));
        let role = result.role.expect("expected a match");
        assert_eq!(role.soc_code, "53-3032");
    }

    #[test]
    fn test_confidence_is_bounded() {
        // stacked boosts (quant + analytics + affinity) must still clamp to 1
        let result = matcher().find_closest(
            "quantitative analyst machine learning data science",
            &sample_catalog(),
        );
        assert!(result.confidence <= 1.0);
        assert!(result.role.is_some());
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let m: std::sync::Arc<dyn RoleMatcher> = std::sync::Arc::new(matcher());
        let result = m.closest_role("statistician", &sample_catalog()).await;
        assert!(result.role.is_some());
    }
}

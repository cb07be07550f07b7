//! Declarative rule tables driving the role matcher: tech-intent vocabulary,
//! the curated candidate allow-list, intent boosts, and the service-occupation
//! block-list. The production tables live in `Default`; tests and alternate
//! deployments can inject their own.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One intent-boost rule: if the normalized query contains any trigger
/// keyword, every candidate whose exact title is in `titles` gets a boost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentBoost {
    pub triggers: Vec<String>,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherRules {
    /// Substring vocabulary that flags a query as tech/analytics intent.
    pub tech_keywords: Vec<String>,
    /// Titles the candidate pool is restricted to under tech intent.
    pub preferred_titles: HashSet<String>,
    pub intent_boosts: Vec<IntentBoost>,
    /// Title substrings penalized under tech intent (service occupations).
    pub service_blocklist: Vec<String>,
    /// Exact title nudged upward when tech intent leaves ambiguity.
    pub tech_affinity_title: String,
}

impl MatcherRules {
    /// Whole-string substring containment test, not per-token.
    pub fn is_tech_intent(&self, query_norm: &str) -> bool {
        self.tech_keywords.iter().any(|k| query_norm.contains(k.as_str()))
    }

    /// Number of boost rules whose triggers hit the query and whose favored
    /// titles include `title`. Multiple rules accumulate.
    pub fn matching_boost_rules(&self, query_norm: &str, title: &str) -> usize {
        self.intent_boosts
            .iter()
            .filter(|rule| {
                rule.triggers.iter().any(|k| query_norm.contains(k.as_str()))
                    && rule.titles.iter().any(|t| t == title)
            })
            .count()
    }

    pub fn is_service_title(&self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.service_blocklist.iter().any(|b| lowered.contains(b.as_str()))
    }
}

impl Default for MatcherRules {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            tech_keywords: strings(&[
                "data",
                "engineer",
                "etl",
                "pipeline",
                "spark",
                "airflow",
                "db",
                "sql",
                "quant",
                "quantitative",
                "analyst",
                "ml",
                "machine learning",
                "ai",
                "science",
                "scientist",
                "statistics",
                "model",
                "predict",
            ]),
            preferred_titles: strings(&[
                "Data Scientists",
                "Operations Research Analysts",
                "Statisticians",
                "Computer and Information Research Scientists",
                "Information Security Analysts",
                "Software Developers",
                "Database Administrators",
                "Database Architects",
                "Computer Systems Analysts",
                "Computer Occupations, All Other",
                "Financial and Investment Analysts",
                "Financial Risk Specialists",
                "Actuaries",
                "Management Analysts",
            ])
            .into_iter()
            .collect(),
            intent_boosts: vec![
                // data engineering
                IntentBoost {
                    triggers: strings(&[
                        "data engineer",
                        "etl",
                        "pipeline",
                        "data pipelines",
                        "spark",
                        "airflow",
                        "big data",
                        "warehouse",
                        "dbt",
                    ]),
                    titles: strings(&[
                        "Data Scientists",
                        "Operations Research Analysts",
                        "Database Architects",
                        "Database Administrators",
                        "Computer Occupations, All Other",
                        "Computer Systems Analysts",
                    ]),
                },
                // quant
                IntentBoost {
                    triggers: strings(&[
                        "quant",
                        "quantitative",
                        "quant analyst",
                        "quantitative analyst",
                        "quant research",
                        "trading",
                        "alpha",
                        "derivatives",
                    ]),
                    titles: strings(&[
                        "Data Scientists",
                        "Operations Research Analysts",
                        "Statisticians",
                        "Actuaries",
                        "Financial Risk Specialists",
                        "Financial and Investment Analysts",
                    ]),
                },
                // ML / AI
                IntentBoost {
                    triggers: strings(&["ml", "machine learning", "ai", "deep learning", "model", "predictive"]),
                    titles: strings(&[
                        "Data Scientists",
                        "Computer and Information Research Scientists",
                        "Statisticians",
                        "Operations Research Analysts",
                    ]),
                },
                // analytics / BI
                IntentBoost {
                    triggers: strings(&["analyst", "analytics", "insights", "bi", "business intelligence", "reporting"]),
                    titles: strings(&[
                        "Operations Research Analysts",
                        "Data Scientists",
                        "Financial and Investment Analysts",
                        "Management Analysts",
                    ]),
                },
            ],
            service_blocklist: strings(&[
                "cooks",
                "dishwashers",
                "bartenders",
                "hosts and hostesses",
                "waiters",
                "waitresses",
                "food",
                "restaurant",
                "fast food",
            ]),
            tech_affinity_title: "Data Scientists".to_string(),
        }
    }
}

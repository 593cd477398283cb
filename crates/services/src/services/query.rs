//! Category and free-text filtering over the catalog.

use std::str::FromStr;

use catalog::{
    Catalog,
    models::pattern::{CategoryFilter, Pattern},
};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// A category selection plus a case-insensitive substring search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternQuery {
    pub category: CategoryFilter,
    pub search_term: String,
}

impl PatternQuery {
    pub fn new(category: CategoryFilter, search_term: impl Into<String>) -> Self {
        Self {
            category,
            search_term: search_term.into(),
        }
    }

    /// Build a query from raw request parameters. A missing or empty category
    /// means "All"; an unknown label is an error.
    pub fn from_params(
        category: Option<&str>,
        search_term: Option<&str>,
    ) -> Result<Self, QueryError> {
        let category = match category.filter(|label| !label.is_empty()) {
            Some(label) => CategoryFilter::from_str(label)
                .map_err(|_| QueryError::UnknownCategory(label.to_string()))?,
            None => CategoryFilter::All,
        };
        Ok(Self::new(category, search_term.unwrap_or_default()))
    }

    /// Like [`PatternQuery::from_params`], but an unknown category falls back to "All"
    pub fn from_params_lenient(category: Option<&str>, search_term: Option<&str>) -> Self {
        Self::from_params(category, search_term).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring category filter");
            Self::new(CategoryFilter::All, search_term.unwrap_or_default())
        })
    }

    /// Whether any filter is active; an empty result of an unfiltered query
    /// means the catalog itself is empty
    pub fn is_filtered(&self) -> bool {
        !self.category.is_wildcard() || !self.search_term.is_empty()
    }

    pub fn matches(&self, pattern: &Pattern) -> bool {
        self.category.matches(pattern.category) && matches_search(pattern, &self.search_term)
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Pattern> {
        let results: Vec<&Pattern> = catalog
            .patterns()
            .iter()
            .filter(|pattern| self.matches(pattern))
            .collect();
        debug!(
            category = %self.category,
            search_term = %self.search_term,
            matched = results.len(),
            "Filtered patterns"
        );
        results
    }
}

/// Patterns in catalog order whose category matches and whose title or
/// description contains `search_term`, ignoring case
pub fn filter_patterns<'a>(
    catalog: &'a Catalog,
    category: CategoryFilter,
    search_term: &str,
) -> Vec<&'a Pattern> {
    PatternQuery::new(category, search_term).apply(catalog)
}

fn matches_search(pattern: &Pattern, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    pattern.title.to_lowercase().contains(&needle)
        || pattern.description.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use catalog::models::pattern::PatternCategory;
    use strum::IntoEnumIterator;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    fn ids(patterns: &[&Pattern]) -> Vec<u32> {
        patterns.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_category_only_filter_matches_category_equality() {
        let catalog = catalog();
        for category in PatternCategory::iter() {
            let results = filter_patterns(&catalog, CategoryFilter::Only(category), "");
            let expected: Vec<u32> = catalog
                .patterns()
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&results), expected);
            assert!(!results.is_empty());
        }
    }

    #[test]
    fn test_empty_search_returns_full_catalog() {
        let catalog = catalog();
        let results = filter_patterns(&catalog, CategoryFilter::All, "");
        assert_eq!(results.len(), catalog.len());
        assert_eq!(ids(&results), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = catalog();
        for term in ["ASYNC", "async", "Array", "closures", "(...)", " - "] {
            let needle = term.to_lowercase();
            let expected: Vec<u32> = catalog
                .patterns()
                .iter()
                .filter(|p| {
                    p.title.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle)
                })
                .map(|p| p.id)
                .collect();
            assert_eq!(
                ids(&filter_patterns(&catalog, CategoryFilter::All, term)),
                expected,
                "term {term:?}"
            );
        }
    }

    #[test]
    fn test_search_does_not_look_at_code_or_explanation() {
        let catalog = catalog();
        // only appears in the module pattern's explanation
        assert!(filter_patterns(&catalog, CategoryFilter::All, "IIFE").is_empty());
    }

    #[test]
    fn test_array_methods_map_scenario() {
        let catalog = catalog();
        let results = filter_patterns(
            &catalog,
            CategoryFilter::Only(PatternCategory::ArrayMethods),
            "map",
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
        assert_eq!(results[0].title, "Map - Transform Array Elements");
    }

    #[test]
    fn test_no_match_yields_empty_filtered_result() {
        let catalog = catalog();
        let query = PatternQuery::new(CategoryFilter::All, "zzz-no-match");
        assert!(query.apply(&catalog).is_empty());
        assert!(query.is_filtered());
        assert!(!PatternQuery::default().is_filtered());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = catalog();
        let query = PatternQuery::new(CategoryFilter::Only(PatternCategory::AsyncPatterns), "a");
        assert_eq!(query.apply(&catalog), query.apply(&catalog));
    }

    #[test]
    fn test_from_params() {
        assert_eq!(
            PatternQuery::from_params(Some("Async Patterns"), Some("await")),
            Ok(PatternQuery::new(
                CategoryFilter::Only(PatternCategory::AsyncPatterns),
                "await"
            ))
        );
        assert_eq!(
            PatternQuery::from_params(Some(""), None),
            Ok(PatternQuery::default())
        );
        assert_eq!(
            PatternQuery::from_params(Some("All"), None),
            Ok(PatternQuery::default())
        );
        assert_eq!(
            PatternQuery::from_params(Some("Generators"), None),
            Err(QueryError::UnknownCategory("Generators".to_string()))
        );
    }

    #[test]
    fn test_lenient_params_drop_unknown_category_only() {
        let query = PatternQuery::from_params_lenient(Some("Generators"), Some("map"));
        assert_eq!(query, PatternQuery::new(CategoryFilter::All, "map"));
    }
}

//! Immutable, validated pattern catalog.

use thiserror::Error;
use tracing::debug;

use crate::{
    data::embedded_patterns,
    models::pattern::{CategoryFilter, Pattern},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no patterns")]
    Empty,
    #[error("pattern at position {position} has id {found}, expected {expected}")]
    NonContiguousId {
        position: usize,
        expected: u32,
        found: u32,
    },
    #[error("pattern {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },
}

/// Ordered pattern records with dense ids starting at 1.
///
/// Adjacency navigation relies on `id - 1` and `id + 1` existing whenever
/// they fall inside `1..=len`, so construction rejects gaps, duplicates and
/// out-of-order ids instead of renumbering them.
#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<Pattern>,
}

impl Catalog {
    /// Build the catalog from the patterns compiled into the binary
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_patterns(embedded_patterns())
    }

    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self, CatalogError> {
        if patterns.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (position, pattern) in patterns.iter().enumerate() {
            let expected = position as u32 + 1;
            if pattern.id != expected {
                return Err(CatalogError::NonContiguousId {
                    position,
                    expected,
                    found: pattern.id,
                });
            }
            validate_fields(pattern)?;
        }

        debug!(patterns = patterns.len(), "Catalog validated");
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Filter labels exposed to the UI, "All" first
    pub fn categories(&self) -> Vec<CategoryFilter> {
        CategoryFilter::all_filters()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern with the given id, if it is inside `1..=len`
    pub fn get(&self, id: i64) -> Option<&Pattern> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.patterns.get(index)
    }
}

fn validate_fields(pattern: &Pattern) -> Result<(), CatalogError> {
    let fields = [
        ("title", &pattern.title),
        ("description", &pattern.description),
        ("code", &pattern.code),
        ("explanation", &pattern.explanation),
        ("use_case", &pattern.use_case),
    ];
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(CatalogError::EmptyField {
            id: pattern.id,
            field: *field,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pattern::{Difficulty, PatternCategory};

    fn pattern(id: u32) -> Pattern {
        Pattern {
            id,
            category: PatternCategory::ArrayMethods,
            title: format!("Pattern {id}"),
            description: "A pattern".to_string(),
            difficulty: Difficulty::Beginner,
            code: "const x = 1;".to_string(),
            explanation: "Explained".to_string(),
            use_case: "Used".to_string(),
        }
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(
            catalog.patterns()[0].title,
            "Map - Transform Array Elements"
        );
        assert_eq!(catalog.patterns()[7].category, PatternCategory::DesignPatterns);
    }

    #[test]
    fn test_embedded_catalog_ids_are_dense() {
        let catalog = Catalog::load().unwrap();
        for (index, pattern) in catalog.patterns().iter().enumerate() {
            assert_eq!(pattern.id as usize, index + 1);
        }
    }

    #[test]
    fn test_every_category_is_a_filter_option() {
        let catalog = Catalog::load().unwrap();
        let filters = catalog.categories();
        for pattern in catalog.patterns() {
            assert!(filters.contains(&CategoryFilter::Only(pattern.category)));
        }
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert_eq!(Catalog::from_patterns(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_gap_in_ids_is_rejected() {
        let err = Catalog::from_patterns(vec![pattern(1), pattern(3)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NonContiguousId {
                position: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = Catalog::from_patterns(vec![pattern(1), pattern(1)]).unwrap_err();
        assert!(matches!(err, CatalogError::NonContiguousId { found: 1, .. }));
    }

    #[test]
    fn test_catalog_must_start_at_one() {
        let err = Catalog::from_patterns(vec![pattern(0)]).unwrap_err();
        assert!(matches!(err, CatalogError::NonContiguousId { expected: 1, .. }));
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut blank = pattern(1);
        blank.code = "  ".to_string();
        assert_eq!(
            Catalog::from_patterns(vec![blank]).unwrap_err(),
            CatalogError::EmptyField {
                id: 1,
                field: "code"
            }
        );
    }

    #[test]
    fn test_get_bounds() {
        let catalog = Catalog::from_patterns(vec![pattern(1), pattern(2)]).unwrap();
        assert_eq!(catalog.get(1).map(|p| p.id), Some(1));
        assert_eq!(catalog.get(2).map(|p| p.id), Some(2));
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(-4).is_none());
        assert!(catalog.get(3).is_none());
        assert!(catalog.get(i64::MIN).is_none());
    }
}

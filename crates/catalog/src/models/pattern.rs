use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use ts_rs::TS;

/// Label of the wildcard category filter
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Closed set of categories a pattern can belong to
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    TS,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
pub enum PatternCategory {
    #[serde(rename = "Array Methods")]
    #[strum(serialize = "Array Methods")]
    ArrayMethods,
    #[serde(rename = "Async Patterns")]
    #[strum(serialize = "Async Patterns")]
    AsyncPatterns,
    #[serde(rename = "ES6+ Features")]
    #[strum(serialize = "ES6+ Features")]
    Es6Features,
    #[serde(rename = "Design Patterns")]
    #[strum(serialize = "Design Patterns")]
    DesignPatterns,
}

impl PatternCategory {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    TS,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// One educational entry: a language idiom with its code sample and notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Pattern {
    pub id: u32,
    pub category: PatternCategory,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub code: String,
    pub explanation: String,
    #[serde(rename = "useCase")]
    pub use_case: String,
}

/// Category selection for the pattern grid: the wildcard or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PatternCategory),
}

impl CategoryFilter {
    /// The ordered filter list shown to users, wildcard first
    pub fn all_filters() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(PatternCategory::iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: PatternCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == CategoryFilter::All
    }
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES_LABEL {
            return Ok(CategoryFilter::All);
        }
        PatternCategory::from_str(s).map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<PatternCategory> for CategoryFilter {
    fn from(category: PatternCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

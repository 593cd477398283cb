//! Detail lookup by route id and previous/next navigation.

use catalog::{Catalog, models::pattern::Pattern};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("pattern {0} not found")]
    NotFound(String),
}

/// Neighbouring pattern ids. Ids are dense, so `id - 1` and `id + 1` exist
/// whenever they fall inside `1..=len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
pub struct Adjacency {
    pub previous_id: Option<u32>,
    pub next_id: Option<u32>,
}

impl Adjacency {
    pub fn for_pattern(catalog: &Catalog, pattern: &Pattern) -> Self {
        let len = catalog.len() as u32;
        Self {
            previous_id: (pattern.id > 1).then(|| pattern.id - 1),
            next_id: (pattern.id < len).then(|| pattern.id + 1),
        }
    }
}

/// A pattern with its navigation links
#[derive(Debug, Clone, Serialize, TS)]
pub struct PatternDetail {
    pub pattern: Pattern,
    #[serde(flatten)]
    #[ts(flatten)]
    pub adjacency: Adjacency,
}

impl PatternDetail {
    pub fn new(catalog: &Catalog, pattern: &Pattern) -> Self {
        Self {
            pattern: pattern.clone(),
            adjacency: Adjacency::for_pattern(catalog, pattern),
        }
    }
}

/// Parse a route parameter the way a browser's `parseInt` reads it: leading
/// whitespace is skipped, an optional sign is accepted, a `0x` prefix switches
/// to hex and parsing stops at the first non-digit. Returns `None` when no
/// digits are present or the value does not fit in an `i64`.
pub fn parse_route_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        _ => (10, digits),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}

pub fn find_by_id(catalog: &Catalog, id: i64) -> Result<&Pattern, LookupError> {
    catalog
        .get(id)
        .ok_or_else(|| LookupError::NotFound(id.to_string()))
}

/// Resolve a raw route parameter; unparsable ids are reported as not found
pub fn find_by_route_id<'a>(catalog: &'a Catalog, raw: &str) -> Result<&'a Pattern, LookupError> {
    match parse_route_id(raw) {
        Some(id) => find_by_id(catalog, id),
        None => Err(LookupError::NotFound(raw.to_string())),
    }
}

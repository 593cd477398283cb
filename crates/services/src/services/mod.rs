pub mod highlight;
pub mod navigation;
pub mod query;

//! CLI command implementations

pub mod assess;
pub mod catalog;

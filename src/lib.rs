//! Summarise a CSV export of cost records by calendar date.

pub mod domain;
pub mod error;
pub mod loader;
pub mod report;

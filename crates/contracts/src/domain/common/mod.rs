//! Helpers shared by all aggregates

pub mod field_name;

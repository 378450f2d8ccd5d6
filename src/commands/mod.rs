//! Command implementations for the Cricket Insight CLI

pub mod analyze;
pub mod serve;

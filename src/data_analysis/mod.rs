// src/data_analysis/mod.rs

pub mod box_stats;
pub mod error_metric;
pub mod site_aggregator;

// src/data_analysis/mod.rs

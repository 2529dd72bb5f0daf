// src/lib.rs - Library interface for the registration error pipeline

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod data_output;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;

pub use config::{AnalysisConfig, ErrorKind, RenderConfig, SiteSpec};
pub use data_analysis::error_metric::{compute_error_metric, ErrorMetric};
pub use data_analysis::site_aggregator::{
    aggregate, aggregate_collecting, SiteResultSet, SiteResults,
};
pub use data_input::block_locator::{parse_transform_block, FixedOffsetLocator, TransformLocator};
pub use data_input::transform_block::TransformBlock;
pub use error::{AnalysisError, BlockError};

// Crate version, preferring a git-derived semver when the build environment sets one.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}

// src/lib.rs

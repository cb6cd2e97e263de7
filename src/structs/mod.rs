pub mod config;
pub mod cli;
pub mod analysis_request;
pub mod analysis_result;
pub mod analysis_outcome;
pub mod breakdown;
pub mod category_indicator;
pub mod presentation_tier;
pub mod endpoints;
pub mod execution_context;
pub mod navigation_context;
pub mod result_view;

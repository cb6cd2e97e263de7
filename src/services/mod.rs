pub mod score_classifier;
pub mod breakdown_normalizer;
pub mod endpoint_resolver;
pub mod report_link_builder;
pub mod fallback_content;
pub mod result_orchestrator;
pub mod view_builder;

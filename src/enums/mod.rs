pub mod commands;
pub mod tier;
pub mod category_strength;
pub mod failure_policy;
pub mod result_source;
pub mod roadmap_encoding;
pub mod output_format;
pub mod lifecycle_state;
pub mod service_error;

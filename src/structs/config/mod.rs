pub mod config;
pub mod service_config;
pub mod output_config;

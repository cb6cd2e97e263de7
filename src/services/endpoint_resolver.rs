use crate::config::constants::{ANALYZE_PATH_SUFFIX, LOCAL_ANALYSIS_URL, PROXIED_ANALYSIS_PATH};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::service_config::ServiceConfig;
use crate::structs::endpoints::Endpoints;
use crate::structs::execution_context::ExecutionContext;

pub struct EndpointResolver;

impl EndpointResolver {

    pub fn resolve(service: &ServiceConfig, context: &ExecutionContext) -> Endpoints {
        let analysis = match ConfigHelper::non_empty(&service.api_url) {
            Some(api_url) => api_url.to_string(),
            None if context.is_local() => LOCAL_ANALYSIS_URL.to_string(),
            None => PROXIED_ANALYSIS_PATH.to_string(),
        };

        let report = match ConfigHelper::non_empty(&service.report_url) {
            Some(report_url) => Self::strip_trailing_slash(report_url).to_string(),
            None => Self::report_base(&analysis),
        };

        log::debug!("Resolved endpoints: analysis={} report={}", analysis, report);
        Endpoints { analysis, report }
    }

    /// Report base for an analysis endpoint: drop a trailing `/analyze`,
    /// then a trailing `/`. Nothing else about the URL is touched.
    pub fn report_base(analysis: &str) -> String {
        let base = analysis.strip_suffix(ANALYZE_PATH_SUFFIX).unwrap_or(analysis);
        Self::strip_trailing_slash(base).to_string()
    }

    fn strip_trailing_slash(value: &str) -> &str {
        value.strip_suffix('/').unwrap_or(value)
    }
}

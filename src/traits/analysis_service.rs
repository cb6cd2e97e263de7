use async_trait::async_trait;
use crate::enums::service_error::ServiceError;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;

/// Anything that can turn a repository identifier into an evaluation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisService: Send + Sync {

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ServiceError>;
}

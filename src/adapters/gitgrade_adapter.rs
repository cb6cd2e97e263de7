use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;
use crate::enums::service_error::ServiceError;
use crate::errors::GitGradeResult;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::analysis_service::AnalysisService;

/// Error body the service sends with a failed status.
#[derive(Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// HTTP client for the GitGrade analysis service.
pub struct GitGradeAdapter {
    client: Client,
    endpoint: Url,
}

impl GitGradeAdapter {

    pub fn new(endpoint: Url, timeout: Duration) -> GitGradeResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Parses a success body into the result schema and checks its invariants.
    pub fn parse_result(body: &str) -> Result<AnalysisResult, ServiceError> {
        let result: AnalysisResult = serde_json::from_str(body)
            .map_err(|e| ServiceError::Unparseable(e.to_string()))?;
        result.validate().map_err(ServiceError::Unparseable)?;
        Ok(result)
    }

    /// Prefers the `detail` message of an error body over the raw text.
    pub fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorDetail>(body) {
            Ok(error) => error.detail,
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl AnalysisService for GitGradeAdapter {

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ServiceError> {
        log::info!("📡 Requesting analysis of {} from {}", request.url, self.endpoint);

        let response = match self.client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Network error during analysis request: {}", e);
                return Err(ServiceError::Transport(e.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("Analysis request failed with status {}: {}", status, error_text);
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: Self::error_message(&error_text),
            });
        }

        let body = response.text().await.map_err(|e| {
            log::error!("Failed to read analysis response: {}", e);
            ServiceError::Transport(e.to_string())
        })?;

        Self::parse_result(&body).map_err(|e| {
            log::error!("Invalid response format from analysis service: {}", e);
            e
        })
    }
}

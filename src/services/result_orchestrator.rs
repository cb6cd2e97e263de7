use std::sync::Arc;
use uuid::Uuid;
use crate::enums::failure_policy::FailurePolicy;
use crate::enums::lifecycle_state::LifecycleState;
use crate::enums::service_error::ServiceError;
use crate::services::fallback_content::FallbackContent;
use crate::structs::analysis_outcome::AnalysisOutcome;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::analysis_service::AnalysisService;

/// Owns the request lifecycle of one result view.
///
/// Requests are tagged with a generation number. Starting a new request or
/// tearing the session down bumps the generation, and [`complete`] drops any
/// response whose generation is no longer current, so a superseded request
/// can never overwrite a newer result.
///
/// [`complete`]: ResultOrchestrator::complete
pub struct ResultOrchestrator {
    service: Arc<dyn AnalysisService>,
    policy: FailurePolicy,
    session_id: Uuid,
    state: LifecycleState,
    repository: Option<String>,
    generation: u64,
    torn_down: bool,
}

/// An issued request whose response has not been applied yet.
pub struct PendingAnalysis {
    generation: u64,
    request: AnalysisRequest,
    service: Arc<dyn AnalysisService>,
}

/// A response waiting to be applied with [`ResultOrchestrator::complete`].
pub struct CompletedAnalysis {
    generation: u64,
    repository: String,
    response: Result<AnalysisResult, ServiceError>,
}

impl PendingAnalysis {

    pub fn repository(&self) -> &str {
        &self.request.url
    }

    pub async fn execute(self) -> CompletedAnalysis {
        let response = self.service.analyze(&self.request).await;
        CompletedAnalysis {
            generation: self.generation,
            repository: self.request.url,
            response,
        }
    }
}

impl CompletedAnalysis {

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn is_success(&self) -> bool {
        self.response.is_ok()
    }
}

impl ResultOrchestrator {

    pub fn new(service: Arc<dyn AnalysisService>, policy: FailurePolicy) -> Self {
        Self {
            service,
            policy,
            session_id: Uuid::new_v4(),
            state: LifecycleState::Idle,
            repository: None,
            generation: 0,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Starts a request for `repository`.
    ///
    /// Returns `None` when nothing needs to be sent: no identifier (the state
    /// becomes [`LifecycleState::MissingInput`]), the same identifier is
    /// already loading, or the session was torn down.
    pub fn begin(&mut self, repository: Option<&str>) -> Option<PendingAnalysis> {
        if self.torn_down {
            log::debug!("[{}] Ignoring request after teardown", self.session_id);
            return None;
        }

        let Some(repository) = repository.map(str::trim).filter(|r| !r.is_empty()) else {
            self.generation += 1;
            self.repository = None;
            self.transition(LifecycleState::MissingInput);
            return None;
        };

        if self.state.is_loading() && self.repository.as_deref() == Some(repository) {
            log::debug!("[{}] Request for {} already in flight", self.session_id, repository);
            return None;
        }

        self.generation += 1;
        self.repository = Some(repository.to_string());
        self.transition(LifecycleState::Loading);

        Some(PendingAnalysis {
            generation: self.generation,
            request: AnalysisRequest::new(repository),
            service: Arc::clone(&self.service),
        })
    }

    /// Applies a finished request. Returns `false` when it was superseded
    /// or the session is gone, leaving the state untouched.
    pub fn complete(&mut self, completed: CompletedAnalysis) -> bool {
        if self.torn_down || completed.generation != self.generation {
            log::debug!(
                "[{}] Dropping stale response for {} (generation {}, current {})",
                self.session_id, completed.repository, completed.generation, self.generation
            );
            return false;
        }

        let next = match completed.response {
            Ok(result) => LifecycleState::Success(Box::new(AnalysisOutcome::live(result))),
            Err(error) => self.on_failure(&completed.repository, &error),
        };
        self.transition(next);
        true
    }

    /// Issues the request for `repository` and applies its response.
    pub async fn run(&mut self, repository: Option<&str>) -> &LifecycleState {
        if let Some(pending) = self.begin(repository) {
            let completed = pending.execute().await;
            self.complete(completed);
        }
        &self.state
    }

    /// Ends the session; responses still in flight are discarded.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            log::debug!("[{}] Session torn down in state {}", self.session_id, self.state.name());
        }
        self.torn_down = true;
        self.generation += 1;
    }

    fn on_failure(&self, repository: &str, error: &ServiceError) -> LifecycleState {
        match self.policy {
            FailurePolicy::Strict => {
                log::error!("❌ Analysis of {} failed: {}", repository, error);
                LifecycleState::Error(error.to_string())
            }
            FailurePolicy::Lenient => {
                log::warn!("⚠️ Analysis of {} failed ({}); showing demo content", repository, error);
                LifecycleState::Success(Box::new(FallbackContent::demo_outcome()))
            }
        }
    }

    fn transition(&mut self, next: LifecycleState) {
        log::debug!("[{}] {} -> {}", self.session_id, self.state.name(), next.name());
        self.state = next;
    }
}

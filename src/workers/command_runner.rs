use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use url::Url;
use crate::adapters::gitgrade_adapter::GitGradeAdapter;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{timeout_duration, LOADING_MESSAGE, LOADING_STAGES};
use crate::enums::commands::Commands;
use crate::enums::failure_policy::FailurePolicy;
use crate::enums::lifecycle_state::LifecycleState;
use crate::enums::output_format::OutputFormat;
use crate::errors::{GitGradeError, GitGradeResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::result_printer::ResultPrinter;
use crate::services::endpoint_resolver::EndpointResolver;
use crate::services::result_orchestrator::ResultOrchestrator;
use crate::services::view_builder::ViewBuilder;
use crate::structs::config::config::Config;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::execution_context::ExecutionContext;
use crate::structs::navigation_context::NavigationContext;
use crate::structs::result_view::ResultView;

/// Options of `gitgrade analyze`.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub repo: Option<String>,
    pub link: Option<String>,
    pub policy: Option<FailurePolicy>,
    pub format: Option<OutputFormat>,
    pub open_report: bool,
    pub config: Option<PathBuf>,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> GitGradeResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze { repo, link, policy, format, open_report, config } => {
                let options = AnalyzeOptions { repo, link, policy, format, open_report, config };
                self.analyze_command(options).await
            }
            Commands::Endpoints { config } => self.endpoints_command(config.as_deref()),
            Commands::Validate { config } => self.validate_command(config.as_deref()),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> GitGradeResult<()> {
        log::info!("🚀 Initializing gitgrade configuration...");

        match ConfigManager::create_sample_config(None) {
            Ok(path) => {
                log::info!("📝 Edit {} to point at your GitGrade service.", path.display());
                log::info!("🔧 Run 'gitgrade validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn analyze_command(&self, options: AnalyzeOptions) -> GitGradeResult<()> {
        let config = Self::effective_config(&options)?;
        let view = Self::analyze(&config, &options).await?;

        println!("{}", Self::render(&config.output, &view)?);
        if config.output.open_report {
            Self::open_report(&view);
        }
        Ok(())
    }

    /// Runs one analysis session and projects its outcome into a result view.
    pub async fn analyze(config: &Config, options: &AnalyzeOptions) -> GitGradeResult<ResultView> {
        let context = ExecutionContext::from_origin(config.service.origin.as_deref())?;
        let endpoints = EndpointResolver::resolve(&config.service, &context);

        let navigation = match options.link.as_deref() {
            Some(link) => NavigationContext::from_link(link),
            None => NavigationContext::from_argument(options.repo.as_deref()),
        };
        if let Some(link) = navigation.repository().and_then(NavigationContext::result_link) {
            log::debug!("Result link: {}", link);
        }

        // Checked before the endpoint so missing input never needs a reachable service.
        let Some(repository) = navigation.repository().map(str::to_string) else {
            return Err(GitGradeError::InputMissing);
        };

        let analysis_url = context.absolute(&endpoints.analysis)?;
        let adapter = GitGradeAdapter::new(analysis_url, timeout_duration(config.service.timeout_secs))?;
        let mut orchestrator = ResultOrchestrator::new(Arc::new(adapter), config.service.failure_policy);
        log::debug!("Session {} using {} policy", orchestrator.session_id(), orchestrator.policy().name());

        let Some(pending) = orchestrator.begin(Some(&repository)) else {
            return Err(GitGradeError::InputMissing);
        };

        let mut spinner = AnimatedLogger::new(LOADING_MESSAGE).with_stages(LOADING_STAGES);
        spinner.start();

        tokio::select! {
            completed = pending.execute() => {
                let success = completed.is_success();
                orchestrator.complete(completed);
                if success {
                    spinner.stop("Analysis complete").await;
                } else {
                    spinner.error("Analysis failed").await;
                }
            }
            Ok(()) = tokio::signal::ctrl_c() => {
                orchestrator.teardown();
                spinner.error("Cancelled").await;
                return Err(GitGradeError::system_error("analysis", "interrupted"));
            }
        }

        match orchestrator.state() {
            LifecycleState::Success(outcome) => {
                let report_base = context.absolute_base(&endpoints.report);
                Ok(ViewBuilder::build(outcome, &report_base, config.service.roadmap_encoding))
            }
            LifecycleState::Error(message) => Err(GitGradeError::analysis_failed(&repository, message)),
            LifecycleState::MissingInput => Err(GitGradeError::InputMissing),
            other => Err(GitGradeError::system_error(
                "analysis",
                &format!("session ended in unexpected state '{}'", other.name()),
            )),
        }
    }

    fn endpoints_command(&self, path: Option<&Path>) -> GitGradeResult<()> {
        let config = ConfigManager::load(path)?;
        let context = ExecutionContext::from_origin(config.service.origin.as_deref())?;
        let endpoints = EndpointResolver::resolve(&config.service, &context);

        match config.output.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&endpoints)?),
            OutputFormat::Text => {
                println!("🌐 Context:  {}", if context.is_local() { "local" } else { "deployed" });
                println!("📡 Analysis: {}", endpoints.analysis);
                println!("📄 Report:   {}", endpoints.report);
            }
        }
        Ok(())
    }

    fn validate_command(&self, path: Option<&Path>) -> GitGradeResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = ConfigManager::load(path)?;
        ConfigManager::validate_config(&config)?;
        ExecutionContext::from_origin(config.service.origin.as_deref())?;

        log::info!("✅ Configuration is valid");
        log::info!("   Failure policy: {}", config.service.failure_policy.name());
        log::info!("   Timeout: {}s", config.service.timeout_secs);
        Ok(())
    }

    /// File and environment settings with the command line flags on top.
    pub fn effective_config(options: &AnalyzeOptions) -> GitGradeResult<Config> {
        let mut config = ConfigManager::load(options.config.as_deref())?;
        ConfigManager::validate_config(&config)?;

        if let Some(policy) = options.policy {
            config.service.failure_policy = policy;
        }
        if let Some(format) = options.format {
            config.output.format = format;
        }
        if options.open_report {
            config.output.open_report = true;
        }
        Ok(config)
    }

    pub fn render(output: &OutputConfig, view: &ResultView) -> GitGradeResult<String> {
        match output.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
            OutputFormat::Text => Ok(ResultPrinter::new(output.color).render_view(view)),
        }
    }

    fn open_report(view: &ResultView) {
        match Url::parse(&view.report_url) {
            Ok(url) => {
                if let Err(e) = webbrowser::open(url.as_str()) {
                    log::warn!("⚠️ Could not open the report in a browser: {}", e);
                }
            }
            Err(e) => log::warn!("⚠️ Report link {} cannot be opened: {}", view.report_url, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::services::fallback_content::FallbackContent;

    fn options_with_config(path: &Path) -> AnalyzeOptions {
        AnalyzeOptions {
            config: Some(path.to_path_buf()),
            ..AnalyzeOptions::default()
        }
    }

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn file_values_apply_without_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[service]\nfailure_policy = \"lenient\"\n\n[output]\nformat = \"json\"\n");

        let config = CommandRunner::effective_config(&options_with_config(&path)).unwrap();
        assert_eq!(config.service.failure_policy, FailurePolicy::Lenient);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.open_report);
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[service]\nfailure_policy = \"lenient\"\n\n[output]\nformat = \"json\"\n");

        let options = AnalyzeOptions {
            policy: Some(FailurePolicy::Strict),
            format: Some(OutputFormat::Text),
            open_report: true,
            ..options_with_config(&path)
        };
        let config = CommandRunner::effective_config(&options).unwrap();
        assert_eq!(config.service.failure_policy, FailurePolicy::Strict);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.open_report);
    }

    #[test]
    fn invalid_file_is_rejected_before_flags_apply() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[service]\ntimeout_secs = 0\n");

        let options = AnalyzeOptions { policy: Some(FailurePolicy::Lenient), ..options_with_config(&path) };
        let error = CommandRunner::effective_config(&options).unwrap_err();
        assert_eq!(error.exit_code(), 3);
    }

    #[tokio::test]
    async fn link_without_repo_is_missing_input() {
        let mut config = Config::default();
        // Unresolvable without an origin; never reached for missing input.
        config.service.api_url = Some("/api/analyze".to_string());
        let options = AnalyzeOptions { link: Some("/result?other=1".to_string()), ..AnalyzeOptions::default() };

        let error = CommandRunner::analyze(&config, &options).await.unwrap_err();
        assert_eq!(error, GitGradeError::InputMissing);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn json_rendering_carries_source() {
        let view = ViewBuilder::build(&FallbackContent::demo_outcome(), "http://localhost:8000", Default::default());
        let output = OutputConfig { format: OutputFormat::Json, ..OutputConfig::default() };

        let json: serde_json::Value = serde_json::from_str(&CommandRunner::render(&output, &view).unwrap()).unwrap();
        assert_eq!(json["source"], "demo");
        assert_eq!(json["score"], 68);
    }
}

use std::path::{Path, PathBuf};
use std::fs;
use url::Url;
use crate::config::constants::{API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, REPORT_URL_ENV};
use crate::errors::{GitGradeError, GitGradeResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# GitGrade CLI Configuration

[service]
# Analysis endpoint. When unset: http://localhost:8000/analyze for local use,
# or /api/analyze under `origin` when deployed. GITGRADE_API_URL overrides this.
# api_url = "https://grader.example.com/analyze"

# Report download base. When unset it is the analysis endpoint without its
# trailing /analyze. GITGRADE_REPORT_URL overrides this.
# report_url = "https://grader.example.com"

# Origin the client is served from. Leave unset for local development.
# origin = "https://gitgrade.example.com"

# "strict": show an error when the service fails
# "lenient": show clearly labeled demo content instead
failure_policy = "strict"

# Seconds before the analysis request is abandoned
timeout_secs = 120

# "joined": roadmap=step1,step2 (what /download-pdf expects)
# "repeated": roadmap=step1&roadmap=step2
roadmap_encoding = "joined"

[output]
# "text" or "json"
format = "text"
color = true
open_report = false
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the file (defaults when it does not exist) and applies the
    /// environment overrides. Called once at start-up.
    pub fn load(path: Option<&Path>) -> GitGradeResult<Config> {
        let config = Self::load_file(path)?;
        Ok(Self::apply_overrides(config, |key| std::env::var(key).ok()))
    }

    pub fn load_file(path: Option<&Path>) -> GitGradeResult<Config> {
        let explicit = path.is_some();
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !path.exists() {
            if explicit {
                return Err(GitGradeError::ConfigurationFileError {
                    path: path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| GitGradeError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| GitGradeError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("{} overrides the analysis endpoint", API_URL_ENV);
            config.service.api_url = Some(api_url);
        }
        if let Some(report_url) = lookup(REPORT_URL_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("{} overrides the report endpoint", REPORT_URL_ENV);
            config.service.report_url = Some(report_url);
        }
        config
    }

    pub fn create_sample_config(path: Option<&Path>) -> GitGradeResult<PathBuf> {
        let config_file_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if config_file_path.exists() {
            return Err(GitGradeError::ConfigurationFileError {
                path: config_file_path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }
        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> GitGradeResult<()> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("service.api_url", &config.service.api_url),
            ("service.report_url", &config.service.report_url),
        ] {
            if let Some(value) = ConfigHelper::non_empty(value) {
                if !value.starts_with('/') && Url::parse(value).is_err() {
                    errors.push(GitGradeError::validation_error(field, value, "absolute URL or path starting with /"));
                }
            }
        }

        if let Some(origin) = ConfigHelper::non_empty(&config.service.origin) {
            match Url::parse(origin) {
                Ok(url) if url.has_host() => {}
                _ => errors.push(GitGradeError::validation_error("service.origin", origin, "absolute http(s) URL")),
            }
        }

        if config.service.timeout_secs == 0 {
            errors.push(GitGradeError::validation_error("service.timeout_secs", "0", "must be greater than 0"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(GitGradeError::MultipleErrors {
                errors,
                context: "configuration validation".to_string(),
            })
        }
    }
}

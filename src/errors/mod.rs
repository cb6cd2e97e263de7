use std::fmt;
use std::error::Error as StdError;
use crate::config::constants::MISSING_INPUT_MESSAGE;

#[derive(Debug, Clone, PartialEq)]
pub enum GitGradeError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // No repository identifier was supplied
    InputMissing,

    // Network/API errors
    TransportFailure {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Response or document did not match the expected shape
    Unparseable {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Analysis ended in the error state
    AnalysisFailed {
        repository: String,
        reason: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // Multiple errors (config validation)
    MultipleErrors {
        errors: Vec<GitGradeError>,
        context: String,
    },
}

impl GitGradeError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn analysis_failed(repository: &str, reason: &str) -> Self {
        Self::AnalysisFailed {
            repository: repository.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::TransportFailure { .. } => true,
            Self::AnalysisFailed { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::InputMissing => false,
            Self::Unparseable { .. } => false,
            Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().any(|e| e.is_recoverable()),
            Self::ConfigurationFileError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::AnalysisFailed { .. } => ErrorSeverity::High,
            Self::Unparseable { .. } => ErrorSeverity::Medium,
            Self::TransportFailure { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::InputMissing => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => {
                errors.iter()
                    .map(|e| e.severity())
                    .max()
                    .unwrap_or(ErrorSeverity::Low)
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::InputMissing => {
                format!("{}\n💡 Pass a repository URL, e.g. gitgrade analyze https://github.com/owner/repo", MISSING_INPUT_MESSAGE)
            }
            Self::TransportFailure { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check that the GitGrade service is running and try again");
                msg
            }
            Self::Unparseable { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg.push_str("\n💡 The service returned data in an unexpected shape");
                msg
            }
            Self::AnalysisFailed { repository, reason } => {
                format!("Analysis of '{}' failed: {}\n🔄 Try again: gitgrade analyze {}", repository, reason, repository)
            }
            Self::ValidationError { field, value, constraint } => {
                format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputMissing => 2,
            Self::ConfigurationError { .. }
            | Self::ConfigurationFileError { .. }
            | Self::ValidationError { .. }
            | Self::MultipleErrors { .. } => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for GitGradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for GitGradeError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for gitgrade operations
pub type GitGradeResult<T> = Result<T, GitGradeError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &GitGradeError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for GitGradeError {
    fn from(error: std::io::Error) -> Self {
        GitGradeError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GitGradeError {
    fn from(error: serde_json::Error) -> Self {
        GitGradeError::Unparseable {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for GitGradeError {
    fn from(error: reqwest::Error) -> Self {
        GitGradeError::TransportFailure {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<url::ParseError> for GitGradeError {
    fn from(error: url::ParseError) -> Self {
        GitGradeError::config_error(
            &format!("invalid URL: {}", error),
            None,
            Some("Use an absolute http(s) URL, e.g. https://gitgrade.example.com"),
        )
    }
}

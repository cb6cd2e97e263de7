use std::time::Duration;

// Score scale
pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;
pub const ADVANCED_MIN_SCORE: i64 = 71;
pub const INTERMEDIATE_MIN_SCORE: i64 = 41;

// Breakdown category maxima, matched by substring in this order
pub const CODE_QUALITY_MARKER: &str = "Code Quality";
pub const CODE_QUALITY_MAX_POINTS: u32 = 25;
pub const MAJOR_CATEGORY_MARKERS: &[&str] = &["Product", "Structure", "Git"];
pub const MAJOR_CATEGORY_MAX_POINTS: u32 = 15;
pub const DEFAULT_CATEGORY_MAX_POINTS: u32 = 10;
pub const STRONG_RATIO: f64 = 0.8;
pub const MODERATE_RATIO: f64 = 0.5;

// Endpoints
pub const API_URL_ENV: &str = "GITGRADE_API_URL";
pub const REPORT_URL_ENV: &str = "GITGRADE_REPORT_URL";
pub const LOCAL_ANALYSIS_URL: &str = "http://localhost:8000/analyze";
pub const PROXIED_ANALYSIS_PATH: &str = "/api/analyze";
pub const ANALYZE_PATH_SUFFIX: &str = "/analyze";
pub const REPORT_DOWNLOAD_PATH: &str = "download-pdf";

// Navigation
pub const RESULT_PAGE_PATH: &str = "/result";
pub const REPO_QUERY_PARAM: &str = "repo";

// Copy shown by the result view
pub const MISSING_INPUT_MESSAGE: &str = "No repository provided.";
pub const NO_IMPROVEMENTS_MESSAGE: &str = "Excellent repository! No major improvements needed.";
pub const DEMO_NOTICE: &str = "DEMO CONTENT: the analysis service was unreachable. This is a sample evaluation, not a score for the requested repository.";
pub const LOADING_MESSAGE: &str = "Analyzing Code & Commits...";
pub const LOADING_STAGES: &[&str] = &["Connecting to GitHub API", "Scanning Structure", "Generating Roadmap"];

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const CONFIG_DIR_NAME: &str = "gitgrade";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SPINNER_FRAME_MS: u64 = 150;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::failure_policy::FailurePolicy;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Score a repository and show the result
    Analyze {
        /// Repository URL, e.g. https://github.com/owner/repo
        repo: Option<String>,
        /// Result link carrying the repository in its `repo` query parameter
        #[clap(short, long, conflicts_with = "repo")]
        link: Option<String>,
        #[clap(short, long, value_enum)]
        policy: Option<FailurePolicy>,
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Open the report download link in the browser
        #[clap(short, long)]
        open_report: bool,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the resolved analysis and report endpoints
    Endpoints {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Check the configuration file
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

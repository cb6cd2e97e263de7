use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "gitgrade")]
#[clap(about = "Score a GitHub repository with the GitGrade service", long_about = None)]
#[clap(version)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

use clap::Parser;
use gitgrade_cli::errors::ErrorHandler;
use gitgrade_cli::structs::cli::Cli;
use gitgrade_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(error) = CommandRunner::new().run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(error.exit_code());
    }
    Ok(())
}

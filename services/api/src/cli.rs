use crate::report::{run_refresh, run_report, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trl_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "TRL Readiness Insights",
    about = "Score project surveys against the TRL rubric and serve dashboard data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the cohort summary, or a single project's report, to the terminal
    Report(ReportArgs),
    /// Materialize the survey snapshot from the form API if it is missing
    Refresh(DataArgs),
}

/// Overrides for the configured data files.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct DataArgs {
    /// Survey snapshot CSV (defaults to TRL_SNAPSHOT_PATH)
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
    /// Rubric dictionary CSV (defaults to TRL_RUBRIC_PATH)
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Refresh(args) => run_refresh(args).await,
    }
}

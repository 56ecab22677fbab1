use crate::demo::{run_demo, DemoArgs};
use crate::export::{run_export, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_board::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Job Board Candidate Export",
    about = "Serve and run employer candidate CSV exports",
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
    /// Export an employer's candidates as CSV to a file or stdout
    Export(ExportArgs),
    /// Seed an in-memory job board and print a sample export
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override DATABASE_URL
    #[arg(long)]
    pub(crate) database_url: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Export(args) => run_export(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}

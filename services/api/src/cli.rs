use crate::report::{run_score_report, run_trust_report, ScoreArgs, TrustArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pyme360::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PyME360 Scoring",
    about = "Serve and run the PyME360 credit and trust scoring engine from the command line",
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
    /// Compute a credit score report from a credit-history JSON document
    Score(ScoreArgs),
    /// Compute a trust score card from business-practice component scores
    Trust(TrustArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score_report(args),
        Command::Trust(args) => run_trust_report(args),
    }
}

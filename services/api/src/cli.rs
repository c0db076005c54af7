use crate::commands::{run_ask, run_estimate, run_recommend, AskArgs, EstimateArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use estate_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Estate Advisor",
    about = "Listing recommendations, construction estimates, and the property assistant",
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
    /// Estimate construction cost for a floor area and grade selection
    Estimate(EstimateArgs),
    /// Recommend listings from a CSV export given a set of favorite ids
    Recommend(RecommendArgs),
    /// Ask the property assistant a question
    Ask(AskArgs),
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
        Command::Estimate(args) => run_estimate(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Ask(args) => run_ask(args),
    }
}

use crate::demo::{
    run_compare, run_demo, run_report, run_trend, CompareArgs, DemoArgs, ReportArgs, TrendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use supplier_scorecard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Supplier Scorecard",
    about = "Score supplier performance and classify supply risk from the command line",
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
    /// Print the portfolio performance report for a period
    Report(ReportArgs),
    /// Rank a chosen set of suppliers against each other
    Compare(CompareArgs),
    /// Classify one supplier's monthly order-value trend
    Trend(TrendArgs),
    /// Walk through report, comparison, and trend on the sample portfolio
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
    /// Serve scores from this order ledger CSV instead of the configured source
    #[arg(long)]
    pub(crate) ledger: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Compare(args) => run_compare(args),
        Command::Trend(args) => run_trend(args),
        Command::Demo(args) => run_demo(args),
    }
}

use crate::report::{
    run_analyze, run_assess, run_disease_stats, AnalyzeArgs, AssessArgs, DiseaseStatsArgs,
};
use crate::server;
use ayurmind::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "AyurMind",
    about = "Serve and explore the AyurMind dosha assessment API from the command line",
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
    /// Score a questionnaire answers file and print the constitution with recommendations
    Assess(AssessArgs),
    /// Run the pattern analyzer over an answers file
    Analyze(AnalyzeArgs),
    /// Inspect the disease reference catalog
    Diseases {
        #[command(subcommand)]
        command: DiseasesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DiseasesCommand {
    /// Print category, dosha, and source counts for the catalog
    Stats(DiseaseStatsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Disease CSV merged over the bundled catalog at startup
    #[arg(long)]
    pub(crate) diseases_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Analyze(args) => run_analyze(args),
        Command::Diseases {
            command: DiseasesCommand::Stats(args),
        } => run_disease_stats(args),
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use kira_visualscore::input::{InputError, load_response};
use kira_visualscore::logging::init_logging;
use kira_visualscore::pipeline::aggregate_text;
use kira_visualscore::pipeline::stage3_aggregate::ScoreError;
use kira_visualscore::pipeline::stage4_report::{ReportError, ReportFormat, write_reports};
use kira_visualscore::prompt::scoring_prompt;
use kira_visualscore::{AssociationMode, ScoringProfile};

#[derive(Debug, Parser)]
#[command(
    name = "kira-visualscore",
    version,
    about = "Score a saved vision-model reply and write radar, text and JSON reports."
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a model reply and write reports.
    Run(RunArgs),
    /// Print the scoring prompt the parser expects the model to answer.
    Prompt {
        #[arg(long, value_enum, default_value_t = AssociationMode::Positional)]
        association: AssociationMode,
    },
}

#[derive(Debug, Clone, clap::Args)]
struct RunArgs {
    /// Reply text or chat-completions JSON; `-` reads stdin.
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = AssociationMode::Positional)]
    association: AssociationMode,

    #[arg(long, value_enum, default_value_t = ReportFormat::All)]
    format: ReportFormat,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("scoring failed, please retry: {0}")]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl AppError {
    fn exit_code(&self) -> u8 {
        match self {
            AppError::Score(ScoreError::EmptyExtraction) => 2,
            AppError::Input(_) | AppError::Report(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run(args) => run_scoring(&args),
        Command::Prompt { association } => {
            println!("{}", scoring_prompt(&ScoringProfile::for_mode(association)));
            Ok(())
        }
    }
}

fn run_scoring(args: &RunArgs) -> Result<(), AppError> {
    let profile = ScoringProfile::for_mode(args.association);
    info!(
        input = %args.input.display(),
        association = profile.association.as_str(),
        "scoring reply"
    );

    let text = load_response(&args.input)?;
    let report = aggregate_text(&text, &profile)?;
    write_reports(&report, profile.association, &args.out, args.format)?;

    println!("总评分：{} / 100", report.total);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

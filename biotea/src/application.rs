use crate::cli::{AnnotationsCommands, Commands, InfoCommands, PrepareCommands};
use crate::commands::{self, Outcome};
use crate::config::Config;
use crate::error::BioteaError;
use colored::Colorize;

pub async fn run(command: Commands, config: &Config) -> Result<Outcome, BioteaError> {
    match command {
        Commands::Info { command } => run_info(command, config).await,
        Commands::Update => Ok(commands::pipeline::update()),
        Commands::Wizard => Ok(commands::pipeline::wizard()),
        Commands::Retrieve {
            output_path,
            geo_id,
        } => commands::retrieve::retrieve(config, &output_path, &geo_id).await,
        Commands::Prepare { command } => Ok(run_prepare(&command)),
        Commands::Analyze {
            options_path,
            output_dir,
            input_dir,
        } => Ok(commands::pipeline::analyze(
            &options_path,
            &output_dir,
            &input_dir,
        )),
        Commands::Annotations { command } => Ok(run_annotations(&command)),
    }
}

async fn run_info(
    command: Option<InfoCommands>,
    config: &Config,
) -> Result<Outcome, BioteaError> {
    commands::info::logo();
    match command {
        None => Ok(Outcome::Done),
        Some(InfoCommands::Biotea) => Ok(commands::info::biotea()),
        Some(InfoCommands::Containers) => commands::info::containers(config).await,
    }
}

fn run_prepare(command: &PrepareCommands) -> Outcome {
    match command {
        PrepareCommands::Agilent(args) => commands::prepare::agilent(args),
        PrepareCommands::Affymetrix(args) => commands::prepare::affymetrix(args),
    }
}

fn run_annotations(command: &AnnotationsCommands) -> Outcome {
    match command {
        AnnotationsCommands::Apply {
            target,
            annotation_database,
        } => commands::annotations::apply(target, annotation_database),
        AnnotationsCommands::Generate { target, organism } => {
            commands::annotations::generate(target, *organism)
        }
    }
}

/// Placeholders still exit successfully, but say so on stderr.
pub fn report(outcome: Outcome) {
    if let Outcome::NotImplemented(command) = outcome {
        eprintln!(
            "{} `{command}` is not implemented yet; nothing was done.",
            "Warning:".yellow().bold()
        );
    }
}

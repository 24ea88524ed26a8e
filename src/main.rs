//! Resume matcher: score a resume against a job description

use clap::Parser;
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction, SkillsAction};
use resume_matcher::input::InputManager;
use resume_matcher::output::{AnalysisReport, ReportGenerator};
use resume_matcher::processing::{Analyzer, SkillCatalog};
use resume_matcher::{Config, Result, ResumeMatcherError};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        // Bad input is the user's to fix; anything else is ours
        process::exit(if e.is_validation() { 2 } else { 1 });
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            detailed,
        } => {
            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(ResumeMatcherError::InvalidInput)?
                }
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let input_manager =
                InputManager::new().with_max_document_bytes(config.extraction.max_document_bytes);

            let document = input_manager.load_document(&resume).await?;
            let job_description = match (job, job_text) {
                (Some(path), _) => input_manager.read_job_description(&path).await?,
                (None, Some(text)) => text,
                (None, None) => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "Job description required".to_string(),
                    ))
                }
            };

            info!("Analyzing {} against job description", document.name());
            let result = Analyzer::new().analyze(&document, &job_description)?;
            let report = AnalysisReport::new(document.name(), result, &config.analysis);

            // Colors only make sense on a terminal
            let use_colors = config.output.color_output && save.is_none();
            let rendered = ReportGenerator::new(use_colors, detailed).render(&report, output_format)?;

            match save {
                Some(path) => {
                    tokio::fs::write(&path, rendered).await?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Skills { action } => {
            let catalog = SkillCatalog::global();
            match action {
                SkillsAction::List => {
                    println!("Known skills ({}):", catalog.len());
                    for skill in catalog.skills() {
                        println!("  • {}", skill);
                    }
                }
                SkillsAction::Scan { path } => {
                    let text = InputManager::new().read_job_description(&path).await?;
                    let found = catalog.extract_skills(&text);
                    if found.is_empty() {
                        println!("No known skills found in {}", path.display());
                    }
                    for skill in found {
                        println!("{}", skill);
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}\n", config_path.display());
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("Configuration reset to defaults: {}", config_path.display());
            }
        },
    }

    Ok(())
}

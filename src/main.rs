//! Team matcher: compatibility scoring for hackathon team matching

mod cli;
mod config;
mod error;
mod input;
mod model;
mod output;
mod scoring;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, TeamMatcherError};
use log::{error, info, warn};
use output::formatter::{self, ReportGenerator};
use output::report::{BatchReport, ScoreReport, SuggestionReport};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            team,
            candidate,
            members,
            output,
            save,
            detailed,
        } => {
            info!("Scoring candidate against team");
            let format = resolve_format(output.as_deref(), &config)?;

            let team = input::loader::load_team(&team)?;
            let candidate_profile = match input::loader::load_profile(&candidate) {
                Ok(profile) => profile,
                Err(e) => {
                    return Err(TeamMatcherError::ProfileNotFound(format!(
                        "{}: {}",
                        candidate.display(),
                        e
                    )));
                }
            };
            let members = load_optional_profiles(members.as_deref())?;

            let result = scoring::composer::score(&team, &candidate_profile, &members);
            let report = ScoreReport::new(&team, &candidate_profile, result);

            let generator = ReportGenerator::new(
                format,
                config.output.color_output,
                detailed || config.output.detailed,
            );
            emit(&generator.format_score(&report)?, save.as_deref())?;
        }

        Commands::Batch {
            candidate,
            teams,
            output,
            save,
        } => {
            info!("Batch scoring candidate against teams");
            let format = resolve_format(output.as_deref(), &config)?;

            let rosters = input::loader::load_rosters(&teams)?;

            // An unresolved candidate profile empties the whole batch.
            let candidate_profile = match input::loader::load_profile(&candidate) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!(
                        "Candidate profile {} could not be resolved: {}",
                        candidate.display(),
                        e
                    );
                    None
                }
            };

            let entries =
                scoring::batch::score_teams_for_user(candidate_profile.as_ref(), &rosters);
            let report = BatchReport::new(candidate_profile.map(|p| p.email), entries);

            let generator = ReportGenerator::new(
                format,
                config.output.color_output,
                config.output.detailed,
            );
            emit(&generator.format_batch(&report)?, save.as_deref())?;
        }

        Commands::Suggest {
            team,
            members,
            candidates,
            top,
            output,
            save,
        } => {
            info!("Ranking candidates for team");
            let format = resolve_format(output.as_deref(), &config)?;

            let team = input::loader::load_team(&team)?;
            let members = load_optional_profiles(members.as_deref())?;
            let candidates = input::loader::load_profiles(&candidates)?;
            let limit = top.unwrap_or(config.suggestions.limit);

            let suggestions =
                scoring::batch::suggest_candidates(&team, &members, &candidates, limit);
            let report = SuggestionReport::new(&team, suggestions);

            let generator = ReportGenerator::new(
                format,
                config.output.color_output,
                config.output.detailed,
            );
            emit(&generator.format_suggestions(&report)?, save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Output Format: {:?}", config.output.format);
                println!("Color Output: {}", config.output.color_output);
                println!("Detailed: {}", config.output.detailed);
                println!("Suggestion Limit: {}", config.suggestions.limit);
                println!("\nDefault Scoring Weights:");
                println!(
                    "  Skill: {:.0}%  Role: {:.0}%  Diversity: {:.0}%",
                    scoring::weights::DEFAULT_SKILL_WEIGHT * 100.0,
                    scoring::weights::DEFAULT_ROLE_WEIGHT * 100.0,
                    scoring::weights::DEFAULT_DIVERSITY_WEIGHT * 100.0
                );
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn load_optional_profiles(path: Option<&Path>) -> Result<Vec<model::profile::UserProfile>> {
    match path {
        Some(path) => input::loader::load_profiles(path),
        None => Ok(Vec::new()),
    }
}

fn resolve_format(arg: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match arg {
        Some(format) => cli::parse_output_format(format).map_err(TeamMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            formatter::save_report(path, rendered)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

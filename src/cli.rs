//! CLI interface for the team matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "team-matcher")]
#[command(about = "Compatibility scoring for hackathon team matching")]
#[command(
    long_about = "Score candidates against hackathon team requirements using skill complementarity, role fit, and department diversity"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate against one team
    Score {
        /// Path to the team listing (JSON)
        #[arg(short, long)]
        team: PathBuf,

        /// Path to the candidate profile (JSON)
        #[arg(short, long)]
        candidate: PathBuf,

        /// Path to the current member profiles (JSON array)
        #[arg(short, long)]
        members: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show applied weights and generation info
        #[arg(short, long)]
        detailed: bool,
    },

    /// Score one candidate against many teams
    Batch {
        /// Path to the candidate profile (JSON)
        #[arg(short, long)]
        candidate: PathBuf,

        /// Path to the team rosters (JSON array of {team, members})
        #[arg(short, long)]
        teams: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Rank candidate users for one team
    Suggest {
        /// Path to the team listing (JSON)
        #[arg(short, long)]
        team: PathBuf,

        /// Path to the current member profiles (JSON array)
        #[arg(short, long)]
        members: Option<PathBuf>,

        /// Path to the candidate profiles (JSON array)
        #[arg(short, long)]
        candidates: PathBuf,

        /// Number of suggestions to return
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }
}

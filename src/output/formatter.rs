//! Report formatters for console, JSON, and Markdown output

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{BatchReport, ScoreReport, SuggestionReport};
use crate::scoring::composer::{CompatibilityLabel, CompatibilityScore};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Renders reports in the configured output format
pub struct ReportGenerator {
    format: OutputFormat,
    use_colors: bool,
    detailed: bool,
}

impl ReportGenerator {
    pub fn new(format: OutputFormat, use_colors: bool, detailed: bool) -> Self {
        Self {
            format,
            use_colors,
            detailed,
        }
    }

    pub fn format_score(&self, report: &ScoreReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => Ok(self.score_console(report)),
            OutputFormat::Json => to_json(report),
            OutputFormat::Markdown => Ok(self.score_markdown(report)),
        }
    }

    pub fn format_batch(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => Ok(self.batch_console(report)),
            OutputFormat::Json => to_json(report),
            OutputFormat::Markdown => Ok(self.batch_markdown(report)),
        }
    }

    pub fn format_suggestions(&self, report: &SuggestionReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => Ok(self.suggestions_console(report)),
            OutputFormat::Json => to_json(report),
            OutputFormat::Markdown => Ok(self.suggestions_markdown(report)),
        }
    }

    fn score_console(&self, report: &ScoreReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("🎯 Team: {}\n", report.team_name));
        out.push_str(&format!("👤 Candidate: {}\n", report.candidate_email));

        if report.result.filtered {
            out.push_str(&format!(
                "🚫 {} - rejected by the team's gender preference\n",
                self.paint_label(report.result.label)
            ));
            out.push_str("   Score: 0/100\n");
            return out;
        }

        out.push_str(&format!(
            "📊 Score: {}/100 ({})\n",
            report.result.score,
            self.paint_label(report.result.label)
        ));
        out.push_str("📈 Breakdown:\n");
        out.push_str(&format!(
            "  • Skill coverage: {}%\n",
            report.result.breakdown.skill_comp
        ));
        out.push_str(&format!(
            "  • Role fit: {}%\n",
            report.result.breakdown.role_fit
        ));
        out.push_str(&format!(
            "  • Diversity: {}%\n",
            report.result.breakdown.diversity
        ));

        if self.detailed {
            out.push_str(&format!(
                "⚖️  Weights: skill {}% / role {}% / diversity {}%\n",
                report.result.weights.skill,
                report.result.weights.role,
                report.result.weights.diversity
            ));
            out.push_str(&format!(
                "🕒 Generated: {} (v{})\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.matcher_version
            ));
        }

        out
    }

    fn score_markdown(&self, report: &ScoreReport) -> String {
        let mut out = String::new();
        out.push_str("# Compatibility Report\n\n");
        out.push_str(&format!("- **Team**: {}\n", report.team_name));
        out.push_str(&format!("- **Candidate**: {}\n", report.candidate_email));

        if report.result.filtered {
            out.push_str("- **Score**: 0/100 (No Match)\n");
            out.push_str("- **Filtered**: rejected by the team's gender preference\n");
            return out;
        }

        out.push_str(&format!(
            "- **Score**: {}/100 ({})\n\n",
            report.result.score, report.result.label
        ));
        out.push_str("| Factor | Sub-score | Weight |\n");
        out.push_str("|--------|-----------|--------|\n");
        out.push_str(&format!(
            "| Skill coverage | {}% | {}% |\n",
            report.result.breakdown.skill_comp, report.result.weights.skill
        ));
        out.push_str(&format!(
            "| Role fit | {}% | {}% |\n",
            report.result.breakdown.role_fit, report.result.weights.role
        ));
        out.push_str(&format!(
            "| Diversity | {}% | {}% |\n",
            report.result.breakdown.diversity, report.result.weights.diversity
        ));
        out
    }

    fn batch_console(&self, report: &BatchReport) -> String {
        let mut out = String::new();
        match &report.candidate_email {
            Some(email) => out.push_str(&format!("👤 Candidate: {}\n", email)),
            None => {
                out.push_str("⚠️  Candidate profile could not be resolved - no teams scored\n");
                return out;
            }
        }

        if report.entries.is_empty() {
            out.push_str("No teams to score.\n");
            return out;
        }

        out.push_str(&format!("📊 Scored {} teams:\n", report.entries.len()));
        for (index, entry) in report.entries.iter().enumerate() {
            let name = entry
                .hackathon_name
                .as_deref()
                .unwrap_or(entry.team_id.as_str());
            out.push_str(&format!(
                "  {}. {} - {}\n",
                index + 1,
                name,
                self.summarize(&entry.result)
            ));
        }
        out
    }

    fn batch_markdown(&self, report: &BatchReport) -> String {
        let mut out = String::new();
        out.push_str("# Batch Compatibility Report\n\n");
        match &report.candidate_email {
            Some(email) => out.push_str(&format!("Candidate: **{}**\n\n", email)),
            None => {
                out.push_str("Candidate profile could not be resolved - no teams scored.\n");
                return out;
            }
        }

        out.push_str("| Team | Score | Label |\n");
        out.push_str("|------|-------|-------|\n");
        for entry in &report.entries {
            let name = entry
                .hackathon_name
                .as_deref()
                .unwrap_or(entry.team_id.as_str());
            out.push_str(&format!(
                "| {} | {}/100 | {} |\n",
                name, entry.result.score, entry.result.label
            ));
        }
        out
    }

    fn suggestions_console(&self, report: &SuggestionReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("🎯 Team: {}\n", report.team_name));

        if report.suggestions.is_empty() {
            out.push_str("No candidates to suggest.\n");
            return out;
        }

        out.push_str(&format!(
            "🏆 Top {} candidates:\n",
            report.suggestions.len()
        ));
        for (index, suggestion) in report.suggestions.iter().enumerate() {
            let dept = suggestion.dept.as_deref().unwrap_or("-");
            out.push_str(&format!(
                "  {}. {} ({}) - {}\n",
                index + 1,
                suggestion.email,
                dept,
                self.summarize(&suggestion.result)
            ));
        }
        out
    }

    fn suggestions_markdown(&self, report: &SuggestionReport) -> String {
        let mut out = String::new();
        out.push_str("# Candidate Suggestions\n\n");
        out.push_str(&format!("Team: **{}**\n\n", report.team_name));
        out.push_str("| Rank | Candidate | Dept | Score | Label |\n");
        out.push_str("|------|-----------|------|-------|-------|\n");
        for (index, suggestion) in report.suggestions.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {} | {} | {}/100 | {} |\n",
                index + 1,
                suggestion.email,
                suggestion.dept.as_deref().unwrap_or("-"),
                suggestion.result.score,
                suggestion.result.label
            ));
        }
        out
    }

    fn summarize(&self, result: &CompatibilityScore) -> String {
        if result.filtered {
            return self.paint_label(result.label);
        }
        format!("{}/100 ({})", result.score, self.paint_label(result.label))
    }

    fn paint_label(&self, label: CompatibilityLabel) -> String {
        if !self.use_colors {
            return label.to_string();
        }
        match label {
            CompatibilityLabel::HighlyCompatible => label.to_string().green().bold().to_string(),
            CompatibilityLabel::ModerateMatch => label.to_string().yellow().to_string(),
            CompatibilityLabel::WeakMatch | CompatibilityLabel::NoMatch => {
                label.to_string().red().to_string()
            }
        }
    }
}

/// Write a rendered report to a file
pub fn save_report(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}

fn to_json<T: Serialize>(report: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}

//! Report structures wrapping scoring results for presentation

use crate::model::profile::UserProfile;
use crate::model::team::Team;
use crate::scoring::batch::{CandidateSuggestion, TeamScoreEntry};
use crate::scoring::composer::CompatibilityScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generation info attached to every report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the matcher used
    pub matcher_version: String,
}

impl ReportMetadata {
    pub fn now() -> Self {
        Self {
            generated_at: Utc::now(),
            matcher_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One candidate scored against one team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub team_id: String,
    pub team_name: String,
    pub candidate_email: String,
    pub candidate_name: Option<String>,
    pub result: CompatibilityScore,
    pub metadata: ReportMetadata,
}

impl ScoreReport {
    pub fn new(team: &Team, candidate: &UserProfile, result: CompatibilityScore) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.display_name(),
            candidate_email: candidate.email.clone(),
            candidate_name: candidate.name.clone(),
            result,
            metadata: ReportMetadata::now(),
        }
    }
}

/// One candidate scored against many teams
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// None when the candidate profile could not be resolved and the
    /// batch short-circuited to an empty result
    pub candidate_email: Option<String>,
    pub entries: Vec<TeamScoreEntry>,
    pub metadata: ReportMetadata,
}

impl BatchReport {
    pub fn new(candidate_email: Option<String>, entries: Vec<TeamScoreEntry>) -> Self {
        Self {
            candidate_email,
            entries,
            metadata: ReportMetadata::now(),
        }
    }
}

/// Ranked candidate suggestions for one team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    pub team_id: String,
    pub team_name: String,
    pub suggestions: Vec<CandidateSuggestion>,
    pub metadata: ReportMetadata,
}

impl SuggestionReport {
    pub fn new(team: &Team, suggestions: Vec<CandidateSuggestion>) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.display_name(),
            suggestions,
            metadata: ReportMetadata::now(),
        }
    }
}

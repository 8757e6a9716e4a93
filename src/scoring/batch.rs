//! Batch and suggestion wrappers over the composer
//!
//! Thin iteration adapters: every pair goes through the same composer
//! call, independently, with no cross-pair normalization.

use crate::model::profile::UserProfile;
use crate::model::team::{Team, TeamRoster};
use crate::scoring::composer::{self, CompatibilityScore};
use serde::{Deserialize, Serialize};

/// Default number of suggestions returned for a team
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// One team's score for a candidate, keyed by team id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScoreEntry {
    pub team_id: String,
    pub hackathon_name: Option<String>,
    pub result: CompatibilityScore,
}

/// A ranked candidate suggestion for one team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSuggestion {
    pub email: String,
    pub name: Option<String>,
    pub dept: Option<String>,
    pub result: CompatibilityScore,
}

/// Score one candidate against many teams
///
/// One entry per team in input order, keyed by team id. A missing
/// candidate profile short-circuits the whole batch to an empty result.
pub fn score_teams_for_user(
    candidate: Option<&UserProfile>,
    rosters: &[TeamRoster],
) -> Vec<TeamScoreEntry> {
    let Some(candidate) = candidate else {
        log::warn!("batch scoring skipped: candidate profile not resolved");
        return Vec::new();
    };

    rosters
        .iter()
        .map(|roster| TeamScoreEntry {
            team_id: roster.team.id.clone(),
            hackathon_name: roster.team.hackathon_name.clone(),
            result: composer::score(&roster.team, candidate, &roster.members),
        })
        .collect()
}

/// Rank candidate users for one team, best first
///
/// Ties break on email so the ordering is deterministic regardless of
/// input order. The list is truncated to `limit` entries.
pub fn suggest_candidates(
    team: &Team,
    members: &[UserProfile],
    candidates: &[UserProfile],
    limit: usize,
) -> Vec<CandidateSuggestion> {
    let mut suggestions: Vec<CandidateSuggestion> = candidates
        .iter()
        .map(|candidate| CandidateSuggestion {
            email: candidate.email.clone(),
            name: candidate.name.clone(),
            dept: candidate.dept.clone(),
            result: composer::score(team, candidate, members),
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.result
            .score
            .cmp(&a.result.score)
            .then_with(|| a.email.cmp(&b.email))
    });
    suggestions.truncate(limit);
    suggestions
}

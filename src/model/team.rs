//! Team listings and their matching preferences

use crate::model::profile::{SkillMap, UserProfile};
use crate::model::vocab::{GenderPreference, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One factor's stored preference: whether it participates and with what
/// raw weight (unbounded scale, not a percentage)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FactorPreference {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub weight: f64,
}

/// Per-factor matching preferences a team leader can configure
///
/// Missing entries default to disabled with zero weight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MatchingPreferences {
    #[serde(default)]
    pub skill: FactorPreference,
    #[serde(default)]
    pub role: FactorPreference,
    #[serde(default)]
    pub diversity: FactorPreference,
}

/// A hackathon team listing
///
/// The scoring engine reads `required_skills`, `required_roles`,
/// `preferred_gender`, and `matching_preferences`; the remaining fields
/// are listing metadata carried for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,

    /// Team creator, always implicitly a member for scoring purposes;
    /// the caller includes the leader's profile in the roster
    pub leader: String,

    /// Emails of accepted members, excluding the candidate being scored
    #[serde(default)]
    pub members: Vec<String>,

    /// Skill name to minimum required proficiency; empty means no skill
    /// requirement
    #[serde(default)]
    pub required_skills: SkillMap,

    #[serde(default)]
    pub required_roles: BTreeSet<Role>,

    #[serde(default)]
    pub preferred_gender: GenderPreference,

    #[serde(default)]
    pub matching_preferences: Option<MatchingPreferences>,

    #[serde(default)]
    pub hackathon_name: Option<String>,

    #[serde(default)]
    pub hackathon_place: Option<String>,

    #[serde(default)]
    pub hackathon_date: Option<String>,

    /// Last date to apply
    #[serde(default)]
    pub last_date: Option<String>,

    #[serde(default)]
    pub problem_statement: Option<String>,

    #[serde(default)]
    pub max_members: Option<u32>,
}

impl Team {
    /// Human-readable listing title for reports
    pub fn display_name(&self) -> String {
        match &self.hackathon_name {
            Some(name) => format!("{} ({})", name, self.id),
            None => self.id.clone(),
        }
    }
}

/// A team together with the resolved profiles of its current accepted
/// members, the unit batch scoring iterates over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team: Team,
    #[serde(default)]
    pub members: Vec<UserProfile>,
}

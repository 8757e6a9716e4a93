//! Combines the hard filter, resolved weights, and factor sub-scores
//! into the final compatibility score

use crate::model::profile::{SkillMap, UserProfile};
use crate::model::team::Team;
use crate::scoring::weights::ResolvedWeights;
use crate::scoring::{diversity, filter, role, skill};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum score for the "Highly Compatible" label
pub const HIGHLY_COMPATIBLE_THRESHOLD: u8 = 75;

/// Minimum score for the "Moderate Match" label
pub const MODERATE_MATCH_THRESHOLD: u8 = 50;

/// Qualitative verdict assigned from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityLabel {
    #[serde(rename = "Highly Compatible")]
    HighlyCompatible,
    #[serde(rename = "Moderate Match")]
    ModerateMatch,
    #[serde(rename = "Weak Match")]
    WeakMatch,
    /// Sentinel for candidates rejected by the hard gender filter
    #[serde(rename = "No Match")]
    NoMatch,
}

impl CompatibilityLabel {
    fn from_score(score: u8) -> Self {
        if score >= HIGHLY_COMPATIBLE_THRESHOLD {
            CompatibilityLabel::HighlyCompatible
        } else if score >= MODERATE_MATCH_THRESHOLD {
            CompatibilityLabel::ModerateMatch
        } else {
            CompatibilityLabel::WeakMatch
        }
    }
}

impl fmt::Display for CompatibilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CompatibilityLabel::HighlyCompatible => "Highly Compatible",
            CompatibilityLabel::ModerateMatch => "Moderate Match",
            CompatibilityLabel::WeakMatch => "Weak Match",
            CompatibilityLabel::NoMatch => "No Match",
        };
        write!(f, "{}", text)
    }
}

/// Per-factor sub-scores as integer percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub skill_comp: u8,
    pub role_fit: u8,
    pub diversity: u8,
}

/// The normalized weights actually applied, as integer percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    pub skill: u8,
    pub role: u8,
    pub diversity: u8,
}

/// Final output of one team/candidate scoring call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    /// Weighted compatibility, 0-100
    pub score: u8,
    pub label: CompatibilityLabel,
    pub breakdown: FactorBreakdown,
    pub weights: WeightBreakdown,
    /// Whether the hard gender filter rejected the candidate
    pub filtered: bool,
}

impl CompatibilityScore {
    /// Zero-score sentinel for a candidate rejected by the gender filter
    fn rejected() -> Self {
        Self {
            score: 0,
            label: CompatibilityLabel::NoMatch,
            breakdown: FactorBreakdown::default(),
            weights: WeightBreakdown::default(),
            filtered: true,
        }
    }
}

/// Score one candidate against one team and its current accepted members
///
/// The roster holds the profiles of accepted members including the
/// leader; the candidate is not part of it. Rejection by the gender
/// filter short-circuits before any factor computation. Member ordering
/// never affects the result.
pub fn score(team: &Team, candidate: &UserProfile, members: &[UserProfile]) -> CompatibilityScore {
    if !filter::admits(team.preferred_gender, candidate.gender) {
        return CompatibilityScore::rejected();
    }

    let weights = ResolvedWeights::resolve(team.matching_preferences.as_ref());

    let roster_skills: Vec<&SkillMap> = members.iter().map(|m| &m.skill_strengths).collect();
    let skill_score = skill::skill_complementarity(
        &team.required_skills,
        &candidate.skill_strengths,
        &roster_skills,
    );
    let role_score = role::role_fit(&team.required_roles, &candidate.preferred_roles);
    let diversity_score = diversity::simpson_diversity(
        members
            .iter()
            .filter_map(|m| m.dept.as_deref())
            .chain(candidate.dept.as_deref()),
    );

    let weighted = weights.skill * skill_score
        + weights.role * role_score
        + weights.diversity * diversity_score;
    let total = to_percent(weighted);

    CompatibilityScore {
        score: total,
        label: CompatibilityLabel::from_score(total),
        breakdown: FactorBreakdown {
            skill_comp: to_percent(skill_score),
            role_fit: to_percent(role_score),
            diversity: to_percent(diversity_score),
        },
        weights: WeightBreakdown {
            skill: to_percent(weights.skill),
            role: to_percent(weights.role),
            diversity: to_percent(weights.diversity),
        },
        filtered: false,
    }
}

/// Round a [0,1] value to an integer percentage, clamped to 0-100
fn to_percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

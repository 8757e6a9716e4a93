//! Skill coverage with complementarity and redundancy adjustment

use crate::model::profile::SkillMap;

/// Sub-score when a team lists no skill requirements
pub const NEUTRAL_SKILL_SCORE: f64 = 0.7;

/// Redundancy cannot pull the sub-score down by more than this
pub const REDUNDANCY_PENALTY_CAP: f64 = 0.3;

/// Score a candidate's skills against a team's requirements
///
/// Coverage gives proportional credit up to the required level, full
/// credit at or above it, and 0 for an unlisted skill. On top of that,
/// the gap bonus rewards covering a required skill no current member
/// meets, and the redundancy penalty (capped) discounts skills two or
/// more members already meet.
pub fn skill_complementarity(required: &SkillMap, candidate: &SkillMap, roster: &[&SkillMap]) -> f64 {
    if required.is_empty() {
        return NEUTRAL_SKILL_SCORE;
    }

    let mut coverage = 0.0;
    let mut gaps_filled = 0usize;
    let mut redundant = 0usize;

    for (skill, min_level) in required {
        let need = f64::from(min_level.get());
        let have = candidate
            .get(skill)
            .map_or(0.0, |level| f64::from(level.get()));
        coverage += (have / need).min(1.0);

        let members_covering = roster
            .iter()
            .filter(|skills| skills.get(skill).map_or(false, |level| level >= min_level))
            .count();
        let candidate_covers = candidate
            .get(skill)
            .map_or(false, |level| level >= min_level);

        if members_covering == 0 && candidate_covers {
            gaps_filled += 1;
        }
        if members_covering >= 2 {
            redundant += 1;
        }
    }

    let total = required.len() as f64;
    let bonus = gaps_filled as f64 / total;
    let penalty = (redundant as f64 / total).min(REDUNDANCY_PENALTY_CAP);

    (coverage / total + bonus - penalty).clamp(0.0, 1.0)
}

//! Effective factor weights resolved from a team's matching preferences

use crate::model::team::{FactorPreference, MatchingPreferences};
use serde::{Deserialize, Serialize};

/// Default split applied when no factor is enabled with a usable weight
pub const DEFAULT_SKILL_WEIGHT: f64 = 0.45;
pub const DEFAULT_ROLE_WEIGHT: f64 = 0.35;
pub const DEFAULT_DIVERSITY_WEIGHT: f64 = 0.20;

/// Normalized weights for the three scored factors, summing to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWeights {
    pub skill: f64,
    pub role: f64,
    pub diversity: f64,
}

impl ResolvedWeights {
    /// Resolve effective weights from a team's stored preferences
    ///
    /// Only enabled factors with a positive finite weight enter the
    /// normalization sum; disabled factors get 0. If nothing qualifies,
    /// the fixed default split applies.
    pub fn resolve(preferences: Option<&MatchingPreferences>) -> Self {
        let Some(prefs) = preferences else {
            return Self::default();
        };

        let skill = contribution(&prefs.skill);
        let role = contribution(&prefs.role);
        let diversity = contribution(&prefs.diversity);

        let total = skill + role + diversity;
        if total > 0.0 {
            Self {
                skill: skill / total,
                role: role / total,
                diversity: diversity / total,
            }
        } else {
            Self::default()
        }
    }
}

impl Default for ResolvedWeights {
    fn default() -> Self {
        Self {
            skill: DEFAULT_SKILL_WEIGHT,
            role: DEFAULT_ROLE_WEIGHT,
            diversity: DEFAULT_DIVERSITY_WEIGHT,
        }
    }
}

/// A factor's contribution to the normalization sum; negative, zero, or
/// non-finite weights do not contribute
fn contribution(preference: &FactorPreference) -> f64 {
    if preference.enabled && preference.weight.is_finite() && preference.weight > 0.0 {
        preference.weight
    } else {
        0.0
    }
}

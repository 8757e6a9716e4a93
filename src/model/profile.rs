//! Candidate and member profiles

use crate::model::vocab::{Gender, ProficiencyLevel, Role};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from skill name to self-rated proficiency
pub type SkillMap = BTreeMap<String, ProficiencyLevel>;

/// A student profile, as stored by the platform
///
/// All scoring-relevant fields are optional and default to empty; the
/// engine degrades to neutral sub-scores instead of rejecting a sparse
/// profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Department, used only by the diversity factor
    #[serde(default)]
    pub dept: Option<String>,

    #[serde(default)]
    pub year: Option<String>,

    /// Used only by the hard gender filter
    #[serde(default)]
    pub gender: Gender,

    #[serde(default)]
    pub skill_strengths: SkillMap,

    #[serde(default)]
    pub preferred_roles: BTreeSet<Role>,
}

impl UserProfile {
    /// Minimal profile with nothing but an email address
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            dept: None,
            year: None,
            gender: Gender::Unspecified,
            skill_strengths: SkillMap::new(),
            preferred_roles: BTreeSet::new(),
        }
    }
}

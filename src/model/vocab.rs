//! Closed vocabularies shared by teams and candidate profiles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Team role from the fixed platform vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Frontend,
    Backend,
    #[serde(rename = "AI-ML")]
    AiMl,
    #[serde(rename = "UI-UX")]
    UiUx,
    Marketing,
    Presentation,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Frontend => "Frontend",
            Role::Backend => "Backend",
            Role::AiMl => "AI-ML",
            Role::UiUx => "UI-UX",
            Role::Marketing => "Marketing",
            Role::Presentation => "Presentation",
        };
        write!(f, "{}", name)
    }
}

/// Self-reported gender on a candidate profile
///
/// Unknown values deserialize to `Unspecified`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

/// A team's gender preference, acting as a hard admission filter
///
/// Unknown values deserialize to `NoPreference`, which admits everyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum GenderPreference {
    Male,
    Female,
    #[default]
    #[serde(rename = "No-Preference")]
    NoPreference,
}

impl From<String> for GenderPreference {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Male" => GenderPreference::Male,
            "Female" => GenderPreference::Female,
            _ => GenderPreference::NoPreference,
        }
    }
}

/// Skill proficiency self-rating, 1 (Beginner) to 5 (Expert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64")]
pub struct ProficiencyLevel(u8);

impl ProficiencyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Clamp an arbitrary rating into the valid 1-5 range
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<i64> for ProficiencyLevel {
    fn from(level: i64) -> Self {
        Self(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

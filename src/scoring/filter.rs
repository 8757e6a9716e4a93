//! Hard gender admission filter

use crate::model::vocab::{Gender, GenderPreference};

/// Whether a candidate passes the team's gender preference
///
/// A binary admission rule applied before any weighting: it admits or
/// fully rejects, never attenuates the score.
pub fn admits(preference: GenderPreference, gender: Gender) -> bool {
    match preference {
        GenderPreference::Male => gender == Gender::Male,
        GenderPreference::Female => gender == Gender::Female,
        GenderPreference::NoPreference => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_preference_admits_only_male() {
        assert!(admits(GenderPreference::Male, Gender::Male));
        assert!(!admits(GenderPreference::Male, Gender::Female));
        assert!(!admits(GenderPreference::Male, Gender::Unspecified));
    }

    #[test]
    fn test_female_preference_admits_only_female() {
        assert!(admits(GenderPreference::Female, Gender::Female));
        assert!(!admits(GenderPreference::Female, Gender::Male));
        assert!(!admits(GenderPreference::Female, Gender::Unspecified));
    }

    #[test]
    fn test_no_preference_admits_everyone() {
        assert!(admits(GenderPreference::NoPreference, Gender::Male));
        assert!(admits(GenderPreference::NoPreference, Gender::Female));
        assert!(admits(GenderPreference::NoPreference, Gender::Unspecified));
    }
}

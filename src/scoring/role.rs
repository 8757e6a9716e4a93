//! Role overlap scoring

use crate::model::vocab::Role;
use std::collections::BTreeSet;

/// Sub-score for a candidate who lists no preferred roles
pub const UNKNOWN_ROLE_SCORE: f64 = 0.5;

/// Fraction of the team's required roles the candidate prefers
///
/// Exact set overlap with no partial credit for near-miss roles. A team
/// without role requirements gives full credit.
pub fn role_fit(required: &BTreeSet<Role>, preferred: &BTreeSet<Role>) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    if preferred.is_empty() {
        return UNKNOWN_ROLE_SCORE;
    }

    let overlap = required.intersection(preferred).count();
    overlap as f64 / required.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(entries: &[Role]) -> BTreeSet<Role> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_no_required_roles_gives_full_credit() {
        assert_eq!(role_fit(&roles(&[]), &roles(&[Role::Backend])), 1.0);
        assert_eq!(role_fit(&roles(&[]), &roles(&[])), 1.0);
    }

    #[test]
    fn test_unknown_preference_is_neutral() {
        assert_eq!(
            role_fit(&roles(&[Role::Frontend]), &roles(&[])),
            UNKNOWN_ROLE_SCORE
        );
    }

    #[test]
    fn test_overlap_ratio() {
        let required = roles(&[Role::Frontend, Role::Backend]);
        assert_eq!(role_fit(&required, &roles(&[Role::Backend])), 0.5);
        assert_eq!(
            role_fit(&required, &roles(&[Role::Backend, Role::Frontend])),
            1.0
        );
        assert_eq!(role_fit(&required, &roles(&[Role::Marketing])), 0.0);
    }
}

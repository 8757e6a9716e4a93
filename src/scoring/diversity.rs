//! Gini-Simpson diversity over member departments

use std::collections::BTreeMap;

/// Sub-score when no member has a department on record
pub const UNKNOWN_DIVERSITY_SCORE: f64 = 0.5;

/// Simpson diversity index of the department mix if the candidate joined
///
/// `1 - sum((count/n)^2)` over department frequencies: 0 for a fully
/// homogeneous set, approaching 1 as variety and evenness increase. The
/// caller passes the departments of every current member plus the
/// candidate, with absent values already excluded.
pub fn simpson_diversity<'a, I>(departments: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut total = 0usize;
    for dept in departments {
        *counts.entry(dept).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return UNKNOWN_DIVERSITY_SCORE;
    }

    let n = total as f64;
    let homogeneity: f64 = counts
        .values()
        .map(|&count| (count as f64 / n).powi(2))
        .sum();
    1.0 - homogeneity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_departments_is_neutral() {
        assert_eq!(simpson_diversity([]), UNKNOWN_DIVERSITY_SCORE);
    }

    #[test]
    fn test_homogeneous_set_scores_zero() {
        let score = simpson_diversity(["CSE", "CSE", "CSE"]);
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn test_two_equal_groups() {
        let score = simpson_diversity(["CSE", "ECE"]);
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_three_even_groups() {
        let score = simpson_diversity(["CSE", "ECE", "MECH"]);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_dominant_department_scores_lower_than_even_mix() {
        let skewed = simpson_diversity(["CSE", "CSE", "CSE", "ECE"]);
        let even = simpson_diversity(["CSE", "CSE", "ECE", "ECE"]);
        assert!(skewed < even);
    }
}

//! Integration tests for the team matcher

use std::fs;
use std::path::PathBuf;
use team_matcher::input::loader;
use team_matcher::scoring::{batch, composer};
use team_matcher::CompatibilityLabel;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_score_end_to_end_gap_filling_candidate() {
    let dir = TempDir::new().unwrap();
    let team_path = write_fixture(
        &dir,
        "team.json",
        r#"{
            "id": "team-1",
            "leader": "lead@campus.edu",
            "hackathonName": "HackNight",
            "requiredSkills": {"Python": 3},
            "preferredGender": "No-Preference"
        }"#,
    );
    // The roster holds accepted members only; pending join requests are
    // never counted toward gap or redundancy adjustments.
    let members_path = write_fixture(
        &dir,
        "members.json",
        r#"[{"email": "lead@campus.edu", "dept": "CSE", "skillStrengths": {"Python": 1}}]"#,
    );
    let candidate_path = write_fixture(
        &dir,
        "candidate.json",
        r#"{"email": "cand@campus.edu", "dept": "CSE", "skillStrengths": {"Python": 5}}"#,
    );

    let team = loader::load_team(&team_path).unwrap();
    let members = loader::load_profiles(&members_path).unwrap();
    let candidate = loader::load_profile(&candidate_path).unwrap();

    let result = composer::score(&team, &candidate, &members);

    assert_eq!(result.score, 80);
    assert_eq!(result.label, CompatibilityLabel::HighlyCompatible);
    assert_eq!(result.breakdown.skill_comp, 100);
    assert_eq!(result.breakdown.role_fit, 100);
    assert_eq!(result.breakdown.diversity, 0);
    assert!(!result.filtered);
}

#[test]
fn test_score_end_to_end_gender_filtered() {
    let dir = TempDir::new().unwrap();
    let team_path = write_fixture(
        &dir,
        "team.json",
        r#"{
            "id": "team-2",
            "leader": "lead@campus.edu",
            "requiredRoles": ["Backend"],
            "preferredGender": "Female"
        }"#,
    );
    let candidate_path = write_fixture(
        &dir,
        "candidate.json",
        r#"{"email": "cand@campus.edu", "gender": "Male", "preferredRoles": ["Frontend"]}"#,
    );

    let team = loader::load_team(&team_path).unwrap();
    let candidate = loader::load_profile(&candidate_path).unwrap();

    let result = composer::score(&team, &candidate, &[]);

    assert_eq!(result.score, 0);
    assert_eq!(result.label, CompatibilityLabel::NoMatch);
    assert!(result.filtered);
}

#[test]
fn test_batch_end_to_end() {
    let dir = TempDir::new().unwrap();
    let rosters_path = write_fixture(
        &dir,
        "teams.json",
        r#"[
            {
                "team": {
                    "id": "team-1",
                    "leader": "a@campus.edu",
                    "requiredSkills": {"Python": 5}
                },
                "members": []
            },
            {
                "team": {"id": "team-2", "leader": "b@campus.edu"},
                "members": []
            }
        ]"#,
    );
    let candidate_path = write_fixture(
        &dir,
        "candidate.json",
        r#"{"email": "cand@campus.edu", "skillStrengths": {"Python": 5}}"#,
    );

    let rosters = loader::load_rosters(&rosters_path).unwrap();
    let candidate = loader::load_profile(&candidate_path).unwrap();

    let entries = batch::score_teams_for_user(Some(&candidate), &rosters);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].team_id, "team-1");
    assert_eq!(entries[1].team_id, "team-2");
    assert_eq!(entries[0].result.breakdown.skill_comp, 100);
    assert_eq!(entries[1].result.breakdown.skill_comp, 70);
}

#[test]
fn test_suggest_end_to_end() {
    let dir = TempDir::new().unwrap();
    let team_path = write_fixture(
        &dir,
        "team.json",
        r#"{
            "id": "team-1",
            "leader": "lead@campus.edu",
            "requiredSkills": {"Rust": 3},
            "requiredRoles": ["Backend"]
        }"#,
    );
    let members_path = write_fixture(
        &dir,
        "members.json",
        r#"[{"email": "lead@campus.edu", "dept": "CSE"}]"#,
    );
    let candidates_path = write_fixture(
        &dir,
        "candidates.json",
        r#"[
            {"email": "none@campus.edu"},
            {
                "email": "strong@campus.edu",
                "dept": "ECE",
                "skillStrengths": {"Rust": 4},
                "preferredRoles": ["Backend"]
            },
            {
                "email": "partial@campus.edu",
                "dept": "CSE",
                "skillStrengths": {"Rust": 2}
            }
        ]"#,
    );

    let team = loader::load_team(&team_path).unwrap();
    let members = loader::load_profiles(&members_path).unwrap();
    let candidates = loader::load_profiles(&candidates_path).unwrap();

    let suggestions = batch::suggest_candidates(&team, &members, &candidates, 2);

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].email, "strong@campus.edu");
    assert!(suggestions[0].result.score > suggestions[1].result.score);
}

#[test]
fn test_malformed_optional_fields_degrade_gracefully() {
    let dir = TempDir::new().unwrap();
    let team_path = write_fixture(
        &dir,
        "team.json",
        r#"{
            "id": "team-1",
            "leader": "lead@campus.edu",
            "requiredSkills": {"Python": 3},
            "preferredGender": "Whatever",
            "matchingPreferences": {"skill": {"enabled": true, "weight": -10}}
        }"#,
    );
    // Out-of-range proficiency and an unknown gender string load without
    // error and score without panicking.
    let candidate_path = write_fixture(
        &dir,
        "candidate.json",
        r#"{"email": "cand@campus.edu", "gender": "Nonbinary", "skillStrengths": {"Python": 9}}"#,
    );

    let team = loader::load_team(&team_path).unwrap();
    let candidate = loader::load_profile(&candidate_path).unwrap();

    let result = composer::score(&team, &candidate, &[]);

    // Unknown preference admits; a negative enabled weight falls back to
    // the default split.
    assert!(!result.filtered);
    assert_eq!(result.weights.skill, 45);
    assert_eq!(result.breakdown.skill_comp, 100);
}

#[test]
fn test_unsupported_input_format() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "team.txt", "{}");
    assert!(loader::load_team(&path).is_err());
}

#[test]
fn test_nonexistent_file() {
    let result = loader::load_profile(&PathBuf::from("tests/fixtures/nonexistent.json"));
    assert!(result.is_err());
}

#[test]
fn test_scoring_is_deterministic_across_loads() {
    let dir = TempDir::new().unwrap();
    let team_path = write_fixture(
        &dir,
        "team.json",
        r#"{
            "id": "team-1",
            "leader": "lead@campus.edu",
            "requiredSkills": {"Python": 3, "SQL": 2},
            "matchingPreferences": {
                "skill": {"enabled": true, "weight": 50},
                "role": {"enabled": true, "weight": 30},
                "diversity": {"enabled": true, "weight": 20}
            }
        }"#,
    );
    let candidate_path = write_fixture(
        &dir,
        "candidate.json",
        r#"{"email": "cand@campus.edu", "dept": "ECE", "skillStrengths": {"Python": 4}}"#,
    );
    let members_path = write_fixture(
        &dir,
        "members.json",
        r#"[
            {"email": "a@campus.edu", "dept": "CSE", "skillStrengths": {"SQL": 3}},
            {"email": "b@campus.edu", "dept": "CSE"}
        ]"#,
    );

    let team = loader::load_team(&team_path).unwrap();
    let candidate = loader::load_profile(&candidate_path).unwrap();
    let members = loader::load_profiles(&members_path).unwrap();

    let first = composer::score(&team, &candidate, &members);
    let second = composer::score(&team, &candidate, &members);

    assert_eq!(first, second);
    let sum = first.weights.skill + first.weights.role + first.weights.diversity;
    assert_eq!(sum, 100);
}

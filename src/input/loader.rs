//! JSON loading for teams, profiles, and rosters

use crate::error::{Result, TeamMatcherError};
use crate::model::profile::UserProfile;
use crate::model::team::{Team, TeamRoster};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a team listing from a JSON file
pub fn load_team(path: &Path) -> Result<Team> {
    load_json(path)
}

/// Load a single user profile from a JSON file
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    load_json(path)
}

/// Load a JSON array of user profiles
pub fn load_profiles(path: &Path) -> Result<Vec<UserProfile>> {
    load_json(path)
}

/// Load a JSON array of teams with their member rosters
pub fn load_rosters(path: &Path) -> Result<Vec<TeamRoster>> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    validate_extension(path)?;
    log::debug!("loading {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    Ok(value)
}

fn validate_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(()),
        Some(ext) => Err(TeamMatcherError::UnsupportedFormat(format!(
            "Unsupported input format: .{}. Expected: .json",
            ext
        ))),
        None => Err(TeamMatcherError::UnsupportedFormat(
            "Input file has no extension. Expected: .json".to_string(),
        )),
    }
}

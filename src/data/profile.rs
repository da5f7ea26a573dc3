//! Query profile: optional JSON file carrying default report parameters.
//! Missing or invalid file falls back to built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_PATH: &str = "data/profile.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryProfile {
    #[serde(default)]
    pub target_tag: Option<String>,
    #[serde(default)]
    pub stat_filter: Option<String>,
    #[serde(default)]
    pub mods_path: Option<String>,
}

/// Load profile from JSON file. Returns default (no overrides) if the file
/// is missing or invalid.
pub fn load_profile(path: &str) -> QueryProfile {
    let path = Path::new(path);
    if !path.exists() {
        return QueryProfile::default();
    }
    let raw = match fs::read_to_string(path) {
        Ok(s) => s,
        _ => return QueryProfile::default(),
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

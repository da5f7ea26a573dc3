//! Mod table: RePoE mods.json records keyed by mod id.
//! Loaded whole-file into a sorted map so scans and reports are deterministic.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;

use serde::{Deserialize, Serialize};

/// Domain value marking mods that roll on regular equipment.
pub const ITEM_DOMAIN: &str = "item";

pub const DEFAULT_MODS_PATH: &str = "data/mods.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnWeight {
    pub tag: String,
    pub weight: u32,
}

/// A stat roll range. Some RePoE stats omit min/max (e.g. flag stats).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

/// One modifier record. `domain`, `spawn_weights` and `stats` are required;
/// the remaining fields default so partial dumps still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mod {
    pub domain: String,
    pub spawn_weights: Vec<SpawnWeight>,
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub generation_type: String,
    #[serde(default)]
    pub required_level: u64,
    #[serde(default)]
    pub is_essence_only: bool,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default, rename = "type")]
    pub mod_type: String,
}

pub type ModTable = BTreeMap<String, Mod>;

#[derive(Debug)]
pub enum ModsError {
    Read(String, std::io::Error),
    Parse(String, serde_json::Error),
}

impl fmt::Display for ModsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path, err) => write!(f, "failed to read mod table '{path}': {err}"),
            Self::Parse(path, err) => write!(f, "failed to parse mod table '{path}': {err}"),
        }
    }
}

/// Load a mod table from a RePoE mods.json style file (object keyed by mod id).
pub fn load_mod_table(path: &str) -> Result<ModTable, ModsError> {
    let raw = fs::read_to_string(path).map_err(|err| ModsError::Read(path.to_string(), err))?;
    serde_json::from_str(&raw).map_err(|err| ModsError::Parse(path.to_string(), err))
}

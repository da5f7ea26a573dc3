//! Import a raw RePoE mods dump into a normalized item-domain snapshot with
//! provenance metadata, re-loading the written file as a schema self-check.

use std::fmt;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::data::mods::{ModTable, ITEM_DOMAIN};

pub const DEFAULT_SNAPSHOT_PATH: &str = "data/mods.item.json";
/// Overrides the data_version stamped into snapshots.
pub const DATA_VERSION_ENV: &str = "EXALT_DATA_VERSION";

const DEFAULT_DATA_VERSION: &str = "repoe-main";
const SOURCE_NOTE: &str = "RePoE mods export, item domain only";

/// Normalized mod snapshot with provenance. Written by `import`, loadable by
/// any consumer that understands a plain mod table plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModsSnapshot {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    pub mods: ModTable,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub source_path: String,
    pub output_path: String,
    pub total_records: usize,
    pub kept_records: usize,
    pub skipped_records: usize,
}

#[derive(Debug)]
pub enum ImportError {
    Read(std::io::Error),
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
    Write(std::io::Error),
    Reload(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read mods dump: {err}"),
            Self::Parse(err) => write!(f, "failed to parse mods dump JSON: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
            Self::Write(err) => write!(f, "failed to write snapshot: {err}"),
            Self::Reload(path) => write!(f, "written snapshot '{path}' failed to re-load"),
        }
    }
}

/// Filter a raw dump down to item-domain records and write the snapshot.
pub fn import_mods_dump(source_path: &str, output_path: &str) -> Result<ImportReport, ImportError> {
    let raw = fs::read_to_string(source_path).map_err(ImportError::Read)?;
    let table: ModTable = serde_json::from_str(&raw).map_err(ImportError::Parse)?;

    let total_records = table.len();
    let mods: ModTable = table
        .into_iter()
        .filter(|(_, record)| record.domain == ITEM_DOMAIN)
        .collect();
    let kept_records = mods.len();

    let snapshot = ModsSnapshot {
        data_version: Some(
            std::env::var(DATA_VERSION_ENV).unwrap_or_else(|_| DEFAULT_DATA_VERSION.to_string()),
        ),
        source_note: Some(SOURCE_NOTE.to_string()),
        last_updated: Some(chrono::Utc::now().format("%Y-%m-%d").to_string()),
        mods,
    };

    let payload = serde_json::to_string_pretty(&snapshot).map_err(ImportError::Serialize)?;
    fs::write(output_path, payload).map_err(ImportError::Write)?;

    // Re-load the written snapshot to ensure the schema is loadable.
    load_snapshot(output_path).ok_or_else(|| ImportError::Reload(output_path.to_string()))?;

    Ok(ImportReport {
        source_path: source_path.to_string(),
        output_path: output_path.to_string(),
        total_records,
        kept_records,
        skipped_records: total_records - kept_records,
    })
}

/// Load a snapshot written by `import`. Returns None if missing or malformed.
pub fn load_snapshot(path: &str) -> Option<ModsSnapshot> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

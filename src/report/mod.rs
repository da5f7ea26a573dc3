//! Spawn-weight report: scan a mod table for item-domain records, accumulate
//! qualifying spawn weights for a target tag, and collect entries whose stats
//! match a substring filter.

pub mod export_csv;

use std::fmt;

use serde::Serialize;

use crate::data::mods::{ModTable, Stat, ITEM_DOMAIN};
use crate::data::translations::TranslationIndex;

pub const DEFAULT_TARGET_TAG: &str = "helmet";
pub const DEFAULT_STAT_FILTER: &str = "base_maximum_life";

/// Parameters of one report run. Defaults reproduce the canonical
/// helmet / maximum-life query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub target_tag: String,
    pub stat_filter: String,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            target_tag: DEFAULT_TARGET_TAG.to_string(),
            stat_filter: DEFAULT_STAT_FILTER.to_string(),
        }
    }
}

/// One collected mod whose stats matched the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModOption {
    pub mod_id: String,
    pub stats: Vec<Stat>,
    /// Weight of the record's last spawn-weight entry, not of the entry that
    /// matched the target tag.
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightReport {
    pub target_tag: String,
    pub stat_filter: String,
    pub total_weight: u64,
    pub options: Vec<ModOption>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReportError {
    ZeroTotalWeight,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTotalWeight => {
                write!(f, "no qualifying spawn weights found; relative weights are undefined")
            }
        }
    }
}

/// Single pass over the table. Only `domain == "item"` records participate.
///
/// A spawn-weight entry counts toward the total when its tag equals the
/// target tag (zero weights included), or when it is the "default" fallback
/// with a non-zero weight. The two branches are deliberately asymmetric.
///
/// A record whose stats match the filter yields exactly one option; a record
/// with no spawn weights yields none.
pub fn scan_mod_table(mods: &ModTable, query: &ReportQuery) -> WeightReport {
    let mut total_weight: u64 = 0;
    let mut options = Vec::new();

    for (mod_id, record) in mods {
        if record.domain != ITEM_DOMAIN {
            continue;
        }

        let mut last_weight = None;
        for sw in &record.spawn_weights {
            if sw.tag == query.target_tag || sw.tag == "default" && sw.weight != 0 {
                total_weight += u64::from(sw.weight);
            }
            last_weight = Some(sw.weight);
        }

        let Some(weight) = last_weight else {
            continue;
        };
        if record.stats.iter().any(|s| s.id.contains(&query.stat_filter)) {
            options.push(ModOption {
                mod_id: mod_id.clone(),
                stats: record.stats.clone(),
                weight,
            });
        }
    }

    WeightReport {
        target_tag: query.target_tag.clone(),
        stat_filter: query.stat_filter.clone(),
        total_weight,
        options,
    }
}

/// Render the report as text: one line per option, then the total line.
/// Fails when the accumulated total is zero, since relative weights would
/// divide by zero.
pub fn render_report(
    report: &WeightReport,
    translations: Option<&TranslationIndex>,
) -> Result<String, ReportError> {
    if report.total_weight == 0 {
        return Err(ReportError::ZeroTotalWeight);
    }

    let mut out = String::new();
    for option in &report.options {
        let share = option.weight as f64 / report.total_weight as f64;
        out.push_str(&format!(
            "{}: {}; weight: {} ({})\n",
            option.mod_id,
            describe_matched_stat(option, &report.stat_filter, translations),
            option.weight,
            share
        ));
    }
    out.push_str(&format!("total weight {}\n", report.total_weight));
    Ok(out)
}

/// Roll-range segment for the stat that matched the filter. With a
/// translation index present the English line replaces the raw range.
fn describe_matched_stat(
    option: &ModOption,
    stat_filter: &str,
    translations: Option<&TranslationIndex>,
) -> String {
    let Some(stat) = option.stats.iter().find(|s| s.id.contains(stat_filter)) else {
        return "-".to_string();
    };
    if let Some(index) = translations {
        if let Some(line) = index.render_stat(stat) {
            return line;
        }
    }
    format!("{}-{}", stat.min.unwrap_or(0), stat.max.unwrap_or(0))
}

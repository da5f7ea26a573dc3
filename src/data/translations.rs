//! Stat translations: RePoE stat_translations.json indexed by stat id.
//! Rendering picks the first English instance whose conditions accept the
//! roll range and substitutes the range into the line template.

use std::collections::HashMap;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::data::mods::Stat;

pub const DEFAULT_TRANSLATIONS_PATH: &str = "data/stat_translations.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatTranslation {
    #[serde(rename = "English")]
    pub english: Vec<LanguageInstance>,
    pub ids: Vec<String>,
    #[serde(default)]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageInstance {
    #[serde(default)]
    pub condition: Vec<Condition>,
    #[serde(default)]
    pub format: Vec<String>,
    #[serde(default)]
    pub index_handlers: Vec<Vec<String>>,
    pub string: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
    #[serde(default)]
    pub negated: Option<bool>,
}

/// Translations keyed by stat id. One translation record can cover several
/// ids; each id maps to the record and its position within `ids`.
#[derive(Debug, Clone, Default)]
pub struct TranslationIndex {
    by_stat_id: HashMap<String, StatTranslation>,
}

/// Load translations from a RePoE stat_translations.json style file.
/// Returns None if the file is missing or malformed; translations are an
/// optional enrichment, not a required input.
pub fn load_translation_index(path: &str) -> Option<TranslationIndex> {
    let raw = fs::read_to_string(path).ok()?;
    let translations: Vec<StatTranslation> = serde_json::from_str(&raw).ok()?;
    Some(TranslationIndex::from_translations(translations))
}

impl TranslationIndex {
    pub fn from_translations(translations: Vec<StatTranslation>) -> Self {
        let mut by_stat_id = HashMap::new();
        for translation in translations {
            for id in &translation.ids {
                by_stat_id.insert(id.clone(), translation.clone());
            }
        }
        Self { by_stat_id }
    }

    pub fn get(&self, stat_id: &str) -> Option<&StatTranslation> {
        self.by_stat_id.get(stat_id)
    }

    /// Render a single stat as its English line, e.g. "+(74-78) to maximum Mana".
    /// Returns None when the stat has no translation or no instance accepts
    /// the roll range.
    pub fn render_stat(&self, stat: &Stat) -> Option<String> {
        let translation = self.by_stat_id.get(&stat.id)?;
        let position = translation.ids.iter().position(|id| id == &stat.id)?;
        let min = stat.min.unwrap_or(0);
        let max = stat.max.unwrap_or(0);

        for instance in &translation.english {
            if let Some(condition) = instance.condition.get(position) {
                if condition.negated == Some(true) {
                    return Some(instance.string.clone());
                }
                if condition.min.map_or(false, |bound| min < bound)
                    || condition.max.map_or(false, |bound| max > bound)
                {
                    continue;
                }
            }

            let handler = instance
                .index_handlers
                .get(position)
                .and_then(|handlers| handlers.first())
                .map(String::as_str)
                .unwrap_or("");
            let value = if min == max {
                scale_stat_value(handler, max.abs() as f64)
            } else {
                format!(
                    "({}-{})",
                    scale_stat_value(handler, min.abs() as f64),
                    scale_stat_value(handler, max.abs() as f64)
                )
            };

            let placeholder = format!("{{{position}}}");
            let mut line = instance.string.replace(&placeholder, &value);

            if let Some(format_pattern) = instance.format.get(position) {
                let mut pattern = format_pattern.clone();
                // Negative rolls flip the printed sign.
                if max < 0 {
                    if pattern.contains('-') {
                        pattern = pattern.replace('-', "+");
                    } else if pattern.contains('+') {
                        pattern = pattern.replace('+', "-");
                    }
                }
                if pattern.contains('#') {
                    line = pattern.replace('#', &line);
                }
            }
            return Some(line);
        }
        None
    }
}

/// Apply an index handler to a roll value before substitution. Handlers not
/// listed here pass the value through unchanged.
fn scale_stat_value(index_handler: &str, value: f64) -> String {
    let scaled = match index_handler {
        "per_minute_to_per_second" => value / 60.0,
        "divide_by_three" => value / 3.0,
        "divide_by_four" => value / 4.0,
        "divide_by_five" => value / 5.0,
        "divide_by_six" => value / 6.0,
        "divide_by_twelve" => value / 12.0,
        "divide_by_fifty" => value / 50.0,
        "divide_by_one_hundred" => value / 100.0,
        "divide_by_one_thousand" => value / 1000.0,
        "60%_of_value" => value * 0.6,
        "30%_of_value" => value * 0.3,
        "double" => value * 2.0,
        _ => value,
    };
    scaled.to_string()
}

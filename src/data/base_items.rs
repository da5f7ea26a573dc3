//! Item bases: RePoE base_items.json records, indexed by name, plus the
//! tag → mod-id index used to list mods that can appear on a base.

use std::collections::{BTreeSet, HashMap};
use std::fs;

use serde::{Deserialize, Serialize};

use crate::data::mods::ModTable;

pub const DEFAULT_BASE_ITEMS_PATH: &str = "data/base_items.json";

/// Generation types that roll as regular affixes.
const AFFIX_GENERATION_TYPES: [&str; 2] = ["prefix", "suffix"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub level: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemBase {
    pub name: String,
    #[serde(default)]
    pub item_class: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub domain: String,
    #[serde(default)]
    pub release_state: String,
    #[serde(default)]
    pub requirements: Option<Requirements>,
}

/// Item bases keyed by display name.
#[derive(Debug, Clone, Default)]
pub struct BaseItemIndex {
    by_name: HashMap<String, ItemBase>,
}

/// Load base items from a RePoE base_items.json style file (object keyed by
/// metadata id; the index re-keys by display name). Returns None if the file
/// is missing or malformed.
pub fn load_base_items(path: &str) -> Option<BaseItemIndex> {
    let raw = fs::read_to_string(path).ok()?;
    let raw_bases: HashMap<String, ItemBase> = serde_json::from_str(&raw).ok()?;
    let by_name = raw_bases
        .into_values()
        .map(|base| (base.name.clone(), base))
        .collect();
    Some(BaseItemIndex { by_name })
}

impl BaseItemIndex {
    pub fn from_bases(bases: Vec<ItemBase>) -> Self {
        let by_name = bases.into_iter().map(|base| (base.name.clone(), base)).collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&ItemBase> {
        self.by_name.get(name)
    }

    /// Distinct item classes of equippable bases, sorted.
    pub fn item_classes(&self) -> Vec<String> {
        let classes: BTreeSet<String> = self
            .by_name
            .values()
            .filter(|base| base.domain == "item")
            .map(|base| base.item_class.clone())
            .collect();
        classes.into_iter().collect()
    }
}

/// Mod ids grouped by spawn-weight tag. Zero-weight entries are excluded:
/// a zero weight means the mod cannot spawn in that tag's context.
pub fn mod_ids_by_tag(mods: &ModTable) -> HashMap<String, Vec<String>> {
    let mut index: HashMap<String, Vec<String>> = HashMap::new();
    for (mod_id, record) in mods {
        for sw in &record.spawn_weights {
            if sw.weight > 0 {
                index.entry(sw.tag.clone()).or_default().push(mod_id.clone());
            }
        }
    }
    index
}

/// One mod applicable to an item base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseModListing {
    pub mod_id: String,
    pub name: String,
    pub generation_type: String,
    pub required_level: u64,
    pub weight: u32,
}

/// List affix mods that can roll on `base` at `item_level`, sorted by mod id.
/// A mod qualifies when its domain matches the base's domain, it is a
/// prefix/suffix with stats, its level requirement is met, and one of its
/// positive spawn weights names a tag the base carries.
pub fn mods_for_base(mods: &ModTable, base: &ItemBase, item_level: u64) -> Vec<BaseModListing> {
    let by_tag = mod_ids_by_tag(mods);
    let mut candidate_ids: BTreeSet<&String> = BTreeSet::new();
    for tag in &base.tags {
        if let Some(ids) = by_tag.get(tag) {
            candidate_ids.extend(ids.iter());
        }
    }

    let mut listings = Vec::new();
    for mod_id in candidate_ids {
        let Some(record) = mods.get(mod_id) else {
            continue;
        };
        if record.domain != base.domain
            || record.required_level > item_level
            || record.stats.is_empty()
            || !AFFIX_GENERATION_TYPES.contains(&record.generation_type.as_str())
        {
            continue;
        }
        let Some(weight) = record.spawn_weights.iter().find_map(|sw| {
            if sw.weight > 0 && base.tags.contains(&sw.tag) {
                Some(sw.weight)
            } else {
                None
            }
        }) else {
            continue;
        };
        listings.push(BaseModListing {
            mod_id: mod_id.clone(),
            name: record.name.clone(),
            generation_type: record.generation_type.clone(),
            required_level: record.required_level,
            weight,
        });
    }
    listings
}

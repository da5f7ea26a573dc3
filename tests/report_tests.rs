//! Weight accumulation and collection semantics over in-memory mod tables.

use exalt::data::mods::{Mod, ModTable, SpawnWeight, Stat};
use exalt::report::{render_report, scan_mod_table, ReportError, ReportQuery};

fn spawn_weight(tag: &str, weight: u32) -> SpawnWeight {
    SpawnWeight {
        tag: tag.to_string(),
        weight,
    }
}

fn stat(id: &str, min: i64, max: i64) -> Stat {
    Stat {
        id: id.to_string(),
        min: Some(min),
        max: Some(max),
    }
}

fn record(domain: &str, spawn_weights: Vec<SpawnWeight>, stats: Vec<Stat>) -> Mod {
    Mod {
        domain: domain.to_string(),
        spawn_weights,
        stats,
        ..Default::default()
    }
}

fn table(entries: Vec<(&str, Mod)>) -> ModTable {
    entries
        .into_iter()
        .map(|(id, r)| (id.to_string(), r))
        .collect()
}

#[test]
fn no_item_records_means_zero_total_and_render_fails() {
    let mods = table(vec![(
        "DelveLife",
        record(
            "delve",
            vec![spawn_weight("helmet", 100)],
            vec![stat("base_maximum_life", 1, 1)],
        ),
    )]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    assert_eq!(report.total_weight, 0);
    assert!(report.options.is_empty());
    assert_eq!(
        render_report(&report, None),
        Err(ReportError::ZeroTotalWeight)
    );
}

#[test]
fn single_item_record_sums_and_collects() {
    let mods = table(vec![(
        "FlatLife1",
        record(
            "item",
            vec![spawn_weight("helmet", 100)],
            vec![stat("base_maximum_life", 1, 1)],
        ),
    )]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    assert_eq!(report.total_weight, 100);
    assert_eq!(report.options.len(), 1);
    assert_eq!(report.options[0].weight, 100);

    let text = render_report(&report, None).expect("non-zero total should render");
    assert_eq!(text, "FlatLife1: 1-1; weight: 100 (1)\ntotal weight 100\n");
}

#[test]
fn zero_weight_default_entry_does_not_contribute() {
    let mods = table(vec![(
        "FlatLife1",
        record(
            "item",
            vec![spawn_weight("helmet", 100), spawn_weight("default", 0)],
            vec![stat("base_maximum_life", 1, 1)],
        ),
    )]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    assert_eq!(report.total_weight, 100);
}

#[test]
fn nonzero_default_entry_contributes() {
    let mods = table(vec![(
        "FlatLife1",
        record(
            "item",
            vec![spawn_weight("boots", 100), spawn_weight("default", 40)],
            vec![stat("base_maximum_life", 1, 1)],
        ),
    )]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    assert_eq!(report.total_weight, 40);
}

#[test]
fn zero_weight_target_entry_still_counts_as_match() {
    // Target-tag entries are summed regardless of weight; only the "default"
    // branch carries the non-zero check.
    let mods = table(vec![
        (
            "ZeroOnHelmet",
            record(
                "item",
                vec![spawn_weight("helmet", 0)],
                vec![stat("base_maximum_life", 1, 1)],
            ),
        ),
        (
            "Baseline",
            record(
                "item",
                vec![spawn_weight("default", 50)],
                vec![],
            ),
        ),
    ]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    assert_eq!(report.total_weight, 50);
    // The zero-weight record still collects (its stats match the filter).
    assert_eq!(report.options.len(), 1);
    assert_eq!(report.options[0].mod_id, "ZeroOnHelmet");
    assert_eq!(report.options[0].weight, 0);
}

#[test]
fn non_item_domains_are_excluded_from_total_and_collection() {
    let mods = table(vec![
        (
            "CraftedLife",
            record(
                "crafted",
                vec![spawn_weight("helmet", 900)],
                vec![stat("base_maximum_life", 5, 9)],
            ),
        ),
        (
            "ItemLife",
            record(
                "item",
                vec![spawn_weight("helmet", 100)],
                vec![stat("base_maximum_life", 1, 1)],
            ),
        ),
    ]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    assert_eq!(report.total_weight, 100);
    assert_eq!(report.options.len(), 1);
    assert_eq!(report.options[0].mod_id, "ItemLife");
}

#[test]
fn collected_weight_is_the_last_spawn_entry_visited() {
    let mods = table(vec![(
        "FlatLife1",
        record(
            "item",
            vec![spawn_weight("helmet", 100), spawn_weight("default", 50)],
            vec![stat("base_maximum_life", 1, 1)],
        ),
    )]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    // Not the helmet weight that matched the target: the final entry's.
    assert_eq!(report.options[0].weight, 50);
    assert_eq!(report.total_weight, 150);
}

#[test]
fn record_without_spawn_weights_is_never_collected() {
    let mods = table(vec![(
        "Weightless",
        record("item", vec![], vec![stat("base_maximum_life", 1, 1)]),
    )]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    assert_eq!(report.total_weight, 0);
    assert!(report.options.is_empty());
}

#[test]
fn stat_filter_matches_by_substring() {
    let query = ReportQuery {
        target_tag: "helmet".to_string(),
        stat_filter: "maximum_life".to_string(),
    };
    let mods = table(vec![
        (
            "FlatLife1",
            record(
                "item",
                vec![spawn_weight("helmet", 100)],
                vec![stat("base_maximum_life_from_x", 1, 1)],
            ),
        ),
        (
            "FlatMana1",
            record(
                "item",
                vec![spawn_weight("helmet", 60)],
                vec![stat("base_maximum_mana", 1, 1)],
            ),
        ),
    ]);
    let report = scan_mod_table(&mods, &query);
    assert_eq!(report.total_weight, 160);
    assert_eq!(report.options.len(), 1);
    assert_eq!(report.options[0].mod_id, "FlatLife1");
}

#[test]
fn report_lines_show_relative_weight_shares() {
    let mods = table(vec![
        (
            "LifeA",
            record(
                "item",
                vec![spawn_weight("helmet", 100)],
                vec![stat("base_maximum_life", 1, 10)],
            ),
        ),
        (
            "LifeB",
            record(
                "item",
                vec![spawn_weight("helmet", 300)],
                vec![stat("base_maximum_life", 11, 20)],
            ),
        ),
    ]);
    let report = scan_mod_table(&mods, &ReportQuery::default());
    assert_eq!(report.total_weight, 400);

    let text = render_report(&report, None).expect("non-zero total should render");
    assert_eq!(
        text,
        "LifeA: 1-10; weight: 100 (0.25)\nLifeB: 11-20; weight: 300 (0.75)\ntotal weight 400\n"
    );
}

#[test]
fn same_input_scans_to_identical_output() {
    let mods = table(vec![
        (
            "LifeB",
            record(
                "item",
                vec![spawn_weight("helmet", 300), spawn_weight("default", 25)],
                vec![stat("base_maximum_life", 11, 20)],
            ),
        ),
        (
            "LifeA",
            record(
                "item",
                vec![spawn_weight("default", 75)],
                vec![stat("base_maximum_life", 1, 10)],
            ),
        ),
        (
            "Mana",
            record(
                "item",
                vec![spawn_weight("helmet", 50)],
                vec![stat("base_maximum_mana", 1, 5)],
            ),
        ),
    ]);
    let query = ReportQuery::default();
    let first = render_report(&scan_mod_table(&mods, &query), None).unwrap();
    let second = render_report(&scan_mod_table(&mods, &query), None).unwrap();
    assert_eq!(first, second);
    // Options come out sorted by mod id, independent of insertion order.
    let report = scan_mod_table(&mods, &query);
    let ids: Vec<&str> = report.options.iter().map(|o| o.mod_id.as_str()).collect();
    assert_eq!(ids, vec!["LifeA", "LifeB"]);
}

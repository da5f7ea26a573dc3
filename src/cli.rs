use std::path::Path;

use crate::data::base_items::{load_base_items, mods_for_base, DEFAULT_BASE_ITEMS_PATH};
use crate::data::import::{import_mods_dump, DEFAULT_SNAPSHOT_PATH};
use crate::data::mods::{load_mod_table, DEFAULT_MODS_PATH};
use crate::data::profile::{load_profile, DEFAULT_PROFILE_PATH};
use crate::data::translations::load_translation_index;
use crate::data::validate::validate_mod_table;
use crate::report::export_csv::write_report_csv;
use crate::report::{
    render_report, scan_mod_table, ReportQuery, DEFAULT_STAT_FILTER, DEFAULT_TARGET_TAG,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Report,
    Mods,
    Validate,
    Import,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("report") => Some(Command::Report),
        Some("mods") => Some(Command::Mods),
        Some("validate") => Some(Command::Validate),
        Some("import") => Some(Command::Import),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Report) => handle_report(args),
        Some(Command::Mods) => handle_mods(args),
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Import) => handle_import(args),
        None => {
            eprintln!("usage: exalt <report|mods|validate|import>");
            2
        }
    }
}

fn handle_report(args: &[String]) -> i32 {
    let profile = load_profile(DEFAULT_PROFILE_PATH);
    let mods_path = operand(args, 2)
        .map(str::to_string)
        .or(profile.mods_path)
        .unwrap_or_else(|| DEFAULT_MODS_PATH.to_string());
    let query = ReportQuery {
        target_tag: flag_value(args, "--target")
            .map(str::to_string)
            .or(profile.target_tag)
            .unwrap_or_else(|| DEFAULT_TARGET_TAG.to_string()),
        stat_filter: flag_value(args, "--filter")
            .map(str::to_string)
            .or(profile.stat_filter)
            .unwrap_or_else(|| DEFAULT_STAT_FILTER.to_string()),
    };

    let table = match load_mod_table(&mods_path) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("report failed: {err}");
            return 1;
        }
    };
    let report = scan_mod_table(&table, &query);

    if let Some(csv_path) = flag_value(args, "--csv") {
        if let Err(err) = write_report_csv(&report, Path::new(csv_path)) {
            eprintln!("failed to write csv '{csv_path}': {err}");
            return 1;
        }
    }

    if has_flag(args, "--json") {
        return match serde_json::to_string_pretty(&report) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize report: {err}");
                1
            }
        };
    }

    let translations = match flag_value(args, "--translations") {
        Some(path) => {
            let index = load_translation_index(path);
            if index.is_none() {
                eprintln!("warning: could not load translations from '{path}'");
            }
            index
        }
        None => None,
    };
    match render_report(&report, translations.as_ref()) {
        Ok(text) => {
            print!("{text}");
            0
        }
        Err(err) => {
            eprintln!("report failed: {err}");
            1
        }
    }
}

fn handle_mods(args: &[String]) -> i32 {
    let Some(base_name) = operand(args, 2) else {
        eprintln!("usage: exalt mods <item-base-name> [item-level] [--mods PATH] [--bases PATH]");
        return 2;
    };
    let item_level = parse_u64_arg(operand(args, 3), "item-level", 100);
    let mods_path = flag_value(args, "--mods").unwrap_or(DEFAULT_MODS_PATH);
    let bases_path = flag_value(args, "--bases").unwrap_or(DEFAULT_BASE_ITEMS_PATH);

    let table = match load_mod_table(mods_path) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("mods listing failed: {err}");
            return 1;
        }
    };
    let Some(bases) = load_base_items(bases_path) else {
        eprintln!("mods listing failed: could not load item bases from '{bases_path}'");
        return 1;
    };
    let Some(base) = bases.get(base_name) else {
        eprintln!("unknown item base '{base_name}'");
        return 1;
    };

    let listings = mods_for_base(&table, base, item_level);
    for listing in &listings {
        println!(
            "{}\t{}\t{}\tlvl {}\tweight {}",
            listing.mod_id, listing.generation_type, listing.name, listing.required_level, listing.weight
        );
    }
    println!(
        "{} mods available for {} at item level {}",
        listings.len(),
        base.name,
        item_level
    );
    0
}

fn handle_validate(args: &[String]) -> i32 {
    let path = operand(args, 2).unwrap_or(DEFAULT_MODS_PATH);
    let table = match load_mod_table(path) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    let report = validate_mod_table(&table);
    if report.diagnostics.is_empty() {
        println!("validation passed: {path}");
        return 0;
    }
    for diag in &report.diagnostics {
        eprintln!("- [{}] {}: {}", diag.severity, diag.context, diag.message);
    }
    if report.has_errors() {
        eprintln!("validation failed: {} issue(s)", report.diagnostics.len());
        1
    } else {
        println!(
            "validation passed with {} warning(s): {path}",
            report.diagnostics.len()
        );
        0
    }
}

fn handle_import(args: &[String]) -> i32 {
    let Some(source) = operand(args, 2) else {
        eprintln!("usage: exalt import <raw-mods.json> [out.json]");
        return 2;
    };
    let output = operand(args, 3).unwrap_or(DEFAULT_SNAPSHOT_PATH);

    match import_mods_dump(source, output) {
        Ok(report) => {
            println!(
                "import complete: kept={} skipped={} out='{}'",
                report.kept_records, report.skipped_records, report.output_path
            );
            0
        }
        Err(err) => {
            eprintln!("import failed: {err}");
            1
        }
    }
}

/// Positional operand at `index`, ignoring anything that looks like a flag.
fn operand(args: &[String], index: usize) -> Option<&str> {
    args.get(index)
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn parse_u64_arg(raw: Option<&str>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

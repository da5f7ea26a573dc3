//! Write a weight report as CSV, one row per collected mod option.

use std::path::Path;

use crate::report::WeightReport;

pub fn write_report_csv(report: &WeightReport, path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["mod_id", "stat_id", "stat_min", "stat_max", "weight", "share"])?;

    for option in &report.options {
        let matched = option.stats.iter().find(|s| s.id.contains(&report.stat_filter));
        let (stat_id, stat_min, stat_max) = match matched {
            Some(stat) => (stat.id.as_str(), stat.min.unwrap_or(0), stat.max.unwrap_or(0)),
            None => ("", 0, 0),
        };
        let share = if report.total_weight == 0 {
            0.0
        } else {
            option.weight as f64 / report.total_weight as f64
        };
        writer.write_record(&[
            option.mod_id.clone(),
            stat_id.to_string(),
            stat_min.to_string(),
            stat_max.to_string(),
            option.weight.to_string(),
            share.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

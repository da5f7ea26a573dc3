//! Structural validation of a mod table before reporting on it.

use std::collections::HashSet;
use std::fmt;

use crate::data::mods::{Mod, ModTable};

/// Item level cap; a higher requirement can never be met.
pub const MAX_REQUIRED_LEVEL: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

pub fn validate_mod_table(mods: &ModTable) -> ValidationReport {
    let mut report = ValidationReport::default();
    if mods.is_empty() {
        report.push(ValidationSeverity::Info, "table", "mod table is empty");
        return report;
    }
    for (mod_id, record) in mods {
        validate_mod(mod_id, record, &mut report);
    }
    report
}

fn validate_mod(mod_id: &str, record: &Mod, report: &mut ValidationReport) {
    if record.domain.is_empty() {
        report.push(ValidationSeverity::Error, mod_id, "missing domain");
    }
    if record.spawn_weights.is_empty() {
        report.push(ValidationSeverity::Warning, mod_id, "no spawn weights");
    }
    if record.stats.is_empty() {
        report.push(ValidationSeverity::Warning, mod_id, "no stats");
    }

    for (idx, stat) in record.stats.iter().enumerate() {
        if stat.id.is_empty() {
            report.push(
                ValidationSeverity::Error,
                format!("{mod_id}.stats[{idx}]"),
                "empty stat id",
            );
        }
        if let (Some(min), Some(max)) = (stat.min, stat.max) {
            if min > max {
                report.push(
                    ValidationSeverity::Warning,
                    format!("{mod_id}.stats[{idx}]"),
                    format!("min {min} exceeds max {max}"),
                );
            }
        }
    }

    let mut seen_tags = HashSet::new();
    for sw in &record.spawn_weights {
        if !seen_tags.insert(sw.tag.as_str()) {
            report.push(
                ValidationSeverity::Warning,
                mod_id,
                format!("duplicate spawn-weight tag '{}'", sw.tag),
            );
        }
    }

    if record.required_level > MAX_REQUIRED_LEVEL {
        report.push(
            ValidationSeverity::Warning,
            mod_id,
            format!("required_level {} above item level cap", record.required_level),
        );
    }
}

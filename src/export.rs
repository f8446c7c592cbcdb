//! CSV export for the cohort accumulators.
//!
//! One file per non-empty cohort, UTF-8 with a BOM prefix so spreadsheet
//! tools render the Arabic course data correctly.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::config::Cohort;
use crate::record::{CourseRecord, EXPECTED_COLUMNS};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Writes one CSV per non-empty cohort into `out_dir`, creating the
/// directory if needed. Filesystem failures are fatal and propagate.
pub fn export_tables(
    out_dir: &Path,
    male: &[CourseRecord],
    female: &[CourseRecord],
) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    for (cohort, records) in [(Cohort::Male, male), (Cohort::Female, female)] {
        if records.is_empty() {
            info!(cohort = cohort.label(), "No data found, skipping CSV generation");
            continue;
        }

        let path = out_dir.join(format!("ccsit_{}_courses.csv", cohort.file_stem()));
        let columns = present_columns(records);
        write_table(&path, &columns, records)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), rows = records.len(), "Saved");
    }

    Ok(())
}

/// The expected columns that appear in at least one record, in fixed order.
///
/// Filtering on presence keeps the exporter working when the API drops or
/// renames fields upstream.
fn present_columns(records: &[CourseRecord]) -> Vec<&'static str> {
    EXPECTED_COLUMNS
        .into_iter()
        .filter(|&column| records.iter().any(|r| r.field(column).is_some()))
        .collect()
}

fn write_table(path: &Path, columns: &[&str], records: &[CourseRecord]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(columns)?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|&column| record.field(column).map(cell_text).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Renders a JSON value as CSV cell text. Strings are written verbatim,
/// nulls as empty cells, anything else in its compact JSON form.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

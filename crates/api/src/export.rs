// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV serialization of the attendance report.

use std::io::Write;

use crate::report::{Report, report_headers};

/// Errors raised while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
    /// Flushing the underlying writer failed.
    #[error("Failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a report as CSV: a header row, one row per participant, and a
/// summary footer carrying the activity rollups.
///
/// # Arguments
///
/// * `report` - The assembled report
/// * `writer` - The destination
///
/// # Errors
///
/// Returns an error if writing or flushing the destination fails.
pub fn write_report_csv<W: Write>(report: &Report, writer: W) -> Result<(), ExportError> {
    let mut out = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    out.write_record(report_headers(report))?;

    for row in &report.rows {
        let mut record: Vec<String> = Vec::with_capacity(row.cells.len() + 4);
        record.push(row.user_id.clone());
        record.push(row.name.clone());
        record.push(row.email.clone());
        for cell in &row.cells {
            record.push(cell.text());
        }
        record.push(format!(
            "{}% ({}/{})",
            row.session_rate.percentage, row.session_rate.completed, row.session_rate.total
        ));
        out.write_record(&record)?;
    }

    out.write_record([
        String::from("summary"),
        format!("average {}%", report.rollups.average_percentage),
        format!("full completion {}", report.rollups.full_completion_count),
        format!("late {}", report.rollups.late_count),
        format!("absent {}", report.rollups.absent_count),
    ])?;

    out.flush()?;
    Ok(())
}

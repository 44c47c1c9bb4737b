//! CSV export of decoded records
//!
//! Column layout: optional `seconds`, optional
//! `year,month,day,hour,minute,second`, then every known field in catalog
//! order. The header is always written, even when no record is selected.

use crate::error::{ResmartError, Result};
use crate::filters::{filter_records, DateRange, DateSelection};
use crate::progress::{DayTracker, Progress};
use crate::types::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "RESmart_data.csv";

const TIME_COLUMNS: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];

/// Export options for controlling the CSV layout and destination
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Overwritten if it already exists
    pub output_path: PathBuf,
    /// Prepend the `seconds` time proxy column
    pub include_seconds: bool,
    /// Prepend year/month/day/hour/minute/second columns
    pub include_ymd: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            include_seconds: false,
            include_ymd: false,
        }
    }
}

/// Outcome of an export
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub output_path: PathBuf,
    /// Range that was applied, `None` when there was no data to span
    pub range: Option<DateRange>,
    pub rows_written: usize,
}

/// Column labels for the given options
pub fn csv_header(options: &ExportOptions) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(1 + TIME_COLUMNS.len() + KnownField::ALL.len());
    if options.include_seconds {
        header.push("seconds");
    }
    if options.include_ymd {
        header.extend_from_slice(&TIME_COLUMNS);
    }
    header.extend(header_row());
    header
}

/// Cell values of one record, aligned with [`csv_header`]
pub fn csv_row(record: &Record, options: &ExportOptions) -> Vec<String> {
    let mut row = Vec::with_capacity(1 + TIME_COLUMNS.len() + KnownField::ALL.len());
    if options.include_seconds {
        row.push(record.seconds().to_string());
    }
    if options.include_ymd {
        row.extend(
            record
                .timestamp()
                .components()
                .iter()
                .map(|value| value.to_string()),
        );
    }
    row.extend(values_row(record).iter().map(|value| value.to_string()));
    row
}

/// Write the header and every record inside `range` to `writer`.
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(
    writer: W,
    records: &[Record],
    range: Option<DateRange>,
    options: &ExportOptions,
    progress: &mut dyn Progress,
) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(csv_header(options))?;

    let mut days = DayTracker::new();
    let mut rows = 0;
    for record in filter_records(records, range) {
        if days.changed(record.ordinal()) {
            progress.write_day(record.date());
        }
        csv_writer.write_record(csv_row(record, options))?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Export a record set to `options.output_path`, replacing any existing file
pub fn export_to_csv(
    set: &RecordSet,
    selection: &DateSelection,
    options: &ExportOptions,
    progress: &mut dyn Progress,
) -> Result<ExportReport> {
    let path = options.output_path.as_path();
    let file = File::create(path).map_err(|e| ResmartError::io_at(path, e))?;
    let writer = BufWriter::new(file);

    let range = selection.resolve(&set.records);
    let rows_written =
        write_csv(writer, &set.records, range, options, progress).map_err(|e| at_path(e, path))?;

    Ok(ExportReport {
        output_path: path.to_path_buf(),
        range,
        rows_written,
    })
}

fn at_path(err: ResmartError, path: &Path) -> ResmartError {
    match err {
        ResmartError::Io { path: None, source } => ResmartError::io_at(path, source),
        other => other,
    }
}

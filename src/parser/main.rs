use crate::error::{ResmartError, Result};
use crate::parser::stream::PacketStream;
use crate::progress::{DayTracker, Progress};
use crate::types::*;
use jiff::civil::Date;
use std::path::Path;

/// What to do with a file that contains a corrupt packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptPolicy {
    /// Fail the whole run
    #[default]
    Abort,
    /// Drop every record of that file, warn, and go on with the next one
    SkipFile,
}

/// Options for the decode pass
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub corrupt_policy: CorruptPolicy,
    /// Reported through [`Progress::start_date_found`] when first decoded
    pub start_date: Option<Date>,
}

/// Decode every whole packet in `data`, failing on the first corrupt one
pub fn parse_resmart_bytes(data: &[u8]) -> Result<Vec<Record>> {
    PacketStream::new(data).collect()
}

/// Read and decode a single raw data file
pub fn parse_resmart_file(file_path: &Path) -> Result<Vec<Record>> {
    let data = std::fs::read(file_path).map_err(|e| ResmartError::io_at(file_path, e))?;
    parse_resmart_bytes(&data).map_err(|e| e.in_file(file_path))
}

/// Decode a list of raw data files into one chronological record set.
///
/// Files are read one at a time. Each file's records stay in packet order;
/// the per-file batches are then ordered by their first timestamp, so the
/// result does not depend on how the caller sorted the paths.
pub fn parse_resmart_files<P: AsRef<Path>>(
    paths: &[P],
    options: &ParseOptions,
    progress: &mut dyn Progress,
) -> Result<RecordSet> {
    let mut batches: Vec<(FileSummary, Vec<Record>)> = Vec::with_capacity(paths.len());
    let mut days = DayTracker::new();

    for path in paths {
        let path = path.as_ref();
        progress.file_started(path);

        let data = std::fs::read(path).map_err(|e| ResmartError::io_at(path, e))?;
        let stream = PacketStream::new(&data);
        let mut summary = FileSummary {
            path: path.to_path_buf(),
            packets: stream.packet_count(),
            trailing_bytes: stream.trailing_bytes(),
            first: None,
            last: None,
            skipped: false,
        };

        let mut records = Vec::with_capacity(summary.packets);
        for item in stream {
            match item {
                Ok(record) => {
                    if days.changed(record.ordinal()) {
                        if options.start_date == Some(record.date()) {
                            progress.start_date_found(record.date());
                        }
                        progress.decode_day(record.date());
                    }
                    records.push(record);
                }
                Err(e) => match options.corrupt_policy {
                    CorruptPolicy::Abort => return Err(e.in_file(path)),
                    CorruptPolicy::SkipFile => {
                        progress.warning(&format!("skipping {}: {e}", path.display()));
                        summary.skipped = true;
                        records.clear();
                        break;
                    }
                },
            }
        }

        summary.first = records.first().map(|r| *r.timestamp());
        summary.last = records.last().map(|r| *r.timestamp());
        batches.push((summary, records));
    }

    if !batches_in_order(&batches) {
        progress.warning("input files are not in chronological order, sorting by first packet");
        batches.sort_by_key(|(summary, _)| summary.first);
    }

    let mut set = RecordSet::new();
    for (summary, records) in batches {
        set.files.push(summary);
        set.records.extend(records);
    }

    if let Some(pos) = set
        .records
        .windows(2)
        .position(|pair| pair[1].date() < pair[0].date())
    {
        progress.warning(&format!(
            "packet dates go backwards at record {} ({} after {})",
            pos + 1,
            set.records[pos + 1].date(),
            set.records[pos].date()
        ));
    }

    Ok(set)
}

fn batches_in_order(batches: &[(FileSummary, Vec<Record>)]) -> bool {
    let firsts: Vec<Timestamp> = batches
        .iter()
        .filter_map(|(summary, _)| summary.first)
        .collect();
    firsts.windows(2).all(|pair| pair[0] <= pair[1])
}

use crate::types::record::{Record, Timestamp};
use jiff::civil::Date;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::Serialize;

/// What was decoded from one raw data file
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FileSummary {
    pub path: PathBuf,
    pub packets: usize,
    /// Bytes after the last whole packet, ignored
    pub trailing_bytes: usize,
    pub first: Option<Timestamp>,
    pub last: Option<Timestamp>,
    /// Set when the file was dropped because of a corrupt packet
    pub skipped: bool,
}

/// Records of a whole run, concatenated in chronological file order
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RecordSet {
    pub records: Vec<Record>,
    pub files: Vec<FileSummary>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_date(&self) -> Option<Date> {
        self.records.first().map(Record::date)
    }

    pub fn last_date(&self) -> Option<Date> {
        self.records.last().map(Record::date)
    }

    /// Number of files whose records made it into the set
    pub fn files_read(&self) -> usize {
        self.files.iter().filter(|f| !f.skipped).count()
    }
}

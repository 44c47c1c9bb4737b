//! Progress and warning reporting
//!
//! The library never prints on its own. Callers pass a [`Progress`]
//! implementation; the CLI uses [`ConsolePrinter`].

use jiff::civil::Date;
use std::path::{Path, PathBuf};

pub trait Progress {
    /// A raw data file is about to be decoded
    fn file_started(&mut self, _path: &Path) {}

    /// First packet of a new day seen while decoding
    fn decode_day(&mut self, _date: Date) {}

    /// The requested start date showed up while decoding
    fn start_date_found(&mut self, _date: Date) {}

    /// First record of a new day written to the output
    fn write_day(&mut self, _date: Date) {}

    fn warning(&mut self, _message: &str) {}
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {}

/// Prints progress to stdout and warnings to stderr
#[derive(Debug, Clone)]
pub struct ConsolePrinter {
    quiet: bool,
    debug: bool,
    output: Option<PathBuf>,
}

impl ConsolePrinter {
    pub fn new(quiet: bool, debug: bool) -> Self {
        Self {
            quiet,
            debug,
            output: None,
        }
    }

    /// Name the CSV file in "Writing ..." lines
    pub fn with_output(mut self, output: &Path) -> Self {
        self.output = Some(output.to_path_buf());
        self
    }
}

impl Progress for ConsolePrinter {
    fn file_started(&mut self, path: &Path) {
        if self.debug {
            println!("Reading file: {}", path.display());
        }
    }

    fn decode_day(&mut self, date: Date) {
        if !self.quiet {
            println!("reading data from {date}");
        }
    }

    fn start_date_found(&mut self, date: Date) {
        if !self.quiet {
            println!("Found start date {date}.");
        }
    }

    fn write_day(&mut self, date: Date) {
        if self.quiet {
            return;
        }
        match &self.output {
            Some(output) => println!("Writing {date} data to {}", output.display()),
            None => println!("Writing {date} data"),
        }
    }

    // Warnings are printed even in quiet mode
    fn warning(&mut self, message: &str) {
        eprintln!("Warning: {message}");
    }
}

/// Detects when consecutive records move to a different day
#[derive(Debug, Default, Clone, Copy)]
pub struct DayTracker {
    last: Option<i32>,
}

impl DayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `ordinal` differs from the previous call's
    pub fn changed(&mut self, ordinal: i32) -> bool {
        if self.last == Some(ordinal) {
            false
        } else {
            self.last = Some(ordinal);
            true
        }
    }
}

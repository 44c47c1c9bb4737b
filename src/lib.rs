//! RESmart raw data parser
//!
//! Decodes the fixed 256-byte packets that BMC RESmart machines write to
//! their numbered raw data files (`*.000`, `*.001`, ...) and exports the
//! known measurements to CSV, optionally restricted to a range of days.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export functionality
//! - **`cli`** (default): Build the command-line interface binary and file discovery
//! - **`serde`**: Enable serialization of the record types
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resmart_parser::{
//!     export_to_csv, find_data_files, parse_resmart_files, DateSelection, ExportOptions,
//!     ParseOptions, Silent,
//! };
//! use std::path::Path;
//!
//! let files = find_data_files(Path::new("/media/sdcard")).unwrap();
//! let set = parse_resmart_files(&files, &ParseOptions::default(), &mut Silent).unwrap();
//!
//! let selection = DateSelection::from_args(&["2021-03-15"]).unwrap();
//! let options = ExportOptions {
//!     include_ymd: true,
//!     ..Default::default()
//! };
//! let report = export_to_csv(&set, &selection, &options, &mut Silent).unwrap();
//! println!("{} rows written to {}", report.rows_written, report.output_path.display());
//! ```
//!
//! # Public API
//!
//! ## Parsing
//! - [`decode_packet`] / [`encode_packet`] - One packet to/from a [`Record`]
//! - [`PacketStream`] - Lazy packet iterator over a file's bytes
//! - [`parse_resmart_bytes`], [`parse_resmart_file`] - One file
//! - [`parse_resmart_files`] - Many files into a chronological [`RecordSet`]
//!
//! ## Selection and export
//! - [`DateSelection`], [`DateRange`], [`filter_records`]
//! - [`KnownField`], [`header_row`], [`values_row`]
//! - [`export_to_csv`], [`write_csv`]

// Module declarations
#[cfg(feature = "cli")]
pub mod discovery;
pub mod error;
#[cfg(feature = "csv")]
pub mod export;
pub mod filters;
pub mod parser;
pub mod progress;
pub mod types;

#[cfg(feature = "cli")]
pub use discovery::*;
pub use error::*;
#[cfg(feature = "csv")]
pub use export::*;
pub use filters::*;
pub use parser::*;
pub use progress::*;
pub use types::*;

use std::fmt;
use std::path::PathBuf;

/// Errors raised while decoding RESmart data or exporting it
#[derive(Debug)]
pub enum ResmartError {
    /// I/O errors, with the path involved when one is known
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    /// Packet too short, or its timestamp is not a calendar date
    MalformedPacket { offset: usize, reason: String },
    /// Unparseable, inverted or over-specified date filter
    InvalidDateRange(String),
    /// CSV encoder failure
    #[cfg(feature = "csv")]
    Csv(csv::Error),
    /// No raw data files matched in the input directory
    NoInputFiles(PathBuf),
}

impl ResmartError {
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        ResmartError::MalformedPacket {
            offset,
            reason: reason.into(),
        }
    }

    pub fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResmartError::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Attach the file the packet came from to a decode error
    pub fn in_file(self, path: &std::path::Path) -> Self {
        match self {
            ResmartError::MalformedPacket { offset, reason } => ResmartError::MalformedPacket {
                offset,
                reason: format!("{reason} (in {})", path.display()),
            },
            ResmartError::Io { path: None, source } => ResmartError::io_at(path, source),
            other => other,
        }
    }
}

impl fmt::Display for ResmartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResmartError::Io {
                path: Some(path),
                source,
            } => write!(f, "I/O error on {}: {}", path.display(), source),
            ResmartError::Io { path: None, source } => write!(f, "I/O error: {}", source),
            ResmartError::MalformedPacket { offset, reason } => {
                write!(f, "Malformed packet at byte {}: {}", offset, reason)
            }
            ResmartError::InvalidDateRange(msg) => write!(f, "Invalid date range: {}", msg),
            #[cfg(feature = "csv")]
            ResmartError::Csv(err) => write!(f, "CSV error: {}", err),
            ResmartError::NoInputFiles(dir) => {
                write!(f, "No raw data files (*.NNN) found in {}", dir.display())
            }
        }
    }
}

impl std::error::Error for ResmartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResmartError::Io { source, .. } => Some(source),
            #[cfg(feature = "csv")]
            ResmartError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResmartError {
    fn from(err: std::io::Error) -> Self {
        ResmartError::Io {
            path: None,
            source: err,
        }
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for ResmartError {
    fn from(err: csv::Error) -> Self {
        ResmartError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, ResmartError>;

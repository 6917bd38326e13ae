use std::fmt;
use std::path::PathBuf;

/// Result type for linkgap-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing a log
#[derive(Debug)]
pub enum Error {
    /// The input could not be opened
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading failed after the input was opened
    Read(std::io::Error),

    /// Analysis settings are unusable
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnavailable { path, source } => {
                write!(f, "Cannot open log file {}: {}", path.display(), source)
            }
            Error::Read(err) => write!(f, "Error reading log file: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SourceUnavailable { source, .. } => Some(source),
            Error::Read(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Read(err)
    }
}

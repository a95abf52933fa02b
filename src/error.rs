use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PregrepError {
    #[error("query (with '-q') or preset key (with '-S') is required")]
    MissingQuery,

    #[error("preset '{0}' is not found in saved options")]
    PresetNotFound(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid target glob: {0}")]
    InvalidGlob(#[from] glob::PatternError),

    #[error("Option store '{path}' is corrupt: {reason}")]
    StorageCorrupt { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("An unexpected error occurred: {0}")]
    Other(String),
}

impl PregrepError {
    /// Process exit code for a fatal error. Missing query/preset is a usage
    /// error; everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PregrepError::MissingQuery | PregrepError::PresetNotFound(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PregrepError>;

/// Classification of a per-file failure. These never abort the run; they are
/// recorded on the file's result and summarized at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    PermissionDenied,
    Decode,
    InvalidConfig,
    Unknown,
}

impl ErrorKind {
    pub fn classify_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::Unknown,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::PermissionDenied => write!(f, "PermissionDeniedError"),
            ErrorKind::Decode => write!(f, "DecodeError"),
            ErrorKind::InvalidConfig => write!(f, "InvalidConfigError"),
            ErrorKind::Unknown => write!(f, "UnknownFileError"),
        }
    }
}

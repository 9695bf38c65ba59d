use std::{io, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("settings file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("settings file {} has invalid content: expected 1 byte, found {len}", path.display())]
    InvalidData { path: PathBuf, len: u64 },
    #[error("i/o error on settings file: {0}")]
    Io(#[from] io::Error),
}

/// Coarse classification of [`SettingsError`], for callers that only care
/// which class of failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InvalidData,
    Io,
}

impl SettingsError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SettingsError::InvalidArgument(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SettingsError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            SettingsError::NotFound { .. } => ErrorKind::NotFound,
            SettingsError::InvalidData { .. } => ErrorKind::InvalidData,
            SettingsError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an export.
///
/// Precondition errors are raised before anything touches the disk; the
/// remaining variants abort an export that is already writing files.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No selection given, select a region first")]
    MissingSelection,

    #[error("No center given, mark the center block first")]
    MissingCenter,

    #[error("Invalid BO3 name '{0}'")]
    InvalidName(String),

    #[error("Selection is in world '{expected}' but blocks are read from '{actual}'")]
    WorldMismatch { expected: String, actual: String },

    #[error("{0}")]
    Usage(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode NBT for {path}: {source}")]
    Nbt {
        path: PathBuf,
        #[source]
        source: quartz_nbt::io::NbtIoError,
    },

    #[error("Schematic error: {0}")]
    Schematic(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io { path: path.into(), source }
    }

    /// Whether the caller can fix the request and try again.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ExportError::MissingSelection
                | ExportError::MissingCenter
                | ExportError::InvalidName(_)
                | ExportError::WorldMismatch { .. }
                | ExportError::Usage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

use crate::model::{IbpiPattern, NpemCaps};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NpemError {
    #[error("Controller doesn't support {pattern} pattern")]
    UnknownPattern { pattern: IbpiPattern },

    #[error("Controller {} doesn't support {pattern} pattern", enclosure.display())]
    InvalidState {
        enclosure: PathBuf,
        pattern: IbpiPattern,
    },

    #[error("Enclosure {} is not accessible: {source}", path.display())]
    EnclosureUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {} on {}", failed.names().join(", "), enclosure.display())]
    PartialWrite { enclosure: PathBuf, failed: NpemCaps },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized pattern: {0}")]
    Parse(String),
}

impl NpemError {
    /// True for both flavours of "the requested pattern cannot be shown here".
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            NpemError::UnknownPattern { .. } | NpemError::InvalidState { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NpemError>;

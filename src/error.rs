use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The only failure the editor knows about: a file could not be read or
/// written. The display text is what the error dialog shows.
#[derive(Debug, Error)]
pub enum NotepadError {
    #[error("Cannot open file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot save file: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NotepadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            NotepadError::Open { path, .. } | NotepadError::Save { path, .. } => path,
        }
    }
}

pub type NotepadResult<T> = Result<T, NotepadError>;

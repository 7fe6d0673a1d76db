//! Modal dialogs the editor asks its host for: picking a file to open or
//! save, and showing a message.
//!
//! The controller only sees the [`Dialogs`] trait. The terminal front end
//! implements it with blocking modals built on [`FileDialog`] and
//! [`MessageBox`]; tests implement it with a scripted double.

pub mod file_dialog;
pub mod message;

pub use file_dialog::{DialogOutcome, FileDialog, FileEntry};
pub use message::{MessageBox, MessageKind};

use crate::constants::{ALL_FILES_LABEL, DEFAULT_EXTENSION, TEXT_FILES_LABEL};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFilter {
    TextFiles,
    AllFiles,
}

impl FileFilter {
    pub fn label(&self) -> &'static str {
        match self {
            FileFilter::TextFiles => TEXT_FILES_LABEL,
            FileFilter::AllFiles => ALL_FILES_LABEL,
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        match self {
            FileFilter::TextFiles => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt")),
            FileFilter::AllFiles => true,
        }
    }
}

pub const FILE_FILTERS: &[FileFilter] = &[FileFilter::TextFiles, FileFilter::AllFiles];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileDialogKind {
    Open,
    Save,
}

/// What the controller asks of a file chooser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRequest {
    pub kind: FileDialogKind,
    pub default_extension: &'static str,
    pub filters: &'static [FileFilter],
    pub initial_dir: Option<PathBuf>,
}

impl FileRequest {
    pub fn open(initial_dir: Option<PathBuf>) -> Self {
        Self {
            kind: FileDialogKind::Open,
            default_extension: DEFAULT_EXTENSION,
            filters: FILE_FILTERS,
            initial_dir,
        }
    }

    pub fn save(initial_dir: Option<PathBuf>) -> Self {
        Self {
            kind: FileDialogKind::Save,
            ..Self::open(initial_dir)
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            FileDialogKind::Open => "Open",
            FileDialogKind::Save => "Save As",
        }
    }
}

pub trait Dialogs {
    /// Block until the user picks a path or cancels.
    fn choose_file(&mut self, request: &FileRequest) -> Option<PathBuf>;

    /// Block until the user dismisses the message.
    fn show_message(&mut self, message: MessageBox);
}

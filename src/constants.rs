use std::time::Duration;

pub const APP_NAME: &str = "Notepad";
pub const VERSION: &str = "v1.0";
pub const UNTITLED: &str = "Untitled";
pub const ABOUT_TEXT: &str = "Simple Notepad\nBuilt with ratatui and tui-textarea\n\nVersion 1.0";

pub const DEFAULT_EXTENSION: &str = ".txt";
pub const TEXT_FILES_LABEL: &str = "Text Files (*.txt)";
pub const ALL_FILES_LABEL: &str = "All Files (*)";

// tui-textarea keeps its own history; this bounds it.
pub const MAX_UNDO_HISTORY: usize = 256;

pub const POLL_INTERVAL: Duration = Duration::from_millis(16);
pub const LOG_FILE: &str = "notepad.log";
pub const LOG_FILTER: &str = "notepad=debug";

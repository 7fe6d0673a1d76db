pub mod clipboard;
pub mod command;
pub mod document;
pub mod notepad;

pub use command::Command;
pub use document::{Document, LineEnding};
pub use notepad::Notepad;

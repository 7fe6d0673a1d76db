//! A small terminal notepad: one buffer, one optional file, a File/Edit/Help
//! menu bar and blocking modal dialogs for open, save and messages.

pub mod constants;
pub mod dialog;
pub mod editor;
pub mod error;
pub mod logging;
pub mod menu;
pub mod theme;

use crate::constants::ABOUT_TEXT;
use crate::dialog::{Dialogs, FileRequest, MessageBox};
use crate::editor::clipboard::SystemClipboard;
use crate::editor::command::Command;
use crate::editor::document::Document;
use crate::error::NotepadError;
use crossterm::event::KeyEvent;
use std::path::PathBuf;

/// The editor window controller. Owns the document and forwards every menu
/// command either to the text widget or to the host's dialogs.
pub struct Notepad {
    pub document: Document,
    clipboard: Option<SystemClipboard>,
    running: bool,
}

impl Notepad {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            clipboard: None,
            running: true,
        }
    }

    /// Mirror cut/copy/paste onto the system clipboard when one is reachable.
    pub fn with_system_clipboard(mut self) -> Self {
        self.clipboard = SystemClipboard::connect();
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    pub fn execute(&mut self, command: Command, dialogs: &mut dyn Dialogs) {
        tracing::debug!("command {:?}", command);
        match command {
            Command::New => self.new_file(),
            Command::Open => self.open_file(dialogs),
            Command::Save => self.save_file(dialogs),
            Command::SaveAs => self.save_as_file(dialogs),
            Command::Exit => self.exit(),
            Command::Cut => self.cut(),
            Command::Copy => self.copy(),
            Command::Paste => self.paste(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::About => self.show_about(dialogs),
        }
    }

    /// Keys that are not accelerators go straight to the text widget.
    pub fn handle_key(&mut self, key: KeyEvent, dialogs: &mut dyn Dialogs) {
        match Command::from_key(&key) {
            Some(command) => self.execute(command, dialogs),
            None => {
                self.document.textarea_mut().input(key);
            }
        }
    }

    pub fn new_file(&mut self) {
        self.document.clear();
    }

    pub fn open_file(&mut self, dialogs: &mut dyn Dialogs) {
        let Some(path) = dialogs.choose_file(&FileRequest::open(self.current_dir())) else {
            return;
        };
        match self.document.load(&path) {
            Ok(()) => tracing::info!("opened {}", path.display()),
            Err(e) => report(dialogs, e),
        }
    }

    pub fn save_file(&mut self, dialogs: &mut dyn Dialogs) {
        let Some(path) = self.document.file_path() else {
            return self.save_as_file(dialogs);
        };
        match self.document.write_to(path) {
            Ok(()) => tracing::info!("saved {}", path.display()),
            Err(e) => report(dialogs, e),
        }
    }

    pub fn save_as_file(&mut self, dialogs: &mut dyn Dialogs) {
        let Some(path) = dialogs.choose_file(&FileRequest::save(self.current_dir())) else {
            return;
        };
        match self.document.save_as(&path) {
            Ok(()) => tracing::info!("saved as {}", path.display()),
            Err(e) => report(dialogs, e),
        }
    }

    pub fn exit(&mut self) {
        self.running = false;
    }

    pub fn cut(&mut self) {
        if self.document.textarea_mut().cut() {
            self.export_yank();
        }
    }

    pub fn copy(&mut self) {
        self.document.textarea_mut().copy();
        self.export_yank();
    }

    pub fn paste(&mut self) {
        if let Some(clipboard) = self.clipboard.as_mut() {
            if let Some(text) = clipboard.get_text() {
                self.document.textarea_mut().set_yank_text(text);
            }
        }
        self.document.textarea_mut().paste();
    }

    pub fn undo(&mut self) {
        self.document.textarea_mut().undo();
    }

    pub fn redo(&mut self) {
        self.document.textarea_mut().redo();
    }

    pub fn show_about(&self, dialogs: &mut dyn Dialogs) {
        dialogs.show_message(MessageBox::info("About", ABOUT_TEXT));
    }

    fn export_yank(&mut self) {
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(&self.document.textarea().yank_text());
        }
    }

    /// File dialogs start next to the current file.
    fn current_dir(&self) -> Option<PathBuf> {
        self.document
            .file_path()
            .and_then(|path| path.parent())
            .map(|dir| dir.to_path_buf())
    }
}

impl Default for Notepad {
    fn default() -> Self {
        Self::new()
    }
}

fn report(dialogs: &mut dyn Dialogs, error: NotepadError) {
    tracing::warn!("{} ({})", error, error.path().display());
    dialogs.show_message(MessageBox::error("Error", error.to_string()));
}

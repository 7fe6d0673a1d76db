use crate::ui::{render_file_dialog, render_message};
use crossterm::event::{self, Event, KeyEventKind};
use notepad::dialog::{DialogOutcome, Dialogs, FileDialog, FileRequest, MessageBox};
use notepad::theme::Theme;
use ratatui::{Frame, Terminal, backend::Backend, buffer::Buffer};
use std::io;
use std::path::PathBuf;

/// Blocking modal dialogs drawn over the last editor frame. Each call runs
/// its own read/draw loop until the dialog closes, like a native dialog.
pub(crate) struct TerminalDialogs<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    backdrop: Buffer,
    theme: &'a Theme,
}

impl<'a, B: Backend> TerminalDialogs<'a, B> {
    pub(crate) fn new(terminal: &'a mut Terminal<B>, backdrop: Buffer, theme: &'a Theme) -> Self {
        Self {
            terminal,
            backdrop,
            theme,
        }
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame, &Theme)) -> io::Result<()> {
        let backdrop = &self.backdrop;
        let theme = self.theme;
        self.terminal.draw(|f| {
            if backdrop.area == f.area() {
                f.buffer_mut().merge(backdrop);
            }
            render(f, theme);
        })?;
        Ok(())
    }

    fn run_file_dialog(&mut self, dialog: &mut FileDialog) -> io::Result<Option<PathBuf>> {
        loop {
            self.draw(|f, theme| render_file_dialog(f, dialog, theme))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match dialog.handle_key(&key) {
                    DialogOutcome::Pending => {}
                    DialogOutcome::Cancelled => return Ok(None),
                    DialogOutcome::Chosen(path) => return Ok(Some(path)),
                }
            }
        }
    }

    fn run_message(&mut self, message: &MessageBox) -> io::Result<()> {
        loop {
            self.draw(|f, theme| render_message(f, message, theme))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && message.handle_key(&key) {
                    return Ok(());
                }
            }
        }
    }
}

impl<B: Backend> Dialogs for TerminalDialogs<'_, B> {
    fn choose_file(&mut self, request: &FileRequest) -> Option<PathBuf> {
        let mut dialog = FileDialog::new(request.clone());
        match self.run_file_dialog(&mut dialog) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("file dialog aborted: {}", e);
                None
            }
        }
    }

    fn show_message(&mut self, message: MessageBox) {
        if let Err(e) = self.run_message(&message) {
            tracing::warn!("message dialog aborted: {}", e);
        }
    }
}

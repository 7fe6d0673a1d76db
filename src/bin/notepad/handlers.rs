use crossterm::event::KeyEvent;
use notepad::editor::Command;
use notepad::menu::{MenuBar, MenuResponse};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum KeyRoute {
    /// The menu bar used the key.
    Handled,
    Run(Command),
    /// Accelerator or plain editing; the controller decides.
    Editor,
}

/// An open menu swallows every key; otherwise only F10 and Alt+mnemonics
/// reach it.
pub(crate) fn route_key(menu: &mut MenuBar, key: &KeyEvent) -> KeyRoute {
    match menu.handle_key(key) {
        MenuResponse::Activate(command) => KeyRoute::Run(command),
        MenuResponse::Consumed => KeyRoute::Handled,
        MenuResponse::Ignored => KeyRoute::Editor,
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a menu item or accelerator can ask the editor to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    Cut,
    Copy,
    Paste,
    Undo,
    Redo,
    About,
}

impl Command {
    pub fn from_key(key: &KeyEvent) -> Option<Command> {
        if key.code == KeyCode::F(12) && key.modifiers.is_empty() {
            return Some(Command::SaveAs);
        }

        if !key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT)
        {
            return None;
        }

        let KeyCode::Char(c) = key.code else {
            return None;
        };

        match c.to_ascii_lowercase() {
            'n' => Some(Command::New),
            'o' => Some(Command::Open),
            's' => Some(Command::Save),
            'z' => Some(Command::Undo),
            'y' => Some(Command::Redo),
            'x' => Some(Command::Cut),
            'c' => Some(Command::Copy),
            'v' => Some(Command::Paste),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open...",
            Command::Save => "Save",
            Command::SaveAs => "Save As...",
            Command::Exit => "Exit",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::About => "About",
        }
    }

    pub fn accelerator(&self) -> Option<&'static str> {
        match self {
            Command::New => Some("Ctrl+N"),
            Command::Open => Some("Ctrl+O"),
            Command::Save => Some("Ctrl+S"),
            Command::SaveAs => Some("F12"),
            Command::Cut => Some("Ctrl+X"),
            Command::Copy => Some("Ctrl+C"),
            Command::Paste => Some("Ctrl+V"),
            Command::Undo => Some("Ctrl+Z"),
            Command::Redo => Some("Ctrl+Y"),
            Command::Exit | Command::About => None,
        }
    }
}

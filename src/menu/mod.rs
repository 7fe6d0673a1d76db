//! The File/Edit/Help menu bar and its keyboard navigation.

use crate::editor::command::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A menu item (action or separator)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Action(Command),
    Separator,
}

/// A top-level menu in the menu bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub label: &'static str,
    /// Alt+<mnemonic> opens the menu directly.
    pub mnemonic: char,
    pub items: Vec<MenuItem>,
}

pub fn default_menus() -> Vec<Menu> {
    use MenuItem::{Action, Separator};

    vec![
        Menu {
            label: "File",
            mnemonic: 'f',
            items: vec![
                Action(Command::New),
                Action(Command::Open),
                Action(Command::Save),
                Action(Command::SaveAs),
                Separator,
                Action(Command::Exit),
            ],
        },
        Menu {
            label: "Edit",
            mnemonic: 'e',
            items: vec![
                Action(Command::Cut),
                Action(Command::Copy),
                Action(Command::Paste),
                Separator,
                Action(Command::Undo),
                Action(Command::Redo),
            ],
        },
        Menu {
            label: "Help",
            mnemonic: 'h',
            items: vec![Action(Command::About)],
        },
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuResponse {
    /// The key was not for the menu bar.
    Ignored,
    Consumed,
    Activate(Command),
}

pub struct MenuBar {
    pub menus: Vec<Menu>,
    /// Index of the open menu, if the bar is active.
    pub open: Option<usize>,
    pub highlighted: usize,
}

impl MenuBar {
    pub fn new() -> Self {
        Self {
            menus: default_menus(),
            open: None,
            highlighted: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_menu(&mut self, index: usize) {
        if index >= self.menus.len() {
            return;
        }
        self.open = Some(index);
        self.highlighted = self.first_action(index).unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = None;
        self.highlighted = 0;
    }

    fn first_action(&self, menu: usize) -> Option<usize> {
        self.menus[menu]
            .items
            .iter()
            .position(|item| matches!(item, MenuItem::Action(_)))
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> MenuResponse {
        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key.code {
                let c = c.to_ascii_lowercase();
                if let Some(idx) = self.menus.iter().position(|m| m.mnemonic == c) {
                    self.open_menu(idx);
                    return MenuResponse::Consumed;
                }
            }
        }

        let Some(open) = self.open else {
            if key.code == KeyCode::F(10) {
                self.open_menu(0);
                return MenuResponse::Consumed;
            }
            return MenuResponse::Ignored;
        };

        match key.code {
            KeyCode::Esc | KeyCode::F(10) => self.close(),
            KeyCode::Left => {
                let count = self.menus.len();
                self.open_menu((open + count - 1) % count);
            }
            KeyCode::Right => self.open_menu((open + 1) % self.menus.len()),
            KeyCode::Up => self.step(open, false),
            KeyCode::Down => self.step(open, true),
            KeyCode::Enter => {
                if let Some(MenuItem::Action(command)) =
                    self.menus[open].items.get(self.highlighted).copied()
                {
                    self.close();
                    return MenuResponse::Activate(command);
                }
            }
            _ => {}
        }
        MenuResponse::Consumed
    }

    /// Move the highlight to the next action, skipping separators and wrapping.
    fn step(&mut self, menu: usize, forward: bool) {
        let items = &self.menus[menu].items;
        let len = items.len();
        let mut idx = self.highlighted;
        for _ in 0..len {
            idx = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
            if matches!(items[idx], MenuItem::Action(_)) {
                self.highlighted = idx;
                return;
            }
        }
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn highlighted_command(bar: &MenuBar) -> Option<Command> {
        match bar.menus[bar.open?].items[bar.highlighted] {
            MenuItem::Action(c) => Some(c),
            MenuItem::Separator => None,
        }
    }

    #[test]
    fn test_default_layout() {
        let menus = default_menus();
        let labels: Vec<_> = menus.iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["File", "Edit", "Help"]);
        assert!(menus[0].items.contains(&MenuItem::Action(Command::SaveAs)));
        assert_eq!(menus[2].items, vec![MenuItem::Action(Command::About)]);
    }

    #[test]
    fn test_keys_are_ignored_while_closed() {
        let mut bar = MenuBar::new();
        assert_eq!(bar.handle_key(&key(KeyCode::Down)), MenuResponse::Ignored);
        assert_eq!(bar.handle_key(&key(KeyCode::Char('a'))), MenuResponse::Ignored);
        assert!(!bar.is_open());
    }

    #[test]
    fn test_f10_opens_file_menu_and_enter_activates() {
        let mut bar = MenuBar::new();
        assert_eq!(bar.handle_key(&key(KeyCode::F(10))), MenuResponse::Consumed);
        assert_eq!(highlighted_command(&bar), Some(Command::New));

        bar.handle_key(&key(KeyCode::Down));
        assert_eq!(
            bar.handle_key(&key(KeyCode::Enter)),
            MenuResponse::Activate(Command::Open)
        );
        assert!(!bar.is_open());
    }

    #[test]
    fn test_navigation_skips_separator_and_wraps() {
        let mut bar = MenuBar::new();
        bar.open_menu(0);
        for _ in 0..3 {
            bar.handle_key(&key(KeyCode::Down));
        }
        assert_eq!(highlighted_command(&bar), Some(Command::SaveAs));
        bar.handle_key(&key(KeyCode::Down));
        assert_eq!(highlighted_command(&bar), Some(Command::Exit));
        bar.handle_key(&key(KeyCode::Down));
        assert_eq!(highlighted_command(&bar), Some(Command::New));
        bar.handle_key(&key(KeyCode::Up));
        assert_eq!(highlighted_command(&bar), Some(Command::Exit));
    }

    #[test]
    fn test_alt_mnemonic_and_left_right() {
        let mut bar = MenuBar::new();
        let alt_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::ALT);
        assert_eq!(bar.handle_key(&alt_e), MenuResponse::Consumed);
        assert_eq!(bar.open, Some(1));
        assert_eq!(highlighted_command(&bar), Some(Command::Cut));

        bar.handle_key(&key(KeyCode::Right));
        assert_eq!(highlighted_command(&bar), Some(Command::About));
        bar.handle_key(&key(KeyCode::Right));
        assert_eq!(bar.open, Some(0));
        bar.handle_key(&key(KeyCode::Left));
        assert_eq!(bar.open, Some(2));
    }

    #[test]
    fn test_escape_closes() {
        let mut bar = MenuBar::new();
        bar.open_menu(1);
        assert_eq!(bar.handle_key(&key(KeyCode::Esc)), MenuResponse::Consumed);
        assert!(!bar.is_open());
    }
}

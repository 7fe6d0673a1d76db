use crossterm::event::{KeyCode, KeyEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBox {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
}

impl MessageBox {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    /// True once the key closes the box.
    pub fn handle_key(&self, key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_dismiss_keys() {
        let msg = MessageBox::error("Error", "Cannot open file: gone");
        assert_eq!(msg.kind, MessageKind::Error);
        assert!(msg.handle_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(msg.handle_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!msg.handle_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
    }
}

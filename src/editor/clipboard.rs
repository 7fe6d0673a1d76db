//! Mirror of the text widget's yank buffer onto the system clipboard.
//!
//! The widget's own clipboard always works; arboard is best effort and any
//! failure just leaves the widget-local text in place.

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn connect() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(inner) => Some(Self { inner }),
            Err(e) => {
                tracing::debug!("arboard clipboard init failed: {}", e);
                None
            }
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Err(e) = self.inner.set_text(text) {
            tracing::debug!("arboard copy failed: {}", e);
        }
    }

    pub fn get_text(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("arboard paste failed: {}", e);
                None
            }
        }
    }
}

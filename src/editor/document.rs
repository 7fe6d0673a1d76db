use crate::constants::{APP_NAME, MAX_UNDO_HISTORY, UNTITLED};
use crate::error::{NotepadError, NotepadResult};
use std::path::{Path, PathBuf};
use tui_textarea::TextArea;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// A file counts as CRLF when its first line break is `\r\n`. Every line
    /// is written back with this one ending, so mixed files are normalised.
    pub fn detect(content: &str) -> Self {
        match content.find('\n') {
            Some(idx) if idx > 0 && content.as_bytes()[idx - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// The open document: the text widget that holds the buffer, plus the file
/// it was last loaded from or saved to.
pub struct Document {
    textarea: TextArea<'static>,
    file_path: Option<PathBuf>,
    line_ending: LineEnding,
}

impl Document {
    pub fn new() -> Self {
        Self {
            textarea: Self::build_textarea(Vec::new()),
            file_path: None,
            line_ending: LineEnding::Lf,
        }
    }

    fn build_textarea(lines: Vec<String>) -> TextArea<'static> {
        let mut textarea = TextArea::new(lines);
        textarea.set_max_histories(MAX_UNDO_HISTORY);
        textarea.set_hard_tab_indent(true);
        textarea
    }

    fn split_lines(content: &str) -> Vec<String> {
        content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }

    pub fn clear(&mut self) {
        self.textarea = Self::build_textarea(Vec::new());
        self.file_path = None;
        self.line_ending = LineEnding::Lf;
    }

    /// Replace the buffer with the contents of `path`. Nothing changes if the
    /// read fails.
    pub fn load(&mut self, path: &Path) -> NotepadResult<()> {
        let content = std::fs::read_to_string(path).map_err(|source| NotepadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.line_ending = LineEnding::detect(&content);
        self.textarea = Self::build_textarea(Self::split_lines(&content));
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the buffer to `path` and adopt it as the file reference on success.
    pub fn save_as(&mut self, path: &Path) -> NotepadResult<()> {
        self.write_to(path)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the buffer to `path` without touching the file reference.
    pub fn write_to(&self, path: &Path) -> NotepadResult<()> {
        std::fs::write(path, self.text()).map_err(|source| NotepadError::Save {
            path: path.to_path_buf(),
            source,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_text(&mut self, text: &str) {
        self.textarea = Self::build_textarea(Self::split_lines(text));
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join(self.line_ending.as_str())
    }

    pub fn is_empty(&self) -> bool {
        let lines = self.textarea.lines();
        lines.len() == 1 && lines[0].is_empty()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn title(&self) -> String {
        match &self.file_path {
            Some(path) => format!("{} - {}", path.display(), APP_NAME),
            None => format!("{} - {}", UNTITLED, APP_NAME),
        }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// 1-based line and column for the status bar.
    pub fn cursor_position(&self) -> (usize, usize) {
        let (row, col) = self.textarea.cursor();
        (row + 1, col + 1)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::fs;
    use tempfile::TempDir;

    fn document_with(text: &str) -> Document {
        let mut doc = Document::new();
        doc.set_text(text);
        doc
    }

    #[test]
    fn test_new_document_is_untitled_and_empty() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.file_path(), None);
        assert_eq!(doc.title(), "Untitled - Notepad");
    }

    #[test]
    fn test_load_replaces_buffer_and_sets_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "first\nsecond").unwrap();

        let mut doc = document_with("old");
        doc.load(&path).unwrap();

        assert_eq!(doc.text(), "first\nsecond");
        assert_eq!(doc.file_path(), Some(path.as_path()));
        assert_eq!(doc.title(), format!("{} - Notepad", path.display()));
    }

    #[test]
    fn test_load_missing_file_leaves_state_alone() {
        let dir = TempDir::new().unwrap();
        let mut doc = document_with("keep me");

        let err = doc.load(&dir.path().join("missing.txt")).unwrap_err();

        assert!(matches!(err, NotepadError::Open { .. }));
        assert!(err.to_string().starts_with("Cannot open file: "));
        assert_eq!(doc.text(), "keep me");
        assert_eq!(doc.file_path(), None);
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let mut doc = Document::new();
        assert!(doc.load(&path).is_err());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_trailing_newline_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trailing.txt");
        fs::write(&path, "line\n").unwrap();

        let mut doc = Document::new();
        doc.load(&path).unwrap();
        doc.write_to(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "line\n");
    }

    #[test]
    fn test_crlf_is_detected_and_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dos.txt");
        fs::write(&path, "a\r\nb\r\n").unwrap();

        let mut doc = Document::new();
        doc.load(&path).unwrap();
        assert_eq!(doc.line_ending(), LineEnding::CrLf);
        assert_eq!(doc.textarea().lines(), ["a", "b", ""]);

        doc.write_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\r\nb\r\n");
    }

    #[test]
    fn test_save_as_sets_path_only_on_success() {
        let dir = TempDir::new().unwrap();
        let mut doc = document_with("hello");

        let bad = dir.path().join("no_such_dir").join("out.txt");
        assert!(doc.save_as(&bad).is_err());
        assert_eq!(doc.file_path(), None);

        let good = dir.path().join("out.txt");
        doc.save_as(&good).unwrap();
        assert_eq!(doc.file_path(), Some(good.as_path()));
        assert_eq!(fs::read_to_string(&good).unwrap(), "hello");
    }

    #[test]
    fn test_clear_resets_everything() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dos.txt");
        fs::write(&path, "x\r\ny").unwrap();

        let mut doc = Document::new();
        doc.load(&path).unwrap();
        doc.clear();

        assert!(doc.is_empty());
        assert_eq!(doc.file_path(), None);
        assert_eq!(doc.line_ending(), LineEnding::Lf);
    }

    #[test]
    fn test_mixed_line_endings_are_normalised_to_first() {
        let dir = TempDir::new().unwrap();
        let lf_first = dir.path().join("lf_first.txt");
        let crlf_first = dir.path().join("crlf_first.txt");
        fs::write(&lf_first, "a\nb\r\nc").unwrap();
        fs::write(&crlf_first, "a\r\nb\nc").unwrap();

        let mut doc = Document::new();
        doc.load(&lf_first).unwrap();
        assert_eq!(doc.textarea().lines(), ["a", "b", "c"]);
        doc.write_to(&lf_first).unwrap();
        assert_eq!(fs::read(&lf_first).unwrap(), b"a\nb\nc");

        doc.load(&crlf_first).unwrap();
        doc.write_to(&crlf_first).unwrap();
        assert_eq!(fs::read(&crlf_first).unwrap(), b"a\r\nb\r\nc");
    }

    #[test]
    fn test_tab_key_inserts_literal_tab() {
        let mut doc = Document::new();
        doc.textarea_mut()
            .input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(doc.text(), "\t");

        doc.clear();
        doc.textarea_mut()
            .input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(doc.text(), "\t");
    }

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
        assert_eq!(LineEnding::detect("one line"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\nb\r\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("\n"), LineEnding::Lf);
    }
}

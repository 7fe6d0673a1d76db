use super::{FileDialogKind, FileFilter, FileRequest};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Pending,
    Cancelled,
    Chosen(PathBuf),
}

/// State of the terminal file chooser: a directory listing narrowed by the
/// active filter, plus a file-name line the user can type into.
pub struct FileDialog {
    pub request: FileRequest,
    pub directory: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected: usize,
    pub filter_index: usize,
    pub file_name: String,
    /// Char index into `file_name`.
    pub cursor: usize,
    pub listing_error: Option<String>,
    /// Save target that already exists, waiting for a yes/no answer.
    pub overwrite_prompt: Option<PathBuf>,
}

impl FileDialog {
    pub fn new(request: FileRequest) -> Self {
        let start = request
            .initial_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let directory = std::path::absolute(&start).unwrap_or(start);

        let mut dialog = Self {
            request,
            directory,
            entries: Vec::new(),
            selected: 0,
            filter_index: 0,
            file_name: String::new(),
            cursor: 0,
            listing_error: None,
            overwrite_prompt: None,
        };
        dialog.refresh();
        dialog
    }

    pub fn filter(&self) -> FileFilter {
        self.request
            .filters
            .get(self.filter_index)
            .copied()
            .unwrap_or(FileFilter::AllFiles)
    }

    pub fn refresh(&mut self) {
        let mut entries = Vec::new();

        if let Some(parent) = self.directory.parent() {
            entries.push(FileEntry {
                path: parent.to_path_buf(),
                is_dir: true,
                name: "..".to_string(),
            });
        }

        let filter = self.filter();
        match std::fs::read_dir(&self.directory) {
            Ok(read_dir) => {
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in read_dir.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().into_owned();
                    if path.is_dir() {
                        dirs.push(FileEntry { path, is_dir: true, name });
                    } else if filter.matches(&path) {
                        files.push(FileEntry { path, is_dir: false, name });
                    }
                }

                dirs.sort_by(|a, b| a.name.cmp(&b.name));
                files.sort_by(|a, b| a.name.cmp(&b.name));
                entries.extend(dirs);
                entries.extend(files);
                self.listing_error = None;
            }
            Err(e) => {
                tracing::debug!("cannot list {}: {}", self.directory.display(), e);
                self.listing_error = Some(e.to_string());
            }
        }

        self.entries = entries;
        if self.selected >= self.entries.len() {
            self.selected = 0;
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> DialogOutcome {
        if self.overwrite_prompt.is_some() {
            return self.answer_overwrite(key);
        }

        match key.code {
            KeyCode::Esc => return DialogOutcome::Cancelled,
            KeyCode::Enter => return self.confirm(),
            KeyCode::Tab | KeyCode::BackTab => self.cycle_filter(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.file_name.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.file_name.chars().count(),
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.remove_char_at_cursor();
            }
            KeyCode::Delete => self.remove_char_at_cursor(),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let idx = self.byte_index(self.cursor);
                self.file_name.insert(idx, c);
                self.cursor += 1;
            }
            _ => {}
        }
        DialogOutcome::Pending
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.file_name
            .char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(self.file_name.len())
    }

    fn remove_char_at_cursor(&mut self) {
        if self.cursor < self.file_name.chars().count() {
            let idx = self.byte_index(self.cursor);
            self.file_name.remove(idx);
        }
    }

    fn set_file_name(&mut self, name: &str) {
        self.file_name = name.to_string();
        self.cursor = self.file_name.chars().count();
    }

    fn cycle_filter(&mut self) {
        if self.request.filters.is_empty() {
            return;
        }
        self.filter_index = (self.filter_index + 1) % self.request.filters.len();
        self.refresh();
    }

    fn move_selection(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        self.selected = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(last)
        };
        let name = self.entries[self.selected].name.clone();
        self.set_file_name(&name);
    }

    fn enter_directory(&mut self, dir: PathBuf) {
        self.directory = dir;
        self.selected = 0;
        self.file_name.clear();
        self.cursor = 0;
        self.refresh();
    }

    fn confirm(&mut self) -> DialogOutcome {
        let name = self.file_name.trim().to_string();
        if name.is_empty() {
            return DialogOutcome::Pending;
        }

        if name == ".." {
            if let Some(parent) = self.directory.parent() {
                let parent = parent.to_path_buf();
                self.enter_directory(parent);
            }
            return DialogOutcome::Pending;
        }

        let typed = Path::new(&name);
        let joined = if typed.is_absolute() {
            typed.to_path_buf()
        } else {
            self.directory.join(typed)
        };

        if joined.is_dir() {
            let dir = joined.canonicalize().unwrap_or(joined);
            self.enter_directory(dir);
            return DialogOutcome::Pending;
        }

        let path = self.resolve(joined);
        if self.request.kind == FileDialogKind::Save && path.is_file() {
            self.overwrite_prompt = Some(path);
            return DialogOutcome::Pending;
        }
        DialogOutcome::Chosen(path)
    }

    fn answer_overwrite(&mut self, key: &KeyEvent) -> DialogOutcome {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                match self.overwrite_prompt.take() {
                    Some(path) => DialogOutcome::Chosen(path),
                    None => DialogOutcome::Pending,
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.overwrite_prompt = None;
                DialogOutcome::Pending
            }
            _ => DialogOutcome::Pending,
        }
    }

    /// Save dialogs add the default extension when the name has none.
    fn resolve(&self, path: PathBuf) -> PathBuf {
        let path = std::path::absolute(&path).unwrap_or(path);
        if self.request.kind == FileDialogKind::Save && path.extension().is_none() {
            let mut raw = path.into_os_string();
            raw.push(self.request.default_extension);
            return PathBuf::from(raw);
        }
        path
    }
}

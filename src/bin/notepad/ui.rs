use notepad::dialog::{FileDialog, MessageBox, MessageKind};
use notepad::editor::{LineEnding, Notepad};
use notepad::menu::{MenuBar, MenuItem};
use notepad::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn ui(f: &mut Frame, notepad: &mut Notepad, menu: &MenuBar, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title_bar(f, &notepad.title(), theme, layout[0]);
    render_menu_bar(f, menu, theme, layout[1]);
    render_text_area(f, notepad, theme, layout[2]);
    render_status_bar(f, notepad, theme, layout[3]);

    if menu.is_open() {
        render_menu_dropdown(f, menu, theme, layout[1]);
    }
}

fn render_title_bar(f: &mut Frame, title: &str, theme: &Theme, area: Rect) {
    let title = truncate_left(title, area.width as usize);
    let p = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(theme.title_bar());
    f.render_widget(p, area);
}

/// X offset of each menu title inside the menu bar.
fn menu_offsets(menu: &MenuBar) -> Vec<u16> {
    let mut x = 0u16;
    menu.menus
        .iter()
        .map(|m| {
            let at = x;
            x += m.label.width() as u16 + 2;
            at
        })
        .collect()
}

fn render_menu_bar(f: &mut Frame, menu: &MenuBar, theme: &Theme, area: Rect) {
    let spans: Vec<Span> = menu
        .menus
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let style = if menu.open == Some(idx) {
                theme.menu_selected()
            } else {
                theme.menu()
            };
            Span::styled(format!(" {} ", m.label), style)
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)).style(theme.menu()), area);
}

fn render_menu_dropdown(f: &mut Frame, menu: &MenuBar, theme: &Theme, bar: Rect) {
    let Some(open) = menu.open else {
        return;
    };
    let items = &menu.menus[open].items;

    let rows: Vec<(String, String)> = items
        .iter()
        .map(|item| match item {
            MenuItem::Action(command) => (
                command.label().to_string(),
                command.accelerator().unwrap_or("").to_string(),
            ),
            MenuItem::Separator => (String::new(), String::new()),
        })
        .collect();

    let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    let accel_width = rows.iter().map(|(_, a)| a.width()).max().unwrap_or(0);
    let inner_width = label_width + accel_width + 4;

    let screen = f.area();
    let x = bar.x + menu_offsets(menu)[open];
    let area = Rect {
        x,
        y: bar.y + 1,
        width: (inner_width as u16 + 2).min(screen.width.saturating_sub(x)),
        height: (items.len() as u16 + 2).min(screen.height.saturating_sub(bar.y + 1)),
    };

    let list_items: Vec<ListItem> = items
        .iter()
        .zip(rows.iter())
        .map(|(item, (label, accel))| match item {
            MenuItem::Separator => {
                ListItem::new("─".repeat(inner_width)).style(Style::default().fg(theme.muted))
            }
            MenuItem::Action(_) => ListItem::new(format!(
                " {:<lw$}  {:>aw$} ",
                label,
                accel,
                lw = label_width,
                aw = accel_width
            )),
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL).style(theme.menu()))
        .highlight_style(theme.menu_selected());

    f.render_widget(Clear, area);
    let mut state = ListState::default().with_selected(Some(menu.highlighted));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_text_area(f: &mut Frame, notepad: &mut Notepad, theme: &Theme, area: Rect) {
    let textarea = notepad.document.textarea_mut();
    textarea.set_style(theme.base());
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_selection_style(theme.selection());
    f.render_widget(&*textarea, area);
}

fn render_status_bar(f: &mut Frame, notepad: &Notepad, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(38)])
        .split(area);

    let (line, col) = notepad.document.cursor_position();
    let ending = match notepad.document.line_ending() {
        LineEnding::Lf => "LF",
        LineEnding::CrLf => "CRLF",
    };
    let left = Paragraph::new(format!(" Ln {}, Col {}   {}   UTF-8", line, col, ending))
        .style(theme.status());
    let right = Paragraph::new("F10 Menu  Ctrl+S Save  F12 Save As ")
        .alignment(Alignment::Right)
        .style(theme.status());

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

pub(crate) fn render_file_dialog(f: &mut Frame, dialog: &FileDialog, theme: &Theme) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", dialog.request.title()))
        .border_style(Style::default().fg(theme.accent))
        .style(theme.menu());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let look_in = format!("Look in: {}", dialog.directory.display());
    f.render_widget(
        Paragraph::new(truncate_left(&look_in, chunks[0].width as usize)),
        chunks[0],
    );

    let items: Vec<ListItem> = match &dialog.listing_error {
        Some(err) => vec![
            ListItem::new(format!("Cannot read directory: {}", err))
                .style(Style::default().fg(theme.error)),
        ],
        None => dialog
            .entries
            .iter()
            .map(|entry| {
                let icon = if entry.is_dir { "📁 " } else { "📄 " };
                ListItem::new(format!("{}{}", icon, entry.name))
            })
            .collect(),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM))
        .highlight_style(theme.menu_selected());
    let mut state = ListState::default().with_selected(Some(dialog.selected));
    f.render_stateful_widget(list, chunks[1], &mut state);

    let label = "File name: ";
    let name_line = Line::from(vec![
        Span::raw(label),
        Span::styled(
            dialog.file_name.clone(),
            Style::default().fg(theme.text).bg(theme.input_bg),
        ),
    ]);
    f.render_widget(Paragraph::new(name_line), chunks[2]);

    let before_cursor: usize = dialog
        .file_name
        .chars()
        .take(dialog.cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    let cursor_x = chunks[2].x + (label.width() + before_cursor) as u16;
    f.set_cursor_position((
        cursor_x.min(chunks[2].right().saturating_sub(1)),
        chunks[2].y,
    ));

    if let Some(path) = &dialog.overwrite_prompt {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let question = Line::from(Span::styled(
            format!("{} already exists. Replace it? (y/n)", name),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Paragraph::new(question), chunks[3]);
        return;
    }

    let filter_line = Line::from(vec![
        Span::raw("Files of type: "),
        Span::styled(
            dialog.filter().label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "   Tab switch  Enter ok  Esc cancel",
            Style::default().fg(theme.muted),
        ),
    ]);
    f.render_widget(Paragraph::new(filter_line), chunks[3]);
}

pub(crate) fn render_message(f: &mut Frame, message: &MessageBox, theme: &Theme) {
    let screen = f.area();
    let width = 60.min(screen.width.saturating_sub(4)).max(10);
    let text_width = width.saturating_sub(4).max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for paragraph in message.body.split('\n') {
        if paragraph.is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        for wrapped in textwrap::wrap(paragraph, text_width) {
            lines.push(Line::from(wrapped.into_owned()));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[ OK ]", theme.menu_selected())).alignment(Alignment::Center));

    let height = (lines.len() as u16 + 2).min(screen.height);
    let area = centered_fixed(width, height, screen);

    let accent = match message.kind {
        MessageKind::Info => theme.accent,
        MessageKind::Error => theme.error,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", message.title))
        .border_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .style(theme.menu());

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Keep the end of a long path visible.
fn truncate_left(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut kept = Vec::new();
    let mut width = 1;
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        kept.push(c);
    }
    let tail: String = kept.into_iter().rev().collect();
    format!("…{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notepad::dialog::FileRequest;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_main_window_shows_title_menu_and_status() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut notepad = Notepad::new();
        let menu = MenuBar::new();
        let theme = Theme::default();

        terminal
            .draw(|f| ui(f, &mut notepad, &menu, &theme))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Untitled - Notepad"));
        assert!(text.contains(" File  Edit  Help "));
        assert!(text.contains("Ln 1, Col 1"));
    }

    #[test]
    fn test_open_menu_lists_items_with_accelerators() {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        let mut notepad = Notepad::new();
        let mut menu = MenuBar::new();
        menu.open_menu(1);
        let theme = Theme::default();

        terminal
            .draw(|f| ui(f, &mut notepad, &menu, &theme))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Cut"));
        assert!(text.contains("Ctrl+X"));
        assert!(text.contains("Redo"));
        assert!(text.contains("Ctrl+Y"));
    }

    #[test]
    fn test_error_message_renders_title_and_body() {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        let message = MessageBox::error("Error", "Cannot open file: No such file or directory");
        let theme = Theme::default();

        terminal
            .draw(|f| render_message(f, &message, &theme))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(" Error "));
        assert!(text.contains("Cannot open file: No such file or directory"));
        assert!(text.contains("[ OK ]"));
    }

    #[test]
    fn test_file_dialog_renders_filter_and_title() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("todo.txt"), "x").unwrap();
        let dialog = FileDialog::new(FileRequest::save(Some(dir.path().to_path_buf())));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| render_file_dialog(f, &dialog, &theme))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(" Save As "));
        assert!(text.contains("Text Files (*.txt)"));
        assert!(text.contains("todo.txt"));
    }

    #[test]
    fn test_file_dialog_shows_replace_question() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("todo.txt"), "x").unwrap();
        let mut dialog = FileDialog::new(FileRequest::save(Some(dir.path().to_path_buf())));
        for c in "todo".chars() {
            dialog.handle_key(&crossterm::event::KeyEvent::from(crossterm::event::KeyCode::Char(c)));
        }
        dialog.handle_key(&crossterm::event::KeyEvent::from(crossterm::event::KeyCode::Enter));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| render_file_dialog(f, &dialog, &theme))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("todo.txt already exists. Replace it? (y/n)"));
    }

    #[test]
    fn test_truncate_left_keeps_tail() {
        assert_eq!(truncate_left("short", 10), "short");
        assert_eq!(truncate_left("/very/long/path.txt", 9), "…path.txt");
    }
}

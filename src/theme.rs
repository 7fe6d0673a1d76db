use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub accent: Color,
    pub bg: Color,
    pub header_bg: Color,
    pub menu_bg: Color,
    pub status_bg: Color,
    pub input_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
}

pub const CLASSIC: Theme = Theme {
    name: "Classic",
    accent: Color::Rgb(0, 90, 180),
    bg: Color::Rgb(250, 250, 250),
    header_bg: Color::Rgb(0, 90, 180),
    menu_bg: Color::Rgb(230, 230, 235),
    status_bg: Color::Rgb(230, 230, 235),
    input_bg: Color::Rgb(255, 255, 255),
    text: Color::Rgb(20, 20, 20),
    muted: Color::Rgb(110, 110, 120),
    error: Color::Rgb(190, 30, 30),
};

impl Theme {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn title_bar(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn menu(&self) -> Style {
        Style::default().fg(self.text).bg(self.menu_bg)
    }

    /// Highlighted menu title or item.
    pub fn menu_selected(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status(&self) -> Style {
        Style::default().fg(self.muted).bg(self.status_bg)
    }

    pub fn selection(&self) -> Style {
        Style::default().fg(Color::White).bg(self.accent)
    }
}

impl Default for Theme {
    fn default() -> Self {
        CLASSIC
    }
}

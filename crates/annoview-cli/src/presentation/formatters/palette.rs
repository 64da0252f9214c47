use annoview_types::ErrorType;
use owo_colors::OwoColorize;
use ratatui::style::Color;

/// Colour of an error type, shared by console and TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Red,
    Yellow,
    Magenta,
    Gray,
}

impl Palette {
    pub fn for_label(label: &str) -> Self {
        match ErrorType::from_label(label) {
            ErrorType::Linguistic => Palette::Red,
            ErrorType::Cultural => Palette::Yellow,
            ErrorType::Both => Palette::Magenta,
            ErrorType::Other(_) => Palette::Gray,
        }
    }

    pub fn paint(self, text: &str) -> String {
        match self {
            Palette::Red => text.red().to_string(),
            Palette::Yellow => text.yellow().to_string(),
            Palette::Magenta => text.magenta().to_string(),
            Palette::Gray => text.bright_black().to_string(),
        }
    }

    /// Highlighted span text: coloured and underlined.
    pub fn paint_span(self, text: &str) -> String {
        self.paint(text).underline().to_string()
    }

    pub fn tui_color(self) -> Color {
        match self {
            Palette::Red => Color::Red,
            Palette::Yellow => Color::Yellow,
            Palette::Magenta => Color::Magenta,
            Palette::Gray => Color::Gray,
        }
    }
}

/// Text rendering options. Never part of JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub enable_color: bool,
    /// Terminal width in columns, when known
    pub width: Option<usize>,
}

impl DisplayOptions {
    /// Colour and width only when stdout is an interactive terminal.
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        if !std::io::stdout().is_terminal() {
            return Self::default();
        }

        let width = terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize);
        Self {
            enable_color: true,
            width,
        }
    }
}

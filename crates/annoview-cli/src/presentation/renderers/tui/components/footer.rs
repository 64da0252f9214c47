use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

const KEYS: &str = "j/k question · Tab/S-Tab highlight · Enter detail · Esc close · PgUp/PgDn scroll · q quit";

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let mut spans = vec![Span::raw(KEYS)];
        if let Some(view) = state.view()
            && let Some(index) = state.focused
        {
            spans.push(Span::styled(
                format!("  highlight {}/{}", index + 1, view.highlights.len()),
                Style::default().fg(Color::Cyan),
            ));
        }

        let footer_widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer_widget, area);
    }
}

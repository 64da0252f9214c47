use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::formatters::Palette;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::views::AnnotationDetailView;

pub(crate) struct DetailComponent;

impl Component for DetailComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(detail) = state.view().and_then(|v| v.selected.as_ref()) else {
            return;
        };

        let palette = Palette::for_label(&detail.error_type);
        let mut lines: Vec<Line> = AnnotationDetailView::rows(detail)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<13}", format!("{}:", label)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(value),
                ])
            })
            .collect();
        if !detail.highlighted {
            lines.push(Line::from(Span::styled(
                "(not highlighted: overlapped or out of range)",
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }

        let widget = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", detail.unique_id))
                    .border_style(Style::default().fg(palette.tui_color())),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, area);
        f.render_widget(widget, area);
    }
}

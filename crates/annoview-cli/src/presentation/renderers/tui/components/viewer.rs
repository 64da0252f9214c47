use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::formatters::Palette;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::view_models::{QuestionViewModel, SegmentKind};

pub(crate) struct ViewerComponent;

impl Component for ViewerComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        state.viewer_height = area.height.saturating_sub(2);
        let Some(view) = state.view() else {
            return;
        };

        let title = format!(" [{}] {} ", view.group, view.id);
        let text = viewer_text(view, state.focused_highlight_id());

        let widget = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false })
            .scroll((state.viewer_scroll, 0));

        f.render_widget(widget, area);
    }
}

pub(crate) fn viewer_text<'a>(view: &'a QuestionViewModel, focused: Option<&str>) -> Text<'a> {
    let mut lines = vec![
        Line::from(Span::styled(
            view.question.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Err: {}  Ppl: {}  {}",
                view.annotation_count,
                view.annotator_count,
                view.annotators.join(", ")
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if !view.conflicts.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Question text differs for: {}", view.conflicts.join(", ")),
            Style::default().fg(Color::Yellow),
        )));
    }

    for paragraph in &view.paragraphs {
        lines.push(Line::default());

        let mut current: Vec<Span> = Vec::new();
        for segment in &paragraph.segments {
            let style = match segment.kind {
                SegmentKind::Plain => Style::default(),
                SegmentKind::Highlight => {
                    let palette = Palette::for_label(segment.error_type.as_deref().unwrap_or(""));
                    let style = Style::default()
                        .fg(palette.tui_color())
                        .add_modifier(Modifier::UNDERLINED);
                    if focused.is_some() && segment.unique_id.as_deref() == focused {
                        style.add_modifier(Modifier::REVERSED)
                    } else {
                        style
                    }
                }
            };

            // Spans cannot carry line breaks
            let mut pieces = segment.text.split('\n').peekable();
            while let Some(piece) = pieces.next() {
                if !piece.is_empty() {
                    current.push(Span::styled(piece, style));
                }
                if pieces.peek().is_some() {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
            }
        }
        lines.push(Line::from(current));
    }

    if !view.discarded.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Hidden by overlap: {}", view.discarded.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !view.rejected.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Unusable offsets: {}", view.rejected.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Text::from(lines)
}

/// Unwrapped line of [`viewer_text`] on which a highlight starts.
pub(crate) fn highlight_line(view: &QuestionViewModel, unique_id: &str) -> Option<u16> {
    let mut line = if view.conflicts.is_empty() { 2 } else { 3 };
    for paragraph in &view.paragraphs {
        line += 1;
        for segment in &paragraph.segments {
            if segment.unique_id.as_deref() == Some(unique_id) {
                let leading = segment.text.len() - segment.text.trim_start_matches('\n').len();
                return u16::try_from(line + leading).ok();
            }
            line += segment.text.matches('\n').count();
        }
        line += 1;
    }
    None
}

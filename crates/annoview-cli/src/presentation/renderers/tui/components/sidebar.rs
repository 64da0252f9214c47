use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::Component;
use crate::presentation::formatters::fit;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct SidebarComponent;

impl Component for SidebarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let selected_id = state.selection.item().map(str::to_string);
        let question_width = (area.width as usize).saturating_sub(6);

        let mut items = Vec::new();
        let mut selected_row = None;
        for group in &state.list.groups {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    group.key.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  Err {}", group.annotation_count),
                    Style::default().fg(Color::DarkGray),
                ),
            ])));

            for question in &group.questions {
                if selected_id.as_deref() == Some(question.id.as_str()) {
                    selected_row = Some(items.len());
                }
                let mut header = vec![
                    Span::raw(question.id.clone()),
                    Span::styled(
                        format!(
                            "  Err {}  Ppl {}",
                            question.annotation_count, question.annotator_count
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if question.has_conflicts {
                    header.push(Span::styled(" !", Style::default().fg(Color::Yellow)));
                }
                items.push(ListItem::new(vec![
                    Line::from(header),
                    Line::from(Span::styled(
                        fit(&question.question, Some(question_width)),
                        Style::default().fg(Color::Gray),
                    )),
                ]));
            }
        }

        state.list_state.select(selected_row);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Questions ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut state.list_state);
    }
}

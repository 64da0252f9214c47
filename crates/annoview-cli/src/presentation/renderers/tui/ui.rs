use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::AppState;
use super::components::{
    Component, DetailComponent, FooterComponent, SidebarComponent, ViewerComponent,
};
use crate::presentation::presenters::EMPTY_STATE_MESSAGE;

const DETAIL_HEIGHT: u16 = 10;

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(f.area());

    if state.is_empty() {
        let empty = Paragraph::new(EMPTY_STATE_MESSAGE)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(empty, main_chunks[0]);
        FooterComponent.render(f, main_chunks[1], state);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[0]);

    SidebarComponent.render(f, columns[0], state);

    let has_detail = state.view().is_some_and(|v| v.selected.is_some());
    if has_detail {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(DETAIL_HEIGHT)])
            .split(columns[1]);
        ViewerComponent.render(f, right[0], state);
        DetailComponent.render(f, right[1], state);
    } else {
        ViewerComponent.render(f, columns[1], state);
    }

    FooterComponent.render(f, main_chunks[1], state);
}

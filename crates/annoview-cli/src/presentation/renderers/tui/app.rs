use annoview_engine::ResolvedAnswer;
use annoview_runtime::Workspace;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use tracing::debug;

use super::components::viewer::highlight_line;
use crate::presentation::SelectionState;
use crate::presentation::presenters::{
    build_question_list, present_annotation_detail, present_question,
};
use crate::presentation::view_models::{DisplayOptions, QuestionListViewModel, QuestionViewModel};

/// Resolution of the selected question, kept until the selection moves to
/// another question.
struct ViewerCache {
    question_id: String,
    answer: ResolvedAnswer,
    view: QuestionViewModel,
}

pub(crate) struct AppState<'w> {
    workspace: &'w Workspace,
    pub list: QuestionListViewModel,
    /// Question ids in sidebar order
    ids: Vec<String>,
    pub selection: SelectionState,
    pub list_state: ListState,
    cache: Option<ViewerCache>,
    /// Index into the current view's highlights
    pub focused: Option<usize>,
    pub viewer_scroll: u16,
    /// Inner height of the viewer at the last draw
    pub viewer_height: u16,
    pub should_quit: bool,
    #[cfg(test)]
    resolutions: usize,
}

impl<'w> AppState<'w> {
    pub fn new(workspace: &'w Workspace) -> Self {
        let list = build_question_list(workspace.catalog(), DisplayOptions::default());
        let ids = list.entries().map(|e| e.id.clone()).collect();
        let selection =
            SelectionState::starting_at(workspace.default_selection().map(|q| q.id.as_str()));

        let mut state = Self {
            workspace,
            list,
            ids,
            selection,
            list_state: ListState::default(),
            cache: None,
            focused: None,
            viewer_scroll: 0,
            viewer_height: 0,
            should_quit: false,
            #[cfg(test)]
            resolutions: 0,
        };
        state.sync();
        state
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn view(&self) -> Option<&QuestionViewModel> {
        self.cache.as_ref().map(|c| &c.view)
    }

    pub fn focused_highlight_id(&self) -> Option<&str> {
        let view = self.view()?;
        let index = self.focused?;
        view.highlights.get(index).map(|h| h.unique_id.as_str())
    }

    fn selected_position(&self) -> Option<usize> {
        let item = self.selection.item()?;
        self.ids.iter().position(|id| id == item)
    }

    /// Bring the cached resolution and detail panel in line with the
    /// selection. Re-resolves only when the question changed.
    fn sync(&mut self) {
        let workspace = self.workspace;
        let Some(question_id) = self.selection.item().map(str::to_string) else {
            self.cache = None;
            self.focused = None;
            return;
        };
        let Some(question) = workspace.find(&question_id) else {
            self.cache = None;
            self.focused = None;
            return;
        };

        let stale = self
            .cache
            .as_ref()
            .is_none_or(|cache| cache.question_id != question_id);
        if stale {
            debug!(question_id = %question_id, "resolving spans");
            let answer = workspace.resolve(question);
            let group = workspace
                .catalog()
                .group_of(&question_id)
                .unwrap_or_default();
            let view = present_question(question, group, &answer, DisplayOptions::default());
            self.focused = (!view.highlights.is_empty()).then_some(0);
            self.viewer_scroll = 0;
            self.cache = Some(ViewerCache {
                question_id,
                answer,
                view,
            });
            #[cfg(test)]
            {
                self.resolutions += 1;
            }
        }

        if let Some(cache) = self.cache.as_mut() {
            cache.view.selected = self
                .selection
                .annotation()
                .and_then(|uid| question.find_annotation(uid))
                .map(|annotation| present_annotation_detail(question, annotation, &cache.answer));
        }
    }

    fn select_question_at(&mut self, position: usize) {
        if let Some(id) = self.ids.get(position).cloned() {
            self.selection.set_item(&id);
            self.sync();
        }
    }

    pub fn select_next(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        let next = match self.selected_position() {
            Some(position) => (position + 1).min(self.ids.len() - 1),
            None => 0,
        };
        self.select_question_at(next);
    }

    pub fn select_previous(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        let previous = self
            .selected_position()
            .map_or(0, |position| position.saturating_sub(1));
        self.select_question_at(previous);
    }

    pub fn select_first(&mut self) {
        self.select_question_at(0);
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.ids.len().checked_sub(1) {
            self.select_question_at(last);
        }
    }

    fn highlight_count(&self) -> usize {
        self.view().map_or(0, |v| v.highlights.len())
    }

    pub fn focus_next_highlight(&mut self) {
        let count = self.highlight_count();
        if count == 0 {
            return;
        }
        self.focused = Some(self.focused.map_or(0, |i| (i + 1) % count));
        self.scroll_to_focused();
    }

    pub fn focus_previous_highlight(&mut self) {
        let count = self.highlight_count();
        if count == 0 {
            return;
        }
        self.focused = Some(self.focused.map_or(count - 1, |i| (i + count - 1) % count));
        self.scroll_to_focused();
    }

    /// Scroll the least amount that brings the focused highlight into view.
    fn scroll_to_focused(&mut self) {
        let Some(line) = self
            .view()
            .zip(self.focused_highlight_id())
            .and_then(|(view, uid)| highlight_line(view, uid))
        else {
            return;
        };
        let height = self.viewer_height.max(1);
        if line < self.viewer_scroll {
            self.viewer_scroll = line;
        } else if line >= self.viewer_scroll.saturating_add(height) {
            self.viewer_scroll = line + 1 - height;
        }
    }

    pub fn open_detail(&mut self) {
        if let Some(uid) = self.focused_highlight_id().map(str::to_string) {
            self.selection.select_annotation(&uid);
            self.sync();
        }
    }

    pub fn close_detail(&mut self) {
        self.selection.clear_annotation();
        self.sync();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.viewer_scroll = self.viewer_scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.viewer_scroll = self.viewer_scroll.saturating_sub(lines);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('x') => self.close_detail(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),
            KeyCode::Tab | KeyCode::Char('n') => self.focus_next_highlight(),
            KeyCode::BackTab | KeyCode::Char('p') => self.focus_previous_highlight(),
            KeyCode::Enter => self.open_detail(),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::PageUp => self.scroll_up(10),
            _ => {}
        }
    }
}

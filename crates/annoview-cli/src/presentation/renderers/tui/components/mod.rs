use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState<'_>);
}

pub(crate) mod detail;
pub(crate) mod footer;
pub(crate) mod sidebar;
pub(crate) mod viewer;

pub(crate) use detail::DetailComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use sidebar::SidebarComponent;
pub(crate) use viewer::ViewerComponent;

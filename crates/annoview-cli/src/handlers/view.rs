use crate::presentation::renderers::tui;
use annoview_runtime::Workspace;
use anyhow::Result;
use tracing::info;

pub fn handle(workspace: &Workspace) -> Result<()> {
    info!(
        source = ?workspace.source(),
        questions = workspace.catalog().question_count(),
        "starting viewer"
    );
    tui::run(workspace)
}

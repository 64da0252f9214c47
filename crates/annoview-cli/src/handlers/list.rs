use super::HandlerContext;
use crate::presentation::presenters;
use annoview_runtime::Workspace;
use anyhow::Result;
use tracing::info;

pub fn handle(workspace: &Workspace, ctx: &HandlerContext) -> Result<()> {
    let catalog = workspace.catalog();
    info!(
        groups = catalog.groups().len(),
        questions = catalog.question_count(),
        "listing questions"
    );

    let result = presenters::present_question_list(catalog, ctx.options);
    ctx.render(result)
}

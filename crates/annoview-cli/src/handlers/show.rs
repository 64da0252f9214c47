use super::HandlerContext;
use crate::presentation::presenters;
use annoview_runtime::Workspace;
use anyhow::{Result, bail};
use tracing::{debug, warn};

pub fn handle(
    workspace: &Workspace,
    question_id: Option<&str>,
    annotation_id: Option<&str>,
    ctx: &HandlerContext,
) -> Result<()> {
    if workspace.is_empty() {
        return ctx.render(presenters::present_empty_state());
    }

    let question = match question_id {
        Some(id) => match workspace.find(id) {
            Some(question) => question,
            None => bail!("Question not found: {}", id),
        },
        None => match workspace.default_selection() {
            Some(question) => question,
            None => return ctx.render(presenters::present_empty_state()),
        },
    };

    let group = workspace.catalog().group_of(&question.id).unwrap_or_default();
    let answer = workspace.resolve(question);
    debug!(
        question_id = %question.id,
        highlights = answer.highlight_count(),
        discarded = answer.discarded.len(),
        rejected = answer.rejected.len(),
        "resolved answer"
    );
    if !answer.rejected.is_empty() {
        warn!(
            question_id = %question.id,
            count = answer.rejected.len(),
            "annotations with unusable offsets"
        );
    }

    let result = presenters::present_show(question, group, &answer, annotation_id, ctx.options);
    ctx.render(result)
}

use super::HandlerContext;
use crate::presentation::presenters;
use annoview_runtime::Config;
use anyhow::Result;
use std::path::Path;

pub fn handle(
    config: &Config,
    source: Option<&Path>,
    data_path: Option<&Path>,
    ctx: &HandlerContext,
) -> Result<()> {
    let result = presenters::present_config(config, source, data_path)?;
    ctx.render(result)
}

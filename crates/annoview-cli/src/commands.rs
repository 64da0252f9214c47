use super::args::{Cli, Commands, OutputFormat};
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogSink};
use crate::presentation::DisplayOptions;
use annoview_runtime::{Config, Workspace, resolve_config_path, resolve_data_path};
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use tracing::debug;

/// Without a subcommand: the interactive viewer on a terminal, the list
/// everywhere else (pipes, redirects, `--format json`).
fn default_command(format: OutputFormat, stdout_is_terminal: bool) -> Commands {
    if stdout_is_terminal && format == OutputFormat::Plain {
        Commands::View
    } else {
        Commands::List
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref());
    let config = Config::load(cli.config.as_deref()).with_context(|| match &config_path {
        Some(path) => format!("Failed to load config {}", path.display()),
        None => "Failed to load config".to_string(),
    })?;

    let command = cli
        .command
        .unwrap_or_else(|| default_command(cli.format, std::io::stdout().is_terminal()));

    let sink = match (&command, config.log_file()) {
        (Commands::View, Some(path)) => LogSink::File(path),
        (Commands::View, None) => LogSink::Disabled,
        _ => LogSink::Stderr,
    };
    logging::init(cli.log_level, sink)?;
    debug!(config = ?config_path, "configuration resolved");

    let ctx = HandlerContext::new(cli.format, DisplayOptions::detect());

    let open_workspace = || -> Result<Workspace> {
        let data_path = resolve_data_path(cli.data.as_deref(), &config)?;
        Ok(Workspace::open(&data_path, &config)?)
    };

    match command {
        Commands::List => handlers::list::handle(&open_workspace()?, &ctx),
        Commands::Show {
            question_id,
            annotation,
        } => handlers::show::handle(
            &open_workspace()?,
            question_id.as_deref(),
            annotation.as_deref(),
            &ctx,
        ),
        Commands::View => handlers::view::handle(&open_workspace()?),
        Commands::Config => {
            // Best effort: an unset dataset is not an error here
            let data_path = resolve_data_path(cli.data.as_deref(), &config).ok();
            handlers::config::handle(&config, config_path.as_deref(), data_path.as_deref(), &ctx)
        }
    }
}

mod enums;

pub use enums::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "annoview")]
#[command(about = "Browse merged error annotations of question/answer exports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Annotation export (JSON). Falls back to ANNOVIEW_DATA, then `data.path` in the config
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file. Falls back to ANNOVIEW_CONFIG, then the user config directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List groups and questions with annotation and annotator counts
    List,

    /// Show one question's answer with its highlighted error spans
    Show {
        /// Question id (defaults to the first question of the first group)
        question_id: Option<String>,

        /// Also show the detail of this annotation (by unique id, e.g. `annotator_a-2`)
        #[arg(long, value_name = "UNIQUE_ID")]
        annotation: Option<String>,
    },

    /// Interactive viewer (default when stdout is a terminal)
    View,

    /// Print the effective configuration
    Config,
}

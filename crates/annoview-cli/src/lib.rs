// NOTE: annoview Architecture
//
// Data flows one way: export file -> RawDataset (types) -> Catalog (engine,
// merged once per workspace) -> ResolvedAnswer for the selected question
// (engine, recomputed on selection change) -> view models -> console or TUI.
//
// The core never fails on data: malformed entries and records are skipped,
// overlapping spans are discarded first-start-wins, out-of-range offsets are
// clamped or dropped. The only error path is loading the file itself.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;

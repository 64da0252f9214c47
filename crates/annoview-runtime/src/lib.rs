// Runtime layer - dataset loading, configuration, and the memoized workspace
// the CLI renders from

pub mod config;
pub mod error;
pub mod loader;
pub mod workspace;

pub use config::{Config, expand_tilde, resolve_config_path, resolve_data_path};
pub use error::{Error, Result};
pub use loader::load_dataset;
pub use workspace::Workspace;

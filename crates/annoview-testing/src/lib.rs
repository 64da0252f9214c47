//! Testing infrastructure for annoview tests.
//!
//! - `TestWorld`: isolated temp environment for CLI runs
//! - `fixtures`: dataset builder and bundled sample exports
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{DatasetBuilder, SampleFiles};
pub use world::{CliResult, TestWorld};

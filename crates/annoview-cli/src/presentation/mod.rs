//! # Presentation Layer
//!
//! MVVM split between the engine output and what the user sees.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                                                          ==(Text)==> [ View ]
//!
//! [ TUI loop ] --> [ AppState ] --> [ Presenter ] --> [ ViewModel ] --> [ Component ]
//! ```
//!
//! ## Rules
//!
//! * **ViewModels carry raw data.** Counts are numbers, error types are their
//!   export labels. `--format json` dumps the ViewModel as is.
//! * **Presenters** convert engine types into ViewModels and decide badges
//!   and suggestions. They never format.
//! * **Views** implement `fmt::Display`: layout, colour, truncation.
//! * **Selection** (`selection.rs`) is the single owner of the selected
//!   question and annotation.
//! * **TUI components** render from `AppState`; key handling lives on
//!   `AppState`, components only draw.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod selection;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use selection::SelectionState;
pub use view_models::{CommandResultViewModel, DisplayOptions, Guidance, StatusBadge, StatusLevel};

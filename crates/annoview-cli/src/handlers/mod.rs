mod context;

pub mod config;
pub mod list;
pub mod show;
pub mod view;

pub use context::HandlerContext;

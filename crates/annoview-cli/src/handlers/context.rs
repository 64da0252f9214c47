use crate::args::OutputFormat;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, DisplayOptions, Renderer};
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, options: DisplayOptions) -> Self {
        // Colour and width only matter for text output
        let options = match format {
            OutputFormat::Plain => options,
            OutputFormat::Json => DisplayOptions::default(),
        };
        Self { format, options }
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let renderer = ConsoleRenderer::new(
            self.format == OutputFormat::Json,
            self.options.enable_color,
        );
        renderer.render(view_model)
    }
}

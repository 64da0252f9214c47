use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::{self, Display};
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, StatusLevel};

pub struct ConsoleRenderer {
    json_mode: bool,
    enable_color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, enable_color: bool) -> Self {
        Self {
            json_mode,
            enable_color,
        }
    }

    /// Render into `out` instead of stdout.
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        write!(out, "{}", TextResult::new(result, self.enable_color))?;
        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)
    }
}

struct TextResult<'a, T: Serialize> {
    result: &'a CommandResultViewModel<T>,
    enable_color: bool,
}

impl<'a, T: Serialize> TextResult<'a, T> {
    fn new(result: &'a CommandResultViewModel<T>, enable_color: bool) -> Self {
        Self {
            result,
            enable_color,
        }
    }
}

impl<'a, T: Serialize + Display> Display for TextResult<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let result = self.result;

        if let Some(badge) = &result.badge {
            if self.enable_color {
                let label = match badge.level {
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                    _ => badge.label.bold().to_string(),
                };
                writeln!(f, "{} {}", badge.icon(), label)?;
            } else {
                writeln!(f, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            writeln!(f)?;
            if self.enable_color {
                writeln!(f, "{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(f, "Tips:")?;
            }
            for tip in &result.suggestions {
                write!(f, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.enable_color {
                        write!(f, ": {}", cmd.cyan())?;
                    } else {
                        write!(f, ": {}", cmd)?;
                    }
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.data.source, self.data.source_exists) {
            (Some(source), true) => writeln!(f, "# config: {}", source)?,
            (Some(source), false) => writeln!(f, "# config: {} (not found)", source)?,
            (None, _) => writeln!(f, "# config: (none)")?,
        }
        match &self.data.data_path {
            Some(path) => writeln!(f, "# dataset: {}", path)?,
            None => writeln!(f, "# dataset: (not set)")?,
        }
        writeln!(f)?;
        write!(f, "{}", self.data.toml)
    }
}

use serde::Serialize;
use std::fmt;

/// Effective configuration after file and defaults are combined.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    /// Config file consulted, if any location could be determined
    pub source: Option<String>,
    pub source_exists: bool,
    /// Dataset path after flag/env/config resolution
    pub data_path: Option<String>,
    pub settings: serde_json::Value,

    #[serde(skip)]
    pub toml: String,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::ConfigView;
        write!(f, "{}", ConfigView::new(self))
    }
}

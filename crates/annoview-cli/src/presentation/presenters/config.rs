use crate::presentation::view_models::{CommandResultViewModel, ConfigViewModel, StatusBadge};
use annoview_runtime::Config;
use anyhow::Result;
use std::path::Path;

pub fn present_config(
    config: &Config,
    source: Option<&Path>,
    data_path: Option<&Path>,
) -> Result<CommandResultViewModel<ConfigViewModel>> {
    let source_exists = source.is_some_and(Path::exists);

    let content = ConfigViewModel {
        source: source.map(|p| p.display().to_string()),
        source_exists,
        data_path: data_path.map(|p| p.display().to_string()),
        settings: serde_json::to_value(config)?,
        toml: config.to_toml_string()?,
    };

    let mut result = CommandResultViewModel::new(content);
    if !source_exists {
        result = result.with_badge(StatusBadge::info("No config file found, showing defaults"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() -> Result<()> {
        let result = present_config(&Config::default(), None, None)?;

        assert!(!result.content.source_exists);
        assert!(result.badge.is_some());
        assert_eq!(result.content.settings["merge"]["fallback_group"], "others");
        assert_eq!(result.content.settings["render"]["offset_policy"], "clamp");
        assert!(result.content.toml.contains("[merge]"));
        Ok(())
    }

    #[test]
    fn test_existing_file_has_no_badge() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[merge]\nseparator = \"_\"\n")?;
        let config = Config::load_from(&path)?;

        let result = present_config(&config, Some(&path), Some(Path::new("export.json")))?;

        assert!(result.content.source_exists);
        assert!(result.badge.is_none());
        assert_eq!(result.content.settings["merge"]["separator"], "_");
        assert_eq!(result.content.data_path.as_deref(), Some("export.json"));
        Ok(())
    }
}

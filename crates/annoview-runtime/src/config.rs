use crate::{Error, Result};
use annoview_engine::{MergeOptions, OffsetPolicy, TextConflictPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "ANNOVIEW_CONFIG";
pub const DATA_ENV: &str = "ANNOVIEW_DATA";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ANNOVIEW_CONFIG environment variable (with tilde expansion)
/// 3. `<config_dir>/annoview/config.toml`
///
/// `None` means no location could be determined; defaults apply.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    pick_config_path(explicit_path, std::env::var(CONFIG_ENV).ok(), dirs::config_dir())
}

fn pick_config_path(
    explicit_path: Option<&Path>,
    env_path: Option<String>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }
    if let Some(env_path) = env_path.filter(|p| !p.is_empty()) {
        return Some(expand_tilde(&env_path));
    }
    config_dir.map(|dir| dir.join("annoview").join("config.toml"))
}

/// Resolve the dataset path based on priority:
/// 1. Explicit path (`--data`)
/// 2. ANNOVIEW_DATA environment variable
/// 3. `data.path` from the config file
pub fn resolve_data_path(explicit_path: Option<&Path>, config: &Config) -> Result<PathBuf> {
    pick_data_path(explicit_path, std::env::var(DATA_ENV).ok(), config)
}

fn pick_data_path(
    explicit_path: Option<&Path>,
    env_path: Option<String>,
    config: &Config,
) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }
    if let Some(env_path) = env_path.filter(|p| !p.is_empty()) {
        return Ok(expand_tilde(&env_path));
    }
    if let Some(path) = &config.data.path {
        return Ok(expand_tilde(path));
    }

    Err(Error::Config(format!(
        "no dataset given: pass --data <PATH>, set {} or add `path` under [data] in the config file",
        DATA_ENV
    )))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub separator: char,
    pub fallback_group: String,
    pub text_conflict: TextConflictPolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        let options = MergeOptions::default();
        Self {
            separator: options.separator,
            fallback_group: options.fallback_group,
            text_conflict: options.text_conflict,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub offset_policy: OffsetPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log sink for the interactive viewer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub merge: MergeConfig,
    pub render: RenderConfig,
    pub log: LogConfig,
}

impl Config {
    /// Load from the resolved location, or defaults when there is none.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.merge.fallback_group.is_empty() {
            return Err(Error::Config(
                "merge.fallback_group must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            separator: self.merge.separator,
            fallback_group: self.merge.fallback_group.clone(),
            text_conflict: self.merge.text_conflict,
        }
    }

    pub fn offset_policy(&self) -> OffsetPolicy {
        self.render.offset_policy
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.merge_options(), MergeOptions::default());
        assert_eq!(config.offset_policy(), OffsetPolicy::Clamp);
        assert!(config.data.path.is_none());
        assert!(config.log_file().is_none());
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_load_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[merge]\nseparator = \"_\"\ntext_conflict = \"flag\"\n\n[render]\noffset_policy = \"strict\"\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.merge.separator, '_');
        assert_eq!(config.merge.fallback_group, "others");
        assert_eq!(config.merge.text_conflict, TextConflictPolicy::Flag);
        assert_eq!(config.offset_policy(), OffsetPolicy::Strict);

        Ok(())
    }

    #[test]
    fn test_load_reads_explicit_path() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("viewer.toml");
        std::fs::write(&config_path, "[merge]\nfallback_group = \"misc\"\n").unwrap();

        let config = Config::load(Some(config_path.as_path()))?;
        assert_eq!(config.merge.fallback_group, "misc");

        let missing = Config::load(Some(temp_dir.path().join("missing.toml").as_path()))?;
        assert_eq!(missing, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[merge]\ntext_conflict = \"sometimes\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_fallback_group_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[merge]\nfallback_group = \"\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("fallback_group"));
    }

    #[test]
    fn test_toml_round_trip_keeps_settings() -> Result<()> {
        let mut config = Config::default();
        config.data.path = Some("export.json".to_string());
        config.merge.text_conflict = TextConflictPolicy::Reject;

        let text = config.to_toml_string()?;
        assert!(text.contains("text_conflict = \"reject\""));

        let parsed: Config = toml::from_str(&text)?;
        assert_eq!(parsed, config);

        Ok(())
    }

    #[test]
    fn test_config_path_priority() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        let dir = Some(PathBuf::from("/home/u/.config"));

        assert_eq!(
            pick_config_path(Some(&explicit), Some("/tmp/env.toml".into()), dir.clone()),
            Some(explicit.clone())
        );
        assert_eq!(
            pick_config_path(None, Some("/tmp/env.toml".into()), dir.clone()),
            Some(PathBuf::from("/tmp/env.toml"))
        );
        assert_eq!(
            pick_config_path(None, None, dir),
            Some(PathBuf::from("/home/u/.config/annoview/config.toml"))
        );
        assert_eq!(pick_config_path(None, None, None), None);
    }

    #[test]
    fn test_data_path_priority() -> Result<()> {
        let mut config = Config::default();
        config.data.path = Some("/data/from-config.json".to_string());

        let explicit = PathBuf::from("/data/explicit.json");
        assert_eq!(
            pick_data_path(Some(&explicit), Some("/data/env.json".into()), &config)?,
            explicit
        );
        assert_eq!(
            pick_data_path(None, Some("/data/env.json".into()), &config)?,
            PathBuf::from("/data/env.json")
        );
        assert_eq!(
            pick_data_path(None, None, &config)?,
            PathBuf::from("/data/from-config.json")
        );

        Ok(())
    }

    #[test]
    fn test_missing_data_path_explains_options() {
        let err = pick_data_path(None, None, &Config::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--data"));
        assert!(message.contains(DATA_ENV));
    }
}

use crate::Result;
use crate::config::Config;
use crate::loader::load_dataset;
use annoview_engine::{
    Catalog, MergeOptions, OffsetPolicy, ResolvedAnswer, merge_dataset, resolve_question,
    select_default,
};
use annoview_types::{MergedQuestion, RawDataset};
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A loaded dataset plus the settings it is viewed with.
///
/// The catalog is merged on first access and reused for the lifetime of the
/// workspace; answers are resolved on demand.
pub struct Workspace {
    source: Option<PathBuf>,
    dataset: RawDataset,
    options: MergeOptions,
    offset_policy: OffsetPolicy,
    catalog: OnceCell<Catalog>,
}

impl Workspace {
    pub fn open(path: &Path, config: &Config) -> Result<Self> {
        let dataset = load_dataset(path)?;
        let mut workspace = Self::from_dataset(dataset, config);
        workspace.source = Some(path.to_path_buf());
        Ok(workspace)
    }

    pub fn from_dataset(dataset: RawDataset, config: &Config) -> Self {
        Self {
            source: None,
            dataset,
            options: config.merge_options(),
            offset_policy: config.offset_policy(),
            catalog: OnceCell::new(),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn offset_policy(&self) -> OffsetPolicy {
        self.offset_policy
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog.get_or_init(|| {
            debug!("merging dataset");
            merge_dataset(&self.dataset, &self.options)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.catalog().is_empty()
    }

    pub fn find(&self, question_id: &str) -> Option<&MergedQuestion> {
        self.catalog().find(question_id)
    }

    pub fn default_selection(&self) -> Option<&MergedQuestion> {
        select_default(self.catalog())
    }

    pub fn resolve(&self, question: &MergedQuestion) -> ResolvedAnswer {
        resolve_question(question, self.offset_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annoview_engine::TextConflictPolicy;
    use annoview_testing::{DatasetBuilder, SampleFiles, fixtures::annotation};

    #[test]
    fn test_catalog_is_memoized() {
        let dataset = DatasetBuilder::new()
            .entry("A", "kr-001", "Q", "hello", vec![annotation("1", 0, 2, "Both")])
            .build();
        let workspace = Workspace::from_dataset(dataset, &Config::default());

        let first = workspace.catalog() as *const Catalog;
        let second = workspace.catalog() as *const Catalog;
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_open_sample_and_select_default() -> Result<()> {
        let path = SampleFiles::new().path("culture_export.json");
        let workspace = Workspace::open(&path, &Config::default())?;

        assert_eq!(workspace.source(), Some(path.as_path()));
        let selected = workspace.default_selection().map(|q| q.id.clone());
        assert_eq!(selected.as_deref(), Some("de-003"));
        Ok(())
    }

    #[test]
    fn test_config_drives_merge_and_resolution() {
        let dataset = DatasetBuilder::new()
            .entry("A", "kr-001", "Q", "abc", vec![annotation("1", 1, 9, "Both")])
            .entry("B", "kr-001", "Q", "abd", vec![])
            .build();

        let mut config = Config::default();
        config.merge.text_conflict = TextConflictPolicy::Flag;
        config.render.offset_policy = OffsetPolicy::Strict;
        let workspace = Workspace::from_dataset(dataset, &config);

        let question = workspace.find("kr-001").unwrap();
        assert_eq!(question.conflicts, vec!["B"]);
        assert_eq!(workspace.resolve(question).rejected.len(), 1);
    }

    #[test]
    fn test_empty_workspace_has_no_selection() {
        let workspace = Workspace::from_dataset(DatasetBuilder::new().build(), &Config::default());
        assert!(workspace.is_empty());
        assert!(workspace.default_selection().is_none());
    }
}

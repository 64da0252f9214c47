use crate::{Error, Result};
use annoview_types::RawDataset;
use std::path::Path;
use tracing::info;

/// Read and parse an export document.
///
/// Structural problems below the root (no `main`, odd owner shapes) are not
/// errors; they surface as an empty or partially skipped dataset.
pub fn load_dataset(path: &Path) -> Result<RawDataset> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: serde_json::Value = serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = RawDataset::from_value(root);
    info!(
        path = %path.display(),
        owners = dataset.owner_count(),
        "loaded annotation export"
    );
    Ok(dataset)
}

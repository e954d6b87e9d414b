//! Catalog file loading.

use std::path::Path;

use crate::channel::Channel;
use crate::error::PickError;

/// Load the channel catalog from a JSON file, preserving file order.
///
/// The catalog is produced by the external fetch step. A missing file is a
/// configuration error; the selector never refreshes the catalog itself.
pub fn load_channels(path: &Path) -> Result<Vec<Channel>, PickError> {
    if !path.exists() {
        return Err(PickError::Config(format!(
            "catalog file {} not found; run the fetch step first",
            path.display()
        )));
    }
    let data = std::fs::read_to_string(path)
        .map_err(|err| PickError::Catalog(format!("{}: {err}", path.display())))?;
    let channels: Vec<Channel> = serde_json::from_str(&data)
        .map_err(|err| PickError::Catalog(format!("{}: {err}", path.display())))?;
    tracing::debug!(count = channels.len(), path = %path.display(), "catalog loaded");
    Ok(channels)
}

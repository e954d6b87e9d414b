//! Persisted user preferences.

use std::path::Path;

use serde::{Deserialize, Serialize};

use chanpick_core::PickError;

/// Persisted preferences.
///
/// The file may be shared with other tools in the export pipeline; keys
/// this tool does not own are preserved verbatim on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prefs {
    /// Whether to show the large-selection warning.
    #[serde(default = "default_true")]
    pub show_large_selection_warning: bool,

    /// Settings owned by other tools sharing the file.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            show_large_selection_warning: true,
            rest: serde_json::Map::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Load preferences, falling back to defaults on a missing or unreadable
/// file.
#[must_use]
pub fn load(path: &Path) -> Prefs {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed preference file");
            Prefs::default()
        }),
        Err(_) => Prefs::default(),
    }
}

/// Save preferences as pretty-printed JSON.
pub fn save(path: &Path, prefs: &Prefs) -> Result<(), PickError> {
    let json = serde_json::to_string_pretty(prefs)
        .map_err(|err| PickError::Config(err.to_string()))?;
    std::fs::write(path, json)
        .map_err(|err| PickError::Config(format!("{}: {err}", path.display())))
}

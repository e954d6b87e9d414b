//! Error type for catalog loading and selection sessions.

/// Error type for catalog loading and selection sessions.
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    /// The catalog file could not be read or decoded.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// A selection expression could not be parsed.
    #[error("invalid selection: {0}")]
    Parse(String),

    /// The full-screen picker could not drive the terminal.
    #[error("interactive UI unavailable: {0}")]
    Terminal(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

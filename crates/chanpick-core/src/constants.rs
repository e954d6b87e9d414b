//! Constants for pagination capacities, warning thresholds, and exit codes.

/// Display entries on the first page. Smaller than the other pages so the
/// global "All" toggle and its separator fit above the list.
pub const FIRST_PAGE_CAPACITY: usize = 12;

/// Display entries per page after the first.
pub const PAGE_CAPACITY: usize = 15;

/// Sentinel category label for channels with no category of their own.
/// Always sorted after every named category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Default estimated-message total above which the large-selection warning
/// fires.
pub const DEFAULT_WARN_THRESHOLD: u64 = 50_000;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including a confirmed selection.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (missing or unreadable catalog file).
    pub const ERROR_CONFIG: i32 = 4;
    /// Selection cancelled by the user.
    pub const ERROR_CANCELED: i32 = 130;
}

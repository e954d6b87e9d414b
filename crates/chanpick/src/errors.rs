//! Error handling and exit codes.

use chanpick_core::{exit_codes, PickError};

/// Map a top-level error to its process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PickError>() {
        Some(PickError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(PickError::Catalog(_) | PickError::Parse(_) | PickError::Terminal(_)) | None => {
            exit_codes::ERROR_GENERIC
        }
    }
}

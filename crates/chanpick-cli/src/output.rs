//! CLI output formatting and the selection handoff file.

use std::io;

use chanpick_core::Channel;

/// Format a count with thousand separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Sum of the selected channels' estimated message counts.
#[must_use]
pub fn total_estimated(channels: &[Channel]) -> u64 {
    channels.iter().map(|c| c.estimated_messages).sum()
}

/// Write the confirmed selection as JSON for the downstream exporter,
/// keeping the catalog record shape and order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_selection(path: &str, channels: &[Channel]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(channels)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    std::fs::write(path, json)
}

//! Formatting utilities for file sizes.

use crate::config::text::UNKNOWN_SIZE;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Size worth displaying. A zero size is treated as unknown.
pub fn known_size(size: Option<u64>) -> Option<u64> {
    size.filter(|&bytes| bytes > 0)
}

/// Format file size for list display (e.g., "500 B", "2.0 KB", "5.00 MB").
pub fn format_size(size: Option<u64>) -> String {
    match known_size(size) {
        None => UNKNOWN_SIZE.to_string(),
        Some(bytes) if bytes < KIB => format!("{} B", bytes),
        Some(bytes) if bytes < MIB => format!("{:.1} KB", bytes as f64 / KIB as f64),
        Some(bytes) => format_megabytes(bytes),
    }
}

/// Format a size in megabytes with two decimals, regardless of magnitude.
///
/// Used by the fallback preview, which always speaks in MB.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / KIB as f64 / KIB as f64)
}

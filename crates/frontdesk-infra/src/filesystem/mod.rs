//! Data directory resolution.

use std::path::PathBuf;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `FRONTDESK_DATA_DIR` environment variable
/// 2. Platform-specific data directory (e.g., `~/.frontdesk` on macOS/Linux)
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FRONTDESK_DATA_DIR") {
        return PathBuf::from(dir);
    }

    // Use home directory fallback: ~/.frontdesk
    if let Some(home) = dirs::home_dir() {
        return home.join(".frontdesk");
    }

    // Last resort: current directory
    PathBuf::from(".frontdesk")
}

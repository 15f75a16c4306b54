//! Path resolution for roster data files.
//!
//! Provides XDG-compliant path resolution for the default database location.

use std::env;
use std::path::PathBuf;

/// Get XDG-compliant data directory for roster.
///
/// # Returns
/// Path to data directory: `~/.local/share/roster/`
///
/// # Panics
/// Panics if HOME environment variable is not set and XDG_DATA_HOME is also not set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".local/share")
        });

    data_home.join("roster")
}

/// Get database file path (data_dir/roster.db).
///
/// # Returns
/// Path to database file: `~/.local/share/roster/roster.db`
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("roster.db")
}

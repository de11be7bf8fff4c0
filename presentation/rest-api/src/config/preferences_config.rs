use std::env;
use std::path::PathBuf;

use memstore::preferences::file_store::PreferenceFileStore;

/// Resolve the location of the theme preference file
///
/// Environment variables:
/// - PREFERENCES_PATH: Explicit path to the preference file
///   (default: the platform config directory)
pub fn preferences_path() -> PathBuf {
    env::var("PREFERENCES_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PreferenceFileStore::default_path())
}

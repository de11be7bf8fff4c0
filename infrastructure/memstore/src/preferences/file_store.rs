use std::path::{Path, PathBuf};

use async_trait::async_trait;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::preferences::model::Theme;
use business::domain::preferences::repository::PreferenceStore;

const PREFERENCES_FILE: &str = "preferences.json";

/// On-disk shape of the preference slot.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    theme: Theme,
}

/// The one persisted piece of UI state: a theme flag in a small JSON
/// file. A missing or unreadable file falls back to the default theme;
/// only writes surface errors.
pub struct PreferenceFileStore {
    path: PathBuf,
}

impl PreferenceFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolves the platform config directory for the service, falling
    /// back to the working directory when none is available.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("com", "vibecart", "vibecart")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
            .unwrap_or_else(|| PathBuf::from(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PreferenceStore for PreferenceFileStore {
    async fn load_theme(&self) -> Result<Theme, RepositoryError> {
        let theme = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str::<PreferencesFile>(&raw)
                .map(|prefs| prefs.theme)
                .unwrap_or_default(),
            Err(_) => Theme::default(),
        };
        Ok(theme)
    }

    async fn save_theme(&self, theme: Theme) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| RepositoryError::Persistence)?;
        }

        let raw = serde_json::to_string_pretty(&PreferencesFile { theme })
            .map_err(|_| RepositoryError::Persistence)?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|_| RepositoryError::Persistence)?;
        Ok(())
    }
}

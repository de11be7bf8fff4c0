use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Theme;

/// Local key-value slot for the theme flag. Read once at startup and
/// written on every toggle; a missing value falls back to the default.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn load_theme(&self) -> Result<Theme, RepositoryError>;
    async fn save_theme(&self, theme: Theme) -> Result<(), RepositoryError>;
}
